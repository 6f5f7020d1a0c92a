//! `campus` command-line interface.
//!
//! Thin presentation layer over the library: each command loads what it
//! needs, asks the core policies, and prints text or JSON.

pub mod report;

use anyhow::{Context, Result};
use campus_config::{AccessConfig, GradingConfig, GradingScheme};
use campus_core::permissions::default_navigation;
use campus_core::{RouteGuard, rules};
use campus_models::{Role, SessionRole, StudentId};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::data::{load_courses, load_records};
use crate::policy::{build_access_policy, build_aggregator};
use report::{CheckReport, GradeRow, NavReport};

#[derive(Debug, Parser)]
#[command(name = "campus")]
#[command(about = "Campus access policy and grading tools", long_about = None)]
pub struct Cli {
    /// TOML file overriding permission entries (default: CAMPUS_PERMISSIONS_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    pub permissions: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decide whether a role may open a resource
    Check {
        /// Session role; omit for an unauthenticated session
        #[arg(short, long)]
        role: Option<String>,

        /// Route, page or action id
        resource: String,
    },
    /// List the navigation entries a role can see
    Nav {
        #[arg(short, long)]
        role: Role,
    },
    /// Aggregate composite grades from a JSON records file
    Grades {
        file: PathBuf,

        /// Aggregation scheme (default: CAMPUS_GRADING_SCHEME)
        #[arg(long)]
        scheme: Option<GradingScheme>,
    },
    /// Print one student's transcript
    Transcript {
        file: PathBuf,

        /// JSON course catalog with credits
        #[arg(long, value_name = "FILE")]
        courses: PathBuf,

        #[arg(long)]
        student: StudentId,

        #[arg(long)]
        scheme: Option<GradingScheme>,
    },
}

/// Runs one command, writing its output to `out`.
pub fn run<W: Write>(
    cli: Cli,
    mut access: AccessConfig,
    mut grading: GradingConfig,
    out: &mut W,
) -> Result<()> {
    if let Some(path) = cli.permissions {
        access.permissions_file = Some(path);
    }

    match cli.command {
        Commands::Check { role, resource } => {
            let policy = build_access_policy(&access).context("Failed to build access policy")?;
            let session = SessionRole::from_raw(role.as_deref());

            let mut guard = RouteGuard::new(&policy, resource.as_str());
            let decision = guard.resolve(&session);

            let unknown_role = match &session {
                SessionRole::UnknownRole(raw) => Some(raw.clone()),
                _ => None,
            };
            let report = CheckReport {
                resource,
                role: session.role(),
                unknown_role,
                decision,
                redirect: guard.redirect_target(),
            };
            report::emit(out, cli.json, &report)
        }
        Commands::Nav { role } => {
            let policy = build_access_policy(&access).context("Failed to build access policy")?;
            let report = NavReport {
                role,
                items: policy.filter_navigation(role, &default_navigation()),
            };
            report::emit(out, cli.json, &report)
        }
        Commands::Grades { file, scheme } => {
            if let Some(scheme) = scheme {
                grading.scheme = scheme;
            }
            let aggregator = build_aggregator(&grading);
            let records = load_records(&file)
                .with_context(|| format!("Failed to load records from {}", file.display()))?;

            let groups = campus_core::group_records(records);
            info!(pairs = groups.len(), scheme = %grading.scheme, "Aggregating grades");

            let rows: Vec<GradeRow> = groups
                .par_iter()
                .map(|((student_id, course_id), group)| GradeRow {
                    student_id: *student_id,
                    course_id: *course_id,
                    grade: aggregator.aggregate(group),
                })
                .collect();

            report::emit(out, cli.json, &rows)
        }
        Commands::Transcript {
            file,
            courses,
            student,
            scheme,
        } => {
            if let Some(scheme) = scheme {
                grading.scheme = scheme;
            }
            let aggregator = build_aggregator(&grading);
            let records = load_records(&file)
                .with_context(|| format!("Failed to load records from {}", file.display()))?;
            let catalog = load_courses(&courses)
                .with_context(|| format!("Failed to load courses from {}", courses.display()))?;

            let own: Vec<_> = records
                .into_iter()
                .filter(|r| r.student_id == student)
                .collect();
            if own.is_empty() {
                anyhow::bail!("No records found for student {}", student);
            }

            let transcript = rules::transcript(&aggregator, &own, &catalog);
            report::emit(out, cli.json, &transcript)
        }
    }
}
