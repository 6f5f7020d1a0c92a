//! Text and JSON rendering for command output.

use anyhow::Result;
use campus_core::RouteDecision;
use campus_core::rules::Transcript;
use campus_models::{CompositeGrade, CourseId, NavItem, Role, StudentId};
use serde::Serialize;
use std::io::Write;

/// Output that can be printed as a plain-text table.
pub trait Render {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Writes `report` as pretty JSON or as text.
pub fn emit<W, T>(out: &mut W, json: bool, report: &T) -> Result<()>
where
    W: Write,
    T: Serialize + Render + ?Sized,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        report.render(out)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub resource: String,
    pub role: Option<Role>,
    /// Raw session role that did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_role: Option<String>,
    pub decision: RouteDecision,
    pub redirect: Option<String>,
}

impl Render for CheckReport {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let role = match (&self.role, &self.unknown_role) {
            (Some(role), _) => role.name().to_string(),
            (None, Some(raw)) => format!("unknown role '{}'", raw),
            (None, None) => "(none)".to_string(),
        };
        match &self.redirect {
            None => writeln!(out, "{} -> {}: render", role, self.resource),
            Some(target) => writeln!(out, "{} -> {}: redirect to {}", role, self.resource, target),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavReport {
    pub role: Role,
    pub items: Vec<NavItem>,
}

impl Render for NavReport {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Navigation for {}:", self.role)?;
        for item in &self.items {
            writeln!(out, "  {:<14} {}", item.label, item.href)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct GradeRow {
    pub student_id: StudentId,
    pub course_id: CourseId,
    #[serde(flatten)]
    pub grade: CompositeGrade,
}

impl Render for [GradeRow] {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{:>8} {:>8} {:>8} {:>8} {:>8}  {}",
            "student", "course", "ca", "final", "total", "standing"
        )?;
        for row in self {
            let resit = if row.grade.resit_applied { " (resit)" } else { "" };
            writeln!(
                out,
                "{:>8} {:>8} {:>8.2} {:>8.2} {:>8.2}  {}{}",
                row.student_id,
                row.course_id,
                row.grade.continuous_average,
                row.grade.final_score,
                row.grade.weighted_total,
                row.grade.standing.label(),
                resit
            )?;
        }
        Ok(())
    }
}

impl Render for Vec<GradeRow> {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.as_slice().render(out)
    }
}

impl Render for Transcript {
    fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{:<10} {:>7} {:>8} {:>6} {:>4}",
            "course", "credits", "total", "gp", "grade"
        )?;
        for course in &self.courses {
            writeln!(
                out,
                "{:<10} {:>7} {:>8.2} {:>6.1} {:>4}",
                course.code,
                course.credits,
                course.grade.weighted_total,
                course.grade_point,
                course.letter
            )?;
        }
        writeln!(out)?;
        writeln!(out, "CGPA:           {:.2}", self.cgpa)?;
        writeln!(out, "Classification: {}", self.classification.label())?;
        writeln!(out, "Credit limit:   {}", self.max_credits)
    }
}
