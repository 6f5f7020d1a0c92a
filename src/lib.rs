//! # Campus
//!
//! Role-based access decisions and composite grading for an institutional
//! ERP front end.
//!
//! ## Overview
//!
//! - **Access policy**: which role may open which page, route or action, how
//!   the sidebar is filtered, and where a blocked navigation is redirected
//! - **Grading**: continuous assessment and final exam records aggregated into
//!   a composite grade and academic standing, with resit override
//! - **Academic rules**: grade points, CGPA, classification, credit limits and
//!   exam eligibility
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── campus-models/         # Roles, resources, assessment records, courses
//! ├── campus-core/           # AccessPolicy, RouteGuard, GradeAggregator, rules
//! ├── campus-config/         # Env and TOML configuration
//! └── campus-observability/  # tracing subscriber setup
//! src/
//! ├── policy.rs              # Config -> policy wiring
//! ├── data.rs                # JSON loaders with validation
//! └── cli/                   # `campus` commands
//! ```
//!
//! ## Role Hierarchy
//!
//! ```text
//! Super Admin     (every resource, regardless of the table)
//! Administrator   (institution management)
//! Instructor      (courses, grades, students)
//! Staff           (finance, HR, assets)
//! Student         (own courses and grades)
//! ```
//!
//! ## Configuration
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CAMPUS_DEFAULT_LANDING` | Landing page for blocked navigation | `dashboard` |
//! | `CAMPUS_SETTINGS_ALLOW_ADMIN` | Let administrators open settings | `false` |
//! | `CAMPUS_PERMISSIONS_FILE` | TOML permission overrides | unset |
//! | `CAMPUS_GRADING_SCHEME` | `split` or `weighted` | `split` |
//! | `CAMPUS_CA_WEIGHT` | CA share of the split | `0.3` |
//! | `CAMPUS_FINAL_WEIGHT` | Final exam share of the split | `0.7` |
//! | `LOG_LEVEL` | Log level for campus crates | `info` |
//! | `LOG_FORMAT` | `compact` or `json` | `compact` |
//! | `LOG_DIR` | Directory for rolling log files | unset |

pub mod cli;
pub mod data;
pub mod policy;
