//! Assessment records and the composite grade derived from them.
//!
//! Records are immutable: a correction is recorded as a new record rather
//! than an edit of an existing one.

use crate::ids::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Composite totals at or above this mark pass.
pub const PASS_THRESHOLD: f64 = 50.0;
/// Composite totals at or above this mark (and below the pass mark) are
/// recommended for a resit.
pub const RESIT_THRESHOLD: f64 = 40.0;

/// What kind of evaluation produced a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    ContinuousAssessment,
    FinalExam { is_resit: bool },
}

impl AssessmentKind {
    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, AssessmentKind::ContinuousAssessment)
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        matches!(self, AssessmentKind::FinalExam { .. })
    }

    #[inline]
    pub fn is_resit(&self) -> bool {
        matches!(self, AssessmentKind::FinalExam { is_resit: true })
    }
}

/// One scored evaluation for a (student, course) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub kind: AssessmentKind,
    pub score: f64,
    /// Relative weight, only consulted by weighted-mean aggregation.
    pub weight: f64,
    pub term: String,
}

impl AssessmentRecord {
    pub fn continuous(student_id: StudentId, course_id: CourseId, score: f64) -> Self {
        Self::new(student_id, course_id, AssessmentKind::ContinuousAssessment, score)
    }

    pub fn final_exam(student_id: StudentId, course_id: CourseId, score: f64) -> Self {
        Self::new(
            student_id,
            course_id,
            AssessmentKind::FinalExam { is_resit: false },
            score,
        )
    }

    pub fn resit(student_id: StudentId, course_id: CourseId, score: f64) -> Self {
        Self::new(
            student_id,
            course_id,
            AssessmentKind::FinalExam { is_resit: true },
            score,
        )
    }

    fn new(student_id: StudentId, course_id: CourseId, kind: AssessmentKind, score: f64) -> Self {
        Self {
            student_id,
            course_id,
            kind,
            score,
            weight: 1.0,
            term: String::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }
}

/// Assessment type as it appears in grade-entry payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentType {
    #[serde(rename = "CA", alias = "ca", alias = "continuous_assessment")]
    Ca,
    #[serde(rename = "Final", alias = "final", alias = "final_exam")]
    Final,
}

fn default_weight() -> f64 {
    1.0
}

/// Grade-entry payload as delivered by the data service.
///
/// Range checks happen here, at the boundary; the aggregator assumes
/// well-formed scores.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewAssessmentRecord {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub assessment_type: AssessmentType,
    /// Ignored for CA records.
    #[serde(default)]
    pub is_resit: bool,
    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: f64,
    #[serde(default = "default_weight")]
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: f64,
    #[serde(default)]
    #[validate(length(max = 100, message = "Term must not exceed 100 characters"))]
    pub term: String,
}

impl From<NewAssessmentRecord> for AssessmentRecord {
    fn from(dto: NewAssessmentRecord) -> Self {
        let kind = match dto.assessment_type {
            AssessmentType::Ca => AssessmentKind::ContinuousAssessment,
            AssessmentType::Final => AssessmentKind::FinalExam {
                is_resit: dto.is_resit,
            },
        };

        Self {
            student_id: dto.student_id,
            course_id: dto.course_id,
            kind,
            score: dto.score,
            weight: dto.weight,
            term: dto.term,
        }
    }
}

/// Academic standing derived from a composite total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    Passed,
    ResitRecommended,
    CarryOver,
}

impl Standing {
    /// `>= 50` passes, `[40, 50)` is a resit recommendation, anything lower
    /// carries over.
    pub fn from_total(weighted_total: f64) -> Self {
        if weighted_total >= PASS_THRESHOLD {
            Standing::Passed
        } else if weighted_total >= RESIT_THRESHOLD {
            Standing::ResitRecommended
        } else {
            Standing::CarryOver
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Standing::Passed => "Passed",
            Standing::ResitRecommended => "Resit Recommended",
            Standing::CarryOver => "Carry-Over",
        }
    }
}

/// Composite grade for one (student, course) pair. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeGrade {
    pub continuous_average: f64,
    pub final_score: f64,
    pub weighted_total: f64,
    pub standing: Standing,
    /// Whether a resit supplied `final_score`.
    pub resit_applied: bool,
}

impl Default for CompositeGrade {
    fn default() -> Self {
        Self {
            continuous_average: 0.0,
            final_score: 0.0,
            weighted_total: 0.0,
            standing: Standing::CarryOver,
            resit_applied: false,
        }
    }
}
