//! Academic regulations built on top of composite grades.
//!
//! Grade points use the 4.0 scale; CGPA is credit-weighted and rounded to two
//! decimals. Eligibility checks return [`EligibilityError`] so callers can
//! surface the reason to the user.

use campus_models::{AssessmentRecord, CompositeGrade, Course, CourseId, PASS_THRESHOLD};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

use crate::grading::{GradeAggregator, group_records};

/// Maximum programme length in years.
pub const MAX_STAY_YEARS: f64 = 7.0;
/// Credit cap for students on probation (CGPA below 2.0).
pub const PROBATION_CREDIT_LIMIT: u32 = 20;
pub const STANDARD_CREDIT_LIMIT: u32 = 30;

/// Grade bands: lower bound of the composite total, grade point, letter.
static GRADE_BANDS: [(f64, f64, &str); 7] = [
    (80.0, 4.0, "A"),
    (70.0, 3.5, "B+"),
    (60.0, 3.0, "B"),
    (55.0, 2.5, "C+"),
    (50.0, 2.0, "C"),
    (45.0, 1.5, "D+"),
    (40.0, 1.0, "D"),
];

fn band(total: f64) -> Option<&'static (f64, f64, &'static str)> {
    GRADE_BANDS.iter().find(|(floor, _, _)| total >= *floor)
}

pub fn grade_point(total: f64) -> f64 {
    band(total).map_or(0.0, |(_, point, _)| *point)
}

pub fn letter_grade(total: f64) -> &'static str {
    band(total).map_or("F", |(_, _, letter)| *letter)
}

/// Degree classification derived from CGPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    FirstClass,
    UpperSecond,
    LowerSecond,
    Pass,
    FailProbation,
}

impl Classification {
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 3.60 {
            Classification::FirstClass
        } else if cgpa >= 3.00 {
            Classification::UpperSecond
        } else if cgpa >= 2.50 {
            Classification::LowerSecond
        } else if cgpa >= 2.00 {
            Classification::Pass
        } else {
            Classification::FailProbation
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::FirstClass => "First Class (Summa Cum Laude)",
            Classification::UpperSecond => "Upper Second Class (Magna Cum Laude)",
            Classification::LowerSecond => "Lower Second Class (Cum Laude)",
            Classification::Pass => "Pass",
            Classification::FailProbation => "Fail/Probation",
        }
    }
}

/// Credit cap for the next registration period.
pub fn max_credit_load(cgpa: f64) -> u32 {
    if cgpa < 2.0 {
        PROBATION_CREDIT_LIMIT
    } else {
        STANDARD_CREDIT_LIMIT
    }
}

/// Whether a student enrolled on `enrollment_date` is still within the
/// maximum stay on `today`. Unknown enrollment dates pass.
pub fn within_max_stay(enrollment_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(enrolled) = enrollment_date else {
        return true;
    };
    let years = (today - enrolled).num_days() as f64 / 365.25;
    years <= MAX_STAY_YEARS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("Student is barred from the final exam: no continuous assessment recorded")]
    BarredFromFinal,
    #[error("A resit is only allowed after a final exam attempt")]
    ResitWithoutFinal,
}

/// True when no CA has been recorded for the pair (including no records at all).
pub fn is_barred_from_final(records: &[AssessmentRecord]) -> bool {
    !records.iter().any(|r| r.kind.is_continuous())
}

pub fn final_exam_eligibility(records: &[AssessmentRecord]) -> Result<(), EligibilityError> {
    if is_barred_from_final(records) {
        return Err(EligibilityError::BarredFromFinal);
    }
    Ok(())
}

/// A resit needs an earlier final attempt; a previous resit counts as one.
pub fn resit_eligibility(records: &[AssessmentRecord]) -> Result<(), EligibilityError> {
    if !records.iter().any(|r| r.kind.is_final()) {
        return Err(EligibilityError::ResitWithoutFinal);
    }
    Ok(())
}

/// One course line of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseResult {
    pub course_id: CourseId,
    pub code: String,
    pub credits: u32,
    pub grade: CompositeGrade,
    pub grade_point: f64,
    pub letter: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcript {
    pub courses: Vec<CourseResult>,
    pub cgpa: f64,
    pub classification: Classification,
    pub max_credits: u32,
}

/// Builds a transcript from one student's records.
///
/// Records for courses missing from `courses` are skipped.
pub fn transcript(
    aggregator: &GradeAggregator,
    records: &[AssessmentRecord],
    courses: &[Course],
) -> Transcript {
    let catalog: HashMap<CourseId, &Course> = courses.iter().map(|c| (c.id, c)).collect();

    let mut results = Vec::new();
    for ((student_id, course_id), group) in group_records(records.iter().cloned()) {
        let Some(course) = catalog.get(&course_id) else {
            warn!(%student_id, %course_id, "Skipping records for unknown course");
            continue;
        };
        let grade = aggregator.aggregate(&group);
        results.push(CourseResult {
            course_id,
            code: course.code.clone(),
            credits: course.credits,
            grade,
            grade_point: grade_point(grade.weighted_total),
            letter: letter_grade(grade.weighted_total),
        });
    }

    let cgpa = cgpa_of(&results);
    Transcript {
        courses: results,
        cgpa,
        classification: Classification::from_cgpa(cgpa),
        max_credits: max_credit_load(cgpa),
    }
}

/// Credit-weighted grade point average, rounded to two decimals.
pub fn cgpa(aggregator: &GradeAggregator, records: &[AssessmentRecord], courses: &[Course]) -> f64 {
    transcript(aggregator, records, courses).cgpa
}

fn cgpa_of(results: &[CourseResult]) -> f64 {
    let (points, credits) = results.iter().fold((0.0, 0.0), |(points, credits), r| {
        let weight = f64::from(r.credits);
        (points + r.grade_point * weight, credits + weight)
    });

    if credits == 0.0 {
        return 0.0;
    }
    (points / credits * 100.0).round() / 100.0
}

/// Whether every prerequisite of `course` has a passing composite in
/// `student_records`.
pub fn has_cleared_prerequisites(
    aggregator: &GradeAggregator,
    student_records: &[AssessmentRecord],
    course: &Course,
) -> bool {
    if course.prerequisites.is_empty() {
        return true;
    }

    let passed: Vec<CourseId> = group_records(student_records.iter().cloned())
        .into_iter()
        .filter(|(_, group)| aggregator.aggregate(group).weighted_total >= PASS_THRESHOLD)
        .map(|((_, course_id), _)| course_id)
        .collect();

    course
        .prerequisites
        .iter()
        .all(|prerequisite| passed.contains(prerequisite))
}
