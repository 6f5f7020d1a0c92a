//! Composite grade aggregation.
//!
//! [`aggregate`] turns the assessment records of one (student, course) pair
//! into a [`CompositeGrade`]:
//!
//! 1. CA average: mean of all continuous-assessment scores, `0` when none.
//! 2. Final score: the resit score if a resit exists, else the regular final,
//!    else `0`. Duplicates are settled last-write-wins, so the result depends
//!    on input order.
//! 3. Weighted total: `0.3 * ca + 0.7 * final` with the default policy,
//!    unrounded.
//! 4. Standing from the weighted total (see [`Standing::from_total`]).
//!
//! The weighting formula is pluggable through [`AggregationPolicy`].

use campus_models::{AssessmentRecord, CompositeGrade, CourseId, Standing, StudentId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Inputs available to an [`AggregationPolicy`].
#[derive(Debug, Clone)]
pub struct GradeInputs<'a> {
    pub continuous: Vec<&'a AssessmentRecord>,
    /// The final record that supplies the final score, if any.
    pub selected_final: Option<&'a AssessmentRecord>,
    pub continuous_average: f64,
    pub final_score: f64,
}

/// Formula combining CA and final exam results into a weighted total.
pub trait AggregationPolicy: fmt::Debug + Send + Sync {
    fn weighted_total(&self, inputs: &GradeInputs<'_>) -> f64;
}

/// Fixed CA/final split. Defaults to 30/70.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitWithResit {
    pub ca_weight: f64,
    pub final_weight: f64,
}

impl SplitWithResit {
    pub const fn new(ca_weight: f64, final_weight: f64) -> Self {
        Self {
            ca_weight,
            final_weight,
        }
    }
}

impl Default for SplitWithResit {
    fn default() -> Self {
        Self::new(0.3, 0.7)
    }
}

impl AggregationPolicy for SplitWithResit {
    fn weighted_total(&self, inputs: &GradeInputs<'_>) -> f64 {
        self.ca_weight * inputs.continuous_average + self.final_weight * inputs.final_score
    }
}

/// Weighted mean of every CA record and the selected final, using each
/// record's own `weight`. `0` when the weights sum to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightedMean;

impl AggregationPolicy for WeightedMean {
    fn weighted_total(&self, inputs: &GradeInputs<'_>) -> f64 {
        let (weighted_sum, total_weight) = inputs
            .continuous
            .iter()
            .copied()
            .chain(inputs.selected_final)
            .fold((0.0, 0.0), |(sum, weights), record| {
                (sum + record.score * record.weight, weights + record.weight)
            });

        if total_weight > 0.0 {
            weighted_sum / total_weight
        } else {
            0.0
        }
    }
}

/// Aggregator bound to one policy. Cheap to clone and share.
#[derive(Debug, Clone)]
pub struct GradeAggregator {
    policy: Arc<dyn AggregationPolicy>,
}

impl Default for GradeAggregator {
    fn default() -> Self {
        Self::new(SplitWithResit::default())
    }
}

impl GradeAggregator {
    pub fn new(policy: impl AggregationPolicy + 'static) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn policy(&self) -> &dyn AggregationPolicy {
        self.policy.as_ref()
    }

    /// Records must all belong to one (student, course) pair; see
    /// [`group_records`].
    pub fn aggregate(&self, records: &[AssessmentRecord]) -> CompositeGrade {
        aggregate_with(records, self.policy.as_ref())
    }
}

/// Aggregates with the default 30/70 split.
pub fn aggregate(records: &[AssessmentRecord]) -> CompositeGrade {
    aggregate_with(records, &SplitWithResit::default())
}

pub fn aggregate_with(
    records: &[AssessmentRecord],
    policy: &dyn AggregationPolicy,
) -> CompositeGrade {
    let continuous: Vec<&AssessmentRecord> =
        records.iter().filter(|r| r.kind.is_continuous()).collect();

    let continuous_average = if continuous.is_empty() {
        0.0
    } else {
        continuous.iter().map(|r| r.score).sum::<f64>() / continuous.len() as f64
    };

    let mut last_regular = None;
    let mut last_resit = None;
    for record in records.iter().filter(|r| r.kind.is_final()) {
        if record.kind.is_resit() {
            last_resit = Some(record);
        } else {
            last_regular = Some(record);
        }
    }

    let selected_final = last_resit.or(last_regular);
    let final_score = selected_final.map_or(0.0, |r| r.score);

    let inputs = GradeInputs {
        continuous,
        selected_final,
        continuous_average,
        final_score,
    };
    let weighted_total = policy.weighted_total(&inputs);
    let standing = Standing::from_total(weighted_total);

    trace!(
        records = records.len(),
        continuous_average,
        final_score,
        weighted_total,
        ?standing,
        "Aggregated composite grade"
    );

    CompositeGrade {
        continuous_average,
        final_score,
        weighted_total,
        standing,
        resit_applied: last_resit.is_some(),
    }
}

/// Groups records by (student, course), keeping pairs in first-seen order and
/// records within a pair in input order.
pub fn group_records<I>(records: I) -> Vec<((StudentId, CourseId), Vec<AssessmentRecord>)>
where
    I: IntoIterator<Item = AssessmentRecord>,
{
    let mut index: HashMap<(StudentId, CourseId), usize> = HashMap::new();
    let mut groups: Vec<((StudentId, CourseId), Vec<AssessmentRecord>)> = Vec::new();

    for record in records {
        let key = (record.student_id, record.course_id);
        match index.get(&key) {
            Some(&position) => groups[position].1.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push((key, vec![record]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: StudentId = StudentId::new(1);
    const C: CourseId = CourseId::new(10);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_input_is_zeroed() {
        let grade = aggregate(&[]);
        assert_eq!(grade, CompositeGrade::default());
    }

    #[test]
    fn test_ca_only() {
        let grade = aggregate(&[AssessmentRecord::continuous(S, C, 80.0)]);
        assert!(approx(grade.continuous_average, 80.0));
        assert_eq!(grade.final_score, 0.0);
        assert!(approx(grade.weighted_total, 24.0));
        assert_eq!(grade.standing, Standing::CarryOver);
    }

    #[test]
    fn test_split_with_regular_final() {
        let records = [
            AssessmentRecord::continuous(S, C, 60.0),
            AssessmentRecord::continuous(S, C, 80.0),
            AssessmentRecord::final_exam(S, C, 60.0),
        ];
        let grade = aggregate(&records);
        assert!(approx(grade.continuous_average, 70.0));
        assert!(approx(grade.weighted_total, 63.0));
        assert_eq!(grade.standing, Standing::Passed);
        assert!(!grade.resit_applied);
    }

    #[test]
    fn test_resit_overrides_regular_final_in_any_order() {
        let regular_first = [
            AssessmentRecord::final_exam(S, C, 30.0),
            AssessmentRecord::resit(S, C, 55.0),
        ];
        let resit_first = [
            AssessmentRecord::resit(S, C, 55.0),
            AssessmentRecord::final_exam(S, C, 30.0),
        ];
        assert_eq!(aggregate(&regular_first).final_score, 55.0);
        assert_eq!(aggregate(&resit_first).final_score, 55.0);
        assert!(aggregate(&resit_first).resit_applied);
    }

    #[test]
    fn test_duplicate_finals_last_write_wins() {
        let regulars = [
            AssessmentRecord::final_exam(S, C, 30.0),
            AssessmentRecord::final_exam(S, C, 45.0),
        ];
        assert_eq!(aggregate(&regulars).final_score, 45.0);

        let resits = [
            AssessmentRecord::resit(S, C, 55.0),
            AssessmentRecord::resit(S, C, 48.0),
        ];
        assert_eq!(aggregate(&resits).final_score, 48.0);
    }

    #[test]
    fn test_custom_split_boundaries() {
        let even = GradeAggregator::new(SplitWithResit::new(0.5, 0.5));

        let at_pass = even.aggregate(&[
            AssessmentRecord::continuous(S, C, 50.0),
            AssessmentRecord::final_exam(S, C, 50.0),
        ]);
        assert_eq!(at_pass.weighted_total, 50.0);
        assert_eq!(at_pass.standing, Standing::Passed);

        let at_resit = even.aggregate(&[
            AssessmentRecord::continuous(S, C, 40.0),
            AssessmentRecord::final_exam(S, C, 40.0),
        ]);
        assert_eq!(at_resit.weighted_total, 40.0);
        assert_eq!(at_resit.standing, Standing::ResitRecommended);
    }

    #[test]
    fn test_weighted_mean_policy() {
        let aggregator = GradeAggregator::new(WeightedMean);
        let grade = aggregator.aggregate(&[
            AssessmentRecord::continuous(S, C, 40.0).with_weight(1.0),
            AssessmentRecord::final_exam(S, C, 80.0).with_weight(3.0),
        ]);
        assert!(approx(grade.weighted_total, 70.0));
        assert_eq!(grade.standing, Standing::Passed);
    }

    #[test]
    fn test_weighted_mean_excludes_superseded_final() {
        let aggregator = GradeAggregator::new(WeightedMean);
        let grade = aggregator.aggregate(&[
            AssessmentRecord::final_exam(S, C, 10.0),
            AssessmentRecord::resit(S, C, 60.0),
        ]);
        assert!(approx(grade.weighted_total, 60.0));
    }

    #[test]
    fn test_weighted_mean_zero_weights() {
        let aggregator = GradeAggregator::new(WeightedMean);
        let grade =
            aggregator.aggregate(&[AssessmentRecord::continuous(S, C, 90.0).with_weight(0.0)]);
        assert_eq!(grade.weighted_total, 0.0);
    }

    #[test]
    fn test_group_records_first_seen_order() {
        let other = CourseId::new(11);
        let records = vec![
            AssessmentRecord::continuous(S, other, 50.0),
            AssessmentRecord::continuous(S, C, 60.0),
            AssessmentRecord::final_exam(S, other, 70.0),
        ];
        let groups = group_records(records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, (S, other));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].score, 70.0);
        assert_eq!(groups[1].0, (S, C));
    }
}
