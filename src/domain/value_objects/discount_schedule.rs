//! # Volume Discount Schedule
//!
//! A step function from project area to a whole discount percentage.
//!
//! The schedule is an ordered list of [`DiscountStep`]s. The discount for an
//! area is the percent of the highest step whose threshold does not exceed
//! the area, or 0 below the first step. Thresholds are inclusive: an area
//! exactly on a threshold gets that step's discount.
//!
//! ```text
//! area:     0 ──────── 20 ──────── 50 ────────>
//! discount:      0%    │    5%     │    10%
//! ```
//!
//! # Examples
//!
//! ```
//! use mural_studio::domain::value_objects::discount_schedule::{DiscountSchedule, DiscountStep};
//!
//! let schedule = DiscountSchedule::default();
//! assert_eq!(schedule.discount_for(10.0), 0);
//! assert_eq!(schedule.discount_for(20.0), 5);
//! assert_eq!(schedule.discount_for(100.0), 10);
//!
//! let flat = DiscountSchedule::new(vec![DiscountStep::new(1.0, 3)]).unwrap();
//! assert_eq!(flat.discount_for(0.5), 0);
//! assert_eq!(flat.discount_for(1.0), 3);
//! ```

use crate::domain::errors::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};

/// One step of a [`DiscountSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountStep {
    /// Smallest area, in m², that receives this discount.
    pub min_area: f64,
    /// Whole discount percentage, 0..=100.
    pub percent: u8,
}

impl DiscountStep {
    /// Creates a step. Validation happens when the schedule is built.
    #[must_use]
    pub const fn new(min_area: f64, percent: u8) -> Self {
        Self { min_area, percent }
    }
}

/// Immutable, validated volume-discount schedule.
///
/// Invariants:
/// - thresholds are finite, positive and strictly ascending
/// - percentages are at most 100 and never decrease
///
/// Together these make the discount a monotonically non-decreasing function
/// of area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountStep>", into = "Vec<DiscountStep>")]
pub struct DiscountSchedule {
    steps: Vec<DiscountStep>,
}

impl DiscountSchedule {
    /// Builds a schedule from steps given in ascending threshold order.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] naming the first step that breaks an
    /// invariant.
    pub fn new(steps: Vec<DiscountStep>) -> PricingResult<Self> {
        let mut previous: Option<&DiscountStep> = None;
        for (index, step) in steps.iter().enumerate() {
            if !step.min_area.is_finite() || step.min_area <= 0.0 {
                return Err(PricingError::InvalidThreshold {
                    index,
                    min_area: step.min_area,
                });
            }
            if step.percent > 100 {
                return Err(PricingError::InvalidPercent {
                    index,
                    percent: step.percent,
                });
            }
            if let Some(prev) = previous {
                if step.min_area <= prev.min_area {
                    return Err(PricingError::UnorderedThreshold {
                        index,
                        min_area: step.min_area,
                    });
                }
                if step.percent < prev.percent {
                    return Err(PricingError::DecreasingDiscount {
                        index,
                        percent: step.percent,
                    });
                }
            }
            previous = Some(step);
        }
        Ok(Self { steps })
    }

    /// A schedule that never grants a discount.
    #[must_use]
    pub const fn none() -> Self {
        Self { steps: Vec::new() }
    }

    /// Returns the discount percentage for `area`.
    ///
    /// Non-finite or non-positive areas fall below every threshold and get 0.
    #[must_use]
    pub fn discount_for(&self, area: f64) -> u8 {
        self.steps
            .iter()
            .rev()
            .find(|step| area >= step.min_area)
            .map_or(0, |step| step.percent)
    }

    /// Returns the steps in ascending threshold order.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[DiscountStep] {
        &self.steps
    }

    /// Returns true if the schedule has no steps.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for DiscountSchedule {
    /// 5% from 20 m², 10% from 50 m².
    fn default() -> Self {
        Self {
            steps: vec![DiscountStep::new(20.0, 5), DiscountStep::new(50.0, 10)],
        }
    }
}

impl TryFrom<Vec<DiscountStep>> for DiscountSchedule {
    type Error = PricingError;

    fn try_from(steps: Vec<DiscountStep>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<DiscountSchedule> for Vec<DiscountStep> {
    fn from(schedule: DiscountSchedule) -> Self {
        schedule.steps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod lookup {
        use super::*;

        #[test]
        fn below_first_threshold_is_zero() {
            let schedule = DiscountSchedule::default();
            assert_eq!(schedule.discount_for(0.5), 0);
            assert_eq!(schedule.discount_for(19.99), 0);
        }

        #[test]
        fn thresholds_are_inclusive() {
            let schedule = DiscountSchedule::default();
            assert_eq!(schedule.discount_for(20.0), 5);
            assert_eq!(schedule.discount_for(50.0), 10);
        }

        #[test]
        fn between_and_above_thresholds() {
            let schedule = DiscountSchedule::default();
            assert_eq!(schedule.discount_for(25.0), 5);
            assert_eq!(schedule.discount_for(49.9), 5);
            assert_eq!(schedule.discount_for(60.0), 10);
            assert_eq!(schedule.discount_for(10_000.0), 10);
        }

        #[test]
        fn empty_schedule_never_discounts() {
            let schedule = DiscountSchedule::none();
            assert!(schedule.is_empty());
            assert_eq!(schedule.discount_for(1_000_000.0), 0);
        }

        #[test]
        fn nan_gets_no_discount() {
            assert_eq!(DiscountSchedule::default().discount_for(f64::NAN), 0);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn accepts_default_steps() {
            let steps = DiscountSchedule::default().steps().to_vec();
            assert!(DiscountSchedule::new(steps).is_ok());
        }

        #[test]
        fn rejects_non_positive_threshold() {
            let err = DiscountSchedule::new(vec![DiscountStep::new(0.0, 5)]).unwrap_err();
            assert!(matches!(err, PricingError::InvalidThreshold { index: 0, .. }));
        }

        #[test]
        fn rejects_non_finite_threshold() {
            let err = DiscountSchedule::new(vec![DiscountStep::new(f64::INFINITY, 5)]).unwrap_err();
            assert!(matches!(err, PricingError::InvalidThreshold { .. }));
        }

        #[test]
        fn rejects_unsorted_thresholds() {
            let err = DiscountSchedule::new(vec![
                DiscountStep::new(50.0, 5),
                DiscountStep::new(20.0, 10),
            ])
            .unwrap_err();
            assert!(matches!(err, PricingError::UnorderedThreshold { index: 1, .. }));
        }

        #[test]
        fn rejects_duplicate_thresholds() {
            let err = DiscountSchedule::new(vec![
                DiscountStep::new(20.0, 5),
                DiscountStep::new(20.0, 10),
            ])
            .unwrap_err();
            assert!(matches!(err, PricingError::UnorderedThreshold { .. }));
        }

        #[test]
        fn rejects_percent_over_hundred() {
            let err = DiscountSchedule::new(vec![DiscountStep::new(10.0, 101)]).unwrap_err();
            assert!(matches!(err, PricingError::InvalidPercent { percent: 101, .. }));
        }

        #[test]
        fn rejects_decreasing_percent() {
            let err = DiscountSchedule::new(vec![
                DiscountStep::new(20.0, 10),
                DiscountStep::new(50.0, 5),
            ])
            .unwrap_err();
            assert!(matches!(err, PricingError::DecreasingDiscount { index: 1, .. }));
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn deserializes_and_validates() {
            let schedule: DiscountSchedule = serde_json::from_str(
                r#"[{"min_area":10,"percent":2},{"min_area":100,"percent":15}]"#,
            )
            .unwrap();
            assert_eq!(schedule.discount_for(150.0), 15);

            let bad = serde_json::from_str::<DiscountSchedule>(
                r#"[{"min_area":100,"percent":2},{"min_area":10,"percent":15}]"#,
            );
            assert!(bad.is_err());
        }
    }

    proptest! {
        #[test]
        fn discount_is_monotonic_in_area(a in 0.001f64..10_000.0, b in 0.001f64..10_000.0) {
            let schedule = DiscountSchedule::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(schedule.discount_for(lo) <= schedule.discount_for(hi));
        }
    }
}
