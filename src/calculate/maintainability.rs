//! Maintainability index from Halstead volume, cyclomatic complexity and
//! lines of code. Logarithm inputs are clamped to at least 1 and the result
//! to the conventional 0–100 band.

use super::CalculatedMetric;
use crate::core::{MetricRecord, MetricValue};
use crate::calculate::halstead_derived::HALSTEAD_VOLUME;
use crate::extract::cyclomatic::CYCLOMATIC_COMPLEXITY;
use crate::extract::loc::LOC;

pub const MAINTAINABILITY_INDEX: &str = "maintainability_index";

pub struct MaintainabilityIndex;

impl CalculatedMetric for MaintainabilityIndex {
    fn name(&self) -> &'static str {
        "maintainability"
    }

    fn compute(&self, raw: &MetricRecord) -> MetricRecord {
        let mut derived = MetricRecord::new();

        let get = |key: &str| raw.get(key).map(MetricValue::as_f64);
        let (Some(volume), Some(cc), Some(loc)) = (
            get(HALSTEAD_VOLUME),
            get(CYCLOMATIC_COMPLEXITY),
            get(LOC),
        ) else {
            return derived;
        };

        let index = 171.0
            - 5.2 * volume.max(1.0).ln()
            - 0.23 * cc
            - 16.2 * loc.max(1.0).ln();
        derived.insert(MAINTAINABILITY_INDEX.into(), index.clamp(0.0, 100.0).into());
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(volume: f64, cc: i64, loc: i64) -> MetricRecord {
        let mut record = MetricRecord::new();
        record.insert(HALSTEAD_VOLUME.into(), volume.into());
        record.insert(CYCLOMATIC_COMPLEXITY.into(), cc.into());
        record.insert(LOC.into(), loc.into());
        record
    }

    #[test]
    fn formula_with_clamping() {
        let derived = MaintainabilityIndex.compute(&raw(100.0, 3, 40));
        let expected =
            (171.0 - 5.2 * 100.0f64.ln() - 0.23 * 3.0 - 16.2 * 40.0f64.ln()).clamp(0.0, 100.0);
        assert!((derived[MAINTAINABILITY_INDEX].as_f64() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_inputs_stay_defined() {
        let derived = MaintainabilityIndex.compute(&raw(0.0, 1, 0));
        let value = derived[MAINTAINABILITY_INDEX].as_f64();
        assert!(value.is_finite());
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn absent_inputs_mean_absent_output() {
        let mut partial = MetricRecord::new();
        partial.insert(LOC.into(), 10i64.into());
        assert!(MaintainabilityIndex.compute(&partial).is_empty());
    }
}
