//! Classical Halstead measures derived from the operator/operand tallies.

use super::CalculatedMetric;
use crate::core::{MetricRecord, MetricValue};
use crate::extract::halstead::{OPERANDS_SUM, OPERANDS_UNIQ, OPERATORS_SUM, OPERATORS_UNIQ};

pub const HALSTEAD_VOLUME: &str = "halstead_volume";
pub const HALSTEAD_DIFFICULTY: &str = "halstead_difficulty";
pub const HALSTEAD_EFFORT: &str = "halstead_effort";
pub const HALSTEAD_TIMEREQUIRED: &str = "halstead_timerequired";
pub const HALSTEAD_BUGPROP: &str = "halstead_bugprop";

pub struct HalsteadDerived;

impl CalculatedMetric for HalsteadDerived {
    fn name(&self) -> &'static str {
        "halstead_derived"
    }

    fn compute(&self, raw: &MetricRecord) -> MetricRecord {
        let mut derived = MetricRecord::new();

        let get = |key: &str| raw.get(key).map(MetricValue::as_f64);
        let (Some(n1_total), Some(n1), Some(n2_total), Some(n2)) = (
            get(OPERATORS_SUM),
            get(OPERATORS_UNIQ),
            get(OPERANDS_SUM),
            get(OPERANDS_UNIQ),
        ) else {
            return derived;
        };

        let vocabulary = n1 + n2;
        let length = n1_total + n2_total;

        let volume = if vocabulary > 0.0 {
            length * vocabulary.log2()
        } else {
            0.0
        };
        let difficulty = if n2 > 0.0 { (n1 / 2.0) * (n2_total / n2) } else { 0.0 };
        let effort = difficulty * volume;

        derived.insert(HALSTEAD_VOLUME.into(), volume.into());
        derived.insert(HALSTEAD_DIFFICULTY.into(), difficulty.into());
        derived.insert(HALSTEAD_EFFORT.into(), effort.into());
        derived.insert(HALSTEAD_TIMEREQUIRED.into(), (effort / 18.0).into());
        derived.insert(HALSTEAD_BUGPROP.into(), (volume / 3000.0).into());
        derived
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(n1_total: i64, n1: i64, n2_total: i64, n2: i64) -> MetricRecord {
        let mut record = MetricRecord::new();
        record.insert(OPERATORS_SUM.into(), n1_total.into());
        record.insert(OPERATORS_UNIQ.into(), n1.into());
        record.insert(OPERANDS_SUM.into(), n2_total.into());
        record.insert(OPERANDS_UNIQ.into(), n2.into());
        record
    }

    #[test]
    fn standard_formulas() {
        let derived = HalsteadDerived.compute(&raw(10, 4, 8, 5));
        let volume = 18.0 * 9.0f64.log2();
        let difficulty = 2.0 * (8.0 / 5.0);
        assert!((derived[HALSTEAD_VOLUME].as_f64() - volume).abs() < 1e-9);
        assert!((derived[HALSTEAD_DIFFICULTY].as_f64() - difficulty).abs() < 1e-9);
        assert!(
            (derived[HALSTEAD_EFFORT].as_f64() - volume * difficulty).abs() < 1e-9
        );
        assert!(
            (derived[HALSTEAD_TIMEREQUIRED].as_f64() - volume * difficulty / 18.0).abs() < 1e-9
        );
        assert!((derived[HALSTEAD_BUGPROP].as_f64() - volume / 3000.0).abs() < 1e-9);
    }

    #[test]
    fn zero_tallies_do_not_divide_by_zero() {
        let derived = HalsteadDerived.compute(&raw(0, 0, 0, 0));
        for key in [
            HALSTEAD_VOLUME,
            HALSTEAD_DIFFICULTY,
            HALSTEAD_EFFORT,
            HALSTEAD_TIMEREQUIRED,
            HALSTEAD_BUGPROP,
        ] {
            assert_eq!(derived[key].as_f64(), 0.0, "{key}");
        }
    }

    #[test]
    fn missing_tallies_contribute_nothing() {
        let derived = HalsteadDerived.compute(&MetricRecord::new());
        assert!(derived.is_empty());
    }
}
