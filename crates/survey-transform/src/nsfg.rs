//! Cleaning pipeline for the NSFG 2002 female pregnancy file.

use survey_model::Value;

use crate::transform::ColumnTransform;

pub const AGEPREG: &str = "agepreg";
pub const BIRTHWGT_LB: &str = "birthwgt-lb";
pub const BIRTHWGT_OZ: &str = "birthwgt-oz";
pub const TOTALWGT_LB: &str = "totalwgt-lb";

/// Age at pregnancy end is recorded in hundredths of a year.
pub const AGEPREG_DIVISOR: f64 = 100.0;

/// Out-of-range pounds plus the "not ascertained", "refused" and "don't know"
/// codes.
pub const BIRTHWGT_LB_SENTINELS: [i64; 4] = [51, 97, 98, 99];

pub const BIRTHWGT_OZ_SENTINELS: [i64; 3] = [97, 98, 99];

const OUNCES_PER_POUND: f64 = 16.0;

/// Transforms applied to the pregnancy file, in order.
///
/// The total weight column is derived after both weight columns have had
/// their sentinels removed.
pub fn pregnancy_pipeline() -> Vec<ColumnTransform> {
    vec![
        ColumnTransform::rescale(AGEPREG, AGEPREG, AGEPREG_DIVISOR),
        ColumnTransform::remap_sentinels(
            BIRTHWGT_LB,
            BIRTHWGT_LB_SENTINELS.into_iter().map(Value::Integer),
        ),
        ColumnTransform::remap_sentinels(
            BIRTHWGT_OZ,
            BIRTHWGT_OZ_SENTINELS.into_iter().map(Value::Integer),
        ),
        ColumnTransform::derive(TOTALWGT_LB, [BIRTHWGT_LB, BIRTHWGT_OZ], total_weight_lb),
    ]
}

fn total_weight_lb(operands: &[f64]) -> Option<f64> {
    match operands {
        [lb, oz] => Some(lb + oz / OUNCES_PER_POUND),
        _ => None,
    }
}
