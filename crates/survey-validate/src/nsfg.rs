//! Published reference statistics for the cleaned 2002 pregnancy file.

use crate::check::ValidationCheck;

pub const PREGNANCY_ROWS: usize = 13593;

/// Checks a correctly loaded and cleaned pregnancy file satisfies.
pub fn pregnancy_checks() -> Vec<ValidationCheck> {
    vec![
        ValidationCheck::row_count(PREGNANCY_ROWS),
        ValidationCheck::value_at("caseid", PREGNANCY_ROWS - 1, "12571"),
        ValidationCheck::frequency("pregordr", 1_i64, 5033),
        ValidationCheck::frequency("nbrnaliv", 1_i64, 8981),
        ValidationCheck::frequency("babysex", 1_i64, 4641),
        ValidationCheck::frequency("birthwgt-lb", 7_i64, 3049),
        ValidationCheck::frequency("birthwgt-oz", 0_i64, 1037),
        ValidationCheck::frequency("prglngth", 39_i64, 4744),
        ValidationCheck::frequency("outcome", 1_i64, 9148),
        ValidationCheck::frequency("birthord", 1_i64, 4413),
        ValidationCheck::frequency("agepreg", 22.75, 100),
        ValidationCheck::frequency("totalwgt-lb", 7.5, 302),
        ValidationCheck::count_at_max_key("finalwgt", 6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Probe;

    #[test]
    fn descriptions_are_unique() {
        let checks = pregnancy_checks();
        let mut descriptions: Vec<&str> = checks.iter().map(|c| c.description.as_str()).collect();
        descriptions.sort_unstable();
        descriptions.dedup();
        assert_eq!(descriptions.len(), checks.len());
    }

    #[test]
    fn last_caseid_is_probed_at_final_row() {
        let checks = pregnancy_checks();
        assert!(checks.iter().any(|check| matches!(
            &check.probe,
            Probe::ValueAt { column, row } if column == "caseid" && *row == 13592
        )));
    }
}
