use crate::models::VacancyRecord;

const LOWER_BOUND_FACTOR: f64 = 1.2;
const UPPER_BOUND_FACTOR: f64 = 0.8;

/// Estimate a ruble salary from a vacancy's partial salary bounds.
///
/// A bound of `0` counts as absent, so an offer of exactly zero is
/// indistinguishable from a missing one. `ruble_code` is the source's own
/// spelling of the ruble (`RUR` on HeadHunter, `rub` on SuperJob).
pub fn predict_rub_salary(record: &VacancyRecord, ruble_code: &str) -> Option<f64> {
    let from = record.salary_from.filter(|v| *v != 0);
    let to = record.salary_to.filter(|v| *v != 0);

    if from.is_none() && to.is_none() {
        return None;
    }

    if record.currency != ruble_code {
        return None;
    }

    match (from, to) {
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (Some(from), None) => Some(from as f64 * LOWER_BOUND_FACTOR),
        (None, Some(to)) => Some(to as f64 * UPPER_BOUND_FACTOR),
        (None, None) => None,
    }
}
