//! Salary-proximity search mode.
//!
//! A query like "50000" or "50k" is treated as a salary target rather than
//! a keyword: the text-match candidates are discarded and the approved set
//! is filtered to jobs whose own parsed salary lies within 15% of the
//! target. See [`crate::api::job::service::JobService::search`] for how
//! the two modes combine.

use crate::api::job::salary::parse_salary;

/// Maximum relative difference between a job's salary and the query value
pub const SALARY_TOLERANCE: f64 = 0.15;

/// Numeric reading of a search query, if it has one.
///
/// Requires at least one digit and a positive parse; everything else stays
/// in keyword mode.
pub fn salary_target(query: &str) -> Option<f64> {
    if !query.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let value = parse_salary(query);
    (value > 0.0).then_some(value)
}

/// Whether a job's salary text is within tolerance of the target value.
/// Jobs whose salary parses to 0 never match.
pub fn salary_matches(job_salary: &str, target: f64) -> bool {
    let job_salary = parse_salary(job_salary);
    if job_salary == 0.0 {
        return false;
    }
    (job_salary - target).abs() / target <= SALARY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_queries_have_no_target() {
        assert_eq!(salary_target("rust engineer"), None);
        assert_eq!(salary_target(""), None);
    }

    #[test]
    fn digit_queries_parse_to_targets() {
        assert_eq!(salary_target("50000"), Some(50000.0));
        assert_eq!(salary_target("50k"), Some(50000.0));
        assert_eq!(salary_target("45k-50k"), Some(47500.0));
    }

    #[test]
    fn digits_that_parse_to_zero_stay_keyword() {
        // "0" contains a digit but parses to 0, so text matching applies
        assert_eq!(salary_target("0"), None);
    }

    #[test]
    fn proximity_filter_is_fifteen_percent() {
        // 45000 vs 47000: ~4.3% difference, inside tolerance
        assert!(salary_matches("$45,000", 47000.0));
        // 60000 vs 47000: ~27.7% difference, outside
        assert!(!salary_matches("$60,000", 47000.0));
        // boundary: exactly 15% above
        assert!(salary_matches("46000", 40000.0));
    }

    #[test]
    fn unparseable_job_salaries_never_match() {
        assert!(!salary_matches("competitive", 47000.0));
        assert!(!salary_matches("", 47000.0));
    }
}
