//! Completion-rate arithmetic shared by project and organization statistics.

/// Percentage of `completed` over `total`, rounded to two decimal places.
///
/// Returns `0.0` when `total` is zero so an empty task set reads as 0%
/// instead of dividing by zero. The same formula applies at project scope
/// and at organization-wide scope.
pub fn completion_rate(completed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((completed as f64 / total as f64) * 100.0 * 100.0).round() / 100.0
}
