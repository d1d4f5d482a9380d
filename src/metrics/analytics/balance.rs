//! Training stress balance and the ideal-balance reference curve.

use crate::metrics::analytics::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::smoothing::SeriesPoint;

/// Balance (fitness − stress) for each day.
///
/// Both series must cover the same days in the same order.
pub fn calculate_balance(
    chronic: &[SeriesPoint],
    acute: &[SeriesPoint],
) -> AnalyticsResult<Vec<SeriesPoint>> {
    if chronic.len() != acute.len() {
        return Err(AnalyticsError::SeriesMisaligned(format!(
            "fitness has {} days but stress has {}",
            chronic.len(),
            acute.len()
        )));
    }

    chronic
        .iter()
        .zip(acute)
        .enumerate()
        .map(|(i, (long, short))| {
            if long.date != short.date {
                return Err(AnalyticsError::SeriesMisaligned(format!(
                    "day {i} is {} in fitness but {} in stress",
                    long.date, short.date
                )));
            }
            Ok(SeriesPoint::new(long.date, long.value - short.value))
        })
        .collect()
}

/// Ideal balance for each day, as a fixed fraction of fitness.
pub fn calculate_reference(chronic: &[SeriesPoint], fraction: f64) -> Vec<SeriesPoint> {
    chronic
        .iter()
        .map(|point| SeriesPoint::new(point.date, fraction * point.value))
        .collect()
}
