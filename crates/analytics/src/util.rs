use crate::error::AnalyticsError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Divides `numerator` by `denominator`, naming the metric if the denominator is zero.
pub fn ratio(
    numerator: Decimal,
    denominator: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    if denominator.is_zero() {
        return Err(AnalyticsError::DivisionByZero(metric.to_string()));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| AnalyticsError::DivisionByZero(metric.to_string()))
}

/// `numerator / denominator * 100`.
pub fn percent_of(
    numerator: Decimal,
    denominator: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    ratio(numerator, denominator, metric)?
        .checked_mul(dec!(100))
        .ok_or_else(|| AnalyticsError::OutOfRange(metric.to_string()))
}
