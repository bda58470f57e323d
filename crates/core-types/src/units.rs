use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// One crore (10,000,000), the scale used for every large currency figure.
pub const CRORE: Decimal = dec!(10000000);

/// One lakh (100,000).
pub const LAKH: Decimal = dec!(100000);

/// Converts a rupee amount into crores.
pub fn to_crore(amount: Decimal) -> Decimal {
    amount / CRORE
}

/// Crores to two places, halves away from zero (104.025 -> 104.03).
///
/// Every printed or exported crore figure goes through here so the report and the
/// payload always agree.
pub fn round_crore(amount: Decimal) -> Decimal {
    to_crore(amount).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a rupee amount into lakhs.
pub fn to_lakh(amount: Decimal) -> Decimal {
    amount / LAKH
}
