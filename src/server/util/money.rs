use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount the way staff read it: two decimals, halves rounded away from zero.
pub(crate) fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
