//! Checks the presentation layer runs before anything reaches the order.
//!
//! Quantities and table numbers can only be built through these checks, so the
//! accumulator and the submission service never see a non-positive value.

use derive_more::{Display, Error};
use rust_decimal::Decimal;
use serde::Serialize;
use crate::server::model::menu_item::MenuItemId;

/// User-facing validation failures. The display text is shown to staff as is.
#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ValidationError {
    #[display("Please select a menu item first.")]
    NoMenuItemSelected,
    #[display("menu item {id} does not exist")]
    UnknownMenuItem { id: MenuItemId },
    #[display("Quantity must be at least 1.")]
    InvalidQuantity,
    #[display("Quantity must be at most {max}.")]
    QuantityTooLarge { max: i32 },
    #[display("Invalid table number.")]
    InvalidTableNumber,
    #[display("Add at least one item before submitting.")]
    EmptyOrder,
    #[display("order total {total} does not match its lines ({expected})")]
    TotalMismatch { total: Decimal, expected: Decimal },
}

/// Number of portions on one order line, between 1 and [`Quantity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct Quantity(i32);

impl Quantity {
    pub const MAX: i32 = 100;

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::InvalidQuantity);
        }
        match i32::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(ValidationError::QuantityTooLarge { max: Self::MAX }),
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

/// Table the order is served to, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub(crate) struct TableNumber(i32);

impl TableNumber {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        match i32::try_from(value) {
            Ok(v) if v >= 1 => Ok(Self(v)),
            _ => Err(ValidationError::InvalidTableNumber),
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(Quantity::new(1).map(Quantity::get), Ok(1));
        assert_eq!(Quantity::new(12).map(Quantity::get), Ok(12));
        assert_eq!(Quantity::new(0), Err(ValidationError::InvalidQuantity));
        assert_eq!(Quantity::new(-3), Err(ValidationError::InvalidQuantity));
    }

    #[test]
    fn quantity_is_capped() {
        let too_large = Err(ValidationError::QuantityTooLarge { max: Quantity::MAX });
        assert_eq!(Quantity::new(100).map(Quantity::get), Ok(100));
        assert_eq!(Quantity::new(101), too_large);
        assert_eq!(Quantity::new(1_000_000_000), too_large);
        assert_eq!(Quantity::new(i64::from(i32::MAX) + 1), too_large);
        assert_eq!(ValidationError::QuantityTooLarge { max: 100 }.to_string(), "Quantity must be at most 100.");
    }

    #[test]
    fn table_number_must_be_positive() {
        assert_eq!(TableNumber::new(5).map(TableNumber::get), Ok(5));
        assert_eq!(TableNumber::new(0), Err(ValidationError::InvalidTableNumber));
        assert_eq!(TableNumber::new(-1), Err(ValidationError::InvalidTableNumber));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(ValidationError::NoMenuItemSelected.to_string(), "Please select a menu item first.");
        assert_eq!(ValidationError::EmptyOrder.to_string(), "Add at least one item before submitting.");
        assert_eq!(ValidationError::UnknownMenuItem { id: 42 }.to_string(), "menu item 42 does not exist");
    }
}
