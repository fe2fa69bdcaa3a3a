//! Order pricing and the premium-tier discount.

use crate::domain::{Category, LineItem, Money};

/// Largest quantity a single line may request.
pub const MAX_UNITS_PER_LINE: u32 = 10;

/// The discount applies once the Premium line count is strictly above this.
pub const PREMIUM_DISCOUNT_THRESHOLD: usize = 2;

pub const PREMIUM_DISCOUNT_PERCENT: u32 = 10;

pub fn premium_count(items: &[LineItem]) -> usize {
    items.iter().filter(|item| item.category == Category::Premium).count()
}

/// Sum of price × quantity, less the premium discount when it applies.
/// `None` if any subtotal or the running sum leaves the [`Money`] range.
pub fn order_total(items: &[LineItem]) -> Option<Money> {
    let gross = items
        .iter()
        .try_fold(Money::ZERO, |sum, item| sum.checked_add(item.subtotal()?))?;
    if premium_count(items) > PREMIUM_DISCOUNT_THRESHOLD {
        Some(gross.discounted(PREMIUM_DISCOUNT_PERCENT))
    } else {
        Some(gross)
    }
}
