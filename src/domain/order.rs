use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Category, Money, ProductId};
use crate::orders::OrderError;

/// Order-book identifier, independent of product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(raw: u64) -> Self {
        OrderId(raw)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Placed,
    Dispatched,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "Placed",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Placed" => Ok(OrderStatus::Placed),
            "Dispatched" => Ok(OrderStatus::Dispatched),
            "Completed" => Ok(OrderStatus::Completed),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(OrderError::InvalidStatus(other.to_string())),
        }
    }
}

/// One requested (product, quantity) pair of an order request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self { product_id, quantity }
    }
}

/// Snapshot of a product as it was when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "product_name")]
    pub name: String,
    pub price: Money,
    pub category: Category,
    /// Units ordered, not units on hand.
    pub quantity: u32,
}

impl LineItem {
    /// `None` when price × quantity does not fit in [`Money`].
    pub fn subtotal(&self) -> Option<Money> {
        self.price.checked_mul(self.quantity)
    }
}

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "dispatch_date", skip_serializing_if = "Option::is_none", default)]
    pub dispatch_date: Option<NaiveDate>,
    #[serde(rename = "order_status")]
    pub status: OrderStatus,
    #[serde(rename = "products")]
    pub line_items: Vec<LineItem>,
    #[serde(rename = "total_amount")]
    pub total: Money,
}

/// Payload for recording a priced order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub line_items: Vec<LineItem>,
    pub total: Money,
}

/// Requested status change. `dispatch_date` is day-month-year text and only
/// read when the target status is `Dispatched`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub order_status: String,
    #[serde(default)]
    pub dispatch_date: Option<String>,
}

impl StatusUpdate {
    pub fn new(order_status: impl Into<String>) -> Self {
        Self {
            order_status: order_status.into(),
            dispatch_date: None,
        }
    }

    pub fn dispatched_on(date: impl Into<String>) -> Self {
        Self {
            order_status: OrderStatus::Dispatched.as_str().to_string(),
            dispatch_date: Some(date.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_uses_wire_field_names() {
        let order = Order {
            dispatch_date: None,
            status: OrderStatus::Placed,
            line_items: vec![LineItem {
                name: "Lamp".to_string(),
                price: Money::from_cents(1000),
                category: Category::Premium,
                quantity: 2,
            }],
            total: Money::from_cents(2000),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["order_status"], "Placed");
        assert_eq!(json["total_amount"], 2000);
        assert_eq!(json["products"][0]["product_name"], "Lamp");
        assert_eq!(json["products"][0]["category"], "Premium");
        assert!(json.get("dispatch_date").is_none());
    }

    #[test]
    fn status_update_date_is_optional() {
        let update: StatusUpdate = serde_json::from_str(r#"{"order_status":"Completed"}"#).unwrap();
        assert_eq!(update.order_status, "Completed");
        assert_eq!(update.dispatch_date, None);
    }

    #[test]
    fn unknown_status_text_is_rejected() {
        assert_eq!("Dispatched".parse::<OrderStatus>(), Ok(OrderStatus::Dispatched));
        assert_eq!(
            "Shipped".parse::<OrderStatus>(),
            Err(OrderError::InvalidStatus("Shipped".to_string()))
        );
    }
}
