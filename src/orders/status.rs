//! Status transitions and dispatch date parsing.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::domain::OrderStatus;

use super::OrderError;

/// Day-month-year, e.g. `05-03-2024`.
pub const DISPATCH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Which status changes an order accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any enumerated status may follow any other.
    #[default]
    AnyToAny,
    /// Placed → Dispatched → Completed, with Cancelled reachable from Placed
    /// or Dispatched. Re-applying the current status is allowed.
    ForwardOnly,
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(TransitionPolicy::AnyToAny),
            "forward" => Ok(TransitionPolicy::ForwardOnly),
            other => Err(format!("unknown transition policy {other:?}")),
        }
    }
}

impl OrderStatus {
    pub fn can_transition_to(self, target: OrderStatus, policy: TransitionPolicy) -> bool {
        use OrderStatus::*;

        match policy {
            TransitionPolicy::AnyToAny => true,
            TransitionPolicy::ForwardOnly => matches!(
                (self, target),
                (Placed, Placed)
                    | (Dispatched, Dispatched)
                    | (Completed, Completed)
                    | (Cancelled, Cancelled)
                    | (Placed, Dispatched)
                    | (Dispatched, Completed)
                    | (Placed, Cancelled)
                    | (Dispatched, Cancelled)
            ),
        }
    }
}

pub fn parse_dispatch_date(raw: Option<&str>) -> Result<NaiveDate, OrderError> {
    let raw = raw.ok_or_else(|| OrderError::InvalidDispatchDate("missing".to_string()))?;
    NaiveDate::parse_from_str(raw.trim(), DISPATCH_DATE_FORMAT)
        .map_err(|_| OrderError::InvalidDispatchDate(raw.to_string()))
}
