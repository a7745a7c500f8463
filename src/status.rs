//! Order and custom-request status vocabularies and the rules for moving
//! between them.
//!
//! Legality of a transition is decided here, separately from the code that
//! appends history entries, so the rule can be tested on its own and switched
//! between enforcing and permissive modes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Received,
    InReview,
    InPacking,
    ReadyForDispatch,
    Shipped,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::InReview => "in_review",
            OrderStatus::InPacking => "in_packing",
            OrderStatus::ReadyForDispatch => "ready_for_dispatch",
            OrderStatus::Shipped => "shipped",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "received" => Some(OrderStatus::Received),
            "in_review" => Some(OrderStatus::InReview),
            "in_packing" => Some(OrderStatus::InPacking),
            "ready_for_dispatch" => Some(OrderStatus::ReadyForDispatch),
            "shipped" => Some(OrderStatus::Shipped),
            "out_for_delivery" => Some(OrderStatus::OutForDelivery),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Position along the fulfilment progression; `None` for `cancelled`.
    fn rank(&self) -> Option<u8> {
        match self {
            OrderStatus::Received => Some(0),
            OrderStatus::InReview => Some(1),
            OrderStatus::InPacking => Some(2),
            OrderStatus::ReadyForDispatch => Some(3),
            OrderStatus::Shipped => Some(4),
            OrderStatus::OutForDelivery => Some(5),
            OrderStatus::Delivered => Some(6),
            OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Non-decreasing along the progression, or into `cancelled` from any
    /// non-terminal state. Terminal states accept nothing.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match (self.rank(), next.rank()) {
            (_, None) => true,
            (Some(from), Some(to)) => to >= from,
            (None, Some(_)) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    InProgress,
    PreviewSent,
    Approved,
    Rejected,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::PreviewSent => "preview_sent",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(RequestStatus::New),
            "in_progress" => Some(RequestStatus::InProgress),
            "preview_sent" => Some(RequestStatus::PreviewSent),
            "approved" => Some(RequestStatus::Approved),
            "rejected" => Some(RequestStatus::Rejected),
            "completed" => Some(RequestStatus::Completed),
            _ => None,
        }
    }

    pub fn can_transition_to(&self, next: RequestStatus) -> bool {
        use RequestStatus::*;
        match self {
            New => matches!(next, InProgress | PreviewSent | Rejected),
            InProgress => matches!(next, PreviewSent | Rejected),
            // a fresh preview may replace one that is still awaiting review
            PreviewSent => matches!(next, PreviewSent | InProgress | Approved | Rejected),
            Approved | Rejected => matches!(next, Completed),
            Completed => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Reject transitions the progression does not allow.
    Enforce,
    /// Accept any target status (admin override).
    Permissive,
}

pub fn check_order_transition(
    policy: TransitionPolicy,
    from: OrderStatus,
    to: OrderStatus,
) -> AppResult<()> {
    match policy {
        TransitionPolicy::Permissive => Ok(()),
        TransitionPolicy::Enforce if from.can_transition_to(to) => Ok(()),
        TransitionPolicy::Enforce => Err(AppError::conflict(format!(
            "order cannot move from {} to {}",
            from.as_str(),
            to.as_str()
        ))),
    }
}

pub fn check_request_transition(
    policy: TransitionPolicy,
    from: RequestStatus,
    to: RequestStatus,
) -> AppResult<()> {
    match policy {
        TransitionPolicy::Permissive => Ok(()),
        TransitionPolicy::Enforce if from.can_transition_to(to) => Ok(()),
        TransitionPolicy::Enforce => Err(AppError::conflict(format!(
            "request cannot move from {} to {}",
            from.as_str(),
            to.as_str()
        ))),
    }
}
