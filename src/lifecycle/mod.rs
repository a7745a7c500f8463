//! Customer-facing state machines over the per-user document store.
//!
//! These functions know nothing about HTTP or the relational tables: they
//! read and write [`crate::store::UserStore`] documents and return the
//! updated view models. The services layer resolves catalog data and writes
//! admin activity entries around them.

pub mod browsing;
pub mod cart;
pub mod notifications;
pub mod orders;
pub mod requests;

use crate::error::{AppError, AppResult};

/// Reject blank free-text input.
pub(crate) fn require_text(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid(format!("{field} is required")));
    }
    Ok(())
}

/// `out_for_delivery` -> `out for delivery`
pub(crate) fn status_label(status: &str) -> String {
    status.replace('_', " ")
}
