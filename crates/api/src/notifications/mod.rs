//! Booking notification dispatchers.
//!
//! Each channel (email, sms) implements [`BookingNotifier`]. Dispatchers
//! never return errors: failures are folded into the [`DispatchResult`] so
//! the outbox worker decides what to do with them. When a provider is not
//! configured, the dispatcher logs the intended message and reports the
//! `mock` provider instead.

use async_trait::async_trait;
use serde::Serialize;
use wayfarer_db::models::booking::Booking;

pub mod email;
pub mod sms;

pub use email::EmailNotifier;
pub use sms::SmsNotifier;

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchResult {
    pub success: bool,
    pub provider: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DispatchResult {
    pub fn ok(provider: &'static str) -> Self {
        Self {
            success: true,
            provider,
            error: None,
        }
    }

    pub fn failed(provider: &'static str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            provider,
            error: Some(error.into()),
        }
    }
}

/// A channel-specific booking notification dispatcher.
#[async_trait]
pub trait BookingNotifier: Send + Sync {
    /// Outbox channel this dispatcher serves (`"email"` or `"sms"`).
    fn channel(&self) -> &'static str;

    /// Attempt delivery. Must not panic and must not return `Err` -- all
    /// failure detail travels in the [`DispatchResult`].
    async fn deliver(&self, booking: &Booking) -> DispatchResult;
}
