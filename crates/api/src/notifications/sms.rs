//! New-booking SMS alert to the business phone via the Twilio REST API.

use async_trait::async_trait;
use wayfarer_db::models::booking::Booking;
use wayfarer_db::models::outbox::CHANNEL_SMS;

use super::{BookingNotifier, DispatchResult};

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";

/// Configuration for the Twilio SMS dispatcher.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender number (must belong to the Twilio account).
    pub from_number: String,
    /// Business number that receives new-booking alerts.
    pub notify_number: String,
}

impl TwilioConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless all four variables are present:
    /// `TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE_NUMBER`,
    /// `SMS_NOTIFICATION_PHONE`.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").ok()?,
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").ok()?,
            from_number: std::env::var("TWILIO_PHONE_NUMBER").ok()?,
            notify_number: std::env::var("SMS_NOTIFICATION_PHONE").ok()?,
        })
    }
}

/// Sends the business a text message for every new booking.
pub struct SmsNotifier {
    client: reqwest::Client,
    config: Option<TwilioConfig>,
}

impl SmsNotifier {
    pub fn new(config: Option<TwilioConfig>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(TwilioConfig::from_env())
    }

    async fn send(&self, config: &TwilioConfig, body: &str) -> Result<(), String> {
        let url = format!(
            "{TWILIO_API_BASE}/Accounts/{}/Messages.json",
            config.account_sid
        );

        let response = self
            .client
            .post(url)
            .basic_auth(&config.account_sid, Some(&config.auth_token))
            .form(&[
                ("To", config.notify_number.as_str()),
                ("From", config.from_number.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Twilio API error ({status}): {body}"));
        }
        Ok(())
    }
}

/// Alert text sent to the business phone.
fn alert_text(booking: &Booking) -> String {
    format!(
        "New Booking Alert!\n\
         Customer: {name}\n\
         Phone: {phone}\n\
         Tour: {tour}\n\
         Dates: {dates}\n\
         Guests: {guests}",
        name = booking.name,
        phone = booking.phone,
        tour = booking.tour_type,
        dates = booking.dates,
        guests = booking.guests,
    )
}

#[async_trait]
impl BookingNotifier for SmsNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL_SMS
    }

    async fn deliver(&self, booking: &Booking) -> DispatchResult {
        let Some(config) = &self.config else {
            tracing::info!(
                booking_id = %booking.public_id,
                text = %alert_text(booking),
                "SMS delivery skipped (Twilio not configured)"
            );
            return DispatchResult::ok("mock");
        };

        match self.send(config, &alert_text(booking)).await {
            Ok(()) => {
                tracing::info!(booking_id = %booking.public_id, "Booking SMS sent");
                DispatchResult::ok("twilio")
            }
            Err(e) => {
                tracing::warn!(booking_id = %booking.public_id, error = %e, "Booking SMS failed");
                DispatchResult::failed("twilio", e)
            }
        }
    }
}
