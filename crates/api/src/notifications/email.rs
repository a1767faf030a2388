//! Booking confirmation email via SMTP.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use wayfarer_db::models::booking::Booking;
use wayfarer_db::models::outbox::CHANNEL_EMAIL;

use super::{BookingNotifier, DispatchResult};

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "bookings@wayfarer.local";

/// Configuration for the SMTP email dispatcher.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Business inbox copied on every booking confirmation.
    pub business_email: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and the mock path should be used.
    ///
    /// | Variable         | Required | Default                    |
    /// |------------------|----------|----------------------------|
    /// | `SMTP_HOST`      | yes      | --                         |
    /// | `SMTP_PORT`      | no       | `587`                      |
    /// | `SMTP_FROM`      | no       | `bookings@wayfarer.local`  |
    /// | `SMTP_USER`      | no       | --                         |
    /// | `SMTP_PASSWORD`  | no       | --                         |
    /// | `BUSINESS_EMAIL` | no       | --                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            business_email: std::env::var("BUSINESS_EMAIL").ok(),
        })
    }
}

/// Sends booking confirmations to the customer (and the business inbox).
pub struct EmailNotifier {
    config: Option<EmailConfig>,
}

impl EmailNotifier {
    pub fn new(config: Option<EmailConfig>) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(EmailConfig::from_env())
    }

    async fn send(&self, config: &EmailConfig, booking: &Booking) -> Result<(), String> {
        let mut builder = Message::builder()
            .from(config.from_address.parse().map_err(|e| format!("{e}"))?)
            .to(booking.email.parse().map_err(|e| format!("{e}"))?)
            .subject(subject(booking))
            .header(ContentType::TEXT_PLAIN);

        if let Some(business) = &config.business_email {
            builder = builder.cc(business.parse().map_err(|e| format!("{e}"))?);
        }

        let email = builder
            .body(booking_summary(booking))
            .map_err(|e| e.to_string())?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
                .map_err(|e| e.to_string())?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await.map_err(|e| e.to_string())?;
        Ok(())
    }
}

fn subject(booking: &Booking) -> String {
    format!("Booking Confirmation - {}", booking.tour_type)
}

/// Plain-text body listing the booking details.
fn booking_summary(booking: &Booking) -> String {
    let mut body = format!(
        "Hello {name},\n\n\
         Thank you for your booking. Here is what we received:\n\n\
         Booking ID: {id}\n\
         Tour: {tour}\n\
         Dates: {dates}\n\
         Guests: {guests}\n\
         Phone: {phone}\n",
        name = booking.name,
        id = booking.public_id,
        tour = booking.tour_type,
        dates = booking.dates,
        guests = booking.guests,
        phone = booking.phone,
    );
    if !booking.message.is_empty() {
        body.push_str(&format!("Message: {}\n", booking.message));
    }
    body.push_str("\nOur team will contact you shortly to confirm the details.\n");
    body
}

#[async_trait]
impl BookingNotifier for EmailNotifier {
    fn channel(&self) -> &'static str {
        CHANNEL_EMAIL
    }

    async fn deliver(&self, booking: &Booking) -> DispatchResult {
        let Some(config) = &self.config else {
            tracing::info!(
                to = %booking.email,
                subject = %subject(booking),
                "Email delivery skipped (SMTP not configured)"
            );
            return DispatchResult::ok("mock");
        };

        match self.send(config, booking).await {
            Ok(()) => {
                tracing::info!(to = %booking.email, booking_id = %booking.public_id, "Booking email sent");
                DispatchResult::ok("smtp")
            }
            Err(e) => {
                tracing::warn!(to = %booking.email, error = %e, "Booking email failed");
                DispatchResult::failed("smtp", e)
            }
        }
    }
}
