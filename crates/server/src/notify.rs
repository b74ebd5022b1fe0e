//! Booking notification emails: a customer confirmation and a business alert,
//! both fire-and-forget on intake. Failures are logged, never retried.

use common::mail::{Address, MailError, Mailer};
use configs::EmailConfig;
use models::booking;

pub struct Notifier {
    mailer: Mailer,
    business: Address,
}

impl Notifier {
    /// Build from the email config section; `None` when credentials are absent.
    pub fn from_config(cfg: &EmailConfig) -> Option<Self> {
        if !cfg.is_configured() {
            return None;
        }
        let sender = Address::new(cfg.sender_email.clone(), cfg.sender_name.clone());
        let business = Address::new(cfg.business_email.clone(), cfg.sender_name.clone());
        Some(Self {
            mailer: Mailer::new(cfg.endpoint.clone(), cfg.api_key.clone(), sender),
            business,
        })
    }

    pub async fn send_customer_confirmation(&self, b: &booking::Model) -> Result<(), MailError> {
        let to = Address::new(b.customer_email.clone(), b.customer_name.clone());
        self.mailer
            .send(to, "Booking Confirmation".into(), confirmation_html(b))
            .await
    }

    pub async fn send_business_alert(&self, b: &booking::Model) -> Result<(), MailError> {
        self.mailer
            .send(self.business.clone(), "New Booking Notification".into(), alert_html(b))
            .await
    }
}

fn confirmation_html(b: &booking::Model) -> String {
    format!(
        "<html>\
  <body>\
    <h1>Booking Confirmed</h1>\
    <p>Dear {name},</p>\
    <p>Thank you for booking our service.</p>\
    <p>Your booking details:</p>\
    <ul>\
      <li>Service: {service}</li>\
      <li>Location: {location}</li>\
      <li>Date: {date}</li>\
      <li>Time: {time}</li>\
    </ul>\
    <p>We look forward to serving you.</p>\
  </body>\
</html>",
        name = b.customer_name,
        service = b.service_type,
        location = b.preferred_location,
        date = b.preferred_date.format("%Y-%m-%d"),
        time = b.preferred_time.format("%H:%M"),
    )
}

fn alert_html(b: &booking::Model) -> String {
    format!(
        "<html>\
  <body>\
    <h1>New Booking Received</h1>\
    <p>A new booking has been submitted with the following details:</p>\
    <ul>\
      <li>Name: {name}</li>\
      <li>Email: {email}</li>\
      <li>Phone: {phone}</li>\
      <li>Service: {service}</li>\
      <li>Location: {location}</li>\
      <li>Date: {date}</li>\
      <li>Time: {time}</li>\
    </ul>\
  </body>\
</html>",
        name = b.customer_name,
        email = b.customer_email,
        phone = b.customer_phone,
        service = b.service_type,
        location = b.preferred_location,
        date = b.preferred_date.format("%Y-%m-%d"),
        time = b.preferred_time.format("%H:%M"),
    )
}
