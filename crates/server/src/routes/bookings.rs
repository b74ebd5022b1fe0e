use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use models::booking::{self, NewBooking};

use crate::errors::ApiError;
use crate::state::AppState;

/// Raw intake payload. Everything is optional here so that a missing field
/// becomes a 400 instead of a deserialization reject.
#[derive(Debug, Default, Deserialize)]
pub struct BookingPayload {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_type: Option<String>,
    pub preferred_location: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
}

const MISSING_FIELDS: &str = "Missing required booking fields";

fn required(field: Option<String>) -> Result<String, ApiError> {
    match field {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(ApiError::Validation(MISSING_FIELDS.into())),
    }
}

fn parse_intake(payload: BookingPayload) -> Result<NewBooking, ApiError> {
    let customer_name = required(payload.customer_name)?;
    let customer_email = required(payload.customer_email)?;
    let customer_phone = required(payload.customer_phone)?;
    let service_type = required(payload.service_type)?;
    let preferred_location = required(payload.preferred_location)?;
    let date_raw = required(payload.preferred_date)?;
    let time_raw = required(payload.preferred_time)?;

    let preferred_date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation("preferred_date must be YYYY-MM-DD".into()))?;
    let preferred_time = NaiveTime::parse_from_str(&time_raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&time_raw, "%H:%M"))
        .map_err(|_| ApiError::Validation("preferred_time must be HH:MM or HH:MM:SS".into()))?;

    Ok(NewBooking {
        customer_name,
        customer_email,
        customer_phone,
        service_type,
        preferred_location,
        preferred_date,
        preferred_time,
    })
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> Result<Json<Value>, ApiError> {
    let intake = parse_intake(payload)?;
    let saved = booking::create(&state.db, intake).await?;
    info!(booking_id = saved.id, "booking received");

    // Fire-and-forget notifications; the request never waits on the provider.
    match state.notifier.clone() {
        Some(notifier) => {
            let b = saved.clone();
            let n = notifier.clone();
            tokio::spawn(async move {
                if let Err(e) = n.send_customer_confirmation(&b).await {
                    error!(error = %e, booking_id = b.id, "customer confirmation email failed");
                }
            });
            let b = saved.clone();
            tokio::spawn(async move {
                if let Err(e) = notifier.send_business_alert(&b).await {
                    error!(error = %e, booking_id = b.id, "business alert email failed");
                }
            });
        }
        None => warn!(booking_id = saved.id, "email not configured; skipping notifications"),
    }

    Ok(Json(json!({
        "message": "Booking received successfully",
        "booking": saved,
    })))
}

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<booking::Model>>, ApiError> {
    let rows = booking::list_recent(&state.db).await?;
    Ok(Json(rows))
}

#[derive(Debug, Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
}

pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StatusPayload>,
) -> Result<Json<Value>, ApiError> {
    let status = payload
        .status
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("Missing status field".into()))?;
    booking::set_status(&state.db, id, &status).await?;
    Ok(Json(json!({ "message": "Booking status updated successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> BookingPayload {
        BookingPayload {
            customer_name: Some("Jane Doe".into()),
            customer_email: Some("jane@example.com".into()),
            customer_phone: Some("+1 555 0100".into()),
            service_type: Some("Full Detail".into()),
            preferred_location: Some("Downtown".into()),
            preferred_date: Some("2026-09-01".into()),
            preferred_time: Some("14:30".into()),
        }
    }

    #[test]
    fn full_payload_parses() {
        let b = parse_intake(full_payload()).unwrap();
        assert_eq!(b.customer_name, "Jane Doe");
        assert_eq!(b.preferred_date.to_string(), "2026-09-01");
        assert_eq!(b.preferred_time.to_string(), "14:30:00");
    }

    #[test]
    fn seconds_in_time_accepted() {
        let mut p = full_payload();
        p.preferred_time = Some("09:15:30".into());
        let b = parse_intake(p).unwrap();
        assert_eq!(b.preferred_time.to_string(), "09:15:30");
    }

    #[test]
    fn missing_field_is_rejected() {
        let cases: [fn(&mut BookingPayload); 7] = [
            |p| p.customer_name = None,
            |p| p.customer_email = None,
            |p| p.customer_phone = None,
            |p| p.service_type = None,
            |p| p.preferred_location = None,
            |p| p.preferred_date = None,
            |p| p.preferred_time = None,
        ];
        for clear in cases {
            let mut p = full_payload();
            clear(&mut p);
            match parse_intake(p) {
                Err(ApiError::Validation(msg)) => assert_eq!(msg, MISSING_FIELDS),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut p = full_payload();
        p.customer_email = Some("  ".into());
        assert!(matches!(parse_intake(p), Err(ApiError::Validation(_))));
    }

    #[test]
    fn bad_date_format_is_rejected() {
        let mut p = full_payload();
        p.preferred_date = Some("09/01/2026".into());
        let err = parse_intake(p).unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("YYYY-MM-DD")));
    }

    #[test]
    fn bad_time_format_is_rejected() {
        let mut p = full_payload();
        p.preferred_time = Some("2pm".into());
        assert!(matches!(parse_intake(p), Err(ApiError::Validation(_))));
    }
}
