//! Booking order models.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use zootaxi_core::types::{DbId, Timestamp};

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub client_name: String,
    pub client_phone: String,
    pub client_email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: String,
    pub pet_breed: Option<String>,
    pub pet_weight: Option<Decimal>,
    pub pet_special_needs: Option<String>,
    pub service_type: String,
    pub pickup_address: String,
    pub destination_address: String,
    pub preferred_date: NaiveDate,
    pub preferred_time: NaiveTime,
    pub additional_services: Option<String>,
    pub comments: Option<String>,
    pub estimated_price: Option<Decimal>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new order.
///
/// Required fields are still `Option` here so that validation can name
/// the missing field instead of failing at the serde layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub client_email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub pet_breed: Option<String>,
    pub pet_weight: Option<Decimal>,
    pub pet_special_needs: Option<String>,
    pub service_type: Option<String>,
    pub pickup_address: Option<String>,
    pub destination_address: Option<String>,
    pub preferred_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_time")]
    pub preferred_time: Option<NaiveTime>,
    pub additional_services: Option<String>,
    pub comments: Option<String>,
    pub estimated_price: Option<Decimal>,
}

/// DTO for updating an order's status and/or price. The id travels in
/// the body on this endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrder {
    pub id: Option<DbId>,
    pub status: Option<String>,
    pub estimated_price: Option<Decimal>,
}

/// Row returned by the order update statement.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderUpdateResult {
    pub id: DbId,
    pub status: String,
    pub estimated_price: Option<Decimal>,
}

/// Accept both `HH:MM` (HTML time inputs) and `HH:MM:SS`.
fn lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_order_accepts_short_time() {
        let input: CreateOrder =
            serde_json::from_value(serde_json::json!({ "preferred_time": "14:30" })).unwrap();
        assert_eq!(
            input.preferred_time,
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        );
    }

    #[test]
    fn create_order_accepts_full_time() {
        let input: CreateOrder =
            serde_json::from_value(serde_json::json!({ "preferred_time": "09:05:30" })).unwrap();
        assert_eq!(
            input.preferred_time,
            Some(NaiveTime::from_hms_opt(9, 5, 30).unwrap())
        );
    }

    #[test]
    fn create_order_rejects_garbage_time() {
        let result: Result<CreateOrder, _> =
            serde_json::from_value(serde_json::json!({ "preferred_time": "half past two" }));
        assert!(result.is_err());
    }
}
