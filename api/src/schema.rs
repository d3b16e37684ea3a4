use ::serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;

use crate::model::{DemandForecast, Recommendation};

pub const SERVICE_STATUS: &str = "AI Core Online";
pub const SERVICE_VERSION: &str = "1.0.0";

/// A past booking as sent by the backend. Dates are passed through as-is.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(deserialize_with = "lax_number::integer")]
    pub room_id: i64,
    pub check_in_date: String,
    pub check_out_date: String,
    #[serde(deserialize_with = "lax_number::float")]
    pub total_price: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    pub history: Vec<BookingRecord>,
    #[serde(deserialize_with = "lax_number::float")]
    pub current_occupancy: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub demand_forecast: DemandForecast,
    pub predicted_high_demand_dates: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(with = "iso_timestamp")]
    pub analysis_timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: SERVICE_STATUS.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Numeric fields as the backend sends them: JSON numbers, numeric strings
/// and booleans are accepted. Integers also take floats with no fractional
/// part.
mod lax_number {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| D::Error::custom(format!("number {n} is not a valid float"))),
            Value::String(s) => s.trim().parse().map_err(|_| {
                D::Error::custom(format!("expected a number, got string {s:?}"))
            }),
            Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
            other => Err(D::Error::custom(format!("expected a number, got {other}"))),
        }
    }

    pub fn integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                match n.as_f64() {
                    Some(f) if whole(f) => Ok(f as i64),
                    _ => Err(D::Error::custom(format!(
                        "expected an integer, got {n} with a fractional part or out of range"
                    ))),
                }
            }
            Value::String(s) => s.trim().parse().map_err(|_| {
                D::Error::custom(format!("expected an integer, got string {s:?}"))
            }),
            Value::Bool(b) => Ok(i64::from(b)),
            other => Err(D::Error::custom(format!("expected an integer, got {other}"))),
        }
    }

    fn whole(f: f64) -> bool {
        f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
    }
}

/// Local timestamps in the `isoformat()` shape: `2026-10-16T09:30:12.004211`,
/// or `2026-10-16T09:30:12` when the microseconds are zero.
mod iso_timestamp {
    use chrono::{NaiveDateTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer};

    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
    const MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let format = if ts.nanosecond() / 1_000 == 0 { SECONDS } else { MICROS };
        serializer.collect_str(&ts.format(format))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn response_at(ts: NaiveDateTime) -> AnalysisResponse {
        AnalysisResponse {
            demand_forecast: DemandForecast::Stable,
            predicted_high_demand_dates: vec![],
            recommendations: vec![],
            analysis_timestamp: ts,
        }
    }

    #[test]
    fn request_reads_camel_case_fields() {
        let req: AnalysisRequest = serde_json::from_value(json!({
            "history": [{
                "roomId": 12,
                "checkInDate": "2026-10-01",
                "checkOutDate": "2026-10-04",
                "totalPrice": 300
            }],
            "currentOccupancy": 1
        }))
        .unwrap();

        assert_eq!(req.history.len(), 1);
        assert_eq!(req.history[0].room_id, 12);
        assert_eq!(req.history[0].total_price, 300.0);
        assert_eq!(req.current_occupancy, 1.0);
    }

    #[test]
    fn request_requires_occupancy() {
        let err = serde_json::from_value::<AnalysisRequest>(json!({"history": []})).unwrap_err();
        assert!(err.to_string().contains("currentOccupancy"));
    }

    #[test]
    fn numbers_are_coerced_from_strings_and_whole_floats() {
        let req: AnalysisRequest = serde_json::from_value(json!({
            "history": [
                {"roomId": "12", "checkInDate": "a", "checkOutDate": "b", "totalPrice": " 99.5 "},
                {"roomId": 7.0, "checkInDate": "a", "checkOutDate": "b", "totalPrice": true}
            ],
            "currentOccupancy": "0.8"
        }))
        .unwrap();

        assert_eq!(req.current_occupancy, 0.8);
        assert_eq!(req.history[0].room_id, 12);
        assert_eq!(req.history[0].total_price, 99.5);
        assert_eq!(req.history[1].room_id, 7);
        assert_eq!(req.history[1].total_price, 1.0);
    }

    #[test]
    fn non_numeric_values_are_still_rejected() {
        let booking = |room_id: serde_json::Value| {
            json!({
                "history": [{
                    "roomId": room_id,
                    "checkInDate": "a",
                    "checkOutDate": "b",
                    "totalPrice": 1
                }],
                "currentOccupancy": 0.5
            })
        };

        for bad in [json!("twelve"), json!(12.5), json!(null), json!([12])] {
            let parsed = serde_json::from_value::<AnalysisRequest>(booking(bad.clone()));
            assert!(parsed.is_err(), "{bad} was accepted");
        }

        let err = serde_json::from_value::<AnalysisRequest>(
            json!({"history": [], "currentOccupancy": "high"}),
        )
        .unwrap_err();
        assert!(err.to_string().contains("\"high\""));
    }

    #[test]
    fn timestamp_keeps_microseconds() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_micro_opt(9, 30, 12, 4211)
            .unwrap();

        let value = serde_json::to_value(response_at(ts)).unwrap();
        assert_eq!(value["analysisTimestamp"], "2026-10-16T09:30:12.004211");

        let back: AnalysisResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.analysis_timestamp, ts);
    }

    #[test]
    fn timestamp_drops_zero_fraction() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 12)
            .unwrap();

        let value = serde_json::to_value(response_at(ts)).unwrap();
        assert_eq!(value["analysisTimestamp"], "2026-10-16T09:30:12");

        let back: AnalysisResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back.analysis_timestamp, ts);
    }
}
