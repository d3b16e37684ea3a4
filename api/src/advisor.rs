//! Occupancy rule table.
//!
//! Each rule compares the current occupancy against a fixed threshold. The
//! rules are independent: the overbooking alert is added on top of the
//! pricing advice, and the forecast label uses its own cut-off.

use chrono::{Days, NaiveDate};

use crate::model::{DemandForecast, Impact, Recommendation, RecommendationKind};

pub const DEMAND_FORECAST_THRESHOLD: f64 = 0.6;
pub const HIGH_DEMAND_THRESHOLD: f64 = 0.7;
pub const OVERBOOKING_THRESHOLD: f64 = 0.95;
pub const HIGH_DEMAND_LOOKAHEAD_DAYS: u64 = 7;

pub const PRICING_MESSAGE: &str =
    "High demand detected. Increase base rates by 15% for next weekend.";
pub const DISCOUNT_MESSAGE: &str =
    "Low occupancy predicted. Offer 20% early bird discount for next month.";
pub const OVERBOOKING_MESSAGE: &str =
    "Overbooking risk for current block. Freeze new reservations for Standard rooms.";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub demand_forecast: DemandForecast,
    pub predicted_high_demand_dates: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Evaluates the rule table for `occupancy`. Out of range values are not
/// rejected and go through the same comparisons.
pub fn advise(occupancy: f64, today: NaiveDate) -> Advice {
    let mut predicted_high_demand_dates = Vec::new();
    let mut recommendations = Vec::new();

    if occupancy > HIGH_DEMAND_THRESHOLD {
        predicted_high_demand_dates.push(high_demand_date(today));
        recommendations.push(Recommendation::new(
            RecommendationKind::Pricing,
            PRICING_MESSAGE,
            Impact::High,
        ));
    } else {
        recommendations.push(Recommendation::new(
            RecommendationKind::Discount,
            DISCOUNT_MESSAGE,
            Impact::Medium,
        ));
    }

    if occupancy > OVERBOOKING_THRESHOLD {
        recommendations.push(Recommendation::new(
            RecommendationKind::Alert,
            OVERBOOKING_MESSAGE,
            Impact::Critical,
        ));
    }

    let demand_forecast = if occupancy > DEMAND_FORECAST_THRESHOLD {
        DemandForecast::High
    } else {
        DemandForecast::Stable
    };

    Advice {
        demand_forecast,
        predicted_high_demand_dates,
        recommendations,
    }
}

fn high_demand_date(today: NaiveDate) -> String {
    // only fails past NaiveDate::MAX
    today
        .checked_add_days(Days::new(HIGH_DEMAND_LOOKAHEAD_DAYS))
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}
