//! Pricing calculator
//!
//! Derives every monetary total from traveler counts and per-unit prices.
//! Pure and deterministic; the server is the authority for these numbers and
//! the old client-side duplicate of this arithmetic is treated as a hint
//! only. All amounts are whole currency units.

use chrono::NaiveDate;
use serde::Serialize;

use super::model::AddOn;

/// Hotel selection feeding the calculator
#[derive(Debug, Clone, Copy)]
pub struct HotelSelection {
    pub price_per_night: i64,
    pub nights: i64,
}

/// Flight selection feeding the calculator
#[derive(Debug, Clone, Copy)]
pub struct FlightSelection {
    pub price_per_person: i64,
}

/// Inputs to a price computation
#[derive(Debug, Clone, Default)]
pub struct PricingInput {
    pub price_per_person: i64,
    pub adults: i32,
    pub children: i32,
    pub hotel: Option<HotelSelection>,
    pub flight: Option<FlightSelection>,
    pub add_ons: Vec<AddOn>,
}

/// Full price breakdown
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub total_travelers: i32,
    pub base_price: i64,
    pub hotel_total: i64,
    pub flight_total: i64,
    pub add_ons_total: i64,
    pub total_amount: i64,
}

/// Night count for a stay, at day granularity.
///
/// A same-day span yields zero nights, which zeroes the hotel total.
pub fn nights_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}

/// Compute the full breakdown from traveler counts and unit prices.
///
/// Negative unit prices are a validation concern; the calculator assumes
/// non-negative inputs and never corrects them. Inputs beyond the
/// validation bounds saturate at `i64::MAX` instead of wrapping.
pub fn compute(input: &PricingInput) -> PriceBreakdown {
    let total_travelers = input.adults.saturating_add(input.children);
    let travelers = i64::from(total_travelers);

    let base_price = input.price_per_person.saturating_mul(travelers);

    let hotel_total = input
        .hotel
        .map(|h| h.price_per_night.saturating_mul(h.nights))
        .unwrap_or(0);

    let flight_total = input
        .flight
        .map(|f| f.price_per_person.saturating_mul(travelers))
        .unwrap_or(0);

    let add_ons_total = input
        .add_ons
        .iter()
        .fold(0i64, |total, a| total.saturating_add(a.price));

    PriceBreakdown {
        total_travelers,
        base_price,
        hotel_total,
        flight_total,
        add_ons_total,
        total_amount: base_price
            .saturating_add(hotel_total)
            .saturating_add(flight_total)
            .saturating_add(add_ons_total),
    }
}
