//! Pricing calculator tests

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use tripnest_server::booking::{
        nights_between, AddOn, FlightSelection, HotelSelection, PricingInput,
    };
    use tripnest_server::booking::pricing::compute;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_on(id: &str, price: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            label: id.to_string(),
            price,
        }
    }

    #[test]
    fn test_full_trip_breakdown() {
        let input = PricingInput {
            price_per_person: 50_000,
            adults: 2,
            children: 1,
            hotel: Some(HotelSelection {
                price_per_night: 10_000,
                nights: nights_between(date(2026, 3, 10), date(2026, 3, 13)),
            }),
            flight: Some(FlightSelection {
                price_per_person: 12_000,
            }),
            add_ons: vec![add_on("insurance", 5_000), add_on("tour", 7_500)],
        };

        let breakdown = compute(&input);

        assert_eq!(breakdown.total_travelers, 3);
        assert_eq!(breakdown.base_price, 150_000);
        assert_eq!(breakdown.hotel_total, 30_000);
        assert_eq!(breakdown.flight_total, 36_000);
        assert_eq!(breakdown.add_ons_total, 12_500);
        assert_eq!(breakdown.total_amount, 228_500);
    }

    #[test]
    fn test_base_only_trip() {
        let input = PricingInput {
            price_per_person: 74_700,
            adults: 1,
            children: 0,
            ..Default::default()
        };

        let breakdown = compute(&input);

        assert_eq!(breakdown.base_price, 74_700);
        assert_eq!(breakdown.hotel_total, 0);
        assert_eq!(breakdown.flight_total, 0);
        assert_eq!(breakdown.total_amount, 74_700);
    }

    #[test]
    fn test_same_day_span_zeroes_hotel_total() {
        let nights = nights_between(date(2026, 3, 10), date(2026, 3, 10));
        assert_eq!(nights, 0);

        let input = PricingInput {
            price_per_person: 50_000,
            adults: 2,
            children: 0,
            hotel: Some(HotelSelection {
                price_per_night: 10_000,
                nights,
            }),
            ..Default::default()
        };

        let breakdown = compute(&input);

        assert_eq!(breakdown.hotel_total, 0);
        assert_eq!(breakdown.total_amount, 100_000);
    }

    #[test]
    fn test_inverted_span_clamps_to_zero_nights() {
        assert_eq!(nights_between(date(2026, 3, 13), date(2026, 3, 10)), 0);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let input = PricingInput {
            price_per_person: 91_300,
            adults: 2,
            children: 2,
            hotel: Some(HotelSelection {
                price_per_night: 14_940,
                nights: 5,
            }),
            flight: Some(FlightSelection {
                price_per_person: 34_860,
            }),
            add_ons: vec![add_on("transfer", 2_000)],
        };

        let first = compute(&input);
        let second = compute(&input);

        assert_eq!(first, second);
    }
}
