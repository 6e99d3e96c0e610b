pub mod model;
pub mod pricing;
pub mod service;
pub mod validation;

pub use model::{
    AddOn, BookAndPayRequest, Booking, BookingActionResponse, BookingResponse, BookingStatus,
    BookNowRequest, CreateBookingRequest, DestinationRef, PaymentMethod, PaymentRequest,
    PaymentStatus, PayRequest, RoomType, SaveDestinationRequest, SaveFlightRequest,
    UpdateBookingRequest,
};
pub use pricing::{nights_between, HotelSelection, FlightSelection, PriceBreakdown, PricingInput};
pub use service::{BookOutcome, BookingError, BookingService, SaveOutcome};
