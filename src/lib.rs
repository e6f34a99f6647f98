// In-memory reservation model for a small hotel

// Entities
pub mod booking;
pub mod feedback;
pub mod guest;
pub mod hotel;
pub mod loyalty;
pub mod payment;
pub mod room;
pub mod service_request;

// Supporting pieces
pub mod config;
pub mod error;
pub mod logging;
pub mod shared;

// Re-export key types for convenience
pub use booking::{Booking, BookingHandle};
pub use config::{LoyaltyConfig, ModelConfig};
pub use error::{DomainError, Result};
pub use feedback::Feedback;
pub use guest::{
    AnyGuest, Guest, GuestAccount, GuestDraft, GuestHandle, LoyalGuest, LoyalGuestDraft,
};
pub use hotel::{Hotel, HotelDraft};
pub use loyalty::{LoyaltyProgram, LoyaltyProgramDraft, NOT_ENOUGH_POINTS, REWARD_REDEEMED};
pub use payment::Payment;
pub use room::{Room, RoomDraft, RoomHandle};
pub use service_request::ServiceRequest;
pub use shared::Shared;
