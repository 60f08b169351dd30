pub mod availability;
pub mod committer;

pub use crate::domain::model::{BookingRequest, BookingResult, DateRange, Room, Session};
pub use crate::domain::ports::BookingService;
pub use crate::utils::error::Result;
