pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use api::client::HttpBookingService;
pub use config::AppConfig;
pub use core::availability::{is_available, validate_proposal};
pub use core::committer::{BookingCommitter, RetryPolicy};
pub use domain::model::{BookingRequest, BookingResult, DateRange, Room, Session};
pub use domain::ports::BookingService;
pub use utils::error::{NestlyError, Result};
