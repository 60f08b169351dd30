use crate::domain::model::{BookingRequest, BookingResult, DateRange, Room};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The remote booking API this crate is a client of. Implementations carry
/// their own identity/session context; the core logic only sees this trait.
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn list_rooms(&self) -> Result<Vec<Room>>;

    async fn fetch_room(&self, room_id: i64) -> Result<Room>;

    /// Already-reserved intervals for a room, as the server reports them.
    async fn booked_dates(&self, room_id: i64) -> Result<Vec<DateRange>>;

    /// One network call per invocation. The server is expected to
    /// deduplicate by `paypal_capture_id`.
    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingResult>;
}
