use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Half-open occupancy interval `[start, end)`. The night of `end` is not
/// occupied, so a range ending on a date and another starting on that same
/// date do not conflict.
///
/// `start < end` is a caller precondition (see
/// `core::availability::validate_proposal`); the type itself does not
/// reject degenerate ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(rename = "checkInDate")]
    pub start: NaiveDate,
    #[serde(rename = "checkOutDate")]
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Half-open overlap: touching boundaries do not count.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub city: String,
    pub address: String,
    pub price: f64,
    pub featured: bool,
    pub description: String,
    pub image_url: String,
}

/// Explicit identity context handed to whichever component needs it,
/// instead of reading token/user id from ambient process-wide storage.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

impl Session {
    pub fn new(token: impl Into<String>, user_id: i64) -> Self {
        Self {
            token: token.into(),
            user_id,
        }
    }
}

/// Built once after a payment capture succeeds; never mutated between
/// commit attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub room_id: i64,
    pub user_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub paypal_capture_id: String,
    pub amount: f64,
}

impl BookingRequest {
    pub fn stay(&self) -> DateRange {
        DateRange::new(self.check_in_date, self.check_out_date)
    }
}

/// Server-assigned booking record: new id plus echoed request fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResult {
    pub id: i64,
    pub room_id: i64,
    pub user_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub amount: f64,
}
