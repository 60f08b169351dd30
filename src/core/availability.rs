use crate::domain::model::DateRange;
use crate::utils::error::{NestlyError, Result};
use chrono::NaiveDate;

/// True iff `proposed` conflicts with none of the already booked ranges.
///
/// Conflict uses half-open interval overlap: `proposed.start < b.end &&
/// proposed.end > b.start`. A proposal that merely touches a booked range
/// (one range's end equals the other's start) is available.
///
/// Degenerate proposals (`start >= end`) are not rejected here; run
/// `validate_proposal` first.
pub fn is_available(proposed: &DateRange, existing: &[DateRange]) -> bool {
    !existing.iter().any(|booked| proposed.overlaps(booked))
}

/// Caller-side preconditions checked before the availability check, as the
/// booking flow enforces them: the range must be well-formed and check-in
/// must not lie strictly before `today`.
pub fn validate_proposal(proposed: &DateRange, today: NaiveDate) -> Result<()> {
    if !proposed.is_well_formed() {
        return Err(NestlyError::ValidationError {
            message: format!(
                "check-out date {} must be after check-in date {}",
                proposed.end, proposed.start
            ),
        });
    }

    if proposed.start < today {
        return Err(NestlyError::ValidationError {
            message: "check-in date cannot be in the past".to_string(),
        });
    }

    Ok(())
}
