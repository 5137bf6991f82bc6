//! Status classification for booking blocks.

use crate::models::booking::Booking;

/// Visual category for a booking block. Exactly one category applies to any
/// `(status, is_active)` combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    /// Soft-removed booking; wins over every status value.
    Inactive,
    Pending,
    Cancelled,
    Completed,
    /// Default treatment, covering `confirmed` and any unrecognized status.
    Confirmed,
}

/// Classify a backend status string plus the active flag.
///
/// Total function: unrecognized strings fall back to [`StatusCategory::Confirmed`],
/// never an error. The backend sends lowercase statuses; matching is exact.
pub fn classify(status: &str, is_active: bool) -> StatusCategory {
    if !is_active {
        return StatusCategory::Inactive;
    }

    match status {
        "pending" => StatusCategory::Pending,
        "cancelled" => StatusCategory::Cancelled,
        "completed" => StatusCategory::Completed,
        _ => StatusCategory::Confirmed,
    }
}

impl StatusCategory {
    /// Category for a booking record.
    pub fn for_booking(booking: &Booking) -> Self {
        classify(&booking.status, booking.is_active)
    }

    /// Short label for text output and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            StatusCategory::Inactive => "removed",
            StatusCategory::Pending => "pending",
            StatusCategory::Cancelled => "cancelled",
            StatusCategory::Completed => "completed",
            StatusCategory::Confirmed => "confirmed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pending", true, StatusCategory::Pending ; "pending")]
    #[test_case("cancelled", true, StatusCategory::Cancelled ; "cancelled")]
    #[test_case("completed", true, StatusCategory::Completed ; "completed")]
    #[test_case("confirmed", true, StatusCategory::Confirmed ; "confirmed")]
    #[test_case("", true, StatusCategory::Confirmed ; "empty status")]
    #[test_case("no_show", true, StatusCategory::Confirmed ; "unrecognized status")]
    #[test_case("PENDING", true, StatusCategory::Confirmed ; "matching is exact, not case folded")]
    #[test_case("pending", false, StatusCategory::Inactive ; "inactive wins over pending")]
    #[test_case("confirmed", false, StatusCategory::Inactive ; "inactive wins over confirmed")]
    fn test_classify(status: &str, is_active: bool, expected: StatusCategory) {
        assert_eq!(classify(status, is_active), expected);
    }

    #[test]
    fn test_for_booking() {
        let booking = Booking::builder(1)
            .status("confirmed")
            .is_active(false)
            .build();

        assert_eq!(
            StatusCategory::for_booking(&booking),
            StatusCategory::Inactive
        );
    }
}
