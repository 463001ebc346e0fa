use crate::domain::listing::Listing;
use chrono::{Datelike, Days, NaiveDate};

pub const CLEANING_FEE: u32 = 60;
pub const SERVICE_FEE: u32 = 80;
const SAMPLE_NIGHTS: u64 = 5;

/// Check-in / check-out pair shown on cards and the reservation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    /// Reservations are simulated, so every listing offers the same stay.
    pub fn sample() -> Self {
        let check_in = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap_or_default();
        Self {
            check_in,
            check_out: check_in + Days::new(SAMPLE_NIGHTS),
        }
    }

    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// "Nov 14 - 19", or "Nov 28 - Dec 3" across months.
    pub fn short_range(&self) -> String {
        if self.check_in.month() == self.check_out.month() {
            format!(
                "{} - {}",
                self.check_in.format("%b %-d"),
                self.check_out.day()
            )
        } else {
            format!(
                "{} - {}",
                self.check_in.format("%b %-d"),
                self.check_out.format("%b %-d")
            )
        }
    }
}

/// Price breakdown of the reservation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    pub nightly: u32,
    pub nights: u32,
    pub lodging: u32,
    pub cleaning_fee: u32,
    pub service_fee: u32,
    pub total: u32,
}

impl StayQuote {
    pub fn new(listing: &Listing, stay: &Stay) -> Self {
        let nights = stay.nights();
        let lodging = listing.price_per_night * nights;
        Self {
            nightly: listing.price_per_night,
            nights,
            lodging,
            cleaning_fee: CLEANING_FEE,
            service_fee: SERVICE_FEE,
            total: lodging + CLEANING_FEE + SERVICE_FEE,
        }
    }
}
