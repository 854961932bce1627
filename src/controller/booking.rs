use crate::model::BayBooking;
use crate::utils::{facility_hours, is_within_facility_hours};
use ahash::RandomState;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const BAY_COUNT: u8 = 3;

/// Shared handle the web layer holds, same shape as a cache map.
pub type BookingMap = Arc<RwLock<BookingLedger>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Another booking already holds this (bay, date, hour).
    SlotTaken,
    NotFound,
    NotYourBooking,
    OutsideHours,
    BadBay,
    BadDate,
}

impl fmt::Display for BookingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingError::SlotTaken => write!(f, "that bay and hour is already booked"),
            BookingError::NotFound => write!(f, "no booking exists for that slot"),
            BookingError::NotYourBooking => write!(f, "that booking belongs to another golfer"),
            BookingError::OutsideHours => write!(f, "the facility is closed at that hour"),
            BookingError::BadBay => write!(f, "bay number must be between 1 and {BAY_COUNT}"),
            BookingError::BadDate => write!(f, "date must be YYYY-MM-DD"),
        }
    }
}

impl std::error::Error for BookingError {}

/// In-memory bay bookings keyed by (bay, date, hour), so slot uniqueness is
/// a data-layer guarantee rather than something the UI has to police.
/// Conflicting `book` calls are rejected, never overwritten.
#[derive(Default)]
pub struct BookingLedger {
    slots: HashMap<(u8, String, u8), BayBooking, RandomState>,
    next_seq: u64,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(
        &mut self,
        bay: u8,
        date: &str,
        hour: u8,
        user_id: &str,
        user_name: &str,
    ) -> Result<BayBooking, BookingError> {
        if bay == 0 || bay > BAY_COUNT {
            return Err(BookingError::BadBay);
        }
        let day = parse_date(date)?;
        if !is_within_facility_hours(day.weekday(), hour) {
            return Err(BookingError::OutsideHours);
        }

        let key = (bay, date.to_string(), hour);
        if self.slots.contains_key(&key) {
            return Err(BookingError::SlotTaken);
        }

        self.next_seq += 1;
        let booking = BayBooking {
            id: format!("bk-{:06}", self.next_seq),
            bay_number: bay,
            date: date.to_string(),
            hour,
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        self.slots.insert(key, booking.clone());
        Ok(booking)
    }

    /// Cancels the caller's booking at the slot. Someone else's booking
    /// stays put and reports `NotYourBooking`.
    pub fn cancel(
        &mut self,
        bay: u8,
        date: &str,
        hour: u8,
        user_id: &str,
    ) -> Result<BayBooking, BookingError> {
        let key = (bay, date.to_string(), hour);
        match self.slots.get(&key) {
            None => return Err(BookingError::NotFound),
            Some(existing) if existing.user_id != user_id => {
                return Err(BookingError::NotYourBooking);
            }
            Some(_) => {}
        }
        self.slots.remove(&key).ok_or(BookingError::NotFound)
    }

    pub fn booking_at(&self, bay: u8, date: &str, hour: u8) -> Option<&BayBooking> {
        self.slots.get(&(bay, date.to_string(), hour))
    }

    pub fn bookings_for_day(&self, date: &str) -> Vec<&BayBooking> {
        let mut day: Vec<&BayBooking> = self
            .slots
            .values()
            .filter(|b| b.date == date)
            .collect();
        day.sort_by_key(|b| (b.hour, b.bay_number));
        day
    }

    /// Bookable slots remaining on `date`: bays times open hours, minus
    /// whatever is already taken.
    pub fn open_slots(&self, date: &str) -> Result<u32, BookingError> {
        let day = parse_date(date)?;
        let hours = facility_hours(day.weekday());
        let capacity = u32::from(BAY_COUNT) * u32::from(hours.end - hours.start);
        let taken = self.bookings_for_day(date).len() as u32;
        Ok(capacity.saturating_sub(taken))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| BookingError::BadDate)
}
