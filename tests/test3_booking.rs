use crushers_golf::controller::booking::{BookingError, BookingLedger};

// 2025-06-01 is a Sunday (open 8-20); 2025-06-02 a Monday (open 7-22).
const SUNDAY: &str = "2025-06-01";
const MONDAY: &str = "2025-06-02";

#[test]
fn double_booking_a_slot_is_rejected() {
    let mut ledger = BookingLedger::new();

    let first = ledger
        .book(1, SUNDAY, 10, "user-a", "Alice")
        .expect("first booking should succeed");
    assert_eq!(first.bay_number, 1);
    assert_eq!(first.hour, 10);

    let second = ledger.book(1, SUNDAY, 10, "user-b", "Bob");
    assert_eq!(second.unwrap_err(), BookingError::SlotTaken);

    // the original booking is untouched
    let held = ledger.booking_at(1, SUNDAY, 10).expect("slot still booked");
    assert_eq!(held.user_id, "user-a");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn adjacent_slots_do_not_conflict() {
    let mut ledger = BookingLedger::new();
    ledger.book(1, SUNDAY, 10, "user-a", "Alice").unwrap();
    ledger.book(2, SUNDAY, 10, "user-b", "Bob").unwrap();
    ledger.book(1, SUNDAY, 11, "user-c", "Cara").unwrap();
    ledger.book(1, MONDAY, 10, "user-a", "Alice").unwrap();
    assert_eq!(ledger.len(), 4);
}

#[test]
fn cancel_checks_ownership() {
    let mut ledger = BookingLedger::new();
    ledger.book(2, SUNDAY, 14, "user-a", "Alice").unwrap();

    assert_eq!(
        ledger.cancel(2, SUNDAY, 14, "user-b").unwrap_err(),
        BookingError::NotYourBooking
    );
    assert!(ledger.booking_at(2, SUNDAY, 14).is_some());

    let cancelled = ledger.cancel(2, SUNDAY, 14, "user-a").unwrap();
    assert_eq!(cancelled.user_name, "Alice");
    assert!(ledger.booking_at(2, SUNDAY, 14).is_none());

    assert_eq!(
        ledger.cancel(2, SUNDAY, 14, "user-a").unwrap_err(),
        BookingError::NotFound
    );
}

#[test]
fn bookings_respect_facility_hours() {
    let mut ledger = BookingLedger::new();

    // Sunday opens at 8
    assert_eq!(
        ledger.book(1, SUNDAY, 7, "user-a", "Alice").unwrap_err(),
        BookingError::OutsideHours
    );
    assert!(ledger.book(1, MONDAY, 7, "user-a", "Alice").is_ok());

    // close is half-open on both schedules
    assert_eq!(
        ledger.book(1, SUNDAY, 20, "user-a", "Alice").unwrap_err(),
        BookingError::OutsideHours
    );
    assert_eq!(
        ledger.book(1, MONDAY, 22, "user-a", "Alice").unwrap_err(),
        BookingError::OutsideHours
    );
    assert!(ledger.book(1, MONDAY, 21, "user-a", "Alice").is_ok());
}

#[test]
fn bad_bay_and_bad_date_are_rejected() {
    let mut ledger = BookingLedger::new();
    assert_eq!(
        ledger.book(0, SUNDAY, 10, "user-a", "Alice").unwrap_err(),
        BookingError::BadBay
    );
    assert_eq!(
        ledger.book(4, SUNDAY, 10, "user-a", "Alice").unwrap_err(),
        BookingError::BadBay
    );
    assert_eq!(
        ledger.book(1, "06/01/2025", 10, "user-a", "Alice").unwrap_err(),
        BookingError::BadDate
    );
    assert!(ledger.is_empty());
}

#[test]
fn open_slot_counts_follow_the_policy_table() {
    let mut ledger = BookingLedger::new();

    // 3 bays x 12 open hours on a Sunday, x 15 on other days
    assert_eq!(ledger.open_slots(SUNDAY).unwrap(), 36);
    assert_eq!(ledger.open_slots(MONDAY).unwrap(), 45);

    ledger.book(1, SUNDAY, 10, "user-a", "Alice").unwrap();
    ledger.book(3, SUNDAY, 19, "user-b", "Bob").unwrap();
    assert_eq!(ledger.open_slots(SUNDAY).unwrap(), 34);
    assert_eq!(ledger.open_slots(MONDAY).unwrap(), 45);

    assert_eq!(
        ledger.open_slots("not-a-date").unwrap_err(),
        BookingError::BadDate
    );
}

#[test]
fn day_listing_is_sorted_by_hour_then_bay() {
    let mut ledger = BookingLedger::new();
    ledger.book(3, SUNDAY, 15, "user-a", "Alice").unwrap();
    ledger.book(1, SUNDAY, 9, "user-b", "Bob").unwrap();
    ledger.book(2, SUNDAY, 9, "user-c", "Cara").unwrap();
    ledger.book(1, MONDAY, 8, "user-d", "Dan").unwrap();

    let day: Vec<(u8, u8)> = ledger
        .bookings_for_day(SUNDAY)
        .iter()
        .map(|b| (b.hour, b.bay_number))
        .collect();
    assert_eq!(day, vec![(9, 1), (9, 2), (15, 3)]);
}
