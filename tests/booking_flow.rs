//! End-to-end booking flow through the public API

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;

use parkwise::domain::booking::{FixedClock, SequentialReferenceGenerator};
use parkwise::domain::{
    compute_total, BookingError, Phase, SlotDescriptor, SlotGrid, SlotState, SpotCatalog,
    SpotRecord,
};
use parkwise::{BookingEvent, BookingStateMachine, EventBus, InMemoryCatalog};

fn spot(id: u32, price: u32, total: u32) -> SpotRecord {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Lot {}", id),
        "price": price,
        "available": total,
        "total": total,
        "type": "open",
        "coordinate": { "latitude": 31.5, "longitude": 74.3 }
    }))
    .unwrap()
}

fn machine() -> BookingStateMachine {
    let catalog: Arc<dyn SpotCatalog> =
        Arc::new(InMemoryCatalog::new(vec![spot(1, 100, 12), spot(2, 45, 20)]).unwrap());
    BookingStateMachine::new(catalog)
        .with_reference_generator(Arc::new(SequentialReferenceGenerator::new("PW")))
        .with_clock(Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap(),
        )))
}

fn book_spot_one(m: &mut BookingStateMachine) {
    m.focus_spot(1).unwrap();
    m.open_slot_picker().unwrap();
    m.select_slot(&SlotDescriptor::available(1)).unwrap();
    m.set_duration(3).unwrap();
    m.confirm_booking().unwrap();
}

#[test]
fn confirm_records_duration_and_total() {
    let mut m = machine();
    m.focus_spot(1).unwrap();
    m.open_slot_picker().unwrap();
    m.select_slot(&SlotDescriptor::available(1)).unwrap();
    assert_eq!(m.set_duration(3), Ok(3));

    let record = m.confirm_booking().unwrap();
    assert_eq!(record.duration, 3);
    assert_eq!(record.total_cost, 320);
    assert_eq!(record.slot.id, "01");
    assert_eq!(record.reference.as_str(), "PW-000001");
    assert_eq!(m.phase(), Phase::Confirming);
    assert_eq!(m.current_state().booking, Some(record));
}

#[test]
fn duration_is_clamped() {
    let mut m = machine();
    m.focus_spot(2).unwrap();
    m.open_slot_picker().unwrap();

    assert_eq!(m.set_duration(20), Ok(12));
    assert_eq!(m.current_state().duration, 12);
    assert_eq!(m.set_duration(0), Ok(1));
    assert_eq!(m.current_state().duration, 1);
}

#[test]
fn dismiss_resets_to_browsing() {
    let mut m = machine();
    book_spot_one(&mut m);

    m.dismiss_confirmation().unwrap();
    let state = m.current_state();
    assert_eq!(state.phase, Phase::Browsing);
    assert!(state.selected_spot.is_none());
    assert!(state.selected_slot.is_none());
    assert!(state.booking.is_none());
    assert_eq!(state.duration, 1);
}

#[test]
fn grid_matches_capacity() {
    for total in 1..=20u32 {
        let grid = BookingStateMachine::slot_grid(&spot(9, 50, total));
        assert_eq!(grid.count(SlotState::Available), total as usize);
        assert_eq!(grid.count(SlotState::Disabled), 20 - total as usize);

        let numbers: Vec<u8> = grid
            .iter()
            .filter(|s| s.is_available())
            .map(|s| s.number)
            .collect();
        assert_eq!(numbers, (1..=total as u8).collect::<Vec<_>>());
    }
}

#[test]
fn grid_caps_at_twenty_positions() {
    let grid = SlotGrid::for_spot(&spot(9, 50, 35));
    assert_eq!(grid.iter().count(), 20);
    assert_eq!(grid.count(SlotState::Available), 20);
    assert!(grid.find("21").is_none());
}

#[test]
fn total_is_hourly_price_plus_fee() {
    for price in [0u32, 1, 45, 100, 999] {
        for hours in 1..=12u32 {
            assert_eq!(
                compute_total(price, hours),
                Ok(u64::from(price) * u64::from(hours) + 20)
            );
        }
    }
    assert_eq!(
        BookingStateMachine::estimated_total(&spot(1, 100, 12), 3),
        Ok(320)
    );
}

#[test]
fn select_slot_while_browsing_changes_nothing() {
    let mut m = machine();
    m.focus_spot(1).unwrap();
    let before = m.current_state();

    let err = m.select_slot(&SlotDescriptor::available(1)).unwrap_err();
    assert!(matches!(
        err,
        BookingError::InvalidStateTransition {
            phase: Phase::Browsing,
            ..
        }
    ));
    assert_eq!(m.current_state(), before);
}

#[test]
fn booking_emits_lifecycle_events() {
    let bus = EventBus::shared();
    let mut subscriber = bus.subscribe();
    let mut m = machine().with_event_bus(bus.clone());

    book_spot_one(&mut m);
    m.dismiss_confirmation().unwrap();

    let mut types = Vec::new();
    while let Some(message) = subscriber.try_recv() {
        if let BookingEvent::BookingConfirmed(ref confirmed) = message.event {
            assert_eq!(confirmed.total_cost, 320);
        }
        types.push(message.event.event_type());
    }
    assert_eq!(
        types,
        [
            "spot_focused",
            "slot_picker_opened",
            "slot_selected",
            "duration_changed",
            "booking_confirmed",
            "confirmation_dismissed",
        ]
    );
}
