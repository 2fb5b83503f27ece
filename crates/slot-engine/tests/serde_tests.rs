//! JSON interchange for the public types.
//!
//! The surrounding booking API ships these types over its own wire format;
//! the contract that matters here is that catalog records with absent
//! optional fields deserialize cleanly and that derived outputs survive a
//! round-trip.

use chrono::{NaiveDate, TimeZone, Utc};
use slot_engine::slots::CandidateSlot;
use slot_engine::types::{BusyPeriod, Service};

#[test]
fn minimal_service_json_defaults_optional_fields() {
    let svc: Service =
        serde_json::from_str(r#"{"id":"botox","name":"Botox","duration_minutes":30}"#).unwrap();

    assert_eq!(svc.id, "botox");
    assert_eq!(svc.duration_minutes, 30);
    assert!(svc.required_capabilities.is_empty());
    assert!(svc.preferred_capabilities.is_empty());
    assert!(svc.required_equipment.is_empty());
    assert!(svc.tags.is_empty());
    assert!(svc.assigned_practitioners.is_empty());
}

#[test]
fn busy_period_json_may_omit_end_and_duration() {
    let period: BusyPeriod = serde_json::from_str(
        r#"{"practitioner_id":"p1","start":"2026-03-16T10:00:00Z"}"#,
    )
    .unwrap();

    assert!(period.end.is_none());
    assert!(period.duration_minutes.is_none());
    // A zero-length marker: the walk steps over it.
    assert_eq!(period.effective_end(), period.start);
}

#[test]
fn candidate_slot_round_trips_through_json() {
    let slot = CandidateSlot {
        practitioner_id: "p1".to_string(),
        day: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
        start: Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2026, 3, 16, 9, 30, 0).unwrap(),
        duration_minutes: 30,
    };

    let json = serde_json::to_string(&slot).unwrap();
    let back: CandidateSlot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, slot);
}
