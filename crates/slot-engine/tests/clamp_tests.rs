//! Tests for snapping proposed appointments into shift boundaries.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::clamp::{clamp_to_shift, ClampOutcome};
use slot_engine::error::SlotError;
use slot_engine::types::Shift;

fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

fn shift(start_hour: u32, end_hour: u32) -> Shift {
    Shift {
        practitioner_id: "p1".to_string(),
        start: ts(start_hour, 0),
        end: ts(end_hour, 0),
        available_equipment: BTreeSet::new(),
        tags: BTreeSet::new(),
    }
}

#[test]
fn no_shift_is_a_passthrough() {
    let result = clamp_to_shift(None, ts(8, 0), 45).unwrap();

    assert_eq!(result.start, ts(8, 0));
    assert_eq!(result.duration_minutes, 45);
    assert_eq!(result.outcome, ClampOutcome::Unadjusted);
    assert!(result.shift_bounds.is_none());
    assert!(!result.was_adjusted());
}

#[test]
fn proposal_inside_the_shift_is_unadjusted() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(10, 0), 60).unwrap();

    assert_eq!(result.start, ts(10, 0));
    assert_eq!(result.duration_minutes, 60);
    assert_eq!(result.outcome, ClampOutcome::Unadjusted);
    assert!(result.shift_bounds.is_some());
}

#[test]
fn start_before_shift_is_raised_to_shift_start() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(8, 30), 60).unwrap();

    assert_eq!(result.start, ts(9, 0));
    assert_eq!(result.duration_minutes, 60);
    assert_eq!(result.outcome, ClampOutcome::Adjusted);
}

#[test]
fn duration_is_shrunk_to_fit_the_shift_end() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(16, 30), 60).unwrap();

    assert_eq!(result.start, ts(16, 30));
    assert_eq!(result.duration_minutes, 30);
    assert_eq!(result.outcome, ClampOutcome::Adjusted);
}

#[test]
fn start_raised_and_duration_shrunk_together() {
    // Short shift: everything about the proposal needs adjusting.
    let result = clamp_to_shift(Some(&shift(9, 10)), ts(8, 0), 120).unwrap();

    assert_eq!(result.start, ts(9, 0));
    assert_eq!(result.duration_minutes, 60);
    assert_eq!(result.outcome, ClampOutcome::Adjusted);
}

#[test]
fn proposal_after_shift_end_has_no_legal_placement() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(18, 0), 30).unwrap();

    assert_eq!(result.outcome, ClampOutcome::NoLegalPlacement);
    assert_eq!(result.duration_minutes, 0);
    assert!(result.was_adjusted());
}

#[test]
fn proposal_ending_exactly_at_shift_end_is_unadjusted() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(16, 0), 60).unwrap();

    assert_eq!(result.outcome, ClampOutcome::Unadjusted);
    assert_eq!(result.duration_minutes, 60);
}

#[test]
fn non_positive_duration_is_rejected() {
    let err = clamp_to_shift(Some(&shift(9, 17)), ts(10, 0), 0).unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration(0)));

    let err = clamp_to_shift(None, ts(10, 0), -15).unwrap_err();
    assert!(matches!(err, SlotError::InvalidDuration(-15)));
}

#[test]
fn inverted_shift_is_rejected() {
    let inverted = Shift {
        practitioner_id: "p1".to_string(),
        start: ts(17, 0),
        end: ts(9, 0),
        available_equipment: BTreeSet::new(),
        tags: BTreeSet::new(),
    };
    let err = clamp_to_shift(Some(&inverted), ts(10, 0), 30).unwrap_err();
    assert!(matches!(err, SlotError::InvalidShift { .. }));
}

#[test]
fn bounds_description_names_the_window() {
    let result = clamp_to_shift(Some(&shift(9, 17)), ts(10, 0), 30).unwrap();
    let bounds = result.shift_bounds.unwrap();

    assert!(bounds.contains("09:00"));
    assert!(bounds.contains("17:00"));
}
