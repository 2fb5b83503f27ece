//! Gap-walk slot discovery inside practitioner shifts.
//!
//! For each candidate day, selects the practitioner's shifts, gates each
//! through the eligibility matcher, merges that day's appointments and
//! breaks into sorted busy periods, then walks the shift start-to-end
//! emitting every 15-minute-grid start time whose slot fits entirely inside
//! a gap. Results are recomputed from scratch on every call; nothing is
//! cached.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::eligibility::check_eligibility;
use crate::error::{Result, SlotError};
use crate::types::{BusyPeriod, Practitioner, Service, Shift};

/// Enumeration grid in minutes. Standard scheduling granularity; fixed
/// regardless of service duration, so a 7-minute service still only gets
/// starts on the quarter-hour.
pub const SLOT_GRID_MINUTES: i64 = 15;

/// One bookable start/end pair of exactly the requested service duration.
///
/// Ephemeral: produced fresh on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub practitioner_id: String,
    pub day: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Always equal to the requested service duration.
    pub duration_minutes: i64,
}

/// Find every bookable start time for `service` by `practitioner` across
/// `dates`, given their shifts and existing appointments/breaks.
///
/// Shifts on other days or for other practitioners are ignored. A shift the
/// practitioner is not eligible for contributes zero slots. Output order is
/// deterministic: dates in the order given, shifts by start time, slots
/// ascending within each shift.
///
/// # Errors
///
/// Returns a validation error before any gap arithmetic runs when the
/// service duration is non-positive, a selected shift has `end <= start`,
/// two shifts for the practitioner overlap on one day, or a busy period has
/// an explicit end before its start.
pub fn find_available_slots(
    service: &Service,
    practitioner: &Practitioner,
    dates: &[NaiveDate],
    appointments: &[BusyPeriod],
    breaks: &[BusyPeriod],
    shifts: &[Shift],
) -> Result<Vec<CandidateSlot>> {
    if service.duration_minutes == 0 {
        return Err(SlotError::InvalidService {
            id: service.id.clone(),
        });
    }

    let mut slots = Vec::new();

    for &date in dates {
        let mut day_shifts: Vec<&Shift> = shifts
            .iter()
            .filter(|s| s.practitioner_id == practitioner.id && s.day() == date)
            .collect();
        if day_shifts.is_empty() {
            continue;
        }
        day_shifts.sort_by_key(|s| (s.start, s.end));
        validate_day_shifts(&day_shifts, date)?;

        for shift in day_shifts {
            // No partial credit: an ineligible shift contributes zero slots.
            if !check_eligibility(service, practitioner, shift).can_perform {
                continue;
            }
            let busy = collect_busy_periods(appointments, breaks, &practitioner.id, date, shift)?;
            slots.extend(walk_shift(shift, &busy, service, date));
        }
    }

    Ok(slots)
}

/// Return the first bookable slot in candidate-date order, if any.
///
/// Delegates to [`find_available_slots`]. Dates are scanned in the order
/// the caller supplies them, so with dates sorted chronologically this is
/// the earliest slot; with a preference-ordered date list it is the
/// earliest slot of the first date that has one.
pub fn find_first_slot(
    service: &Service,
    practitioner: &Practitioner,
    dates: &[NaiveDate],
    appointments: &[BusyPeriod],
    breaks: &[BusyPeriod],
    shifts: &[Shift],
) -> Result<Option<CandidateSlot>> {
    Ok(
        find_available_slots(service, practitioner, dates, appointments, breaks, shifts)?
            .into_iter()
            .next(),
    )
}

/// Reject malformed or mutually overlapping shifts. `shifts` is sorted by
/// start time and already filtered to one practitioner/day.
fn validate_day_shifts(shifts: &[&Shift], day: NaiveDate) -> Result<()> {
    for shift in shifts {
        if shift.end <= shift.start {
            return Err(SlotError::InvalidShift {
                practitioner_id: shift.practitioner_id.clone(),
                start: shift.start,
                end: shift.end,
            });
        }
    }
    for pair in shifts.windows(2) {
        if pair[1].start < pair[0].end {
            return Err(SlotError::OverlappingShifts {
                practitioner_id: pair[0].practitioner_id.clone(),
                day,
            });
        }
    }
    Ok(())
}

/// Merge appointments and breaks into one sorted, non-overlapping busy
/// sequence, clipped to the shift window.
///
/// Overlapping or adjacent periods are merged before the walk so the gap
/// arithmetic never undercounts free time.
fn collect_busy_periods(
    appointments: &[BusyPeriod],
    breaks: &[BusyPeriod],
    practitioner_id: &str,
    date: NaiveDate,
    shift: &Shift,
) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>> {
    let mut intervals = Vec::new();

    for period in appointments.iter().chain(breaks.iter()) {
        if period.practitioner_id != practitioner_id || period.day() != date {
            continue;
        }
        let end = period.effective_end();
        if end < period.start {
            return Err(SlotError::InvalidBusyPeriod {
                practitioner_id: period.practitioner_id.clone(),
                start: period.start,
                end,
            });
        }
        // Clip to the shift window; discard periods entirely outside it.
        if period.start < shift.end && end > shift.start {
            intervals.push((period.start.max(shift.start), end.min(shift.end)));
        }
    }

    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    Ok(merged)
}

/// Walk the shift across its sorted busy periods, enumerating grid-aligned
/// starts in each gap. A fold carries the cursor and the slots emitted so
/// far; the cursor advances to each busy period's end whether or not the
/// gap before it held any slots.
fn walk_shift(
    shift: &Shift,
    busy: &[(DateTime<Utc>, DateTime<Utc>)],
    service: &Service,
    day: NaiveDate,
) -> Vec<CandidateSlot> {
    let duration = Duration::minutes(service.duration_minutes as i64);

    let (cursor, mut emitted) = busy.iter().fold(
        (shift.start, Vec::new()),
        |(cursor, mut emitted), &(busy_start, busy_end)| {
            enumerate_gap(cursor, busy_start, duration, shift, day, &mut emitted);
            (cursor.max(busy_end), emitted)
        },
    );

    // Trailing gap between the last busy period and the end of the shift.
    enumerate_gap(cursor, shift.end, duration, shift, day, &mut emitted);

    emitted
}

/// Emit every quantized start in `[cursor, gap_end)` whose slot fits
/// entirely before `gap_end`. Strict containment: a slot must not partially
/// overlap the busy period even if most of it fits.
fn enumerate_gap(
    cursor: DateTime<Utc>,
    gap_end: DateTime<Utc>,
    duration: Duration,
    shift: &Shift,
    day: NaiveDate,
    out: &mut Vec<CandidateSlot>,
) {
    let gap_minutes = (gap_end - cursor).num_minutes();
    if gap_minutes < duration.num_minutes() {
        return;
    }

    let steps = gap_minutes / SLOT_GRID_MINUTES;
    for i in 0..steps {
        let start = cursor + Duration::minutes(i * SLOT_GRID_MINUTES);
        let end = start + duration;
        if end <= gap_end {
            out.push(CandidateSlot {
                practitioner_id: shift.practitioner_id.clone(),
                day,
                start,
                end,
                duration_minutes: duration.num_minutes(),
            });
        }
    }
}
