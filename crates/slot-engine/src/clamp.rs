//! Snap a proposed appointment into a shift's boundaries.
//!
//! Used by drag-to-book UIs that need a tentative (start, duration) pair
//! adjusted into a legal window. A proposal that cannot fit at all yields an
//! explicit [`ClampOutcome::NoLegalPlacement`] rather than a zero or
//! negative duration the caller would have to inspect.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::types::Shift;

/// What the clamp did to the proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampOutcome {
    /// The proposal already fit; returned unchanged.
    Unadjusted,
    /// Start and/or duration were adjusted and the result is bookable.
    Adjusted,
    /// No legal placement exists inside the shift (duration shrank to zero).
    NoLegalPlacement,
}

/// Result of clamping a proposed appointment to a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClampResult {
    pub start: DateTime<Utc>,
    /// Adjusted duration; 0 when the outcome is `NoLegalPlacement`.
    pub duration_minutes: i64,
    pub outcome: ClampOutcome,
    /// Human-readable description of the shift window, when one was applied.
    pub shift_bounds: Option<String>,
}

impl ClampResult {
    pub fn was_adjusted(&self) -> bool {
        self.outcome != ClampOutcome::Unadjusted
    }
}

/// Clamp a proposed (start, duration) pair into `shift`'s boundaries.
///
/// With no shift the proposal passes through unchanged. Otherwise the start
/// is raised to the shift start and the duration shrunk to end no later
/// than the shift end; a shrink to zero or below reports
/// [`ClampOutcome::NoLegalPlacement`].
///
/// # Errors
///
/// Returns a validation error for a non-positive proposed duration or a
/// shift with `end <= start`.
pub fn clamp_to_shift(
    shift: Option<&Shift>,
    proposed_start: DateTime<Utc>,
    proposed_duration_minutes: i64,
) -> Result<ClampResult> {
    if proposed_duration_minutes <= 0 {
        return Err(SlotError::InvalidDuration(proposed_duration_minutes));
    }

    let Some(shift) = shift else {
        return Ok(ClampResult {
            start: proposed_start,
            duration_minutes: proposed_duration_minutes,
            outcome: ClampOutcome::Unadjusted,
            shift_bounds: None,
        });
    };

    if shift.end <= shift.start {
        return Err(SlotError::InvalidShift {
            practitioner_id: shift.practitioner_id.clone(),
            start: shift.start,
            end: shift.end,
        });
    }

    let bounds = format!(
        "shift runs {} to {}",
        shift.start.format("%Y-%m-%d %H:%M"),
        shift.end.format("%H:%M")
    );

    let start = proposed_start.max(shift.start);
    let mut duration_minutes = proposed_duration_minutes;
    let mut adjusted = start != proposed_start;

    if start + Duration::minutes(duration_minutes) > shift.end {
        duration_minutes = (shift.end - start).num_minutes();
        adjusted = true;
    }

    if duration_minutes <= 0 {
        return Ok(ClampResult {
            start,
            duration_minutes: 0,
            outcome: ClampOutcome::NoLegalPlacement,
            shift_bounds: Some(bounds),
        });
    }

    Ok(ClampResult {
        start,
        duration_minutes,
        outcome: if adjusted {
            ClampOutcome::Adjusted
        } else {
            ClampOutcome::Unadjusted
        },
        shift_bounds: Some(bounds),
    })
}
