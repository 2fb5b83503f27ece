//! # slot-engine
//!
//! Deterministic appointment slot discovery for practitioner scheduling.
//!
//! Given a treatment service, a practitioner, a set of candidate days, and
//! read-only snapshots of that practitioner's shifts, appointments, and
//! breaks, the engine computes every start time that is actually bookable:
//! inside a working shift, past the capability/equipment eligibility gate,
//! and clear of every existing obstacle. It is the pure scheduling kernel
//! underneath a booking API; it performs no I/O, holds no state, and
//! recomputes from scratch on every call, so callers may freely run queries
//! for different practitioners or days in parallel.
//!
//! ## Modules
//!
//! - [`eligibility`] — can this practitioner perform this service in this shift?
//! - [`slots`] — gap walk enumerating 15-minute-grid start times
//! - [`blocks`] — coalesce adjacent slots into contiguous display blocks
//! - [`clamp`] — snap a dragged proposal into a shift's boundaries
//! - [`types`] — input data model
//! - [`error`] — validation error types

pub mod blocks;
pub mod clamp;
pub mod eligibility;
pub mod error;
pub mod slots;
pub mod types;

pub use blocks::{merge_into_blocks, ContinuousBlock};
pub use clamp::{clamp_to_shift, ClampOutcome, ClampResult};
pub use eligibility::{
    booking_explanation, check_eligibility, eligible_services, MatchResult, MatchTier,
};
pub use error::SlotError;
pub use slots::{find_available_slots, find_first_slot, CandidateSlot, SLOT_GRID_MINUTES};
pub use types::{BusyPeriod, EligibilityRule, Practitioner, Service, Shift};
