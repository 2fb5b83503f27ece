//! Input data model: services, practitioners, shifts, busy periods.
//!
//! All of these are read-only snapshots supplied by the caller for the
//! duration of one query. The engine never mutates them and never fetches
//! anything itself. Derived outputs (candidate slots, continuous blocks,
//! match results) live next to the functions that produce them.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A treatment service from the catalog.
///
/// Eligibility fields come in two generations. The tiered system
/// (`required_capabilities` / `preferred_capabilities` / `required_equipment`)
/// is authoritative when any of its sets is non-empty; the legacy `tags` set
/// is consulted only when all tiered fields are empty. This lets a catalog
/// migrate services one at a time without breaking scheduling for the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Appointment length in minutes. Must be positive; validated at query time.
    pub duration_minutes: u32,
    /// Capability tags the practitioner must hold. Empty means "not declared".
    #[serde(default)]
    pub required_capabilities: BTreeSet<String>,
    /// Capability tags that upgrade match quality but never block booking.
    #[serde(default)]
    pub preferred_capabilities: BTreeSet<String>,
    /// Equipment tags the shift's location must provide.
    #[serde(default)]
    pub required_equipment: BTreeSet<String>,
    /// Legacy tag set, matched against shift tags when no tiered field is set.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Practitioner ids allowed to perform this service (roster filter input).
    #[serde(default)]
    pub assigned_practitioners: Vec<String>,
}

/// Which eligibility system governs a service, decided once per service
/// rather than re-probed on every match call.
#[derive(Debug, Clone, PartialEq)]
pub enum EligibilityRule<'a> {
    /// Capability/equipment requirements plus optional preferred upgrades.
    Tiered {
        required: &'a BTreeSet<String>,
        preferred: &'a BTreeSet<String>,
        equipment: &'a BTreeSet<String>,
    },
    /// Legacy tag intersection against the shift's tags.
    LegacyTags(&'a BTreeSet<String>),
    /// No eligibility constraints at all.
    Unconstrained,
}

impl Service {
    /// Classify this service under the tiered/legacy/unconstrained dispatch.
    pub fn eligibility_rule(&self) -> EligibilityRule<'_> {
        if !self.required_capabilities.is_empty()
            || !self.preferred_capabilities.is_empty()
            || !self.required_equipment.is_empty()
        {
            EligibilityRule::Tiered {
                required: &self.required_capabilities,
                preferred: &self.preferred_capabilities,
                equipment: &self.required_equipment,
            }
        } else if !self.tags.is_empty() {
            EligibilityRule::LegacyTags(&self.tags)
        } else {
            EligibilityRule::Unconstrained
        }
    }
}

/// A practitioner and the capability tags they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practitioner {
    pub id: String,
    /// Certifications held; checked against a service's required capabilities.
    #[serde(default)]
    pub certifications: BTreeSet<String>,
    /// Specialties; interchangeable with certifications for preferred checks.
    #[serde(default)]
    pub specialties: BTreeSet<String>,
}

/// One contiguous working window for a practitioner.
///
/// Shifts for the same practitioner on the same day must not overlap; the
/// engine rejects such input rather than silently merging it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub practitioner_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Equipment tags available at this shift's location/room.
    #[serde(default)]
    pub available_equipment: BTreeSet<String>,
    /// Legacy tag set, matched against a legacy service's tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Shift {
    /// The calendar day this shift belongs to (day of its start).
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// An appointment or break occupying part of a practitioner's day.
///
/// Appointments and breaks are treated identically as opaque obstacles.
/// The end may be given explicitly, as a duration, or not at all (a
/// zero-length marker the walk steps over).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyPeriod {
    pub practitioner_id: String,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
}

impl BusyPeriod {
    /// Resolve the end of this period: explicit end, then start + duration,
    /// then the start itself.
    pub fn effective_end(&self) -> DateTime<Utc> {
        match (self.end, self.duration_minutes) {
            (Some(end), _) => end,
            (None, Some(minutes)) => self.start + Duration::minutes(minutes as i64),
            (None, None) => self.start,
        }
    }

    /// The calendar day this period belongs to (day of its start).
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }
}
