//! Service-practitioner-shift eligibility matching.
//!
//! Decides whether a practitioner may perform a service during a given shift
//! and classifies the quality of the match. Pure and total: every valid
//! input produces a `MatchResult`; ineligibility is the `Incompatible` tier,
//! not an error.
//!
//! Dispatch follows the service's [`EligibilityRule`]: tiered
//! capability/equipment requirements first, legacy tag intersection for
//! not-yet-migrated services, and an unconstrained fallback for services
//! that declare nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{EligibilityRule, Practitioner, Service, Shift};

/// Quality classification of a practitioner-service-shift match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    /// All requirements met and at least one preferred capability held.
    Perfect,
    /// All requirements met; preferred capabilities absent or undeclared.
    Good,
    /// Matched via legacy tags, or the service declares no constraints.
    Basic,
    /// A required capability or equipment tag is missing.
    Incompatible,
}

/// Outcome of an eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the practitioner may perform the service in this shift at all.
    pub can_perform: bool,
    /// Whether the practitioner holds a declared preferred capability.
    pub has_preferred_capabilities: bool,
    pub tier: MatchTier,
    /// Required capability tags the practitioner does not hold.
    pub missing_capabilities: Vec<String>,
    /// Required equipment tags the shift's location does not provide.
    pub missing_equipment: Vec<String>,
    /// Non-fatal advisories (training suggestions, migration nudges).
    pub warnings: Vec<String>,
    /// Human-readable summary for booking UIs.
    pub recommendation: String,
}

/// Check whether `practitioner` may perform `service` during `shift`.
pub fn check_eligibility(
    service: &Service,
    practitioner: &Practitioner,
    shift: &Shift,
) -> MatchResult {
    match service.eligibility_rule() {
        EligibilityRule::Tiered {
            required,
            preferred,
            equipment,
        } => match_tiered(required, preferred, equipment, practitioner, shift),
        EligibilityRule::LegacyTags(tags) => match_legacy_tags(tags, shift),
        EligibilityRule::Unconstrained => MatchResult {
            can_perform: true,
            has_preferred_capabilities: false,
            tier: MatchTier::Basic,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![],
            recommendation: "No specific requirements; any assigned practitioner may perform \
                             this service."
                .to_string(),
        },
    }
}

/// Tiered system: hard-gate on required capabilities and equipment, then let
/// preferred capabilities upgrade the tier.
fn match_tiered(
    required: &BTreeSet<String>,
    preferred: &BTreeSet<String>,
    equipment: &BTreeSet<String>,
    practitioner: &Practitioner,
    shift: &Shift,
) -> MatchResult {
    let missing_capabilities: Vec<String> = required
        .difference(&practitioner.certifications)
        .cloned()
        .collect();
    let missing_equipment: Vec<String> = equipment
        .difference(&shift.available_equipment)
        .cloned()
        .collect();

    if !missing_capabilities.is_empty() || !missing_equipment.is_empty() {
        let mut parts = Vec::new();
        if !missing_capabilities.is_empty() {
            parts.push(format!(
                "practitioner lacks required capabilities: {}",
                missing_capabilities.join(", ")
            ));
        }
        if !missing_equipment.is_empty() {
            parts.push(format!(
                "shift location lacks required equipment: {}",
                missing_equipment.join(", ")
            ));
        }
        return MatchResult {
            can_perform: false,
            has_preferred_capabilities: false,
            tier: MatchTier::Incompatible,
            missing_capabilities,
            missing_equipment,
            warnings: vec![],
            recommendation: parts.join("; "),
        };
    }

    // Preferred capabilities never block booking; specialties count as
    // certifications for this check only.
    if preferred.is_empty() {
        return MatchResult {
            can_perform: true,
            has_preferred_capabilities: false,
            tier: MatchTier::Good,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![],
            recommendation: "All requirements met.".to_string(),
        };
    }

    let holds_preferred = practitioner
        .certifications
        .union(&practitioner.specialties)
        .any(|tag| preferred.contains(tag));

    if holds_preferred {
        MatchResult {
            can_perform: true,
            has_preferred_capabilities: true,
            tier: MatchTier::Perfect,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![],
            recommendation: "Ideal match: practitioner holds a preferred capability for this \
                             service."
                .to_string(),
        }
    } else {
        MatchResult {
            can_perform: true,
            has_preferred_capabilities: false,
            tier: MatchTier::Good,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![format!(
                "Consider additional training in: {}",
                preferred.iter().cloned().collect::<Vec<_>>().join(", ")
            )],
            recommendation: "All requirements met; preferred capabilities not held.".to_string(),
        }
    }
}

/// Legacy system: the service's tag set must intersect the shift's.
fn match_legacy_tags(tags: &BTreeSet<String>, shift: &Shift) -> MatchResult {
    let migration_warning = "Service uses legacy tag matching; migrate it to \
                             capability/equipment requirements."
        .to_string();
    let matched = tags.intersection(&shift.tags).next().is_some();

    if matched {
        MatchResult {
            can_perform: true,
            has_preferred_capabilities: false,
            tier: MatchTier::Basic,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![migration_warning],
            recommendation: "Legacy tag match found.".to_string(),
        }
    } else {
        let missing: Vec<String> = tags.difference(&shift.tags).cloned().collect();
        MatchResult {
            can_perform: false,
            has_preferred_capabilities: false,
            tier: MatchTier::Incompatible,
            missing_capabilities: vec![],
            missing_equipment: vec![],
            warnings: vec![migration_warning],
            recommendation: format!("Shift is missing required tags: {}", missing.join(", ")),
        }
    }
}

/// Filter a service list down to those `practitioner` can perform in
/// principle, ignoring shift and equipment (equipment is shift-scoped).
///
/// A service qualifies when the practitioner appears in its assigned list
/// and holds every required capability.
pub fn eligible_services<'a>(
    services: &'a [Service],
    practitioner: &Practitioner,
) -> Vec<&'a Service> {
    services
        .iter()
        .filter(|service| {
            service
                .assigned_practitioners
                .iter()
                .any(|id| id == &practitioner.id)
                && service
                    .required_capabilities
                    .is_subset(&practitioner.certifications)
        })
        .collect()
}

/// Render a user-facing explanation of a match result for a booking UI.
pub fn booking_explanation(result: &MatchResult, service_name: &str) -> String {
    if result.can_perform {
        match result.tier {
            MatchTier::Perfect => {
                format!("{service_name} can be booked; this practitioner is an ideal match.")
            }
            _ => format!("{service_name} can be booked. {}", result.recommendation),
        }
    } else {
        let mut lines = vec![format!("{service_name} cannot be booked in this shift.")];
        if !result.missing_capabilities.is_empty() {
            lines.push(format!(
                "Missing capabilities: {}",
                result.missing_capabilities.join(", ")
            ));
        }
        if !result.missing_equipment.is_empty() {
            lines.push(format!(
                "Missing equipment: {}",
                result.missing_equipment.join(", ")
            ));
        }
        if result.missing_capabilities.is_empty() && result.missing_equipment.is_empty() {
            lines.push(result.recommendation.clone());
        }
        lines.join("\n")
    }
}
