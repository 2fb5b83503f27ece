//! Coalesce candidate slots into contiguous display blocks.
//!
//! Back-to-back candidate starts 15 minutes apart read better in a calendar
//! UI as one continuous bookable window than as a forest of overlapping
//! tiles. This pass is purely presentational; every slot survives inside
//! exactly one block.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::slots::{CandidateSlot, SLOT_GRID_MINUTES};

/// A merged run of adjacent candidate slots for one practitioner and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBlock {
    pub practitioner_id: String,
    pub day: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Member slots in ascending start order.
    pub slots: Vec<CandidateSlot>,
}

/// Merge slots into continuous blocks.
///
/// Slots are grouped by (practitioner, day) and sorted by start time; a slot
/// joins the open block when its start is within one grid step
/// ([`SLOT_GRID_MINUTES`]) of the block's end, otherwise it seeds a new
/// block. Blocks are returned ordered by (practitioner id, day), then start.
pub fn merge_into_blocks(slots: &[CandidateSlot]) -> Vec<ContinuousBlock> {
    let adjacency = Duration::minutes(SLOT_GRID_MINUTES);

    let mut groups: BTreeMap<(String, NaiveDate), Vec<CandidateSlot>> = BTreeMap::new();
    for slot in slots {
        groups
            .entry((slot.practitioner_id.clone(), slot.day))
            .or_default()
            .push(slot.clone());
    }

    let mut blocks = Vec::new();

    for ((practitioner_id, day), mut group) in groups {
        group.sort_by_key(|s| (s.start, s.end));

        let mut open: Option<ContinuousBlock> = None;
        for slot in group {
            match open.as_mut() {
                Some(block) if slot.start <= block.end + adjacency => {
                    // Overlapping slots never move the block end backward.
                    block.end = block.end.max(slot.end);
                    block.slots.push(slot);
                }
                _ => {
                    if let Some(done) = open.take() {
                        blocks.push(done);
                    }
                    open = Some(ContinuousBlock {
                        practitioner_id: practitioner_id.clone(),
                        day,
                        start: slot.start,
                        end: slot.end,
                        slots: vec![slot],
                    });
                }
            }
        }
        if let Some(done) = open {
            blocks.push(done);
        }
    }

    blocks
}
