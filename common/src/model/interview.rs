//! Interview slots offered to applicants and the per-draft selection of them.
//!
//! The slot labels are part of the wire format: the recruit page sends the
//! selection as a JSON object keyed by label, and the server stores the
//! selected labels as a JSON array.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One interview time window an applicant can mark as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InterviewSlot {
    #[serde(rename = "9/8(월) 18:00 ~ 19:00")]
    MondayEighteen,
    #[serde(rename = "9/8(월) 19:00 ~ 20:00")]
    MondayNineteen,
    #[serde(rename = "9/8(월) 20:00 ~ 21:00")]
    MondayTwenty,
    #[serde(rename = "9/8(월) 21:00 ~ 22:00")]
    MondayTwentyOne,
    #[serde(rename = "9/9(화) 18:00 ~ 19:00")]
    TuesdayEighteen,
    #[serde(rename = "9/9(화) 19:00 ~ 20:00")]
    TuesdayNineteen,
    #[serde(rename = "9/9(화) 20:00 ~ 21:00")]
    TuesdayTwenty,
    #[serde(rename = "9/9(화) 21:00 ~ 22:00")]
    TuesdayTwentyOne,
}

impl InterviewSlot {
    pub const ALL: [InterviewSlot; 8] = [
        InterviewSlot::MondayEighteen,
        InterviewSlot::MondayNineteen,
        InterviewSlot::MondayTwenty,
        InterviewSlot::MondayTwentyOne,
        InterviewSlot::TuesdayEighteen,
        InterviewSlot::TuesdayNineteen,
        InterviewSlot::TuesdayTwenty,
        InterviewSlot::TuesdayTwentyOne,
    ];

    /// The label shown next to the checkbox, identical to the wire key.
    pub fn label(self) -> &'static str {
        match self {
            InterviewSlot::MondayEighteen => "9/8(월) 18:00 ~ 19:00",
            InterviewSlot::MondayNineteen => "9/8(월) 19:00 ~ 20:00",
            InterviewSlot::MondayTwenty => "9/8(월) 20:00 ~ 21:00",
            InterviewSlot::MondayTwentyOne => "9/8(월) 21:00 ~ 22:00",
            InterviewSlot::TuesdayEighteen => "9/9(화) 18:00 ~ 19:00",
            InterviewSlot::TuesdayNineteen => "9/9(화) 19:00 ~ 20:00",
            InterviewSlot::TuesdayTwenty => "9/9(화) 20:00 ~ 21:00",
            InterviewSlot::TuesdayTwentyOne => "9/9(화) 21:00 ~ 22:00",
        }
    }
}

/// Availability marks for every [`InterviewSlot`].
///
/// Slots missing from an incoming payload count as unselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewSelection(BTreeMap<InterviewSlot, bool>);

impl Default for InterviewSelection {
    fn default() -> Self {
        Self(InterviewSlot::ALL.iter().map(|slot| (*slot, false)).collect())
    }
}

impl InterviewSelection {
    pub fn set(&mut self, slot: InterviewSlot, checked: bool) {
        self.0.insert(slot, checked);
    }

    pub fn is_selected(&self, slot: InterviewSlot) -> bool {
        self.0.get(&slot).copied().unwrap_or(false)
    }

    pub fn any_selected(&self) -> bool {
        self.0.values().any(|checked| *checked)
    }

    /// The checked slots, in enumeration order.
    pub fn selected(&self) -> Vec<InterviewSlot> {
        self.0
            .iter()
            .filter(|(_, checked)| **checked)
            .map(|(slot, _)| *slot)
            .collect()
    }
}
