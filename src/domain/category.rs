use serde::{Deserialize, Serialize};

/// The fixed set of life areas, in display order. The order determines each
/// area's angle on the main circle, so it must stay stable.
pub const AREA_LABELS: [&str; 7] = [
    "Work",
    "Health",
    "Relationships",
    "Hobbies",
    "Finance",
    "Growth",
    "Home",
];

pub const RELATIONSHIPS: &str = "Relationships";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeArea {
    pub label: String,
    /// Display angle in degrees, assigned by even division of 360 degrees
    /// across the ordered area set.
    pub angle_degrees: f64,
}

impl LifeArea {
    pub fn is_relationships(&self) -> bool {
        self.label == RELATIONSHIPS
    }
}

/// Builds the fixed life-area set. Areas are never created or destroyed at
/// runtime; every call returns the same set in the same order.
pub fn life_areas() -> Vec<LifeArea> {
    let step = 360.0 / AREA_LABELS.len() as f64;
    AREA_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| LifeArea {
            label: (*label).to_string(),
            angle_degrees: step * i as f64,
        })
        .collect()
}

pub fn is_known_area(label: &str) -> bool {
    AREA_LABELS.contains(&label)
}

/// Display substitute for blank labels. Rendering never fails on bad input.
pub fn display_label(raw: &str) -> &str {
    if raw.trim().is_empty() {
        "Unlabeled"
    } else {
        raw
    }
}
