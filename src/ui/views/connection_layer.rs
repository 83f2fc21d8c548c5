use std::collections::HashMap;

use super::radial_geometry::{NodePos, CENTER};

/// Decorative background links between related life areas. Purely
/// presentational; the pair list is fixed configuration.
pub const CONNECTION_PAIRS: [(&str, &str); 6] = [
    ("Work", "Finance"),
    ("Health", "Relationships"),
    ("Hobbies", "Growth"),
    ("Relationships", "Home"),
    ("Finance", "Home"),
    ("Growth", "Work"),
];

/// A quadratic curve from one area to another, bent through the shared
/// center point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionCurve {
    pub from: NodePos,
    pub control: NodePos,
    pub to: NodePos,
}

/// Curves for every configured pair whose endpoints are both present in the
/// position map. A missing endpoint is a configuration mismatch, not an
/// error: the pair is skipped.
pub fn connection_curves(positions: &HashMap<String, NodePos>) -> Vec<ConnectionCurve> {
    CONNECTION_PAIRS
        .iter()
        .filter_map(|(from, to)| {
            let from = positions.get(*from)?;
            let to = positions.get(*to)?;
            Some(ConnectionCurve {
                from: *from,
                control: NodePos { x: CENTER, y: CENTER },
                to: *to,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::radial_geometry::{point_on_circle, MAIN_RADIUS};

    fn full_position_map() -> HashMap<String, NodePos> {
        crate::domain::category::life_areas()
            .into_iter()
            .enumerate()
            .map(|(i, area)| (area.label, point_on_circle(i, 7, MAIN_RADIUS, CENTER)))
            .collect()
    }

    #[test]
    fn test_all_pairs_resolve_with_full_map() {
        let curves = connection_curves(&full_position_map());
        assert_eq!(curves.len(), CONNECTION_PAIRS.len());
        for curve in &curves {
            assert_eq!(curve.control, NodePos { x: CENTER, y: CENTER });
        }
    }

    #[test]
    fn test_missing_endpoint_skips_the_pair() {
        let mut positions = full_position_map();
        positions.remove("Finance");
        let curves = connection_curves(&positions);
        // Work-Finance and Finance-Home drop out
        assert_eq!(curves.len(), CONNECTION_PAIRS.len() - 2);
    }

    #[test]
    fn test_empty_map_yields_no_curves() {
        assert!(connection_curves(&HashMap::new()).is_empty());
    }
}
