use lifemap::domain::category::{life_areas, AREA_LABELS};
use lifemap::ui::views::connection_layer::{connection_curves, CONNECTION_PAIRS};
use lifemap::ui::views::radial_geometry::{angle_from_center, NodePos, CENTER, MAIN_RADIUS};
use lifemap::ui::views::radial_view::RadialView;

fn laid_out_view(width: f32) -> RadialView {
    let mut view = RadialView::new();
    view.handle_resize(width);
    view
}

#[test]
fn test_categories_are_spread_evenly_around_the_circle() {
    let view = laid_out_view(1000.0);
    let step_radians = (360.0 / AREA_LABELS.len() as f64).to_radians();

    let mut angles: Vec<f64> = life_areas()
        .iter()
        .map(|area| {
            angle_from_center(view.node_positions[&area.label], CENTER)
                .rem_euclid(std::f64::consts::TAU)
        })
        .collect();

    // Consecutive areas (in declaration order) differ by exactly one step
    for pair in angles.windows(2) {
        let diff = (pair[1] - pair[0]).rem_euclid(std::f64::consts::TAU);
        assert!((diff - step_radians).abs() < 1e-9);
    }

    // And all of them sit on the same radius
    for area in life_areas() {
        let pos = view.node_positions[&area.label];
        let radius = ((pos.x - CENTER).powi(2) + (pos.y - CENTER).powi(2)).sqrt();
        assert!((radius - MAIN_RADIUS).abs() < 1e-9);
    }

    angles.sort_by(|a, b| a.partial_cmp(b).expect("finite angles"));
    angles.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    assert_eq!(angles.len(), AREA_LABELS.len(), "no two areas share an angle");
}

#[test]
fn test_resize_with_same_width_is_byte_identical() {
    let mut view = laid_out_view(832.0);
    let first = view.node_positions.clone();
    view.handle_resize(832.0);
    let second = view.node_positions.clone();
    assert_eq!(first, second);

    // Identical down to the bit pattern, not just approximately
    for (label, pos) in &first {
        let again = second[label];
        assert_eq!(pos.x.to_bits(), again.x.to_bits());
        assert_eq!(pos.y.to_bits(), again.y.to_bits());
    }
}

#[test]
fn test_zero_width_container_defers_layout() {
    let mut view = RadialView::new();
    view.handle_resize(0.0);
    assert!(view.node_positions.is_empty());

    view.handle_resize(700.0);
    assert_eq!(view.node_positions.len(), AREA_LABELS.len());
    assert_eq!(view.scale_factor(), 0.8, "700px wide counts as mobile");

    view.handle_resize(1400.0);
    assert_eq!(view.scale_factor(), 1.0);
}

#[test]
fn test_connection_curves_follow_the_position_map() {
    let view = laid_out_view(1000.0);
    let curves = connection_curves(&view.node_positions);
    assert_eq!(curves.len(), CONNECTION_PAIRS.len());
    for curve in &curves {
        assert_eq!(curve.control, NodePos { x: CENTER, y: CENTER });
    }

    let mut positions = view.node_positions.clone();
    positions.remove("Growth");
    // Hobbies-Growth and Growth-Work drop out silently
    assert_eq!(connection_curves(&positions).len(), CONNECTION_PAIRS.len() - 2);
}
