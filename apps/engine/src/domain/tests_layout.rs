use crate::domain::layout::{position_from_coordinate, RowMetrics};
use crate::domain::rules::ITEM_COUNT;

// Default metrics: 56 + 6 = one 62-unit cell per row.
fn metrics() -> RowMetrics {
    RowMetrics::default()
}

fn map(y: f64) -> usize {
    let m = metrics();
    position_from_coordinate(y, 0.0, m.scroll_height(ITEM_COUNT), m, ITEM_COUNT)
}

#[test]
fn far_above_container_maps_to_zero() {
    assert_eq!(map(-5_000.0), 0);
    assert_eq!(map(f64::MIN), 0);
}

#[test]
fn far_below_container_maps_to_item_count() {
    assert_eq!(map(1_000_000.0), ITEM_COUNT);
    assert_eq!(map(f64::MAX), ITEM_COUNT);
}

#[test]
fn cell_boundaries_round_down() {
    assert_eq!(map(0.0), 0);
    assert_eq!(map(61.999), 0);
    assert_eq!(map(62.0), 1);
    assert_eq!(map(62.0 * 12.0 + 30.0), 12);
}

#[test]
fn container_top_offsets_the_mapping() {
    let m = metrics();
    let scroll = m.scroll_height(ITEM_COUNT);
    assert_eq!(position_from_coordinate(100.0, 100.0, scroll, m, ITEM_COUNT), 0);
    assert_eq!(position_from_coordinate(162.0, 100.0, scroll, m, ITEM_COUNT), 1);
    // Above the container top clamps to zero.
    assert_eq!(position_from_coordinate(40.0, 100.0, scroll, m, ITEM_COUNT), 0);
}

#[test]
fn custom_metrics_change_the_cell_size() {
    let m = RowMetrics {
        row_height: 10,
        row_gap: 0,
    };
    assert_eq!(position_from_coordinate(25.0, 0.0, 300.0, m, 30), 2);
}

#[test]
fn zero_cell_height_is_defensively_zero() {
    let m = RowMetrics {
        row_height: 0,
        row_gap: 0,
    };
    assert_eq!(position_from_coordinate(500.0, 0.0, 300.0, m, 30), 0);
}

#[test]
fn negative_scroll_height_clamps_to_zero() {
    assert_eq!(
        position_from_coordinate(500.0, 0.0, -10.0, metrics(), 30),
        0
    );
}
