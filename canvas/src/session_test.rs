use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(1234)
}

fn cell(q: i32, r: i32) -> HexCoord {
    HexCoord::from_axial(q, r)
}

fn circle_session(radius: &str) -> Session {
    let mut s = Session::new();
    s.toggle_shape_mode();
    s.set_shape_kind(ShapeKind::Circle);
    s.set_radius_text(radius);
    s
}

fn triangle_session() -> Session {
    let mut s = Session::new();
    s.toggle_shape_mode();
    s.set_shape_kind(ShapeKind::Triangle);
    s
}

// =============================================================
// Defaults and mode
// =============================================================

#[test]
fn new_session_is_empty_and_normal() {
    let s = Session::new();
    assert_eq!(s.mode(), Mode::Normal);
    assert!(s.selection().is_empty());
    assert!(s.circles().is_empty());
    assert!(s.triangles().is_empty());
    assert!(s.pending().is_empty());
}

#[test]
fn toggle_enters_shape_mode_with_current_kind() {
    let mut s = Session::new();
    assert!(s.toggle_shape_mode());
    assert_eq!(s.mode(), Mode::ShapeBuilding(ShapeKind::Circle));
    assert!(!s.toggle_shape_mode());
    assert_eq!(s.mode(), Mode::Normal);
}

#[test]
fn shape_kind_survives_toggle() {
    let mut s = triangle_session();
    s.toggle_shape_mode();
    s.toggle_shape_mode();
    assert_eq!(s.mode(), Mode::ShapeBuilding(ShapeKind::Triangle));
}

// =============================================================
// Normal mode
// =============================================================

#[test]
fn normal_click_selects_single_cell() {
    let mut s = Session::new();
    let mut rng = rng();
    assert_eq!(s.click(cell(1, 0), &mut rng), None);
    assert_eq!(s.selection().len(), 1);
    assert!(s.selection().contains_key(&cell(1, 0)));
}

#[test]
fn normal_click_replaces_previous_selection() {
    let mut s = Session::new();
    let mut rng = rng();
    s.click(cell(1, 0), &mut rng);
    s.click(cell(-2, 1), &mut rng);
    assert_eq!(s.selection().len(), 1);
    assert!(s.selection().contains_key(&cell(-2, 1)));
}

#[test]
fn normal_reclick_keeps_color() {
    let mut s = Session::new();
    let mut rng = rng();
    s.click(cell(3, -1), &mut rng);
    let first = s.selection()[&cell(3, -1)];
    for _ in 0..10 {
        s.click(cell(3, -1), &mut rng);
    }
    assert_eq!(s.selection()[&cell(3, -1)], first);
}

#[test]
fn normal_click_collapses_shape_mode_selection() {
    let mut s = triangle_session();
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    s.click(cell(1, 0), &mut rng);
    s.toggle_shape_mode();
    s.click(cell(1, 0), &mut rng);
    assert_eq!(s.selection().len(), 1);
    assert!(s.selection().contains_key(&cell(1, 0)));
}

#[test]
fn normal_click_never_commits_shapes() {
    let mut s = Session::new();
    s.set_radius_text("3");
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    assert!(s.circles().is_empty());
    assert!(s.pending().is_empty());
}

// =============================================================
// Circle mode
// =============================================================

#[test]
fn circle_click_commits_with_valid_radius() {
    let mut s = circle_session("2");
    let mut rng = rng();
    let shape = s.click(cell(1, -1), &mut rng);
    let expected = Circle { center: cell(1, -1), radius: 2 };
    assert_eq!(shape, Some(Shape::Circle(expected)));
    assert_eq!(s.circles(), &[expected]);
}

#[test]
fn circle_click_with_zero_radius_commits() {
    let mut s = circle_session("0");
    let mut rng = rng();
    assert!(s.click(cell(0, 0), &mut rng).is_some());
}

#[test]
fn circle_click_without_radius_only_highlights() {
    for text in ["", "abc", "-3"] {
        let mut s = circle_session(text);
        let mut rng = rng();
        assert_eq!(s.click(cell(2, 0), &mut rng), None, "radius {text:?}");
        assert!(s.circles().is_empty());
        assert!(s.selection().contains_key(&cell(2, 0)));
    }
}

#[test]
fn circle_clicks_accumulate_selection() {
    let mut s = circle_session("1");
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    s.click(cell(3, 0), &mut rng);
    s.click(cell(-3, 0), &mut rng);
    assert_eq!(s.selection().len(), 3);
    assert_eq!(s.circles().len(), 3);
}

#[test]
fn circle_reclick_commits_again_but_keeps_color() {
    let mut s = circle_session("1");
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    let color = s.selection()[&cell(0, 0)];
    s.click(cell(0, 0), &mut rng);
    assert_eq!(s.circles().len(), 2);
    assert_eq!(s.selection()[&cell(0, 0)], color);
}

#[test]
fn circle_radius_only_in_circle_mode() {
    let mut s = Session::new();
    s.set_radius_text("4");
    assert_eq!(s.circle_radius(), None);
    s.toggle_shape_mode();
    assert_eq!(s.circle_radius(), Some(4));
    s.set_shape_kind(ShapeKind::Triangle);
    assert_eq!(s.circle_radius(), None);
}

#[test]
fn circle_membership_uses_cube_distance() {
    let c = Circle { center: HexCoord::ORIGIN, radius: 2 };
    assert!(c.contains(HexCoord::new(2, -1, -1).unwrap()));
    assert!(c.contains(HexCoord::new(2, 0, -2).unwrap()));
    assert!(!c.contains(HexCoord::new(3, -1, -2).unwrap()));
}

#[test]
fn zero_radius_circle_contains_only_center() {
    let c = Circle { center: cell(2, -1), radius: 0 };
    assert!(c.contains(cell(2, -1)));
    assert!(!c.contains(cell(2, 0)));
}

// =============================================================
// Triangle mode
// =============================================================

#[test]
fn three_clicks_commit_triangle_in_click_order() {
    let mut s = triangle_session();
    let mut rng = rng();
    let (a, b, c) = (cell(0, 0), cell(1, -1), cell(0, -1));
    assert_eq!(s.click(a, &mut rng), None);
    assert_eq!(s.pending().len(), 1);
    assert_eq!(s.click(b, &mut rng), None);
    assert_eq!(s.pending().len(), 2);
    let shape = s.click(c, &mut rng);
    assert_eq!(shape, Some(Shape::Triangle(Triangle { vertices: [a, b, c] })));
    assert_eq!(s.triangles().len(), 1);
    assert!(s.pending().is_empty());
}

#[test]
fn fourth_click_starts_new_buffer() {
    let mut s = triangle_session();
    let mut rng = rng();
    for q in 0..4 {
        s.click(cell(q, 0), &mut rng);
    }
    assert_eq!(s.triangles().len(), 1);
    assert_eq!(s.pending(), &[cell(3, 0)]);
}

#[test]
fn repeated_vertex_still_counts() {
    let mut s = triangle_session();
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    s.click(cell(0, 0), &mut rng);
    s.click(cell(1, 0), &mut rng);
    assert_eq!(s.triangles()[0].vertices, [cell(0, 0), cell(0, 0), cell(1, 0)]);
    assert_eq!(s.selection().len(), 2);
}

#[test]
fn toggle_abandons_pending_triangle() {
    let mut s = triangle_session();
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    s.click(cell(1, 0), &mut rng);
    s.toggle_shape_mode();
    assert!(s.pending().is_empty());
    s.toggle_shape_mode();
    s.click(cell(2, 0), &mut rng);
    assert_eq!(s.pending(), &[cell(2, 0)]);
    assert!(s.triangles().is_empty());
}

#[test]
fn shape_kind_change_abandons_pending_triangle() {
    let mut s = triangle_session();
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    s.set_shape_kind(ShapeKind::Triangle);
    assert!(s.pending().is_empty());
}

#[test]
fn triangle_clicks_keep_existing_selection() {
    let mut s = triangle_session();
    let mut rng = rng();
    s.click(cell(0, 0), &mut rng);
    let color = s.selection()[&cell(0, 0)];
    s.click(cell(1, 0), &mut rng);
    s.click(cell(2, 0), &mut rng);
    s.click(cell(0, 0), &mut rng);
    assert_eq!(s.selection()[&cell(0, 0)], color);
    assert_eq!(s.selection().len(), 3);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_drops_everything_but_mode() {
    let mut s = triangle_session();
    let mut rng = rng();
    for q in 0..5 {
        s.click(cell(q, 0), &mut rng);
    }
    s.set_shape_kind(ShapeKind::Circle);
    s.set_radius_text("2");
    s.click(cell(-1, 0), &mut rng);
    s.clear();
    assert!(s.selection().is_empty());
    assert!(s.circles().is_empty());
    assert!(s.triangles().is_empty());
    assert!(s.pending().is_empty());
    assert_eq!(s.mode(), Mode::ShapeBuilding(ShapeKind::Circle));
    assert_eq!(s.radius_text(), "2");
}
