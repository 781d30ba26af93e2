use super::*;
use crate::grid;
use crate::hex::corners;

fn origin() -> Point {
    Point::new(490.0, 345.0)
}

fn center_of(cell: HexCoord, size: f64) -> Point {
    let p = cell.to_pixel(size);
    Point::new(origin().x + p.x, origin().y + p.y)
}

#[test]
fn origin_pixel_hits_origin_cell() {
    assert_eq!(hex_at(origin(), origin(), 12.0, 4), Some(HexCoord::ORIGIN));
}

#[test]
fn every_cell_center_hits_its_cell() {
    let size = 9.5;
    for cell in grid::enumerate(8) {
        assert_eq!(hex_at(center_of(cell, size), origin(), size, 8), Some(cell), "cell {cell}");
    }
}

#[test]
fn points_just_inside_corners_hit_the_cell() {
    let size = 20.0;
    let cell = HexCoord::from_axial(2, -1);
    let c = center_of(cell, size);
    for corner in corners(c.x, c.y, size) {
        let inside = Point::new(c.x + (corner.x - c.x) * 0.9, c.y + (corner.y - c.y) * 0.9);
        assert_eq!(hex_at(inside, origin(), size, 4), Some(cell));
    }
}

#[test]
fn outside_display_radius_is_none() {
    let size = 10.0;
    let beyond = HexCoord::from_axial(5, 0);
    assert_eq!(hex_at(center_of(beyond, size), origin(), size, 4), None);
    assert_eq!(hex_at(center_of(beyond, size), origin(), size, 8), Some(beyond));
}

#[test]
fn degenerate_size_is_none() {
    assert_eq!(hex_at(origin(), origin(), 0.0, 4), None);
    assert_eq!(hex_at(origin(), origin(), f64::NAN, 4), None);
}

#[test]
fn far_away_point_is_none() {
    let far = Point::new(1e12, 1e12);
    assert_eq!(hex_at(far, origin(), 10.0, 32), None);
    assert_eq!(hex_at(Point::new(-1e300, 4e300), origin(), 10.0, 32), None);
}

#[test]
fn non_finite_point_is_none() {
    assert_eq!(hex_at(Point::new(f64::INFINITY, 0.0), origin(), 10.0, 4), None);
    assert_eq!(hex_at(Point::new(0.0, f64::NAN), origin(), 10.0, 4), None);
}

#[test]
fn point_just_past_outer_ring_is_none() {
    let size = 10.0;
    let next_ring = HexCoord::from_axial(0, 5);
    assert_eq!(hex_at(center_of(next_ring, size), origin(), size, 4), None);
}
