use star_contours::{core::math::Vector2, star::Point};

#[test]
fn rounding_at_construction() {
    let p = Point::new_with_decimals(1.000004, 2.000006, 5);
    assert_eq!(p.x, 1.0);
    assert_eq!(p.y, 2.00001);

    // default precision is 5 decimals
    let q = Point::new(1.000004, 2.000006);
    assert_eq!(p, q);
}

#[test]
fn rounding_with_custom_precision() {
    let p = Point::new_with_decimals(1.23456, 9.87654, 2);
    assert_eq!(p, Point::new(1.23, 9.88));
}

#[test]
fn moved_returns_new_rounded_point() {
    let p = Point::new(1.0, 1.0);
    let moved = p.moved(0.25, 1.0000049);
    assert_eq!(moved, Point::new(1.25, 2.0));
    // the point in hand is untouched
    assert_eq!(p, Point::new(1.0, 1.0));

    let coarse = p.moved_with_decimals(0.123456, 0.0, 3);
    assert_eq!(coarse, Point::new(1.123, 1.0));
}

#[test]
fn vector2_interop() {
    let p = Point::from_vector2(Vector2::new(0.30000001, -2.5));
    assert_eq!(p, Point::new(0.3, -2.5));
    assert_eq!(p.pos(), Vector2::new(0.3, -2.5));

    let coarse = Point::from_vector2_with_decimals(Vector2::new(0.987654, 0.0), 1);
    assert_eq!(coarse, Point::new(1.0, 0.0));
}

#[test]
fn fuzzy_comparison() {
    let p = Point::new(1.0, 2.0);
    assert!(p.fuzzy_eq(Point {
        x: 1.0 + 1.0e-10,
        y: 2.0
    }));
    assert!(!p.fuzzy_eq(Point::new(1.1, 2.0)));
    assert!(p.fuzzy_eq_eps(Point::new(1.05, 2.0), 0.1));
    assert!(!p.fuzzy_eq_eps(Point::new(1.05, 2.0), 0.01));
}
