use super::*;

fn blob() -> Path {
    let mut path = Path::new();
    path.move_to(Point::new(0.0, 0.0))
        .cubic_to(
            Point::new(0.0, 10.0),
            Point::new(30.0, 20.0),
            Point::new(30.0, 40.0),
        )
        .line_to(Point::new(0.0, 80.0))
        .close();
    path
}

#[test]
fn bounds_cover_control_points() {
    let bounds = blob().bounds().expect("non-empty path");
    assert_eq!(bounds, Rect {
        x: 0.0,
        y: 0.0,
        width: 30.0,
        height: 80.0,
    });
    assert!(Path::new().bounds().is_none());
}

#[test]
fn mirrored_path_reflects_every_point() {
    let mirrored = blob().mirrored_x(50.0);
    let bounds = mirrored.bounds().expect("non-empty path");
    assert_eq!(bounds.x, 70.0);
    assert_eq!(bounds.right(), 100.0);
    assert_eq!(mirrored.commands().len(), blob().commands().len());
}

#[test]
fn cubic_point_hits_endpoints() {
    let p0 = Point::new(0.0, 0.0);
    let p3 = Point::new(10.0, 5.0);
    let c = Point::new(3.0, 8.0);
    assert_eq!(cubic_point(p0, c, c, p3, 0.0), p0);
    assert_eq!(cubic_point(p0, c, c, p3, 1.0), p3);
}

#[test]
fn flatten_ends_on_curve_endpoint() {
    let points = blob().flatten(4);
    // move + 4 curve steps + line
    assert_eq!(points.len(), 6);
    assert_eq!(points[4], Point::new(30.0, 40.0));
    assert_eq!(points[5], Point::new(0.0, 80.0));
}
