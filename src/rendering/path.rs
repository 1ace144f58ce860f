/// Path construction helpers for authored outlines

use tiny_skia::{Path, PathBuilder, Point, Rect, Transform};

/// One drawing command of an authored outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Seg {
    Move(f32, f32),
    Line(f32, f32),
    /// Control point, end point
    Quad(f32, f32, f32, f32),
    /// Two control points, end point
    Cubic(f32, f32, f32, f32, f32, f32),
    Close,
}

/// Build a path from a list of segments. `None` if nothing drawable remains.
pub fn build(segments: &[Seg]) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for seg in segments {
        match *seg {
            Seg::Move(x, y) => pb.move_to(x, y),
            Seg::Line(x, y) => pb.line_to(x, y),
            Seg::Quad(x1, y1, x, y) => pb.quad_to(x1, y1, x, y),
            Seg::Cubic(x1, y1, x2, y2, x, y) => pb.cubic_to(x1, y1, x2, y2, x, y),
            Seg::Close => pb.close(),
        }
    }
    pb.finish()
}

/// Open polyline through `points`
pub fn polyline(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

/// Ellipse centred on `(cx, cy)` with its x axis rotated by `rotation` radians
pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32) -> Option<Path> {
    let rect = Rect::from_xywh(-rx, -ry, rx * 2.0, ry * 2.0)?;
    let oval = PathBuilder::from_oval(rect)?;
    oval.transform(Transform::from_translate(cx, cy).pre_rotate(rotation.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_outline_builds() {
        let path = build(&[
            Seg::Move(0.0, 0.0),
            Seg::Quad(10.0, 0.0, 10.0, 10.0),
            Seg::Cubic(5.0, 12.0, 0.0, 12.0, 0.0, 10.0),
            Seg::Close,
        ])
        .expect("path");
        let b = path.bounds();
        assert!(b.width() > 9.0 && b.height() > 9.0);
    }

    #[test]
    fn polyline_needs_two_points() {
        assert!(polyline(&[]).is_none());
        assert!(polyline(&[Point::from_xy(1.0, 1.0)]).is_none());
        assert!(polyline(&[Point::from_xy(0.0, 0.0), Point::from_xy(4.0, 3.0)]).is_some());
    }

    #[test]
    fn ellipse_is_centred_and_rotated() {
        let e = ellipse(50.0, 20.0, 10.0, 4.0, 0.0).expect("ellipse");
        let b = e.bounds();
        assert!((b.left() - 40.0).abs() < 0.01 && (b.right() - 60.0).abs() < 0.01);

        let quarter = ellipse(0.0, 0.0, 10.0, 4.0, std::f32::consts::FRAC_PI_2).expect("ellipse");
        let b = quarter.bounds();
        assert!(b.height() > b.width());
    }
}
