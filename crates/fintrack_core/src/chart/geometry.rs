//! SVG wedge geometry for pie charts.
//!
//! Angles are degrees measured clockwise in screen space from the positive
//! x axis (SVG's y axis points down).

/// Point on a circle for an angle in degrees.
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Closed wedge path spanning `[start_deg, end_deg)`.
///
/// Shape: `M cx cy L x1 y1 A r r 0 large 1 x2 y2 Z`, with `large = 1` when
/// the span exceeds 180 degrees. A full-circle span is split into two half
/// arcs because an arc with coincident endpoints draws nothing.
pub fn wedge_path(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let span = end_deg - start_deg;
    let (x1, y1) = polar_point(cx, cy, radius, start_deg);

    if span >= 360.0 {
        let (xm, ym) = polar_point(cx, cy, radius, start_deg + 180.0);
        return format!(
            "M {} {} L {} {} A {r} {r} 0 0 1 {} {} A {r} {r} 0 0 1 {} {} Z",
            coord(cx),
            coord(cy),
            coord(x1),
            coord(y1),
            coord(xm),
            coord(ym),
            coord(x1),
            coord(y1),
            r = coord(radius),
        );
    }

    let (x2, y2) = polar_point(cx, cy, radius, end_deg);
    let large_arc = u8::from(span > 180.0);
    format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        coord(cx),
        coord(cy),
        coord(x1),
        coord(y1),
        coord(x2),
        coord(y2),
        r = coord(radius),
    )
}

/// Two-decimal coordinate text without negative zero.
fn coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}")
}

#[cfg(test)]
mod tests {
    use super::{coord, polar_point, wedge_path};

    #[test]
    fn coord_drops_negative_zero() {
        assert_eq!(coord(-0.000_1), "0.00");
        assert_eq!(coord(12.345_6), "12.35");
    }

    #[test]
    fn polar_point_quarter_turn_points_down() {
        let (x, y) = polar_point(0.0, 0.0, 10.0, 90.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn small_wedge_uses_small_arc_flag() {
        let path = wedge_path(100.0, 100.0, 100.0, 0.0, 90.0);
        assert_eq!(
            path,
            "M 100.00 100.00 L 200.00 100.00 A 100.00 100.00 0 0 1 100.00 200.00 Z"
        );
    }

    #[test]
    fn full_circle_splits_into_two_arcs() {
        let path = wedge_path(100.0, 100.0, 100.0, 0.0, 360.0);
        assert_eq!(
            path,
            "M 100.00 100.00 L 200.00 100.00 A 100.00 100.00 0 0 1 0.00 100.00 \
             A 100.00 100.00 0 0 1 200.00 100.00 Z"
        );
    }
}
