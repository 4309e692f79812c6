//! Angle and arc geometry for the hero rings.
//!
//! Angles are in degrees with 0° at twelve o'clock, increasing clockwise,
//! matching the renderer's coordinate convention.

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn norm_deg(deg: f32) -> f32 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Converts a top-origin angle in degrees to standard radians.
pub fn to_rad_top(deg: f32) -> f32 {
    (deg - 90.0).to_radians()
}

/// Point on a circle of radius `r` at a top-origin angle, as `[x, y]`.
pub fn point_on_ring(r: f32, deg: f32) -> [f32; 2] {
    let a = to_rad_top(deg);
    [r * a.cos(), r * a.sin()]
}

/// Returns true if `angle` lies inside the circular interval `[start, end]`
/// (inclusive on both ends, wrap-aware).
pub fn in_arc_interval(angle: f32, start: f32, end: f32) -> bool {
    let a = norm_deg(angle);
    let start = norm_deg(start);
    let end = norm_deg(end);
    if start <= end {
        a >= start && a <= end
    } else {
        // Interval wraps through 0°
        a >= start || a <= end
    }
}

/// Builds SVG path data for an arc of radius `r` from `start_deg` to `end_deg`.
///
/// The large-arc flag is set for sweeps above 180°.
pub fn arc_path(r: f32, start_deg: f32, end_deg: f32) -> String {
    let a0 = to_rad_top(start_deg);
    let a1 = to_rad_top(end_deg);
    let large = i32::from((end_deg - start_deg).abs() > 180.0);
    let x0 = r * a0.cos();
    let y0 = r * a0.sin();
    let x1 = r * a1.cos();
    let y1 = r * a1.sin();
    format!("M {x0} {y0} A {r} {r} 0 {large} 1 {x1} {y1}")
}
