use glam::Vec2;

use crate::font::PathCommand;

/// Points closer than this are merged when cleaning up a flattened contour.
const MERGE_DISTANCE: f32 = 1e-6;

/// Contours with a smaller absolute area are dropped as degenerate.
const MIN_AREA: f32 = 1e-10;

/// Longest miter, as a multiple of the offset distance.
const MITER_LIMIT: f32 = 4.0;

/// A closed, flattened contour with its role inside the glyph.
///
/// Outer contours wind counter-clockwise and holes clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Vec2>,
    pub is_hole: bool,
}

/// Flatten outline commands into closed polylines.
///
/// Each curve becomes `segments` straight pieces. Consecutive duplicates and
/// the closing duplicate are removed, and contours left with fewer than three
/// points (or no area) are dropped.
pub fn flatten(commands: &[PathCommand], segments: u32) -> Vec<Vec<Vec2>> {
    let segments = segments.max(1);
    let mut contours = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let mut pen = Vec2::ZERO;

    for command in commands {
        match *command {
            PathCommand::MoveTo(p) => {
                finish_contour(&mut contours, &mut current);
                current.push(p);
                pen = p;
            }
            PathCommand::LineTo(p) => {
                start_at_pen(&mut current, pen);
                current.push(p);
                pen = p;
            }
            PathCommand::QuadTo { ctrl, to } => {
                start_at_pen(&mut current, pen);
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    current.push(quadratic(pen, ctrl, to, t));
                }
                pen = to;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                start_at_pen(&mut current, pen);
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    current.push(cubic(pen, ctrl1, ctrl2, to, t));
                }
                pen = to;
            }
            PathCommand::Close => {
                if let Some(&start) = current.first() {
                    pen = start;
                }
                finish_contour(&mut contours, &mut current);
            }
        }
    }
    finish_contour(&mut contours, &mut current);

    contours
}

fn start_at_pen(current: &mut Vec<Vec2>, pen: Vec2) {
    if current.is_empty() {
        current.push(pen);
    }
}

fn finish_contour(contours: &mut Vec<Vec<Vec2>>, current: &mut Vec<Vec2>) {
    let mut points = std::mem::take(current);
    points.dedup_by(|b, a| a.distance(*b) < MERGE_DISTANCE);
    if points.len() > 1 && points[0].distance(points[points.len() - 1]) < MERGE_DISTANCE {
        points.pop();
    }
    if points.len() >= 3 && signed_area(&points).abs() > MIN_AREA {
        contours.push(points);
    }
}

fn quadratic(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

fn cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Shoelace area; positive for counter-clockwise winding.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice * 0.5
}

/// Split a glyph's contours into solids and holes by winding.
///
/// The largest contour is taken as solid and sets the glyph's solid
/// winding; contours wound the other way are holes. Windings are kept
/// relative to each other but normalized so solids run counter-clockwise
/// and holes clockwise. Overlapping solids stay solid and are merged by the
/// non-zero fill of the caps.
pub fn classify_contours(contours: Vec<Vec<Vec2>>) -> Vec<Contour> {
    let solid_ccw = contours
        .iter()
        .map(|points| signed_area(points))
        .max_by(|a, b| a.abs().total_cmp(&b.abs()))
        .map_or(true, |area| area > 0.0);

    contours
        .into_iter()
        .map(|mut points| {
            let ccw = signed_area(&points) > 0.0;
            let is_hole = ccw != solid_ccw;
            if !solid_ccw {
                points.reverse();
            }
            Contour { points, is_hole }
        })
        .collect()
}

/// Per-vertex offset directions for growing a contour outward.
///
/// Each direction bisects the normals of the two adjacent edges and is
/// scaled so that both edges move by one unit, capped at `MITER_LIMIT`.
/// With the winding from [`classify_contours`] this points away from the
/// filled region for outers and holes alike.
pub fn miter_directions(points: &[Vec2]) -> Vec<Vec2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];

            let n1 = edge_normal(prev, cur);
            let n2 = edge_normal(cur, next);
            let sum = n1 + n2;
            if sum.length_squared() < 1e-12 {
                return n1;
            }
            let dir = sum.normalize();
            let cos = dir.dot(n1).max(1.0 / MITER_LIMIT);
            dir / cos
        })
        .collect()
}

/// Right-hand normal of the edge `a -> b`.
fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    let d = (b - a).normalize_or_zero();
    Vec2::new(d.y, -d.x)
}
