use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use super::cap::tessellate_rings;
use super::contour::{miter_directions, Contour};
use super::mesh::MeshVertex;
use super::GeometryError;

/// Rounded edge between the caps and the extruded body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bevel {
    /// Extent along Z beyond each face of the body.
    pub thickness: f32,
    /// How far the body grows outward from the outline.
    pub size: f32,
    /// Outward offset applied at the caps.
    pub offset: f32,
    pub segments: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub bevel: Option<Bevel>,
}

/// One ring of the extrusion: every contour point is moved to `z` and
/// pushed outward by `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub z: f32,
    pub offset: f32,
}

impl ExtrudeSettings {
    /// Layers from the front cap to the back cap.
    ///
    /// With a bevel: `segments` front bevel rings, the two body rings, then
    /// the back bevel mirrored. Without: just the body at zero offset.
    pub fn layers(&self) -> Vec<Layer> {
        let Some(bevel) = self.bevel else {
            return vec![
                Layer { z: 0.0, offset: 0.0 },
                Layer {
                    z: self.depth,
                    offset: 0.0,
                },
            ];
        };

        let segments = bevel.segments.max(1);
        let ring = |b: u32| {
            let t = b as f32 / segments as f32;
            let angle = t * FRAC_PI_2;
            (
                bevel.thickness * angle.cos(),
                bevel.size * angle.sin() + bevel.offset,
            )
        };

        let mut layers = Vec::with_capacity(2 * segments as usize + 2);
        for b in 0..segments {
            let (dz, offset) = ring(b);
            layers.push(Layer { z: -dz, offset });
        }
        let body = bevel.size + bevel.offset;
        layers.push(Layer {
            z: 0.0,
            offset: body,
        });
        layers.push(Layer {
            z: self.depth,
            offset: body,
        });
        for b in (0..segments).rev() {
            let (dz, offset) = ring(b);
            layers.push(Layer {
                z: self.depth + dz,
                offset,
            });
        }
        layers
    }
}

/// Extrude one glyph's contours, appending flat-shaded triangles to `out`.
///
/// Side walls join consecutive layers; the first and last layers are capped.
/// Contours are expected to come from `classify_contours`.
pub fn extrude_glyph(
    contours: &[Contour],
    settings: &ExtrudeSettings,
    out: &mut Vec<MeshVertex>,
) -> Result<(), GeometryError> {
    if contours.is_empty() {
        return Ok(());
    }

    let layers = settings.layers();
    let directions: Vec<Vec<Vec2>> = contours
        .iter()
        .map(|c| miter_directions(&c.points))
        .collect();

    let ring_at = |index: usize, layer: Layer| -> Vec<Vec2> {
        contours[index]
            .points
            .iter()
            .zip(&directions[index])
            .map(|(&p, &dir)| p + dir * layer.offset)
            .collect()
    };

    for index in 0..contours.len() {
        let rings: Vec<Vec<Vec2>> = layers.iter().map(|&layer| ring_at(index, layer)).collect();
        for (k, pair) in layers.windows(2).enumerate() {
            let (lower, upper) = (&rings[k], &rings[k + 1]);
            let n = lower.len();
            for i in 0..n {
                let j = (i + 1) % n;
                let a0 = lower[i].extend(pair[0].z);
                let b0 = lower[j].extend(pair[0].z);
                let a1 = upper[i].extend(pair[1].z);
                let b1 = upper[j].extend(pair[1].z);
                let fallback = edge_normal(lower[i], lower[j]);
                push_triangle(out, [a0, b0, b1], fallback);
                push_triangle(out, [a0, b1, a1], fallback);
            }
        }
    }

    let (Some(&first), Some(&last)) = (layers.first(), layers.last()) else {
        return Ok(());
    };
    let front: Vec<Vec<Vec2>> = (0..contours.len()).map(|i| ring_at(i, first)).collect();
    let back: Vec<Vec<Vec2>> = (0..contours.len()).map(|i| ring_at(i, last)).collect();

    push_cap(out, &tessellate_rings(&front)?, first.z, -Vec3::Z);
    push_cap(out, &tessellate_rings(&back)?, last.z, Vec3::Z);

    Ok(())
}

fn edge_normal(a: Vec2, b: Vec2) -> Vec3 {
    let d = (b - a).normalize_or_zero();
    Vec3::new(d.y, -d.x, 0.0)
}

fn push_triangle(out: &mut Vec<MeshVertex>, tri: [Vec3; 3], fallback: Vec3) {
    let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
    let normal = if normal == Vec3::ZERO { fallback } else { normal };
    out.extend(tri.iter().map(|&p| MeshVertex::new(p, normal)));
}

/// Emit cap triangles wound so they face along `normal`.
fn push_cap(out: &mut Vec<MeshVertex>, triangles: &[[Vec2; 3]], z: f32, normal: Vec3) {
    let want_ccw = normal.z > 0.0;
    for &[a, b, c] in triangles {
        let ccw = (b - a).perp_dot(c - a) > 0.0;
        let ordered = if ccw == want_ccw { [a, b, c] } else { [a, c, b] };
        out.extend(ordered.iter().map(|p| MeshVertex::new(p.extend(z), normal)));
    }
}
