use glam::Vec2;
use lyon_tessellation::math::point;
use lyon_tessellation::path::Path;
use lyon_tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use super::GeometryError;

/// Triangulate closed rings (outers counter-clockwise, holes clockwise)
/// with the non-zero rule. Returns a flat triangle list.
pub(super) fn tessellate_rings(rings: &[Vec<Vec2>]) -> Result<Vec<[Vec2; 3]>, GeometryError> {
    let mut builder = Path::builder();
    for ring in rings {
        let Some((first, rest)) = ring.split_first() else {
            continue;
        };
        builder.begin(point(first.x, first.y));
        for p in rest {
            builder.line_to(point(p.x, p.y));
        }
        builder.end(true);
    }
    let path = builder.build();

    let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();
    let mut tessellator = FillTessellator::new();
    tessellator
        .tessellate_path(
            &path,
            &FillOptions::default().with_fill_rule(FillRule::NonZero),
            &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
                let p = v.position();
                Vec2::new(p.x, p.y)
            }),
        )
        .map_err(|e| GeometryError::Tessellation(format!("{e:?}")))?;

    Ok(buffers
        .indices
        .chunks_exact(3)
        .map(|tri| {
            [
                buffers.vertices[tri[0] as usize],
                buffers.vertices[tri[1] as usize],
                buffers.vertices[tri[2] as usize],
            ]
        })
        .collect())
}
