//! Flat exchange format between the kernel and the outside world.

use std::collections::HashMap;

use tracing::debug;

use super::{Properties, Solid};
use crate::core::Vec3;
use crate::error::{KernelError, KernelResult};

/// Indexed triangle mesh in flat single-precision buffers.
///
/// Each vertex holds `num_prop` values, position first. Triangles are
/// consecutive triples of vertex indices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshGL {
    /// Values per vertex, at least 3.
    pub num_prop: u32,
    /// Interleaved vertex properties.
    pub vert_properties: Vec<f32>,
    /// Triangle vertex indices.
    pub tri_verts: Vec<u32>,
}

impl MeshGL {
    /// Number of complete vertices in the property buffer.
    pub fn num_vert(&self) -> usize {
        if self.num_prop == 0 {
            0
        } else {
            self.vert_properties.len() / self.num_prop as usize
        }
    }

    /// Number of complete triangles.
    pub fn num_tri(&self) -> usize {
        self.tri_verts.len() / 3
    }

    /// Position of vertex `v`.
    pub fn position(&self, v: usize) -> Vec3 {
        let start = v * self.num_prop as usize;
        let p = &self.vert_properties[start..start + 3];
        Vec3::new(f64::from(p[0]), f64::from(p[1]), f64::from(p[2]))
    }
}

/// Bit pattern of a position with negative zero folded onto zero.
fn position_key(p: Vec3) -> [u64; 3] {
    let bits = |x: f64| if x == 0.0 { 0 } else { x.to_bits() };
    [bits(p.x), bits(p.y), bits(p.z)]
}

impl Solid {
    /// Flattens the solid into exchange buffers.
    ///
    /// Without property channels every position becomes one vertex. With
    /// properties every property vertex becomes one output vertex, so a
    /// position shared across a crease is emitted once per side.
    ///
    /// # Examples
    /// ```
    /// use manifold_kernel::Solid;
    /// let mesh = Solid::cube([1.0, 1.0, 1.0]).get_mesh_gl();
    /// assert_eq!(mesh.num_prop, 3);
    /// assert_eq!(mesh.num_vert(), 8);
    /// assert_eq!(mesh.num_tri(), 12);
    /// ```
    pub fn get_mesh_gl(&self) -> MeshGL {
        let Some(props) = self.properties.as_ref() else {
            return MeshGL {
                num_prop: 3,
                vert_properties: self
                    .vert_pos
                    .iter()
                    .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
                    .collect(),
                tri_verts: self.tri_verts.iter().flatten().copied().collect(),
            };
        };

        let mut prop_pos = vec![0u32; props.count()];
        for (tri, ptri) in self.tri_verts.iter().zip(&props.tri_props) {
            for k in 0..3 {
                prop_pos[ptri[k] as usize] = tri[k];
            }
        }
        let num_prop = 3 + props.num_prop;
        let mut vert_properties = Vec::with_capacity(prop_pos.len() * num_prop);
        for (v, &pos) in prop_pos.iter().enumerate() {
            let p = self.vert_pos[pos as usize];
            vert_properties.extend([p.x as f32, p.y as f32, p.z as f32]);
            vert_properties.extend(props.get(v as u32).iter().map(|&x| x as f32));
        }
        MeshGL {
            num_prop: num_prop as u32,
            vert_properties,
            tri_verts: props.tri_props.iter().flatten().copied().collect(),
        }
    }

    /// Builds a solid from exchange buffers.
    ///
    /// Vertices with identical positions are welded so that meshes split
    /// along seams still close up. Triangles that collapse after welding are
    /// dropped. Channels beyond the position become property channels.
    ///
    /// # Errors
    ///
    /// - [`KernelError::PropertyCount`] if `num_prop < 3`
    /// - [`KernelError::IndexOutOfRange`] if a triangle references a missing vertex
    /// - [`KernelError::NotManifold`] if the welded mesh has open or overused edges
    pub fn from_mesh_gl(mesh: &MeshGL) -> KernelResult<Self> {
        if mesh.num_prop < 3 {
            return Err(KernelError::PropertyCount(mesh.num_prop));
        }
        let num_vert = mesh.num_vert();
        if let Some(&index) = mesh.tri_verts.iter().find(|&&i| i as usize >= num_vert) {
            return Err(KernelError::IndexOutOfRange { index, num_vert });
        }

        let mut welded: HashMap<[u64; 3], u32> = HashMap::with_capacity(num_vert);
        let mut vert_pos = Vec::with_capacity(num_vert);
        let merge: Vec<u32> = (0..num_vert)
            .map(|v| {
                let p = mesh.position(v);
                *welded.entry(position_key(p)).or_insert_with(|| {
                    vert_pos.push(p);
                    (vert_pos.len() - 1) as u32
                })
            })
            .collect();

        let tri_props: Vec<[u32; 3]> = mesh
            .tri_verts
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        let tri_verts = tri_props
            .iter()
            .map(|t| t.map(|v| merge[v as usize]))
            .collect();

        let extra = mesh.num_prop as usize - 3;
        let properties = (extra > 0).then(|| Properties {
            num_prop: extra,
            values: mesh
                .vert_properties
                .chunks_exact(mesh.num_prop as usize)
                .flat_map(|v| v[3..].iter().map(|&x| f64::from(x)))
                .collect(),
            tri_props,
        });

        let solid = Self {
            vert_pos,
            tri_verts,
            properties,
            patches: None,
        }
        .compact();

        let (open_edges, overused_edges) = solid.edge_report();
        if open_edges > 0 || overused_edges > 0 {
            return Err(KernelError::NotManifold {
                open_edges,
                overused_edges,
            });
        }
        debug!(
            vertices = solid.num_vert(),
            triangles = solid.num_tri(),
            num_prop = mesh.num_prop,
            "Imported mesh"
        );
        Ok(solid)
    }
}
