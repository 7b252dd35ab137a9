//! Sample grid displaced by the wave field each frame.

use bytemuck::{Pod, Zeroable};

use super::{WaveField, WaveFieldParams};
use crate::params::GridSpec;

/// Vertex data for the ocean patch (position + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// Row-major patch of surface samples; only `y` changes between frames
pub struct OceanGrid {
    pub vertices: Vec<Vertex>,
    resolution: usize,
}

impl OceanGrid {
    /// Create a flat grid in the x/z plane
    pub fn new(spec: &GridSpec) -> Self {
        let n = spec.resolution;
        let mut vertices = Vec::with_capacity(spec.vertex_count());

        for z in 0..=n {
            for x in 0..=n {
                let u = if n == 0 { 0.0 } else { x as f32 / n as f32 };
                let v = if n == 0 { 0.0 } else { z as f32 / n as f32 };
                vertices.push(Vertex {
                    position: [
                        spec.origin[0] + x as f32 * spec.spacing_m,
                        0.0,
                        spec.origin[1] + z as f32 * spec.spacing_m,
                    ],
                    uv: [u, v],
                });
            }
        }

        Self {
            vertices,
            resolution: n,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Rewrite every sample's height from the field
    pub fn update(&mut self, field: &WaveField, params: &WaveFieldParams) {
        for vertex in &mut self.vertices {
            let [x, _, z] = vertex.position;
            vertex.position[1] = field.height(x as f64, z as f64, params) as f32;
        }
    }

    /// Raw bytes for a vertex-buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_creation_matches_spec() {
        let spec = GridSpec::default();
        let grid = OceanGrid::new(&spec);

        assert_eq!(grid.vertices.len(), spec.vertex_count());
        assert_eq!(grid.vertices[0].position, [-1.0, 0.0, -1.0]);

        let last = grid.vertices.last().unwrap();
        assert!((last.position[0] - 9.0).abs() < 1e-4);
        assert!((last.position[2] - 9.0).abs() < 1e-4);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn update_follows_field() {
        let spec = GridSpec {
            resolution: 4,
            ..GridSpec::default()
        };
        let mut grid = OceanGrid::new(&spec);
        let field = WaveField::default();
        let params = WaveFieldParams::new(0.5, 2.0, 1.3).unwrap();

        grid.update(&field, &params);

        for v in &grid.vertices {
            let expected = field.height(v.position[0] as f64, v.position[2] as f64, &params);
            assert!((v.position[1] as f64 - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn update_does_not_accumulate() {
        let mut grid = OceanGrid::new(&GridSpec {
            resolution: 2,
            ..GridSpec::default()
        });
        let field = WaveField::default();
        let params = WaveFieldParams::new(1.0, 1.0, 0.0).unwrap();

        grid.update(&field, &params);
        let first: Vec<f32> = grid.vertices.iter().map(|v| v.position[1]).collect();
        grid.update(&field, &params.with_time(4.0));
        grid.update(&field, &params);
        let again: Vec<f32> = grid.vertices.iter().map(|v| v.position[1]).collect();

        assert_eq!(first, again);
    }

    #[test]
    fn byte_view_covers_all_vertices() {
        let grid = OceanGrid::new(&GridSpec {
            resolution: 3,
            ..GridSpec::default()
        });
        assert_eq!(grid.as_bytes().len(), 16 * std::mem::size_of::<Vertex>());
    }
}
