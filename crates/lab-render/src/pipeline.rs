use bytemuck::{Pod, Zeroable};
use lab_math::{DMat4, Point3, Vector3};
use lab_mesh::MeshData;

use crate::camera::Camera;

/// Vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl GpuVertex {
    pub fn from_mesh_vertex(pos: Point3, normal: Vector3) -> Self {
        Self {
            position: pos.as_vec3().to_array(),
            normal: normal.as_vec3().to_array(),
        }
    }
}

/// Prepared render data ready for GPU upload.
#[derive(Debug, Clone)]
pub struct RenderMesh {
    pub vertices: Vec<GpuVertex>,
    pub indices: Vec<u32>,
    pub vertex_buffer_bytes: Vec<u8>,
    pub index_buffer_bytes: Vec<u8>,
}

impl RenderMesh {
    /// Element count for an indexed triangle-list draw call.
    pub fn element_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

/// Convert a generated mesh to GPU-ready buffers.
///
/// Vertices without a normal get `+Y`.
pub fn prepare_mesh(mesh: &MeshData) -> RenderMesh {
    let normals = mesh.normals();
    let vertices: Vec<GpuVertex> = mesh
        .positions()
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            let normal = normals.get(i).copied().unwrap_or(Vector3::Y);
            GpuVertex::from_mesh_vertex(pos, normal)
        })
        .collect();
    let indices = mesh.indices().to_vec();

    RenderMesh {
        vertex_buffer_bytes: bytemuck::cast_slice(&vertices).to_vec(),
        index_buffer_bytes: bytemuck::cast_slice(&indices).to_vec(),
        vertices,
        indices,
    }
}

/// Uniform buffer for camera matrices, column-major.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_projection: [[f32; 4]; 4],
    pub eye_position: [f32; 4],
}

impl CameraUniforms {
    pub fn from_camera(camera: &Camera, aspect: f64, near: f64, far: f64) -> Self {
        let view = camera.view_transform();
        let projection = camera.projection_transform(aspect, near, far);
        let eye = camera.position().as_vec3();

        Self {
            view: to_f32_columns(view),
            projection: to_f32_columns(projection),
            view_projection: to_f32_columns(projection * view),
            eye_position: eye.extend(1.0).to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn to_f32_columns(m: DMat4) -> [[f32; 4]; 4] {
    m.as_mat4().to_cols_array_2d()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_core::Tolerance;
    use lab_mesh::{create_cube, create_plane};

    #[test]
    fn test_gpu_vertex_size() {
        // 3 floats (position) + 3 floats (normal) = 24 bytes
        assert_eq!(std::mem::size_of::<GpuVertex>(), 24);
    }

    #[test]
    fn test_buffer_byte_sizes() {
        let mesh = create_cube(1.0, 1.0, 1.0).unwrap();
        let render_mesh = prepare_mesh(&mesh);

        assert_eq!(render_mesh.vertices.len(), 24);
        assert_eq!(render_mesh.element_count(), 36);
        assert_eq!(render_mesh.vertex_buffer_bytes.len(), 24 * 24);
        assert_eq!(render_mesh.index_buffer_bytes.len(), 36 * 4);
    }

    #[test]
    fn test_index_bytes_are_native_u32() {
        let render_mesh = prepare_mesh(&create_plane(1.0, 1.0).unwrap());
        let third = u32::from_ne_bytes(render_mesh.index_buffer_bytes[8..12].try_into().unwrap());
        assert_eq!(third, render_mesh.indices[2]);
    }

    #[test]
    fn test_mesh_without_normals_defaults_up() {
        let render_mesh = prepare_mesh(&create_plane(2.0, 2.0).unwrap());
        assert!(render_mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
        assert_eq!(render_mesh.vertices[0].position, [-1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_computed_normals_are_uploaded() {
        let mut mesh = create_cube(2.0, 2.0, 2.0).unwrap();
        mesh.compute_normals();
        let render_mesh = prepare_mesh(&mesh);
        // Front face comes first and faces +Z.
        assert_eq!(render_mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_camera_uniforms_from_camera() {
        let camera = Camera::default();
        let uniforms = CameraUniforms::from_camera(&camera, 1.0, 0.1, 100.0);
        let tol = Tolerance::single_precision();

        assert_eq!(uniforms.eye_position, [0.0, 0.0, 7.0, 1.0]);
        // Default camera looks down -Z from z = 7: view translation is -7 on z.
        assert!(tol.linear_eq(f64::from(uniforms.view[3][2]), -7.0));
        assert!(tol.linear_eq(f64::from(uniforms.projection[2][3]), -1.0));
        assert_eq!(uniforms.as_bytes().len(), 3 * 64 + 16);
    }
}
