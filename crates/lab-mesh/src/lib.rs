//! Procedural geometry for the lab scene.
//!
//! Every generator is a pure function of its parameters and returns a
//! [`MeshData`] whose indices are valid for its positions. Invalid parameters
//! are rejected with [`lab_core::LabError::InvalidArgument`] before anything
//! is allocated.

pub mod mesh_data;
mod params;
pub mod primitives;
pub mod terrain;

pub use mesh_data::MeshData;
pub use primitives::{create_cube, create_cylinder, create_plane, create_sphere};
pub use terrain::{create_terrain_grid, TerrainGrid};
