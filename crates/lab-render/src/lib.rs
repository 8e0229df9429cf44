pub mod camera;
pub mod config;
pub mod pipeline;
pub mod scene;

// Re-export main types
pub use camera::{Camera, Movement};
pub use config::{CameraSettings, ConfigError, Settings, WindowSettings};
pub use pipeline::{prepare_mesh, CameraUniforms, GpuVertex, RenderMesh};
pub use scene::{lab_scene, Scene, SceneObject};
