//! Lumen core - scene descriptions, settings, and asset loading.
//!
//! This crate provides everything the render core consumes but does not
//! itself compute:
//!
//! - **Render settings**: [`Config`], loaded from JSON
//! - **Camera**: serializable image-plane basis plus a look-at constructor
//! - **Mesh data**: indexed triangles loaded from OBJ files
//! - **Scene files**: named object and light descriptions
//!
//! Everything here fails fast with typed errors before rendering starts;
//! none of it can fail once a frame is in flight.

pub mod camera;
pub mod config;
pub mod error;
pub mod mesh;
pub mod scene_file;

// Re-export commonly used types
pub use camera::Camera;
pub use config::Config;
pub use error::{LoadError, LoadResult};
pub use mesh::Mesh;
pub use scene_file::{AccelDesc, LightDesc, MaterialDesc, ObjectDesc, SceneFile};
