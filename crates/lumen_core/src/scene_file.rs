//! Scene description files.
//!
//! A scene file is a single JSON document holding two maps keyed by name:
//! `objects` and `lights`. Object and material kinds are tagged with a
//! `type` field:
//!
//! ```json
//! {
//!   "objects": {
//!     "ground": {
//!       "type": "plane",
//!       "position": [0, 0, 0],
//!       "normal": [0, 1, 0],
//!       "material": { "type": "lambertian", "albedo": [0.8, 0.8, 0.8] }
//!     }
//!   },
//!   "lights": {
//!     "key": { "position": [0, 10, 0], "color": [1, 1, 1], "power": 0.9 }
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use lumen_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::LoadResult;

/// Material attached to a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialDesc {
    Lambertian {
        albedo: Vec3,
    },
    Metal {
        albedo: Vec3,
        reflectivity: f32,
        shininess: f32,
        #[serde(default)]
        fuzz: f32,
    },
    Dielectric {
        index: f32,
        reflectivity: f32,
        shininess: f32,
    },
    Phong {
        albedo: Vec3,
        reflectivity: f32,
        shininess: f32,
    },
    Emissive {
        emission: Vec3,
    },
}

/// How mesh triangles are organized for intersection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelDesc {
    /// Median-split KD tree (the default).
    #[default]
    Kd,
    /// Plain linear scan.
    List,
}

/// A named top-level scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectDesc {
    Sphere {
        origin: Vec3,
        radius: f32,
        material: MaterialDesc,
    },
    Triangle {
        vertices: [Vec3; 3],
        material: MaterialDesc,
    },
    Plane {
        position: Vec3,
        normal: Vec3,
        material: MaterialDesc,
    },
    /// A mesh referenced by OBJ path, placed by scaling then translating.
    Mesh {
        path: String,
        #[serde(default = "default_scale")]
        scale: Vec3,
        #[serde(default)]
        translation: Vec3,
        #[serde(default)]
        accel: AccelDesc,
        material: MaterialDesc,
    },
}

fn default_scale() -> Vec3 {
    Vec3::ONE
}

/// A named point light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDesc {
    pub position: Vec3,
    pub color: Vec3,
    pub power: f32,
}

/// Top-level scene document: named objects plus named lights.
///
/// Writing the same name twice keeps the last value; nothing in the
/// renderer depends on map order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneFile {
    pub objects: HashMap<String, ObjectDesc>,
    pub lights: HashMap<String, LightDesc>,
}

impl SceneFile {
    /// Load a scene description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> LoadResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the scene description as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> LoadResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Insert an object under `name`, replacing any previous holder.
    pub fn add_object(&mut self, name: impl Into<String>, object: ObjectDesc) {
        self.objects.insert(name.into(), object);
    }

    /// Insert a light under `name`, replacing any previous holder.
    pub fn add_light(&mut self, name: impl Into<String>, light: LightDesc) {
        self.lights.insert(name.into(), light);
    }
}
