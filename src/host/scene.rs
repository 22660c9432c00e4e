//! In-memory scene
//!
//! A minimal stand-in for a host application's scene: named objects with a
//! location and a z-rotation, a selection, and a 3D cursor. Scenes are loaded
//! from TOML:
//!
//! ```toml
//! cursor = [0.0, 0.0, 0.0]
//!
//! [[objects]]
//! name = "Cube"
//! location = [1.0, 0.0, 0.0]
//! rotation_z_deg = 15.0
//!
//! [[objects]]
//! name = "Light"
//! selected = false
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::TomlError;
use crate::layout::{ObjectHandle, Point3, ZRotation};

use super::SceneHost;

/// Errors that can occur when loading a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    ParseError(#[from] TomlError),
    #[error("Duplicate object name '{0}'")]
    DuplicateName(String),
}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::ParseError(err.into())
    }
}

/// One object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub location: Point3,
    /// Euler z-rotation, radians
    pub rotation_z: f64,
    pub selected: bool,
}

impl SceneObject {
    /// A selected object at the scene origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Point3::ORIGIN,
            rotation_z: 0.0,
            selected: true,
        }
    }

    pub fn with_rotation_z(mut self, radians: f64) -> Self {
        self.rotation_z = radians;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

/// Handle to an object inside a [`Scene`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    index: usize,
    name: String,
}

impl ObjectRef {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl ObjectHandle for ObjectRef {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A scene with objects, a selection and a cursor
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub cursor: Point3,
    pub objects: Vec<SceneObject>,
    /// Messages passed to [`SceneHost::report_error`]
    pub reports: Vec<String>,
}

#[derive(Deserialize)]
struct TomlScene {
    cursor: Option<[f64; 3]>,
    #[serde(default)]
    objects: Vec<TomlObject>,
}

#[derive(Deserialize)]
struct TomlObject {
    name: String,
    location: Option<[f64; 3]>,
    #[serde(default)]
    rotation_z_deg: f64,
    #[serde(default = "default_selected")]
    selected: bool,
}

fn default_selected() -> bool {
    true
}

impl Scene {
    pub fn new(cursor: Point3) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// Add an object, keeping scene order
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let parsed: TomlScene = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut objects = Vec::with_capacity(parsed.objects.len());
        for obj in parsed.objects {
            if !seen.insert(obj.name.clone()) {
                return Err(SceneError::DuplicateName(obj.name));
            }
            objects.push(SceneObject {
                name: obj.name,
                location: obj.location.map(Point3::from).unwrap_or_default(),
                rotation_z: obj.rotation_z_deg.to_radians(),
                selected: obj.selected,
            });
        }

        Ok(Scene {
            cursor: parsed.cursor.map(Point3::from).unwrap_or_default(),
            objects,
            reports: Vec::new(),
        })
    }

    /// Look up an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }
}

impl SceneHost for Scene {
    type Object = ObjectRef;

    fn selected_objects(&self) -> Vec<ObjectRef> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.selected)
            .map(|(index, o)| ObjectRef {
                index,
                name: o.name.clone(),
            })
            .collect()
    }

    fn cursor_origin(&self) -> Point3 {
        self.cursor
    }

    fn apply_transform(&mut self, object: &ObjectRef, position: Point3, rotation: ZRotation) {
        if let Some(target) = self.objects.get_mut(object.index) {
            target.location = position;
            target.rotation_z = rotation.resolve(target.rotation_z);
        }
    }

    fn report_error(&mut self, message: &str) {
        self.reports.push(message.to_string());
    }
}
