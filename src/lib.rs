//! Circular Stacker - distribute objects in stacked circular rings
//!
//! This library provides a pure ring layout engine, a narrow host adapter
//! for applying its results to a scene, and text/TOML/SVG output.
//!
//! # Example
//!
//! ```rust
//! use circular_stacker::layout::{layout, LayoutConfig, Point3};
//!
//! let config = LayoutConfig::new().with_radius(3.0).with_pattern("1010");
//! let placements = layout(vec!["Cube", "Cone", "Torus"], Point3::ORIGIN, &config).unwrap();
//!
//! // Two objects per ring, so the third starts a new ring
//! assert_eq!(placements[2].ring, 1);
//! ```

pub mod error;
pub mod host;
pub mod layout;
pub mod renderer;
pub mod settings;

pub use error::TomlError;
pub use host::{execute, OperatorStatus, Scene, SceneError, SceneHost};
pub use layout::{layout, LayoutConfig, LayoutError, Placement, Point3, SkipStrategy, ZRotation};
pub use renderer::{render_svg, render_text, render_toml, SvgConfig};
pub use settings::{Settings, SettingsError};

use thiserror::Error;

/// Errors that can occur while stacking a scene end to end
#[derive(Debug, Error)]
pub enum StackError {
    /// Error while loading the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error while loading settings
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Error while serializing the report
    #[error("output error: {0}")]
    Output(#[from] toml::ser::Error),
}

/// How placements are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
    Svg,
}

/// Configuration for the complete stacking pipeline
#[derive(Debug, Clone, Default)]
pub struct StackConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Output format
    pub format: OutputFormat,
}

impl StackConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Run the operator on `scene` and render the applied placements.
///
/// The scene is modified in place. When the layout fails the scene is left
/// untouched and the error message is also recorded in `scene.reports`.
///
/// # Example
///
/// ```rust
/// use circular_stacker::{stack_scene, Scene, StackConfig};
///
/// let mut scene = Scene::from_str(r#"
///     [[objects]]
///     name = "Cube"
///     [[objects]]
///     name = "Cone"
/// "#).unwrap();
///
/// let report = stack_scene(&mut scene, &StackConfig::new()).unwrap();
/// assert!(report.contains("Cube"));
/// assert_eq!(scene.object("Cone").unwrap().location.x, 5.0);
/// ```
pub fn stack_scene(scene: &mut Scene, config: &StackConfig) -> Result<String, StackError> {
    let origin = scene.cursor_origin();
    let placements = host::run(scene, &config.layout)?;

    let output = match config.format {
        OutputFormat::Text => render_text(&placements),
        OutputFormat::Toml => render_toml(&placements)?,
        OutputFormat::Svg => render_svg(&placements, &origin, &config.svg),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SceneObject;

    fn three_objects() -> Scene {
        Scene::default()
            .with_object(SceneObject::new("c"))
            .with_object(SceneObject::new("a"))
            .with_object(SceneObject::new("b"))
    }

    #[test]
    fn test_stack_scene_text() {
        let mut scene = three_objects();
        let report = stack_scene(&mut scene, &StackConfig::new()).unwrap();
        let names: Vec<&str> = report
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stack_scene_svg() {
        let mut scene = three_objects();
        let config = StackConfig::new().with_format(OutputFormat::Svg);
        let svg = stack_scene(&mut scene, &config).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_stack_scene_toml() {
        let mut scene = three_objects();
        let config = StackConfig::new().with_format(OutputFormat::Toml);
        let out = stack_scene(&mut scene, &config).unwrap();
        assert!(out.contains("[[placements]]"));
    }

    #[test]
    fn test_stack_scene_error_leaves_scene() {
        let mut scene = three_objects();
        let config =
            StackConfig::new().with_layout(LayoutConfig::new().with_pattern("000"));
        let err = stack_scene(&mut scene, &config).unwrap_err();
        assert!(matches!(err, StackError::Layout(LayoutError::InvalidSkipPattern { .. })));
        assert_eq!(scene.reports.len(), 1);
        assert!(scene.objects.iter().all(|o| o.location == Point3::ORIGIN));
    }
}
