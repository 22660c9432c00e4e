//! Preview settings

/// Drawing parameters for the top-down preview
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Blank margin around the drawing, in pixels
    pub viewbox_padding: f64,
    /// Pixels per scene unit
    pub scale: f64,
    pub marker_radius: f64,
    /// Emit `<?xml ...?>` ahead of the root element
    pub xml_declaration: bool,
    pub pretty_print: bool,
    /// Prepended to every CSS class the preview emits
    pub class_prefix: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            viewbox_padding: 20.0,
            scale: 20.0,
            marker_radius: 6.0,
            xml_declaration: true,
            pretty_print: true,
            class_prefix: "cs-".to_string(),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zoom the preview; marker size stays fixed in pixels
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Single-line output when `false`
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fit_a_five_unit_ring() {
        let config = SvgConfig::default();
        assert_eq!(config.scale * 5.0, 100.0);
        assert!(config.marker_radius < config.scale);
        assert!(config.xml_declaration);
        assert_eq!(config.class_prefix, "cs-");
    }

    #[test]
    fn test_builders() {
        let config = SvgConfig::new()
            .with_scale(50.0)
            .with_xml_declaration(false)
            .with_pretty_print(false);
        assert_eq!(config.scale, 50.0);
        assert!(!config.xml_declaration);
        assert!(!config.pretty_print);
    }
}
