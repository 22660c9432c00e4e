//! Configuration for the ring layout engine

use super::skip::SkipStrategy;

/// Configuration options for ring placement
///
/// Angles are stored in degrees, the unit users type them in, and converted
/// once when a [`RingLayout`](super::RingLayout) is built.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Ring radius in metres, never negative
    pub radius: f64,

    /// Height step between consecutive rings (may be negative)
    pub height_increment: f64,

    /// Rotation of the whole arrangement around the ring axis, degrees
    pub ring_rotation_offset_deg: f64,

    /// Extra z-rotation for every object, degrees
    pub per_object_z_rotation_deg: f64,

    /// Turn each object so its +X axis points at the ring center
    pub face_center: bool,

    /// Extra height per placed object, accumulated over all rings
    pub z_offset_per_object: f64,

    /// Sort objects by name before placing them
    pub sort_by_name: bool,

    /// Which ring slots receive objects
    pub skip: SkipStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            height_increment: 2.0,
            ring_rotation_offset_deg: 0.0,
            per_object_z_rotation_deg: 0.0,
            face_center: false,
            z_offset_per_object: 0.0,
            sort_by_name: true,
            skip: SkipStrategy::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ring radius, clamped at zero
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    /// Set the height step between rings
    pub fn with_height_increment(mut self, height: f64) -> Self {
        self.height_increment = height;
        self
    }

    /// Set the rotation of the ring start, in degrees
    pub fn with_ring_rotation(mut self, degrees: f64) -> Self {
        self.ring_rotation_offset_deg = degrees;
        self
    }

    /// Set the per-object z-rotation, in degrees
    pub fn with_z_rotation(mut self, degrees: f64) -> Self {
        self.per_object_z_rotation_deg = degrees;
        self
    }

    pub fn with_face_center(mut self, face_center: bool) -> Self {
        self.face_center = face_center;
        self
    }

    /// Set the per-object height offset
    pub fn with_z_offset(mut self, offset: f64) -> Self {
        self.z_offset_per_object = offset;
        self
    }

    pub fn with_sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }

    /// Set the skip strategy
    pub fn with_skip(mut self, skip: SkipStrategy) -> Self {
        self.skip = skip;
        self
    }

    /// Shorthand for [`SkipStrategy::pattern`]
    pub fn with_pattern(self, bits: &str) -> Self {
        self.with_skip(SkipStrategy::pattern(bits))
    }

    /// Shorthand for [`SkipStrategy::count`]
    pub fn with_skip_count(self, skip: usize) -> Self {
        self.with_skip(SkipStrategy::count(skip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.height_increment, 2.0);
        assert_eq!(config.ring_rotation_offset_deg, 0.0);
        assert_eq!(config.per_object_z_rotation_deg, 0.0);
        assert_eq!(config.z_offset_per_object, 0.0);
        assert!(config.sort_by_name);
        assert!(!config.face_center);
        assert_eq!(config.skip, SkipStrategy::pattern("1111"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_radius(10.0)
            .with_height_increment(-1.5)
            .with_skip_count(2)
            .with_face_center(true);

        assert_eq!(config.radius, 10.0);
        assert_eq!(config.height_increment, -1.5);
        assert_eq!(config.skip, SkipStrategy::ByCount(2));
        assert!(config.face_center);
    }

    #[test]
    fn test_negative_radius_clamped() {
        let config = LayoutConfig::new().with_radius(-3.0);
        assert_eq!(config.radius, 0.0);
    }
}
