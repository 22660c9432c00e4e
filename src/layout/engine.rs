//! Ring placement engine
//!
//! Objects are consumed strictly in order. Each one takes the next occupied
//! slot of the current ring; when a ring runs out of occupied slots the next
//! ring starts one `height_increment` higher. Slot `i` of a ring with a
//! pattern period `p` sits at angle `2π·i/p` plus the ring rotation offset.
//!
//! ## Key Functions
//!
//! - [`layout`]: validate and compute every placement eagerly
//! - [`RingLayout::place`]: lazy form, yields placements one at a time

use std::f64::consts::{PI, TAU};

use log::debug;

use super::config::LayoutConfig;
use super::error::LayoutError;
use super::skip::SlotPattern;
use super::types::*;

/// A validated, ready-to-run ring layout
///
/// Built once from a [`LayoutConfig`]; angles are already in radians and the
/// skip strategy is already expanded into a [`SlotPattern`].
#[derive(Debug, Clone)]
pub struct RingLayout {
    pattern: SlotPattern,
    radius: f64,
    height_increment: f64,
    ring_rotation: f64,
    z_rotation: f64,
    face_center: bool,
    z_offset: f64,
    sort_by_name: bool,
}

impl RingLayout {
    /// Validate `config` and prepare it for placement.
    ///
    /// Fails with [`LayoutError::InvalidSkipPattern`] if the skip strategy
    /// cannot occupy any slot.
    pub fn new(config: &LayoutConfig) -> Result<Self, LayoutError> {
        let pattern = config.skip.resolve()?;
        debug!(
            "resolved skip strategy '{}' to {} of {} slots",
            config.skip,
            pattern.occupied_count(),
            pattern.period()
        );
        Ok(Self {
            pattern,
            radius: config.radius.max(0.0),
            height_increment: config.height_increment,
            ring_rotation: config.ring_rotation_offset_deg.to_radians(),
            z_rotation: config.per_object_z_rotation_deg.to_radians(),
            face_center: config.face_center,
            z_offset: config.z_offset_per_object,
            sort_by_name: config.sort_by_name,
        })
    }

    /// The slot template every ring follows
    pub fn pattern(&self) -> &SlotPattern {
        &self.pattern
    }

    /// Start placing `objects` around `origin`.
    ///
    /// Objects are sorted by name first when the configuration asks for it.
    /// Nothing is computed until the returned iterator is advanced.
    pub fn place<O, I>(&self, objects: I, origin: Point3) -> Result<Placements<'_, O>, LayoutError>
    where
        O: ObjectHandle,
        I: IntoIterator<Item = O>,
    {
        let mut objects: Vec<O> = objects.into_iter().collect();
        if objects.is_empty() {
            return Err(LayoutError::NoObjects);
        }
        if self.sort_by_name {
            // Vec::sort_by is stable, equal names keep their input order
            objects.sort_by(|a, b| a.name().cmp(b.name()));
        }
        debug!(
            "placing {} objects on {} rings",
            objects.len(),
            self.pattern.rings_for(objects.len())
        );
        Ok(Placements {
            layout: self,
            origin,
            objects: objects.into_iter().enumerate(),
        })
    }

    /// Angle (radians) of `slot` on any ring
    pub fn slot_angle(&self, slot: usize) -> f64 {
        TAU * slot as f64 / self.pattern.period() as f64 + self.ring_rotation
    }

    /// Position of the object with global index `index`, sitting in `slot` of `ring`
    pub fn slot_position(&self, origin: Point3, ring: usize, slot: usize, index: usize) -> Point3 {
        let angle = self.slot_angle(slot);
        let ring_z = origin.z + ring as f64 * self.height_increment;
        Point3 {
            x: origin.x + self.radius * angle.cos(),
            y: origin.y + self.radius * angle.sin(),
            z: ring_z + index as f64 * self.z_offset,
        }
    }

    /// Rotation for an object placed at `position`
    fn rotation_at(&self, origin: &Point3, position: &Point3) -> ZRotation {
        if self.face_center {
            // Outward heading flipped by half a turn so +X faces the axis
            ZRotation::Absolute(position.heading_from(origin) + PI + self.z_rotation)
        } else {
            ZRotation::Relative(self.z_rotation)
        }
    }

    fn placement_for<O>(&self, origin: Point3, index: usize, object: O) -> Placement<O> {
        let (ring, slot) = self.pattern.locate(index);
        let position = self.slot_position(origin, ring, slot, index);
        Placement {
            rotation: self.rotation_at(&origin, &position),
            object,
            position,
            ring,
            slot,
        }
    }
}

/// Lazily computed placements, in placement order
///
/// Ring and slot are derived from each object's global index, so dropping the
/// iterator early simply leaves the remaining objects unplaced.
#[derive(Debug)]
pub struct Placements<'a, O> {
    layout: &'a RingLayout,
    origin: Point3,
    objects: std::iter::Enumerate<std::vec::IntoIter<O>>,
}

impl<O> Iterator for Placements<'_, O> {
    type Item = Placement<O>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, object) = self.objects.next()?;
        Some(self.layout.placement_for(self.origin, index, object))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.objects.size_hint()
    }
}

impl<O> ExactSizeIterator for Placements<'_, O> {}

/// Compute every placement for `objects` arranged around `origin`.
///
/// An empty object list is reported before the skip strategy is checked.
///
/// # Example
///
/// ```rust
/// use circular_stacker::layout::{layout, LayoutConfig, Point3};
///
/// let config = LayoutConfig::new().with_radius(10.0).with_sort_by_name(false);
/// let placements = layout(vec!["a", "b", "c", "d", "e"], Point3::ORIGIN, &config).unwrap();
///
/// assert_eq!(placements.len(), 5);
/// assert_eq!(placements[4].ring, 1);
/// assert_eq!(placements[4].position.z, 2.0);
/// ```
pub fn layout<O, I>(objects: I, origin: Point3, config: &LayoutConfig) -> Result<Vec<Placement<O>>, LayoutError>
where
    O: ObjectHandle,
    I: IntoIterator<Item = O>,
{
    let objects: Vec<O> = objects.into_iter().collect();
    if objects.is_empty() {
        return Err(LayoutError::NoObjects);
    }
    let engine = RingLayout::new(config)?;
    let placements = engine.place(objects, origin)?.collect();
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SkipStrategy;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn unsorted() -> LayoutConfig {
        LayoutConfig::new().with_sort_by_name(false)
    }

    #[test]
    fn test_empty_objects() {
        let result = layout(Vec::<String>::new(), Point3::ORIGIN, &unsorted());
        assert_eq!(result.unwrap_err(), LayoutError::NoObjects);
    }

    #[test]
    fn test_empty_objects_reported_before_bad_pattern() {
        let config = unsorted().with_pattern("000");
        let result = layout(Vec::<&str>::new(), Point3::ORIGIN, &config);
        assert_eq!(result.unwrap_err(), LayoutError::NoObjects);
    }

    #[test]
    fn test_invalid_pattern() {
        let config = unsorted().with_pattern("0000");
        let result = layout(vec!["a"], Point3::ORIGIN, &config);
        assert!(matches!(
            result.unwrap_err(),
            LayoutError::InvalidSkipPattern { .. }
        ));
    }

    #[test]
    fn test_first_slot_is_on_positive_x() {
        let config = unsorted().with_radius(3.0);
        let placements = layout(vec!["a"], Point3::new(1.0, 2.0, 3.0), &config).unwrap();
        let p = placements[0].position;
        assert!(close(p.x, 4.0));
        assert!(close(p.y, 2.0));
        assert!(close(p.z, 3.0));
    }

    #[test]
    fn test_ring_rotation_offset() {
        let config = unsorted().with_radius(1.0).with_ring_rotation(90.0);
        let placements = layout(vec!["a"], Point3::ORIGIN, &config).unwrap();
        assert!(close(placements[0].position.x, 0.0));
        assert!(close(placements[0].position.y, 1.0));
    }

    #[test]
    fn test_skipped_slots_leave_gaps() {
        let config = unsorted().with_radius(1.0).with_pattern("0101");
        let placements = layout(vec!["a", "b", "c"], Point3::ORIGIN, &config).unwrap();
        let slots: Vec<_> = placements.iter().map(|p| (p.ring, p.slot)).collect();
        assert_eq!(slots, vec![(0, 1), (0, 3), (1, 1)]);
        assert!(close(placements[0].position.y, 1.0));
        assert!(close(placements[1].position.y, -1.0));
    }

    #[test]
    fn test_negative_height_increment() {
        let config = unsorted().with_skip_count(0).with_height_increment(-0.5);
        let placements = layout(vec!["a", "b", "c"], Point3::ORIGIN, &config).unwrap();
        let heights: Vec<f64> = placements.iter().map(|p| p.position.z).collect();
        assert_eq!(heights, vec![0.0, -0.5, -1.0]);
    }

    #[test]
    fn test_zero_radius_collapses_to_axis() {
        let config = unsorted().with_radius(0.0);
        let origin = Point3::new(2.0, -1.0, 0.0);
        for p in layout(vec!["a", "b", "c"], origin, &config).unwrap() {
            assert_eq!(p.position.x, 2.0);
            assert_eq!(p.position.y, -1.0);
        }
    }

    #[test]
    fn test_face_center_rotation() {
        let config = unsorted().with_radius(2.0).with_face_center(true);
        let placements = layout(vec!["a", "b"], Point3::ORIGIN, &config).unwrap();
        // Slot 0 sits on +X, so facing the axis means pointing along -X
        assert!(close(placements[0].rotation.radians(), PI));
        assert!(placements[0].rotation.is_absolute());
        // Slot 1 sits on +Y (heading π/2)
        assert!(close(placements[1].rotation.radians(), 1.5 * PI));
    }

    #[test]
    fn test_face_center_adds_z_rotation() {
        let config = unsorted()
            .with_radius(2.0)
            .with_face_center(true)
            .with_z_rotation(45.0);
        let placements = layout(vec!["a"], Point3::ORIGIN, &config).unwrap();
        assert!(close(placements[0].rotation.radians(), PI + PI / 4.0));
    }

    #[test]
    fn test_without_face_center_rotation_is_relative() {
        let config = unsorted().with_z_rotation(90.0);
        let placements = layout(vec!["a"], Point3::ORIGIN, &config).unwrap();
        assert_eq!(placements[0].rotation, ZRotation::Relative(PI / 2.0));
    }

    #[test]
    fn test_lazy_placements_report_exact_len() {
        let engine = RingLayout::new(&unsorted()).unwrap();
        let mut iter = engine.place(vec!["a", "b", "c"], Point3::ORIGIN).unwrap();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let config = LayoutConfig::new().with_skip(SkipStrategy::count(0));
        let objects = vec![("b", 0), ("a", 1), ("b", 2)];
        struct Tagged(&'static str, u32);
        impl ObjectHandle for Tagged {
            fn name(&self) -> &str {
                self.0
            }
        }
        let tagged: Vec<Tagged> = objects.into_iter().map(|(n, t)| Tagged(n, t)).collect();
        let placements = layout(tagged, Point3::ORIGIN, &config).unwrap();
        let tags: Vec<u32> = placements.iter().map(|p| p.object.1).collect();
        assert_eq!(tags, vec![1, 0, 2]);
    }
}
