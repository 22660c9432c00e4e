//! Host adapter and operator
//!
//! The layout engine never talks to a scene directly. A host exposes the
//! four capabilities in [`SceneHost`] and [`execute`] drives one operator run
//! against it: read the selection and cursor, compute placements, then either
//! write every transform back or report why nothing was changed.

pub mod scene;

pub use scene::{ObjectRef, Scene, SceneError, SceneObject};

use log::{info, warn};

use crate::layout::{layout, LayoutConfig, LayoutError, ObjectHandle, Placement, Point3, ZRotation};

/// Narrow interface onto a host application's scene
pub trait SceneHost {
    /// Handle the host uses to address one of its objects
    type Object: ObjectHandle + Clone;

    /// Selected objects, in selection order
    fn selected_objects(&self) -> Vec<Self::Object>;

    /// Point the rings are centered on (usually the 3D cursor)
    fn cursor_origin(&self) -> Point3;

    /// Write a computed transform onto an object
    fn apply_transform(&mut self, object: &Self::Object, position: Point3, rotation: ZRotation);

    /// Surface an error to the user
    fn report_error(&mut self, message: &str);
}

/// Result of one operator run, as reported back to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorStatus {
    /// Every selected object was placed
    Finished,
    /// Nothing was changed; an error was reported
    Cancelled,
}

/// Run the operator and return the placements that were applied.
///
/// On failure the error is passed to [`SceneHost::report_error`] and no
/// transform is written.
pub fn run<H: SceneHost>(
    host: &mut H,
    config: &LayoutConfig,
) -> Result<Vec<Placement<H::Object>>, LayoutError> {
    let objects = host.selected_objects();
    let origin = host.cursor_origin();

    let placements = match layout(objects, origin, config) {
        Ok(placements) => placements,
        Err(err) => {
            warn!("circular stack cancelled: {}", err);
            host.report_error(&err.to_string());
            return Err(err);
        }
    };

    for placement in &placements {
        host.apply_transform(&placement.object, placement.position, placement.rotation);
    }

    let rings = placements.last().map(|p| p.ring + 1).unwrap_or(0);
    info!("placed {} objects on {} rings", placements.len(), rings);
    Ok(placements)
}

/// Run the operator, reducing the outcome to a status
pub fn execute<H: SceneHost>(host: &mut H, config: &LayoutConfig) -> OperatorStatus {
    match run(host, config) {
        Ok(_) => OperatorStatus::Finished,
        Err(_) => OperatorStatus::Cancelled,
    }
}
