//! Ring layout engine
//!
//! This module turns an ordered list of objects, an origin and a
//! [`LayoutConfig`] into one [`Placement`] per object. It is a pure
//! computation: nothing here touches the host scene.

pub mod config;
pub mod engine;
pub mod error;
pub mod skip;
pub mod types;

pub use config::LayoutConfig;
pub use engine::{layout, Placements, RingLayout};
pub use error::LayoutError;
pub use skip::{SkipStrategy, SlotPattern};
pub use types::*;
