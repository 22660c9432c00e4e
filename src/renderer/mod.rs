//! Output for computed placements
//!
//! Placements can be printed as a text table, serialized to TOML, or drawn
//! as a top-down SVG preview.

pub mod config;
pub mod report;
pub mod svg;

pub use config::SvgConfig;
pub use report::{render_text, render_toml, PlacementRecord};
pub use svg::render_svg;
