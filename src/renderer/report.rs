//! Plain-text and TOML placement reports

use serde::Serialize;

use crate::layout::{ObjectHandle, Placement, ZRotation};

/// One placement, flattened for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRecord {
    pub name: String,
    pub ring: usize,
    pub slot: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub rotation_z_deg: f64,
    /// "absolute" replaces the object's rotation, "relative" adds to it
    pub rotation_mode: &'static str,
}

impl<O: ObjectHandle> From<&Placement<O>> for PlacementRecord {
    fn from(placement: &Placement<O>) -> Self {
        let mode = match placement.rotation {
            ZRotation::Absolute(_) => "absolute",
            ZRotation::Relative(_) => "relative",
        };
        Self {
            name: placement.name().to_string(),
            ring: placement.ring,
            slot: placement.slot,
            x: placement.position.x,
            y: placement.position.y,
            z: placement.position.z,
            rotation_z_deg: placement.rotation.radians().to_degrees(),
            rotation_mode: mode,
        }
    }
}

#[derive(Serialize)]
struct TomlReport<'a> {
    placements: &'a [PlacementRecord],
}

/// Render placements as a TOML document with a `[[placements]]` array
pub fn render_toml<O: ObjectHandle>(placements: &[Placement<O>]) -> Result<String, toml::ser::Error> {
    let records: Vec<PlacementRecord> = placements.iter().map(PlacementRecord::from).collect();
    toml::to_string(&TomlReport {
        placements: &records,
    })
}

/// Render placements as an aligned text table
pub fn render_text<O: ObjectHandle>(placements: &[Placement<O>]) -> String {
    let width = placements
        .iter()
        .map(|p| p.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("name".len());

    let mut out = format!(
        "{:<width$}  {:>4}  {:>4}  {:>10}  {:>10}  {:>10}  {:>10}\n",
        "name",
        "ring",
        "slot",
        "x",
        "y",
        "z",
        "rot z",
        width = width
    );
    for p in placements {
        let rotation = match p.rotation {
            ZRotation::Absolute(angle) => format!("={}", fixed(angle.to_degrees())),
            ZRotation::Relative(delta) => format!("+{}", fixed(delta.to_degrees())),
        };
        out.push_str(&format!(
            "{:<width$}  {:>4}  {:>4}  {:>10}  {:>10}  {:>10}  {:>10}\n",
            p.name(),
            p.ring,
            p.slot,
            fixed(p.position.x),
            fixed(p.position.y),
            fixed(p.position.z),
            rotation,
            width = width
        ));
    }
    out
}

/// Three decimals, with `-0.000` folded into `0.000`
fn fixed(value: f64) -> String {
    let s = format!("{:.3}", value);
    if s == "-0.000" {
        "0.000".to_string()
    } else {
        s
    }
}
