//! CSV layout loader.
//!
//! # CSV format
//!
//! One row per placed object, in placement order:
//!
//! ```csv
//! name,x,y
//! Statue Of Endless Fortune,12,8
//! Chair,3,4
//! Keg,3,5
//! ```
//!
//! `name` may be empty (unnamed object).  Coordinates are tile units and may
//! be fractional.  A later row on an already-used tile replaces the earlier
//! object, as [`Location::place`] does.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{ActorPath, Location, WorldError, WorldResult};

#[derive(Deserialize)]
struct LayoutRecord {
    name: String,
    x:    f32,
    y:    f32,
}

/// Load a [`Location`] named after the file stem.
pub fn load_layout_csv(path: &Path, actor: ActorPath) -> WorldResult<Location> {
    let file = std::fs::File::open(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_layout_reader(file, name, actor)
}

/// Like [`load_layout_csv`] but accepts any `Read` source.
pub fn load_layout_reader<R: Read>(
    reader: R,
    name:   impl Into<String>,
    actor:  ActorPath,
) -> WorldResult<Location> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut location = Location::new(name, actor);

    let headers = csv_reader
        .headers()
        .map_err(|e| WorldError::Parse(e.to_string()))?
        .clone();

    for result in csv_reader.records() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let record: LayoutRecord = row
            .deserialize(Some(&headers))
            .map_err(|e| WorldError::Parse(e.to_string()))?;
        if !record.x.is_finite() || !record.y.is_finite() {
            let line = row.position().map_or(0, |p| p.line());
            return Err(WorldError::Parse(format!(
                "line {line}: non-finite coordinate ({}, {})",
                record.x,
                record.y,
            )));
        }
        location.place(at_core::TilePos::new(record.x, record.y), record.name);
    }

    Ok(location)
}
