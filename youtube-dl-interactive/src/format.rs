use serde::{Serialize, Serializer, ser::SerializeMap};
use std::fmt::Display;

pub const FORMAT: &str = "format";
pub const EXTENSION: &str = "extension";
pub const NOTE: &str = "note";
pub const RESOLUTION: &str = "resolution";

/// One row of the format table printed by `<engine> -F`.
///
/// Cells are kept in header order. Columns are whatever the header row
/// declared, so lookups of unknown columns yield an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatRecord {
    cells: Vec<(String, String)>,
}

impl FormatRecord {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, column: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn format(&self) -> &str {
        self.get(FORMAT)
    }

    pub fn extension(&self) -> &str {
        self.get(EXTENSION)
    }

    pub fn note(&self) -> &str {
        self.get(NOTE)
    }

    pub fn resolution(&self) -> &str {
        self.get(RESOLUTION)
    }

    pub fn is_video_only(&self) -> bool {
        self.note().contains("video only")
    }
}

impl Display for FormatRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} | {:<5} | {:<11} | {}",
            self.format(),
            self.extension(),
            self.resolution(),
            self.note()
        )
    }
}

impl Serialize for FormatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
