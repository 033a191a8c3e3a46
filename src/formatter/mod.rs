// Output format registry and the six schema renderers
mod compact;
mod erd;
mod json;
mod layered;
mod markdown;
mod minimal;


use crate::error::{DdlPressError, DdlPressResult};
use crate::model::Schema;

/// The registered output encodings.
///
/// Adding a format means adding a variant here, a row in [`Format::ALL`],
/// arms in `name`/`description`, and a render arm. Nothing dispatches on
/// strings beyond the registry lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Compact,
    Json,
    Markdown,
    Layered,
    Erd,
    Minimal,
}

impl Format {
    /// Every format, in registry order.
    pub const ALL: [Format; 6] = [
        Format::Compact,
        Format::Json,
        Format::Markdown,
        Format::Layered,
        Format::Erd,
        Format::Minimal,
    ];

    /// Look up a format by registry name.
    pub fn from_name(name: &str) -> DdlPressResult<Format> {
        Format::ALL
            .iter()
            .find(|format| format.name() == name)
            .copied()
            .ok_or_else(|| {
                let valid = Format::ALL.map(|format| format.name()).join(", ");
                DdlPressError::unknown_format(name, valid)
            })
    }

    /// The name accepted by [`Format::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Format::Compact => "compact",
            Format::Json => "json",
            Format::Markdown => "markdown",
            Format::Layered => "layered",
            Format::Erd => "erd",
            Format::Minimal => "minimal",
        }
    }

    /// One-line description for format listings.
    pub fn description(&self) -> &'static str {
        match self {
            Format::Compact => "Struct-like table blocks with constraint marks",
            Format::Json => "Machine-readable JSON schema map",
            Format::Markdown => "One documentation table plus a relationship list",
            Format::Layered => "Overview, core structure and relationships in three layers",
            Format::Erd => "Entity and relationship description with index hints",
            Format::Minimal => "One line per table, the smallest token footprint",
        }
    }

    /// Render `schema` in this format.
    pub fn render(&self, schema: &Schema) -> DdlPressResult<String> {
        match self {
            Format::Compact => Ok(compact::render(schema)),
            Format::Json => json::render(schema),
            Format::Markdown => Ok(markdown::render(schema)),
            Format::Layered => Ok(layered::render(schema)),
            Format::Erd => Ok(erd::render(schema)),
            Format::Minimal => Ok(minimal::render(schema)),
        }
    }
}
