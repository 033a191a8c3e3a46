use serde::Serialize;

use crate::error::DdlPressResult;
use crate::formatter::Format;
use crate::model::{Schema, Table};
use crate::parser;

/// High-level entry point: parse DDL once, derive filtered views, render
/// any registered format and compute aggregate statistics.
#[derive(Debug, Clone, Default)]
pub struct DdlOptimizer {
    schema: Schema,
}

impl DdlOptimizer {
    /// Parse DDL text into a fresh optimizer.
    pub fn from_text(ddl: &str) -> Self {
        Self {
            schema: parser::parse(ddl),
        }
    }

    /// Wrap an already-built schema.
    pub fn from_schema(schema: Schema) -> Self {
        Self { schema }
    }

    /// Parse and render in one step.
    pub fn optimize(ddl: &str, format_name: &str) -> DdlPressResult<String> {
        Self::from_text(ddl).format(format_name)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Render the parsed schema using the named format.
    pub fn format(&self, format_name: &str) -> DdlPressResult<String> {
        Format::from_name(format_name)?.render(&self.schema)
    }

    /// Derive an optimizer keeping only the named tables; unknown names are
    /// ignored.
    pub fn filter_tables(&self, names: &[&str]) -> Self {
        Self {
            schema: self.schema.filter_tables(names),
        }
    }

    /// Derive an optimizer without the named tables.
    pub fn exclude_tables(&self, names: &[&str]) -> Self {
        Self {
            schema: self.schema.exclude_tables(names),
        }
    }

    pub fn table_count(&self) -> usize {
        self.schema.len()
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.schema.table_names()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.schema.table(name)
    }

    /// Aggregate counts over the parsed schema.
    pub fn statistics(&self) -> SchemaStatistics {
        SchemaStatistics::from_schema(&self.schema)
    }

    /// Names and descriptions of the registered formats, in registry order.
    pub fn list_formats() -> Vec<(&'static str, &'static str)> {
        Format::ALL
            .iter()
            .map(|format| (format.name(), format.description()))
            .collect()
    }
}

/// Aggregate schema counts. The index count includes the synthetic
/// `PRIMARY` index registered for each primary key declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SchemaStatistics {
    pub total_tables: usize,
    pub total_columns: usize,
    pub total_indexes: usize,
    pub total_foreign_keys: usize,
    /// Rounded to two decimal places; 0 for an empty schema.
    pub avg_columns_per_table: f64,
}

impl SchemaStatistics {
    pub fn from_schema(schema: &Schema) -> Self {
        let total_tables = schema.len();
        let total_columns: usize = schema.iter().map(|(_, table)| table.columns.len()).sum();
        let total_indexes: usize = schema.iter().map(|(_, table)| table.indexes.len()).sum();
        let total_foreign_keys: usize = schema
            .iter()
            .map(|(_, table)| table.foreign_keys.len())
            .sum();
        let avg_columns_per_table = if total_tables == 0 {
            0.0
        } else {
            (total_columns as f64 / total_tables as f64 * 100.0).round() / 100.0
        };

        Self {
            total_tables,
            total_columns,
            total_indexes,
            total_foreign_keys,
            avg_columns_per_table,
        }
    }
}
