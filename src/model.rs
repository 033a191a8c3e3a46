use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single column parsed from a CREATE TABLE body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name, back-ticks stripped
    pub name: String,
    /// Base type keyword, e.g. `varchar` or `decimal`
    pub data_type: String,
    /// Raw length/precision spec, e.g. `50` or `10,2`
    pub length: Option<String>,
    /// Whether the column allows NULL values (true unless NOT NULL was seen)
    pub nullable: bool,
    /// Default value with surrounding quotes stripped
    pub default: Option<String>,
    /// Whether AUTO_INCREMENT was seen
    pub auto_increment: bool,
    /// Column comment text
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            length: None,
            nullable: true,
            default: None,
            auto_increment: false,
            comment: None,
        }
    }

    /// Render the type with its length spec, e.g. `varchar(50)` or `decimal(10,2)`.
    pub fn sql_type(&self) -> String {
        match &self.length {
            Some(length) => format!("{}({})", self.data_type, length),
            None => self.data_type.clone(),
        }
    }
}

/// Kind of index declared on a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexType {
    /// The primary key, stored as a synthetic index named `PRIMARY`
    Primary,
    /// UNIQUE KEY / UNIQUE INDEX
    Unique,
    /// Plain KEY / INDEX
    Index,
}

/// An index declared in a CREATE TABLE body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Index {
    /// Index name (`PRIMARY` for the synthetic primary-key entry)
    pub name: String,
    /// Ordered column names covered by the index
    pub columns: Vec<String>,
    /// Index kind
    pub index_type: IndexType,
}

impl Index {
    pub fn new(name: impl Into<String>, columns: Vec<String>, index_type: IndexType) -> Self {
        Self {
            name: name.into(),
            columns,
            index_type,
        }
    }
}

/// A foreign-key constraint pointing at another table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name, defaulted to `fk_<table>` when unnamed
    pub name: String,
    /// Local column names
    pub columns: Vec<String>,
    /// Referenced table name
    pub ref_table: String,
    /// Referenced column names, same length as `columns`
    pub ref_columns: Vec<String>,
}

impl ForeignKey {
    pub fn new(
        name: impl Into<String>,
        columns: Vec<String>,
        ref_table: impl Into<String>,
        ref_columns: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            columns,
            ref_table: ref_table.into(),
            ref_columns,
        }
    }
}

/// One parsed CREATE TABLE statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Table name, back-ticks stripped
    pub name: String,
    /// Columns in declaration order
    pub columns: Vec<Column>,
    /// Primary-key column names
    pub primary_keys: Vec<String>,
    /// Declared indexes, including the synthetic PRIMARY entry
    pub indexes: Vec<Index>,
    /// Declared foreign keys
    pub foreign_keys: Vec<ForeignKey>,
    /// Table comment from the options tail
    pub comment: Option<String>,
    /// Storage engine from the options tail
    pub engine: Option<String>,
    /// Character set from the options tail
    pub charset: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_keys: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            comment: None,
            engine: None,
            charset: None,
        }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.name == name)
    }
}

/// Ordered collection of parsed tables, keyed by table name.
///
/// Iteration order follows statement order in the source text. Inserting a
/// duplicate name replaces the earlier definition but keeps its original
/// position. A Schema is never mutated after parsing; `filter_tables` and
/// `exclude_tables` derive new instances instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a table keyed by its name (last definition wins).
    pub fn add_table(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    /// Table names in insertion order.
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Iterate tables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Derive a schema keeping only the named tables. Unknown names are
    /// silently ignored; the source schema is untouched.
    pub fn filter_tables(&self, names: &[&str]) -> Schema {
        Schema {
            tables: self
                .tables
                .iter()
                .filter(|(name, _)| names.contains(&name.as_str()))
                .map(|(name, table)| (name.clone(), table.clone()))
                .collect(),
        }
    }

    /// Derive a schema dropping the named tables.
    pub fn exclude_tables(&self, names: &[&str]) -> Schema {
        Schema {
            tables: self
                .tables
                .iter()
                .filter(|(name, _)| !names.contains(&name.as_str()))
                .map(|(name, table)| (name.clone(), table.clone()))
                .collect(),
        }
    }
}
