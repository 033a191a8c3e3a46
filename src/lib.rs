pub mod error;
pub mod formatter;
pub mod model;
pub mod optimizer;
pub mod parser;
pub mod tokens;
