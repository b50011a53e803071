//! Schema Parser for Generated Rust Code
//!
//! This module provides utilities for parsing generated Rust schema code
//! into structured data that can be used for validation, analysis, or tooling.
//! Supports SQLite, PostgreSQL, and MySQL (future) generated code.
//!
//! # Example
//!
//! ```rust,ignore
//! use drizzle_migrations::parser::SchemaParser;
//! use drizzle_types::Dialect;
//!
//! let code = r#"
//! #[SQLiteTable]
//! struct Users {
//!     #[column(primary, autoincrement)]
//!     id: i64,
//!     name: String,
//! }
//! "#;
//!
//! let result = SchemaParser::parse(code);
//! let users = result.table("Users", Dialect::SQLite).unwrap();
//! assert!(users.field("id").unwrap().has_attr("primary"));
//! ```

mod combinators;
mod types;

pub use types::*;

use std::collections::HashMap;

use drizzle_types::Dialect;

use combinators::{parse_index_struct, parse_schema_struct, parse_table_struct};

// =============================================================================
// Dialect Extensions
// =============================================================================

/// Extension trait for parser-specific dialect functionality
pub trait DialectParserExt {
    /// Get the table attribute prefix for this dialect
    fn table_prefix(&self) -> &'static str;
    /// Get the index attribute prefix for this dialect
    fn index_prefix(&self) -> &'static str;
    /// Get the schema derive attribute for this dialect
    fn schema_derive(&self) -> &'static str;
}

impl DialectParserExt for Dialect {
    fn table_prefix(&self) -> &'static str {
        match self {
            Dialect::SQLite => "#[SQLiteTable",
            Dialect::PostgreSQL => "#[PostgresTable",
            Dialect::MySQL => "#[MySQLTable",
        }
    }

    fn index_prefix(&self) -> &'static str {
        match self {
            Dialect::SQLite => "#[SQLiteIndex",
            Dialect::PostgreSQL => "#[PostgresIndex",
            Dialect::MySQL => "#[MySQLIndex",
        }
    }

    fn schema_derive(&self) -> &'static str {
        match self {
            Dialect::SQLite => "#[derive(SQLiteSchema)]",
            Dialect::PostgreSQL => "#[derive(PostgresSchema)]",
            Dialect::MySQL => "#[derive(MySQLSchema)]",
        }
    }
}

// =============================================================================
// Schema Parser
// =============================================================================

/// Parser for generated Rust schema code
pub struct SchemaParser;

impl SchemaParser {
    /// Parse generated Rust schema code into structured data
    /// Automatically detects SQLite or PostgreSQL dialect
    pub fn parse(code: &str) -> ParseResult {
        let mut result = ParseResult::default();

        // Parse all table structs
        for (dialect, table) in Self::parse_tables(code) {
            if result.dialect == Dialect::default() {
                result.dialect = dialect;
            }
            let key = format!("{}:{}", dialect_key(dialect), table.name);
            result.tables.insert(key, table);
        }

        // Parse all index structs
        for (dialect, index) in Self::parse_indexes(code) {
            let key = format!("{}:{}", dialect_key(dialect), index.name);
            result.indexes.insert(key, index);
        }

        // Parse schema struct (if present)
        if let Some((dialect, schema)) = Self::parse_schema(code) {
            result.dialect = dialect;
            result.schema = Some(schema);
        }

        result
    }

    /// Parse all table structs from code
    fn parse_tables(code: &str) -> Vec<(Dialect, ParsedTable)> {
        let mut tables = Vec::new();

        // Try each dialect
        for (prefix, dialect) in [
            ("#[SQLiteTable", Dialect::SQLite),
            ("#[PostgresTable", Dialect::PostgreSQL),
            ("#[MySQLTable", Dialect::MySQL),
        ] {
            let mut remaining = code;
            while let Some(start) = remaining.find(prefix) {
                let slice = &remaining[start..];
                if let Ok((_, mut table)) = parse_table_struct(slice) {
                    table.dialect = dialect;
                    tables.push((dialect, table));
                }
                remaining = &remaining[start + prefix.len()..];
            }
        }

        tables
    }

    /// Parse all index structs from code
    fn parse_indexes(code: &str) -> Vec<(Dialect, ParsedIndex)> {
        let mut indexes = Vec::new();

        for (prefix, dialect) in [
            ("#[SQLiteIndex", Dialect::SQLite),
            ("#[PostgresIndex", Dialect::PostgreSQL),
            ("#[MySQLIndex", Dialect::MySQL),
        ] {
            let mut remaining = code;
            while let Some(start) = remaining.find(prefix) {
                let slice = &remaining[start..];
                if let Ok((_, mut index)) = parse_index_struct(slice) {
                    index.dialect = dialect;
                    indexes.push((dialect, index));
                }
                remaining = &remaining[start + prefix.len()..];
            }
        }

        indexes
    }

    /// Parse schema struct from code
    fn parse_schema(code: &str) -> Option<(Dialect, ParsedSchema)> {
        for (derive, dialect) in [
            ("#[derive(SQLiteSchema)]", Dialect::SQLite),
            ("#[derive(PostgresSchema)]", Dialect::PostgreSQL),
            ("#[derive(MySQLSchema)]", Dialect::MySQL),
        ] {
            if let Some(start) = code.find(derive) {
                let slice = &code[start..];
                if let Ok((_, mut schema)) = parse_schema_struct(slice) {
                    schema.dialect = dialect;
                    return Some((dialect, schema));
                }
            }
        }
        None
    }
}

/// Get the key prefix for a dialect
fn dialect_key(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::SQLite => "sqlite",
        Dialect::PostgreSQL => "postgres",
        Dialect::MySQL => "mysql",
    }
}

// =============================================================================
// Tests
// =============================================================================
