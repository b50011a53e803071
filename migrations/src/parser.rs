//! Schema Parser for Generated Rust Code
//!
//! This module provides utilities for parsing generated Rust schema code
//! into structured data that can be used for validation, analysis, or tooling.
//! Supports both SQLite and PostgreSQL generated code.
//!
//! # Example
//!
//! ```rust,ignore
//! use drizzle_migrations::parser::SchemaParser;
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
//! let users = result.table("Users").unwrap();
//! assert!(users.field("id").unwrap().has_attr("primary"));
//! ```

use std::collections::HashMap;

// =============================================================================
// Dialect (re-exported from drizzle-types)
// =============================================================================

/// Re-export the shared Dialect enum
pub use drizzle_types::Dialect;

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
// Parsed Types
// =============================================================================

/// Parsed table struct from generated code
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Struct name (PascalCase)
    pub name: String,
    /// Full table attribute (e.g., "#[SQLiteTable(strict)]" or "#[PostgresTable]")
    pub attr: String,
    /// Parsed fields
    pub fields: Vec<ParsedField>,
    /// Detected dialect
    pub dialect: Dialect,
}

/// Parsed index struct from generated code
#[derive(Debug, Clone, Default)]
pub struct ParsedIndex {
    /// Struct name (PascalCase)
    pub name: String,
    /// Full index attribute (e.g., "#[SQLiteIndex(unique)]" or "#[PostgresIndex(unique)]")
    pub attr: String,
    /// Column references (e.g., ["Users::id", "Users::name"])
    pub columns: Vec<String>,
    /// Detected dialect
    pub dialect: Dialect,
}

/// Parsed schema struct from generated code
#[derive(Debug, Clone, Default)]
pub struct ParsedSchema {
    /// Struct name (e.g., "AppSchema")
    pub name: String,
    /// Schema members (field_name -> type_name)
    pub members: HashMap<String, String>,
    /// Detected dialect
    pub dialect: Dialect,
}

/// Parsed field from generated struct
#[derive(Debug, Clone, Default)]
pub struct ParsedField {
    /// Field name (snake_case)
    pub name: String,
    /// Rust type (e.g., "i64", "Option<String>")
    pub ty: String,
    /// Column attributes (e.g., "#[column(primary, autoincrement)]")
    pub attrs: Vec<String>,
}

/// Result of parsing schema code
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Parsed table structs
    pub tables: HashMap<String, ParsedTable>,
    /// Parsed index structs
    pub indexes: HashMap<String, ParsedIndex>,
    /// Parsed schema struct (if present)
    pub schema: Option<ParsedSchema>,
    /// Detected dialect (based on first found table/schema)
    pub dialect: Dialect,
}

// =============================================================================
// Implementations
// =============================================================================

impl ParsedTable {
    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&ParsedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if table has a specific attribute in its #[SQLiteTable(...)]
    pub fn has_table_attr(&self, attr: &str) -> bool {
        self.attr.contains(attr)
    }

    /// Get all field names
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

impl ParsedIndex {
    /// Check if index is unique
    pub fn is_unique(&self) -> bool {
        self.attr.contains("unique")
    }

    /// Get the table name from the first column reference
    pub fn table_name(&self) -> Option<&str> {
        self.columns.first().and_then(|c| c.split("::").next())
    }
}

impl ParsedField {
    /// Check if field has a specific attribute
    pub fn has_attr(&self, attr: &str) -> bool {
        self.attrs.iter().any(|a| a.contains(attr))
    }

    /// Get the value of an attribute assignment (e.g., `default = 42` -> Some("42"))
    ///
    /// # Example
    /// ```rust,ignore
    /// // For #[column(default = 42, references = Users::id)]
    /// field.attr_value("default") // -> Some("42")
    /// field.attr_value("references") // -> Some("Users::id")
    /// field.attr_value("primary") // -> None (not an assignment)
    /// ```
    pub fn attr_value(&self, key: &str) -> Option<String> {
        for attr in &self.attrs {
            if let Some(value) = Self::extract_attr_value(attr, key) {
                return Some(value);
            }
        }
        None
    }

    /// Get all attribute key-value pairs as a HashMap
    ///
    /// # Example
    /// ```rust,ignore
    /// // For #[column(default = 42, references = Users::id, primary)]
    /// field.attr_values() // -> {"default": "42", "references": "Users::id"}
    /// ```
    pub fn attr_values(&self) -> HashMap<String, String> {
        let mut result = HashMap::new();
        for attr in &self.attrs {
            // Extract content inside #[column(...)]
            if let Some(start) = attr.find('(') {
                if let Some(end) = attr.rfind(')') {
                    let content = &attr[start + 1..end];
                    // Parse key = value pairs
                    for part in Self::split_attr_parts(content) {
                        if let Some(eq_pos) = part.find('=') {
                            let key = part[..eq_pos].trim();
                            let value = part[eq_pos + 1..].trim();
                            result.insert(key.to_string(), value.to_string());
                        }
                    }
                }
            }
        }
        result
    }

    /// Get the combined column attribute string
    pub fn column_attr(&self) -> String {
        self.attrs.join(", ")
    }

    /// Check if field is nullable (Option<T>)
    pub fn is_nullable(&self) -> bool {
        self.ty.starts_with("Option<")
    }

    /// Check if field is a primary key
    pub fn is_primary_key(&self) -> bool {
        self.has_attr("primary")
    }

    /// Check if field has autoincrement
    pub fn is_autoincrement(&self) -> bool {
        self.has_attr("autoincrement")
    }

    /// Check if field is unique
    pub fn is_unique(&self) -> bool {
        self.has_attr("unique")
    }

    /// Get the default value if present
    pub fn default_value(&self) -> Option<String> {
        self.attr_value("default")
    }

    /// Get the references target if present (e.g., "Users::id")
    pub fn references(&self) -> Option<String> {
        self.attr_value("references")
    }

    /// Get the on_delete action if present
    pub fn on_delete(&self) -> Option<String> {
        self.attr_value("on_delete")
    }

    /// Get the on_update action if present
    pub fn on_update(&self) -> Option<String> {
        self.attr_value("on_update")
    }

    /// Extract a value for a key from an attribute string
    fn extract_attr_value(attr: &str, key: &str) -> Option<String> {
        // Extract content inside #[column(...)]
        let start = attr.find('(')?;
        let end = attr.rfind(')')?;
        let content = &attr[start + 1..end];

        // Find the key and extract its value
        for part in Self::split_attr_parts(content) {
            let part = part.trim();
            if let Some(eq_pos) = part.find('=') {
                let k = part[..eq_pos].trim();
                if k == key {
                    return Some(part[eq_pos + 1..].trim().to_string());
                }
            }
        }
        None
    }

    /// Split attribute content by commas, respecting nested structures
    fn split_attr_parts(content: &str) -> Vec<&str> {
        let mut parts = Vec::new();
        let mut depth: i32 = 0;
        let mut start = 0;

        for (i, c) in content.char_indices() {
            match c {
                '(' | '<' | '[' | '{' => depth += 1,
                ')' | '>' | ']' | '}' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(content[start..i].trim());
                    start = i + 1;
                }
                _ => {}
            }
        }

        // Add the last part
        if start < content.len() {
            parts.push(content[start..].trim());
        }

        parts
    }
}

impl ParseResult {
    /// Get a table by name
    pub fn table(&self, name: &str) -> Option<&ParsedTable> {
        self.tables.get(name)
    }

    /// Get an index by name
    pub fn index(&self, name: &str) -> Option<&ParsedIndex> {
        self.indexes.get(name)
    }

    /// Get all table names
    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(|s| s.as_str()).collect()
    }

    /// Get all index names
    pub fn index_names(&self) -> Vec<&str> {
        self.indexes.keys().map(|s| s.as_str()).collect()
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
        let lines: Vec<&str> = code.lines().collect();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();

            // Parse #[SQLiteTable...] structs
            if line.starts_with("#[SQLiteTable") {
                if result.dialect == Dialect::default() {
                    result.dialect = Dialect::SQLite;
                }
                if let Some(mut table) = Self::parse_table(&lines, &mut i) {
                    table.dialect = Dialect::SQLite;
                    result.tables.insert(table.name.clone(), table);
                }
                continue;
            }

            // Parse #[PostgresTable...] structs
            if line.starts_with("#[PostgresTable") {
                if result.dialect == Dialect::default() {
                    result.dialect = Dialect::PostgreSQL;
                }
                if let Some(mut table) = Self::parse_table(&lines, &mut i) {
                    table.dialect = Dialect::PostgreSQL;
                    result.tables.insert(table.name.clone(), table);
                }
                continue;
            }

            // Parse #[SQLiteIndex...] structs
            if line.starts_with("#[SQLiteIndex") {
                if let Some(mut index) = Self::parse_index(&lines, &mut i) {
                    index.dialect = Dialect::SQLite;
                    result.indexes.insert(index.name.clone(), index);
                }
                continue;
            }

            // Parse #[PostgresIndex...] structs
            if line.starts_with("#[PostgresIndex") {
                if let Some(mut index) = Self::parse_index(&lines, &mut i) {
                    index.dialect = Dialect::PostgreSQL;
                    result.indexes.insert(index.name.clone(), index);
                }
                continue;
            }

            // Parse #[derive(SQLiteSchema)] structs
            if line.contains("#[derive(SQLiteSchema)]") {
                if let Some(mut schema) = Self::parse_schema(&lines, &mut i) {
                    schema.dialect = Dialect::SQLite;
                    result.dialect = Dialect::SQLite;
                    result.schema = Some(schema);
                }
                continue;
            }

            // Parse #[derive(PostgresSchema)] structs
            if line.contains("#[derive(PostgresSchema)]") {
                if let Some(mut schema) = Self::parse_schema(&lines, &mut i) {
                    schema.dialect = Dialect::PostgreSQL;
                    result.dialect = Dialect::PostgreSQL;
                    result.schema = Some(schema);
                }
                continue;
            }

            i += 1;
        }

        result
    }

    /// Parse a table struct
    fn parse_table(lines: &[&str], i: &mut usize) -> Option<ParsedTable> {
        let table_attr = lines[*i].trim().to_string();
        *i += 1;

        if *i >= lines.len() {
            return None;
        }

        let struct_line = lines[*i].trim();
        let name = Self::parse_struct_name(struct_line)?;

        let mut table = ParsedTable {
            name,
            attr: table_attr,
            fields: Vec::new(),
            dialect: Dialect::default(),
        };

        // Parse fields until closing brace
        *i += 1;
        let mut pending_attrs: Vec<String> = Vec::new();

        while *i < lines.len() {
            let field_line = lines[*i].trim();

            if field_line == "}" || field_line.starts_with('}') {
                break;
            }

            // Collect #[column(...)] attributes
            if field_line.starts_with("#[column(") {
                pending_attrs.push(field_line.to_string());
            } else if let Some((field_name, field_type)) = Self::parse_field_line(field_line) {
                let field = ParsedField {
                    name: field_name,
                    ty: field_type,
                    attrs: std::mem::take(&mut pending_attrs),
                };
                table.fields.push(field);
            }

            *i += 1;
        }

        Some(table)
    }

    /// Parse an index struct
    fn parse_index(lines: &[&str], i: &mut usize) -> Option<ParsedIndex> {
        let index_attr = lines[*i].trim().to_string();
        *i += 1;

        if *i >= lines.len() {
            return None;
        }

        let struct_line = lines[*i].trim();

        // Parse tuple struct: struct IdxName(Table::col1, Table::col2);
        let name = Self::parse_struct_name(struct_line)?;

        // Extract columns from tuple struct
        let columns = if let Some(start) = struct_line.find('(') {
            if let Some(end) = struct_line.rfind(')') {
                let cols_str = &struct_line[start + 1..end];
                cols_str
                    .split(',')
                    .map(|c| c.trim().trim_end_matches(';').to_string())
                    .filter(|c| !c.is_empty())
                    .collect()
            } else {
                Vec::new()
            }
        } else {
            Vec::new()
        };

        Some(ParsedIndex {
            name,
            attr: index_attr,
            columns,
            dialect: Dialect::default(),
        })
    }

    /// Parse a schema struct
    fn parse_schema(lines: &[&str], i: &mut usize) -> Option<ParsedSchema> {
        // Skip the derive line
        *i += 1;

        if *i >= lines.len() {
            return None;
        }

        let struct_line = lines[*i].trim();
        let name = Self::parse_struct_name(struct_line)?;

        let mut schema = ParsedSchema {
            name,
            members: HashMap::new(),
            dialect: Dialect::default(),
        };

        // Parse members until closing brace
        *i += 1;
        while *i < lines.len() {
            let member_line = lines[*i].trim();

            if member_line == "}" || member_line.starts_with('}') {
                break;
            }

            if let Some((field_name, field_type)) = Self::parse_field_line(member_line) {
                schema.members.insert(field_name, field_type);
            }

            *i += 1;
        }

        Some(schema)
    }

    /// Parse struct name from a struct line
    fn parse_struct_name(line: &str) -> Option<String> {
        // Handles: "struct Foo {", "struct Foo(Bar);", "pub struct Foo {"
        if !line.contains("struct ") {
            return None;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        for (idx, part) in parts.iter().enumerate() {
            if *part == "struct" && idx + 1 < parts.len() {
                let full_name = parts[idx + 1];
                // For tuple structs like "IdxPostsTitle(Posts::title);",
                // we need to split at '(' to get just the struct name
                let name = full_name
                    .split(|c| c == '{' || c == '(' || c == ';')
                    .next()
                    .unwrap_or(full_name)
                    .trim();
                return Some(name.to_string());
            }
        }
        None
    }

    /// Parse field name and type from a field line
    fn parse_field_line(line: &str) -> Option<(String, String)> {
        // Handles: "pub field_name: FieldType," or "field_name: FieldType,"
        let line = line.trim().trim_end_matches(',');
        if !line.contains(':') || line.starts_with('#') || line.starts_with("//") {
            return None;
        }

        let parts: Vec<&str> = line.splitn(2, ':').collect();
        if parts.len() != 2 {
            return None;
        }

        let name_part = parts[0].trim();
        let type_part = parts[1].trim();

        // Handle "pub field_name"
        let name = if name_part.starts_with("pub ") {
            name_part.strip_prefix("pub ").unwrap().trim()
        } else {
            name_part
        };

        Some((name.to_string(), type_part.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
