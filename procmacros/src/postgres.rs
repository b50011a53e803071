pub mod r#enum;
pub mod field;
pub mod index;
pub mod schema;
pub mod table;

pub use r#enum::generate_enum_impl;
pub use index::{IndexAttributes, postgres_index_attr_macro};
pub use schema::generate_postgres_schema_derive_impl;
pub use table::{TableAttributes, table_attr_macro};
