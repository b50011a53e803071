pub mod r#enum;
pub mod field;
pub mod generators;
pub mod index;
pub mod schema;
pub mod table;
pub mod view;

pub use schema::generate_postgres_schema_derive_impl;

