pub mod r#enum;
pub mod field;
pub mod generators;
pub mod index;
pub mod schema;
pub mod table;
pub mod view;

pub use r#enum::generate_enum_impl;
pub use index::{IndexAttributes, sqlite_index_attr_macro};
pub use schema::generate_sqlite_schema_derive_impl;
pub use table::{TableAttributes, table_attr_macro};
pub use view::{ViewAttributes, view_attr_macro};