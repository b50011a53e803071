//! Relational Query API types.
//!
//! Provides type-safe relational queries with nested relation loading.

mod builder;
mod deser;
mod find;
pub mod handle;
mod row;
mod sql;
mod store;

pub use builder::{
    AllColumns, BuildStore, IntoColumnSelection, PartialColumns, QueryBuilder, QueryTable,
    ResolveSelect,
};
pub use deser::{DeserializeStore, FromJsonColumn, FromJsonValue, deserialize_field};
pub use find::{FindRel, Here, There};
pub use handle::RelationHandle;
pub use row::QueryRow;
pub use sql::{RelCardinality, RenderRelations, RenderedRelation, build_query_sql};
pub use store::RelEntry;
