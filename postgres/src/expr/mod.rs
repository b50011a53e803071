//! PostgreSQL-specific expressions.
//!
//! This module provides PostgreSQL dialect-specific SQL expressions and operators.
//! For standard SQL expressions, use `drizzle_core::expr`.

mod array_ops;
mod ilike;

pub use array_ops::*;
pub use ilike::*;
