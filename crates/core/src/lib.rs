//! `stockroom-core` — catalog domain building blocks.
//!
//! This crate contains **pure domain** logic (no HTTP, no IO): the product
//! model, the in-memory store, payload validation, the list query pipeline,
//! and the statistics aggregator.

pub mod error;
pub mod product;
pub mod query;
pub mod stats;
pub mod store;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use product::{Product, ProductFields, ProductId};
pub use query::{query, search_all, ListParams, PageInfo, QueryResult};
pub use stats::{stats, PriceRange, Stats};
pub use store::{IdGenerator, ProductStore, SequenceGenerator, UuidGenerator};
pub use validate::validate;
