//! Product catalog records and registration requests.

pub mod product;

pub use product::{Product, RegisterProduct};
