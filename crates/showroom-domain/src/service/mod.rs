//! Domain services

pub mod fields;
pub mod range;

pub use fields::{describe, fields, parse, FieldKind, FieldSpec};
pub use range::{electric_range, fossil_range};
