//! Statement types

pub mod select;

pub use select::{Filter, IntoFields, Select};
