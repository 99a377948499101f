//! Core definitions (error type and index checks), relied upon by all dynarray-* crates.

pub mod error;
pub mod result;

pub use result::Result;
