//! Building sequences from fixed collections
//!
//! This module provides the source adapters every pipeline starts from.

mod slice;
mod zip;

pub use slice::{Slice, from_slice};
pub use zip::{Zip, try_zip, zip};
