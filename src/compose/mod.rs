//! Combining and transforming sequences
//!
//! This module provides the combinators that wrap one or more sequences into a
//! new one without materializing any elements.

mod chain;
mod enumerate;
mod filter;
mod map;

// Re-export composition operations
pub use chain::{Chain, Concat, chain, concat};
pub use enumerate::{Enumerate, enumerate};
pub use filter::{Filter, Take, filter, take};
pub use map::{Cloned, Copied, Inspect, Map, cloned, copied, inspect, map};
