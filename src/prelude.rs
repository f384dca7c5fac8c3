//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxSeq, Enumerated, Seq, Tuple};

// Sources
pub use crate::build::{from_slice, try_zip, zip};

// Composition
pub use crate::compose::{chain, concat, enumerate, filter, map};

// Execution
pub use crate::consume::{all, any, collect, count, reduce};
