//! # lazyseq: Push-Style Lazy Sequences
//!
//! Build lazy pipelines over fixed collections and drive them with a callback
//! that can stop the whole pipeline at any point.
//!
//! ## Core Trait
//!
//! - **[`Seq`]**: a sequence that pushes each element into a callback
//!   returning `bool`. Returning `false` stops the traversal, and every
//!   combinator forwards that answer to its own source, so nothing upstream
//!   produces another element.
//!
//! ## Key Features
//!
//! - **Lazy**: combinators only wrap; nothing runs until a consumer drives
//! - **Short-circuiting**: `any`, `all`, `find`, `first`, `take` stop the
//!   source as soon as the answer is known
//! - **Restartable**: driving takes `&self`, so the same pipeline can be
//!   driven again and yields the same elements
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let data = [10, 15, 22, 30, 7];
//! let pipeline = from_slice(&data)
//!     .copied()
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x / 2);
//!
//! assert_eq!(pipeline.collect(), vec![5, 11, 15]);
//! assert_eq!(pipeline.reduce(0, |acc, x| acc + x), 31);
//! assert!(pipeline.any(|x| x > 10));
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`from_slice(items)`](from_slice) - Sequence over a fixed collection
//! - [`zip(a, b)`](zip) - Pairs of equal-length collections; empty if lengths differ
//!
//! **Composition:**
//! - [`map`], [`filter`], [`enumerate`] - One-source combinators
//! - [`concat(parts)`](concat) - Run sequences one after another
//!
//! **Execution:**
//! - [`collect`], [`count`], [`reduce`], [`any`], [`all`]

pub mod build;
pub mod compose;
pub mod consume;
mod error;
pub mod prelude;
mod seq;
mod tuple;

pub use build::{Slice, Zip, from_slice, try_zip, zip};
pub use compose::{chain, concat, enumerate, filter, map};
pub use consume::{all, any, collect, count, reduce};
pub use error::SeqError;
pub use seq::{BoxSeq, DynSeq, Seq};
pub use tuple::{Enumerated, Tuple};
