//! # reelgraph
//!
//! Command-line application that turns a streaming catalog export into a
//! set of exploratory charts.
//!
//! This is the main binary crate: it wires configuration, logging, catalog
//! loading, and the graph pipeline together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
