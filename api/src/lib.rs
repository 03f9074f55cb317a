//! This crate is part of [Quadron],
//! an RDF dataset canonicalization toolkit in Rust.
//!
//! It provides the data model shared by all Quadron crates:
//! [terms](Term), [triples](Triple), [quads](Quad) and [datasets](Dataset).
//!
//! [Quadron]: https://github.com/quadron-rs/quadron

pub mod dataset;
pub mod quad;
pub mod term;

pub use dataset::{Dataset, GraphName};
pub use quad::{Position, Quad, Triple};
pub use term::Term;
