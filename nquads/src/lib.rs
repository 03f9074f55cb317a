//! This crate is part of [Quadron],
//! an RDF dataset canonicalization toolkit in Rust.
//!
//! It provides the two N-Quads collaborators the canonicalization core
//! consumes: a canonical [serializer](emit_nquad) and a [parser](parse_nquads).
//!
//! [Quadron]: https://github.com/quadron-rs/quadron

mod parser;
mod serializer;

pub use parser::{parse_nquads, ErrorKind, ParseError};
pub use serializer::{emit_nquad, write_nquad, write_term};
