//! This crate is part of [Quadron],
//! an RDF dataset canonicalization toolkit in Rust.
//!
//! It implements the URDNA2015 algorithm described at
//! <https://www.w3.org/TR/rdf-canon/>:
//! blank node labels are deterministically rewritten to `_:c14n<N>`,
//! so that any two isomorphic datasets serialize to byte-identical N-Quads.
//!
//! [Quadron]: https://github.com/quadron-rs/quadron

mod _permutations;
pub mod hash;
pub mod issuer;
pub mod urdna2015;

pub use urdna2015::{canonical_nquads, normalize, Normalized, NormalizeOptions, FORMAT_NQUADS};

/// Errors raised during canonicalization.
#[derive(Debug, thiserror::Error)]
pub enum C14nError {
    /// The caller requested an output format this engine does not produce.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    /// The input dataset contains a quad the algorithm cannot process.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An internal invariant was violated; this is a bug, not a user error.
    #[error("internal invariant violated: {0}")]
    Internal(String),
}

#[cfg(test)]
pub(crate) fn test_setup() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
