//! Canonical N-Quads serialization.

use std::fmt::Write;

use quadron_api::term::XSD_STRING;
use quadron_api::{Quad, Term};

/// Serialize `quad` as a single canonical N-Quads line, ending in `\n`.
///
/// Blank node labels appear verbatim; the serialization is pure and
/// deterministic given its input.
pub fn emit_nquad(quad: &Quad) -> String {
    let mut line = String::new();
    write_nquad(&mut line, quad);
    line
}

/// Append the canonical N-Quads form of `quad`, including the final `.\n`,
/// to `buffer`.
pub fn write_nquad(buffer: &mut String, quad: &Quad) {
    write_term(buffer, &quad.subject);
    write_term(buffer, &quad.predicate);
    write_term(buffer, &quad.object);
    if let Some(graph) = &quad.graph {
        write_term(buffer, graph);
    }
    buffer.push_str(".\n");
}

/// Append the canonical N-Quads form of `term` and a trailing space to `buffer`.
pub fn write_term(buffer: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            buffer.push('<');
            buffer.push_str(iri);
            buffer.push('>');
        }
        Term::BlankNode(label) => {
            buffer.push_str(label);
        }
        Term::Literal {
            value,
            datatype,
            language,
        } => {
            buffer.push('"');
            for c in value.chars() {
                match c {
                    '"' => buffer.push_str("\\\""),
                    '\\' => buffer.push_str("\\\\"),
                    '\n' => buffer.push_str("\\n"),
                    '\r' => buffer.push_str("\\r"),
                    '\t' => buffer.push_str("\\t"),
                    '\x08' => buffer.push_str("\\b"),
                    '\x0c' => buffer.push_str("\\f"),
                    '\x7f' => buffer.push_str("\\u007F"),
                    c if c <= '\x1f' => write!(buffer, "\\u{:04X}", c as u8).unwrap(),
                    _ => buffer.push(c),
                }
            }
            buffer.push('"');
            if let Some(tag) = language {
                buffer.push('@');
                buffer.push_str(tag);
            } else if let Some(datatype) = datatype {
                if &**datatype != XSD_STRING {
                    buffer.push_str("^^<");
                    buffer.push_str(datatype);
                    buffer.push('>');
                }
            }
        }
    }
    buffer.push(' ');
}
