//! I define [`Triple`] and [`Quad`], the statements of an RDF dataset.

use crate::term::Term;

/// An RDF triple: subject, predicate, object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    /// The subject; an IRI or a blank node.
    pub subject: Term,
    /// The predicate; always an IRI.
    pub predicate: Term,
    /// The object; any term.
    pub object: Term,
}

impl Triple {
    /// A triple from its three components.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Triple {
            subject,
            predicate,
            object,
        }
    }
}

/// An RDF quad: a [`Triple`] plus an optional graph name term
/// (`None` places the triple in the default graph).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quad {
    /// The subject; an IRI or a blank node.
    pub subject: Term,
    /// The predicate; always an IRI.
    pub predicate: Term,
    /// The object; any term.
    pub object: Term,
    /// The graph name; `None` for the default graph.
    pub graph: Option<Term>,
}

impl Quad {
    /// A quad from its four components.
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Option<Term>) -> Self {
        Quad {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// A quad placing `triple` in the graph named by `graph`.
    pub fn from_triple(triple: Triple, graph: Option<Term>) -> Self {
        Quad {
            subject: triple.subject,
            predicate: triple.predicate,
            object: triple.object,
            graph,
        }
    }

    /// The components of this quad in s, p, o, g order;
    /// an absent graph name is skipped.
    pub fn components(&self) -> impl Iterator<Item = (Position, &Term)> {
        [
            (Position::Subject, &self.subject),
            (Position::Predicate, &self.predicate),
            (Position::Object, &self.object),
        ]
        .into_iter()
        .chain(self.graph.as_ref().map(|g| (Position::Graph, g)))
    }

    /// Mutable variant of [`components`](Quad::components).
    pub fn components_mut(&mut self) -> impl Iterator<Item = (Position, &mut Term)> {
        let Quad {
            subject,
            predicate,
            object,
            graph,
        } = self;
        [
            (Position::Subject, subject),
            (Position::Predicate, predicate),
            (Position::Object, object),
        ]
        .into_iter()
        .chain(graph.as_mut().map(|g| (Position::Graph, g)))
    }
}

/// The position of a component within a [`Quad`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Subject position
    Subject,
    /// Predicate position
    Predicate,
    /// Object position
    Object,
    /// Graph name position
    Graph,
}

impl Position {
    /// The single-letter code of this position (`s`, `p`, `o` or `g`).
    pub const fn code(self) -> &'static str {
        match self {
            Position::Subject => "s",
            Position::Predicate => "p",
            Position::Object => "o",
            Position::Graph => "g",
        }
    }
}
