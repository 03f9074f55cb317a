//! I define [`Dataset`], a mapping from graph names to triples,
//! and [`GraphName`], its keys.

use std::collections::BTreeMap;

use crate::quad::{Quad, Triple};
use crate::term::Term;

/// The name of a graph within a [`Dataset`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GraphName {
    /// The default graph.
    Default,
    /// A named graph; a name starting with `_:` denotes a blank node.
    Named(Box<str>),
}

impl GraphName {
    /// A named graph.
    pub fn named(name: impl Into<Box<str>>) -> Self {
        GraphName::Named(name.into())
    }

    /// Whether this is the default graph.
    pub const fn is_default(&self) -> bool {
        matches!(self, GraphName::Default)
    }

    /// The graph term attached to quads of this graph:
    /// `None` for the default graph, a blank node for `_:`-prefixed names,
    /// an IRI otherwise.
    pub fn as_graph_term(&self) -> Option<Term> {
        match self {
            GraphName::Default => None,
            GraphName::Named(name) if name.starts_with("_:") => {
                Some(Term::blank_node(name.clone()))
            }
            GraphName::Named(name) => Some(Term::iri(name.clone())),
        }
    }
}

/// An RDF dataset: for each graph name, an ordered sequence of triples.
///
/// Graphs iterate in [`GraphName`] order (default graph first);
/// triples keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    graphs: BTreeMap<GraphName, Vec<Triple>>,
}

impl Dataset {
    /// An empty dataset.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Append `triple` to the graph named `graph`.
    pub fn insert(&mut self, graph: GraphName, triple: Triple) {
        self.graphs.entry(graph).or_default().push(triple);
    }

    /// The triples of the graph named `name` (empty if the graph is absent).
    pub fn graph(&self, name: &GraphName) -> &[Triple] {
        self.graphs.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The names of the graphs present in this dataset.
    pub fn graph_names(&self) -> impl Iterator<Item = &GraphName> {
        self.graphs.keys()
    }

    /// The graphs of this dataset, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&GraphName, &[Triple])> {
        self.graphs.iter().map(|(name, triples)| (name, &triples[..]))
    }

    /// The total number of triples across all graphs.
    pub fn len(&self) -> usize {
        self.graphs.values().map(Vec::len).sum()
    }

    /// Whether this dataset contains no triple.
    pub fn is_empty(&self) -> bool {
        self.graphs.values().all(Vec::is_empty)
    }

    /// Flatten this dataset into quads, graph by graph,
    /// converting each graph name with [`GraphName::as_graph_term`].
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        self.graphs.iter().flat_map(|(name, triples)| {
            let graph_term = name.as_graph_term();
            triples
                .iter()
                .map(move |t| Quad::from_triple(t.clone(), graph_term.clone()))
        })
    }

    /// Collect quads into a dataset, keying each by its graph term.
    ///
    /// A blank node graph term becomes a `_:`-prefixed graph name,
    /// so that [`quads`](Dataset::quads) round-trips.
    pub fn from_quads(quads: impl IntoIterator<Item = Quad>) -> Self {
        let mut dataset = Dataset::new();
        for quad in quads {
            let name = match &quad.graph {
                None => GraphName::Default,
                Some(Term::Iri(iri)) => GraphName::named(iri.clone()),
                Some(Term::BlankNode(label)) => GraphName::named(label.clone()),
                Some(Term::Literal { value, .. }) => GraphName::named(value.clone()),
            };
            dataset.insert(name, Triple::new(quad.subject, quad.predicate, quad.object));
        }
        dataset
    }
}
