//! I provide the implementation of the URDNA2015 algorithm described at
//! <https://www.w3.org/TR/rdf-canon/>.
//!
//! The driver assigns canonical labels in two phases:
//! a *simple* pass issuing labels to blank nodes whose first-degree hash is
//! unique, then a *complex* pass breaking the remaining groups with the
//! permutation-searching N-degree hash. The latter is worst-case factorial in
//! the size of the largest group; the `chosen_path` prune below keeps
//! realistic datasets tractable and must not be weakened.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use quadron_api::{Dataset, Position, Quad, Term};
use quadron_nquads::{emit_nquad, parse_nquads};

use crate::_permutations::Permutator;
use crate::hash::{sha256_hex, sha256_hex_lines};
use crate::issuer::IdentifierIssuer;
use crate::C14nError;

/// The only output format recognized by [`normalize`].
pub const FORMAT_NQUADS: &str = "application/n-quads";

/// Prefix of the labels issued by the canonical issuer.
const CANONICAL_PREFIX: &str = "_:c14n";
/// Prefix of the labels issued by temporary issuers during the N-degree search.
const TEMP_PREFIX: &str = "_:b";

/// Options accepted by [`normalize`].
#[derive(Clone, Debug, Default)]
pub struct NormalizeOptions {
    /// The requested output format.
    ///
    /// [`FORMAT_NQUADS`] selects canonical N-Quads text; absent selects a
    /// parsed [`Dataset`]; anything else fails with
    /// [`UnknownFormat`](C14nError::UnknownFormat).
    pub format: Option<String>,
}

impl NormalizeOptions {
    /// Options selecting canonical N-Quads text output.
    pub fn nquads() -> Self {
        NormalizeOptions {
            format: Some(FORMAT_NQUADS.into()),
        }
    }
}

/// The result of [`normalize`], shaped by [`NormalizeOptions::format`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalized {
    /// Canonical N-Quads text: sorted, newline-terminated lines.
    NQuads(String),
    /// The canonical dataset, re-parsed from the N-Quads form.
    Dataset(Dataset),
}

/// Canonicalize `dataset`, rewriting every blank node label to `_:c14n<N>`.
///
/// Isomorphic datasets yield byte-identical N-Quads text, regardless of the
/// input labels and of the order of the input quads.
pub fn normalize(dataset: &Dataset, options: &NormalizeOptions) -> Result<Normalized, C14nError> {
    match options.format.as_deref() {
        None | Some(FORMAT_NQUADS) => (),
        Some(other) => return Err(C14nError::UnknownFormat(other.to_string())),
    }
    let text = canonical_nquads(dataset)?;
    if options.format.is_some() {
        Ok(Normalized::NQuads(text))
    } else {
        let parsed = parse_nquads(&text).map_err(|e| {
            C14nError::Internal(format!("canonical output failed to re-parse: {e}"))
        })?;
        Ok(Normalized::Dataset(parsed))
    }
}

/// The canonical N-Quads text of `dataset`.
///
/// Shorthand for [`normalize`] with [`FORMAT_NQUADS`].
pub fn canonical_nquads(dataset: &Dataset) -> Result<String, C14nError> {
    C14nState::new(dataset)?.run()
}

/// Per-label record: the quads referencing the blank node (as indices into
/// the run's quad list) and the memoized first-degree hash.
#[derive(Clone, Debug, Default)]
struct BlankNodeInfo {
    quads: Vec<usize>,
    hash: Option<String>,
}

/// The mutable state of one canonicalization run.
struct C14nState {
    quads: Vec<Quad>,
    blank_node_info: BTreeMap<Rc<str>, BlankNodeInfo>,
    canonical: IdentifierIssuer,
}

impl C14nState {
    /// Flatten and index `dataset`, validating each quad on the way.
    fn new(dataset: &Dataset) -> Result<Self, C14nError> {
        let mut quads = Vec::with_capacity(dataset.len());
        for (graph_name, triples) in dataset.iter() {
            let graph_term = graph_name.as_graph_term();
            for triple in triples {
                if triple.subject.is_literal() {
                    return Err(C14nError::InvalidInput(
                        "literal in subject position".to_string(),
                    ));
                }
                if !triple.predicate.is_iri() {
                    return Err(C14nError::InvalidInput(
                        "predicate must be an IRI".to_string(),
                    ));
                }
                quads.push(Quad::from_triple(triple.clone(), graph_term.clone()));
            }
        }
        let mut blank_node_info: BTreeMap<Rc<str>, BlankNodeInfo> = BTreeMap::new();
        let mut canonical_labels = false;
        let mut other_labels = false;
        for (index, quad) in quads.iter().enumerate() {
            for (position, term) in quad.components() {
                if position == Position::Predicate {
                    continue;
                }
                let Some(label) = term.bnode_label() else {
                    continue;
                };
                if label.starts_with(CANONICAL_PREFIX) {
                    canonical_labels = true;
                } else {
                    other_labels = true;
                }
                blank_node_info
                    .entry(Rc::from(label))
                    .or_default()
                    .quads
                    .push(index);
            }
        }
        // labels reserved for the output may not be mixed with labels that
        // still need one: issuance would collide with the pre-existing labels
        if canonical_labels && other_labels {
            return Err(C14nError::InvalidInput(format!(
                "blank node label collides with the canonical prefix {CANONICAL_PREFIX}"
            )));
        }
        Ok(C14nState {
            quads,
            blank_node_info,
            canonical: IdentifierIssuer::new(CANONICAL_PREFIX),
        })
    }

    /// Assign canonical labels to every blank node, then emit the quads as
    /// sorted N-Quads text.
    fn run(mut self) -> Result<String, C14nError> {
        // simple pass: hash at first degree and issue for unique hashes,
        // until an iteration issues nothing
        let mut non_normalized: BTreeSet<Rc<str>> = self.blank_node_info.keys().cloned().collect();
        let mut hash_to_blank_nodes: BTreeMap<String, Vec<Rc<str>>> = BTreeMap::new();
        let mut simple = true;
        while simple {
            simple = false;
            hash_to_blank_nodes.clear();
            for id in &non_normalized {
                let hash = self.hash_first_degree(id)?;
                hash_to_blank_nodes
                    .entry(hash)
                    .or_default()
                    .push(Rc::clone(id));
            }
            let mut ambiguous = BTreeMap::new();
            for (hash, ids) in std::mem::take(&mut hash_to_blank_nodes) {
                if let [id] = &ids[..] {
                    self.canonical.issue(id);
                    non_normalized.remove(id);
                    simple = true;
                } else {
                    ambiguous.insert(hash, ids);
                }
            }
            hash_to_blank_nodes = ambiguous;
        }

        // complex pass: break the remaining groups, in hash order, with the
        // N-degree hash
        for ids in hash_to_blank_nodes.values() {
            let mut hash_path_list = Vec::new();
            for id in ids {
                if self.canonical.has_issued(id) {
                    continue;
                }
                let mut issuer = IdentifierIssuer::new(TEMP_PREFIX);
                issuer.issue(id);
                hash_path_list.push(self.hash_n_degree(issuer, id)?);
            }
            hash_path_list.sort_by(|a, b| a.0.cmp(&b.0));
            for (_hash, issuer) in hash_path_list {
                for old in issuer.issued_order() {
                    self.canonical.issue(old);
                }
            }
        }

        // rewrite and emit
        let C14nState {
            quads, canonical, ..
        } = &mut self;
        for quad in quads.iter_mut() {
            for (position, term) in quad.components_mut() {
                if position == Position::Predicate {
                    continue;
                }
                let Term::BlankNode(label) = &*term else {
                    continue;
                };
                if label.starts_with(CANONICAL_PREFIX) {
                    // already carries an output label; left untouched
                    continue;
                }
                let Some(new_label) = canonical.get(label) else {
                    return Err(C14nError::Internal(format!(
                        "no canonical label issued for {label}"
                    )));
                };
                let new_label: Box<str> = new_label.into();
                *term = Term::BlankNode(new_label);
            }
        }
        let mut lines: Vec<String> = self.quads.iter().map(emit_nquad).collect();
        lines.sort_unstable();
        Ok(lines.concat())
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-1d-quads>.
    ///
    /// The result only depends on the structural position of the blank node:
    /// in every referencing quad, the node itself is replaced by `_:a` and
    /// every other blank node by `_:z` before hashing.
    fn hash_first_degree(&mut self, id: &str) -> Result<String, C14nError> {
        let info = self
            .blank_node_info
            .get(id)
            .ok_or_else(|| C14nError::Internal(format!("unindexed blank node {id}")))?;
        if let Some(hash) = &info.hash {
            return Ok(hash.clone());
        }
        let mut nquads: Vec<String> = info
            .quads
            .iter()
            .map(|&index| {
                let mut copy = self.quads[index].clone();
                for (position, term) in copy.components_mut() {
                    if position == Position::Predicate {
                        continue;
                    }
                    let Term::BlankNode(label) = &*term else {
                        continue;
                    };
                    *term = Term::blank_node(if &**label == id { "_:a" } else { "_:z" });
                }
                emit_nquad(&copy)
            })
            .collect();
        nquads.sort_unstable();
        let hash = sha256_hex_lines(&nquads);
        log::trace!("hash_first_degree({id}) -> {hash}");
        if let Some(info) = self.blank_node_info.get_mut(id) {
            info.hash = Some(hash.clone());
        }
        Ok(hash)
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-related-blank-node>.
    ///
    /// The identifier hashed for `related` is, by decreasing preference, its
    /// canonical label, the label issued by `issuer`, or its first-degree
    /// hash (always memoized by the time this runs).
    fn hash_related(
        &self,
        related: &str,
        quad: &Quad,
        issuer: &IdentifierIssuer,
        position: Position,
    ) -> Result<String, C14nError> {
        let id = if let Some(label) = self.canonical.get(related) {
            label
        } else if let Some(label) = issuer.get(related) {
            label
        } else {
            self.blank_node_info
                .get(related)
                .and_then(|info| info.hash.as_deref())
                .ok_or_else(|| {
                    C14nError::Internal(format!("first-degree hash missing for {related}"))
                })?
        };
        let mut input = String::from(position.code());
        if position != Position::Graph {
            let Term::Iri(predicate) = &quad.predicate else {
                return Err(C14nError::Internal(
                    "non-IRI predicate survived indexing".to_string(),
                ));
            };
            input.push('<');
            input.push_str(predicate);
            input.push('>');
        }
        input.push_str(id);
        Ok(sha256_hex(&input))
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-nd-quads>.
    ///
    /// Explores every permutation of the blank nodes related to `id`, keeping
    /// the lexicographically smallest exploration path per related-hash group.
    /// A permutation is abandoned as soon as its path can no longer beat the
    /// chosen one (same-length-or-longer and strictly greater).
    fn hash_n_degree(
        &self,
        mut issuer: IdentifierIssuer,
        id: &str,
    ) -> Result<(String, IdentifierIssuer), C14nError> {
        let info = self
            .blank_node_info
            .get(id)
            .ok_or_else(|| C14nError::Internal(format!("unindexed blank node {id}")))?;
        let mut hash_to_related: BTreeMap<String, Vec<Rc<str>>> = BTreeMap::new();
        for &index in &info.quads {
            let quad = &self.quads[index];
            for (position, term) in quad.components() {
                if position == Position::Predicate {
                    continue;
                }
                let Some(label) = term.bnode_label() else {
                    continue;
                };
                if label == id {
                    continue;
                }
                let hash = self.hash_related(label, quad, &issuer, position)?;
                hash_to_related
                    .entry(hash)
                    .or_default()
                    .push(Rc::from(label));
            }
        }
        let mut data_to_hash = String::new();
        for (related_hash, related_labels) in hash_to_related {
            data_to_hash.push_str(&related_hash);
            let mut chosen_path = String::new();
            let mut chosen_issuer: Option<IdentifierIssuer> = None;
            'permutations: for permutation in Permutator::new(related_labels) {
                let mut issuer_copy = issuer.clone();
                let mut path = String::new();
                let mut recursion_list: Vec<Rc<str>> = Vec::new();
                for related in &permutation {
                    if let Some(label) = self.canonical.get(related) {
                        path.push_str(label);
                    } else {
                        if !issuer_copy.has_issued(related) {
                            recursion_list.push(Rc::clone(related));
                        }
                        path.push_str(&issuer_copy.issue(related));
                    }
                    if prune_permutation(&path, &chosen_path) {
                        continue 'permutations;
                    }
                }
                for related in &recursion_list {
                    let (recursion_hash, next_issuer) =
                        self.hash_n_degree(issuer_copy, related)?;
                    path.push('<');
                    path.push_str(&recursion_hash);
                    path.push('>');
                    issuer_copy = next_issuer;
                    if prune_permutation(&path, &chosen_path) {
                        continue 'permutations;
                    }
                }
                if chosen_path.is_empty() || path < chosen_path {
                    chosen_path = path;
                    chosen_issuer = Some(issuer_copy);
                }
            }
            data_to_hash.push_str(&chosen_path);
            issuer = chosen_issuer.ok_or_else(|| {
                C14nError::Internal("no permutation chosen for a related hash group".to_string())
            })?;
        }
        let hash = sha256_hex(&data_to_hash);
        log::trace!("hash_n_degree({id}) -> {hash}");
        Ok((hash, issuer))
    }
}

/// Whether the current permutation can be abandoned: `path` is at least as
/// long as the chosen path and lexicographically greater, so no extension of
/// it can be adopted.
fn prune_permutation(path: &str, chosen_path: &str) -> bool {
    !chosen_path.is_empty() && path.len() >= chosen_path.len() && path > chosen_path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_setup;
    use quadron_api::{GraphName, Triple};
    use test_case::test_case;

    fn dataset(lines: &[&str]) -> Dataset {
        parse_nquads(&lines.join("\n")).unwrap()
    }

    fn c14n(lines: &[&str]) -> String {
        canonical_nquads(&dataset(lines)).unwrap()
    }

    #[test]
    fn empty_dataset() {
        test_setup();
        assert_eq!(c14n(&[]), "");
    }

    #[test]
    fn single_blank_subject() {
        test_setup();
        assert_eq!(
            c14n(&["_:x <http://example/p> \"v\" ."]),
            "_:c14n0 <http://example/p> \"v\" .\n"
        );
    }

    #[test_case(&["_:a <http://ex/p> _:b .", "_:b <http://ex/q> \"1\" ."]; "original labels")]
    #[test_case(&["_:foo <http://ex/p> _:bar .", "_:bar <http://ex/q> \"1\" ."]; "relabeled")]
    fn isomorphic_inputs_coincide(lines: &[&str]) {
        test_setup();
        let exp = "_:c14n0 <http://ex/q> \"1\" .\n\
                   _:c14n1 <http://ex/p> _:c14n0 .\n";
        assert_eq!(c14n(lines), exp);
    }

    #[test_case(&["_:a <http://ex/link> _:b .", "_:b <http://ex/link> _:a ."]; "forward")]
    #[test_case(&["_:b <http://ex/link> _:a .", "_:a <http://ex/link> _:b ."]; "swapped")]
    fn symmetric_pair(lines: &[&str]) {
        test_setup();
        let exp = "_:c14n0 <http://ex/link> _:c14n1 .\n\
                   _:c14n1 <http://ex/link> _:c14n0 .\n";
        assert_eq!(c14n(lines), exp);
    }

    #[test]
    fn blank_graph_name() {
        test_setup();
        assert_eq!(
            c14n(&["_:s <http://ex/p> \"x\" _:g1 ."]),
            "_:c14n0 <http://ex/p> \"x\" _:c14n1 .\n"
        );
    }

    #[test_case("text/turtle"; "turtle")]
    #[test_case("application/trig"; "trig")]
    #[test_case(""; "empty string")]
    fn unknown_format(format: &str) {
        test_setup();
        let d = dataset(&["_:x <http://example/p> \"v\" ."]);
        let options = NormalizeOptions {
            format: Some(format.to_string()),
        };
        let err = normalize(&d, &options).unwrap_err();
        assert!(matches!(err, C14nError::UnknownFormat(f) if f == format));
    }

    #[test]
    fn nquads_format_is_recognized() {
        test_setup();
        let d = dataset(&["_:x <http://example/p> \"v\" ."]);
        let got = normalize(&d, &NormalizeOptions::nquads()).unwrap();
        assert_eq!(
            got,
            Normalized::NQuads("_:c14n0 <http://example/p> \"v\" .\n".to_string())
        );
    }

    #[test]
    fn absent_format_returns_dataset() {
        test_setup();
        let d = dataset(&["_:s <http://ex/p> \"x\" _:g1 ."]);
        let got = normalize(&d, &NormalizeOptions::default()).unwrap();
        let exp = dataset(&["_:c14n0 <http://ex/p> \"x\" _:c14n1 ."]);
        assert_eq!(got, Normalized::Dataset(exp));
    }

    #[test]
    fn distinct_first_degree_hashes() {
        test_setup();
        let got = c14n(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#r> _:e1 .",
            "_:e0 <http://example.com/#s> <http://example.com/#u> .",
            "_:e1 <http://example.com/#t> <http://example.com/#u> .",
        ]);
        let exp = "<http://example.com/#p> <http://example.com/#q> _:c14n0 .\n\
                   <http://example.com/#p> <http://example.com/#r> _:c14n1 .\n\
                   _:c14n0 <http://example.com/#s> <http://example.com/#u> .\n\
                   _:c14n1 <http://example.com/#t> <http://example.com/#u> .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn shared_first_degree_hashes() {
        test_setup();
        let got = c14n(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#q> _:e1 .",
            "_:e0 <http://example.com/#p> _:e2 .",
            "_:e1 <http://example.com/#p> _:e3 .",
            "_:e2 <http://example.com/#r> _:e3 .",
        ]);
        let exp = "<http://example.com/#p> <http://example.com/#q> _:c14n2 .\n\
                   <http://example.com/#p> <http://example.com/#q> _:c14n3 .\n\
                   _:c14n0 <http://example.com/#r> _:c14n1 .\n\
                   _:c14n2 <http://example.com/#p> _:c14n1 .\n\
                   _:c14n3 <http://example.com/#p> _:c14n0 .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn cycle5() {
        test_setup();
        let got = c14n(&[
            "_:e0 <http://example.com/#p> _:e1 .",
            "_:e1 <http://example.com/#p> _:e2 .",
            "_:e2 <http://example.com/#p> _:e3 .",
            "_:e3 <http://example.com/#p> _:e4 .",
            "_:e4 <http://example.com/#p> _:e0 .",
        ]);
        let exp = "_:c14n0 <http://example.com/#p> _:c14n4 .\n\
                   _:c14n1 <http://example.com/#p> _:c14n0 .\n\
                   _:c14n2 <http://example.com/#p> _:c14n1 .\n\
                   _:c14n3 <http://example.com/#p> _:c14n2 .\n\
                   _:c14n4 <http://example.com/#p> _:c14n3 .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn cycle2plus3() {
        test_setup();
        let got = c14n(&[
            "_:e0 <http://example.com/#p> _:e1 .",
            "_:e1 <http://example.com/#p> _:e0 .",
            "_:e2 <http://example.com/#p> _:e3 .",
            "_:e3 <http://example.com/#p> _:e4 .",
            "_:e4 <http://example.com/#p> _:e2 .",
        ]);
        let exp = "_:c14n0 <http://example.com/#p> _:c14n2 .\n\
                   _:c14n1 <http://example.com/#p> _:c14n0 .\n\
                   _:c14n2 <http://example.com/#p> _:c14n1 .\n\
                   _:c14n3 <http://example.com/#p> _:c14n4 .\n\
                   _:c14n4 <http://example.com/#p> _:c14n3 .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn clique5() {
        test_setup();
        let quads: Vec<String> = (0..5)
            .flat_map(|i| {
                (0..5)
                    .filter(move |&j| j != i)
                    .map(move |j| format!("_:e{i} <http://example.com/#p> _:e{j} ."))
            })
            .collect();
        let quads: Vec<&str> = quads.iter().map(String::as_str).collect();
        let got = c14n(&quads);
        let exp: String = (0..5)
            .flat_map(|i| {
                (0..5)
                    .filter(move |&j| j != i)
                    .map(move |j| format!("_:c14n{i} <http://example.com/#p> _:c14n{j} .\n"))
            })
            .collect();
        assert_eq!(got, exp);
    }

    #[test]
    fn unconnected_twins() {
        test_setup();
        let got = c14n(&["_:x <http://ex/p> \"v\" .", "_:y <http://ex/p> \"v\" ."]);
        let exp = "_:c14n0 <http://ex/p> \"v\" .\n\
                   _:c14n1 <http://ex/p> \"v\" .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn mixed_graphs() {
        test_setup();
        let got = c14n(&[
            "_:s <http://ex/p> \"x\" _:g1 .",
            "_:s <http://ex/q> _:t <http://ex/graphs/named> .",
            "_:t <http://ex/p> \"y\" .",
            "<http://ex/subj> <http://ex/p> _:g1 .",
        ]);
        let exp = "<http://ex/subj> <http://ex/p> _:c14n2 .\n\
                   _:c14n0 <http://ex/p> \"x\" _:c14n2 .\n\
                   _:c14n0 <http://ex/q> _:c14n1 <http://ex/graphs/named> .\n\
                   _:c14n1 <http://ex/p> \"y\" .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn line_sorting() {
        test_setup();
        let got = c14n(&[
            "<tag:a> <tag:p> _:a .",
            "<tag:a> <tag:p> <tag:a> .",
            "<tag:a> <tag:p> \"a\" .",
            "<tag:a> <tag:p> \"a!\" .",
            "<tag:a9> <tag:p> \"a!\" .",
        ]);
        let exp = "<tag:a9> <tag:p> \"a!\" .\n\
                   <tag:a> <tag:p> \"a!\" .\n\
                   <tag:a> <tag:p> \"a\" .\n\
                   <tag:a> <tag:p> <tag:a> .\n\
                   <tag:a> <tag:p> _:c14n0 .\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn input_order_is_irrelevant() {
        test_setup();
        let lines = [
            "_:e0 <http://example.com/#p> _:e1 .",
            "_:e1 <http://example.com/#p> _:e0 .",
            "_:e2 <http://example.com/#p> _:e3 .",
            "_:e3 <http://example.com/#p> _:e4 .",
            "_:e4 <http://example.com/#p> _:e2 .",
        ];
        let mut reversed = lines;
        reversed.reverse();
        assert_eq!(c14n(&lines), c14n(&reversed));
    }

    #[test]
    fn renormalizing_is_idempotent() {
        test_setup();
        let first = c14n(&[
            "_:e0 <http://example.com/#p> _:e1 .",
            "_:e1 <http://example.com/#p> _:e0 .",
            "_:e2 <http://example.com/#p> _:e3 .",
            "_:e3 <http://example.com/#p> _:e4 .",
            "_:e4 <http://example.com/#p> _:e2 .",
        ]);
        let reparsed = parse_nquads(&first).unwrap();
        assert_eq!(canonical_nquads(&reparsed).unwrap(), first);
    }

    #[test]
    fn canonical_labels_are_dense() {
        test_setup();
        let got = c14n(&[
            "_:s <http://ex/p> \"x\" _:g1 .",
            "_:s <http://ex/q> _:t <http://ex/graphs/named> .",
            "_:t <http://ex/p> \"y\" .",
            "<http://ex/subj> <http://ex/p> _:g1 .",
        ]);
        let mut labels: Vec<&str> = got
            .split_whitespace()
            .filter(|token| token.starts_with("_:"))
            .collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels, ["_:c14n0", "_:c14n1", "_:c14n2"]);
    }

    #[test]
    fn literal_subject_rejected() {
        test_setup();
        let mut d = Dataset::new();
        d.insert(
            GraphName::Default,
            Triple::new(
                Term::literal("v"),
                Term::iri("http://ex/p"),
                Term::literal("w"),
            ),
        );
        let err = canonical_nquads(&d).unwrap_err();
        assert!(matches!(err, C14nError::InvalidInput(_)));
    }

    #[test]
    fn blank_predicate_rejected() {
        test_setup();
        let mut d = Dataset::new();
        d.insert(
            GraphName::Default,
            Triple::new(
                Term::blank_node("_:s"),
                Term::blank_node("_:p"),
                Term::literal("w"),
            ),
        );
        let err = canonical_nquads(&d).unwrap_err();
        assert!(matches!(err, C14nError::InvalidInput(_)));
    }

    #[test]
    fn mixed_canonical_prefix_rejected() {
        test_setup();
        let err = canonical_nquads(&dataset(&["_:c14n0 <http://ex/p> _:x ."])).unwrap_err();
        assert!(matches!(err, C14nError::InvalidInput(_)));
    }

    #[test]
    fn first_degree_hash_matches_reference() {
        test_setup();
        let mut state = C14nState::new(&dataset(&["_:x <http://example/p> \"v\" ."])).unwrap();
        assert_eq!(
            state.hash_first_degree("_:x").unwrap(),
            "2aa679347b917848b39d3b37f59de4a96ee3d264d9798589687538d5f098fa4c"
        );
    }

    #[test]
    fn first_degree_hash_is_memoized() {
        test_setup();
        let mut state = C14nState::new(&dataset(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "_:e0 <http://example.com/#s> <http://example.com/#u> .",
        ]))
        .unwrap();
        let first = state.hash_first_degree("_:e0").unwrap();
        assert_eq!(
            first,
            "21d1dd5ba21f3dee9d76c0c00c260fa6f5d5d65315099e553026f4828d0dc77a"
        );
        assert_eq!(
            state.blank_node_info["_:e0"].hash.as_deref(),
            Some(&first[..])
        );
        assert_eq!(state.hash_first_degree("_:e0").unwrap(), first);
    }
}
