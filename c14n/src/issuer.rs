//! I define [`IdentifierIssuer`],
//! the deterministic blank node label generator of URDNA2015.
//!
//! Implements <https://www.w3.org/TR/rdf-canon/#issue-identifier>.

use std::collections::BTreeMap;
use std::rc::Rc;

/// Issues monotonically numbered labels with a fixed prefix,
/// remembering every assignment and the order in which assignments were made.
///
/// Two issuers constructed with the same prefix and fed identical call
/// sequences hold identical state; cloning produces a fully independent copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierIssuer {
    prefix: Box<str>,
    issued: BTreeMap<Rc<str>, Rc<str>>,
    // the counter is issued_order.len(): one fresh label per assigned old label
    issued_order: Vec<Rc<str>>,
}

impl IdentifierIssuer {
    /// An issuer producing labels `prefix + 0`, `prefix + 1`, …
    pub fn new(prefix: &str) -> Self {
        IdentifierIssuer {
            prefix: prefix.into(),
            issued: BTreeMap::new(),
            issued_order: Vec::new(),
        }
    }

    /// The label issued for `old`, minting `prefix + counter` on first sight.
    ///
    /// Assignments are never rewritten: issuing the same old label twice
    /// returns the same new label.
    pub fn issue(&mut self, old: &str) -> Rc<str> {
        if let Some(id) = self.issued.get(old) {
            return Rc::clone(id);
        }
        let id: Rc<str> = format!("{}{}", self.prefix, self.issued_order.len()).into();
        let key: Rc<str> = Rc::from(old);
        self.issued.insert(Rc::clone(&key), Rc::clone(&id));
        self.issued_order.push(key);
        id
    }

    /// Whether `old` has already been assigned a label.
    pub fn has_issued(&self, old: &str) -> bool {
        self.issued.contains_key(old)
    }

    /// The label issued for `old`, if any, without issuing one.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.issued.get(old).map(|id| &**id)
    }

    /// The old labels this issuer has assigned, in assignment order.
    pub fn issued_order(&self) -> impl Iterator<Item = &str> {
        self.issued_order.iter().map(|old| &**old)
    }

    /// The number of labels issued so far.
    pub fn len(&self) -> usize {
        self.issued_order.len()
    }

    /// Whether no label has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.issued_order.is_empty()
    }
}
