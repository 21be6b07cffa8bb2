use aho_corasick::{AhoCorasick, MatchKind};
use indexmap::IndexSet;

use super::db::{Clause, SignatureMap};
use super::error::{Error, Result};
use super::types::BrowserFamily;

/// Built-in clauses per family. Each inner slice is a conjunction of
/// case-sensitive substrings; a family matches if any clause matches.
pub(crate) const DEFAULT_SIGNATURES: [(BrowserFamily, &[&[&str]]); 4] = [
    (
        BrowserFamily::Ie,
        &[&["compatible", "MSIE"], &["Edge"], &["Trident"]],
    ),
    (BrowserFamily::Chrome, &[&["Chrome"], &["WebKit"]]),
    (BrowserFamily::Firefox, &[&["Firefox"]]),
    (BrowserFamily::Safari, &[&["Safari"]]),
];

/// Built-in signatures as an owned map, ready to be overridden per family.
pub(crate) fn default_signature_map() -> SignatureMap {
    DEFAULT_SIGNATURES
        .iter()
        .map(|(family, clauses)| {
            let clauses: Vec<Clause> = clauses
                .iter()
                .map(|clause| clause.iter().map(|t| t.to_string()).collect())
                .collect();
            (*family, clauses)
        })
        .collect()
}

/// Token ids present in one user agent, indexed by token id.
pub(crate) struct TokenHits(Vec<bool>);

/// All family signatures compiled into a single Aho-Corasick automaton.
///
/// Every distinct token gets one pattern id; clauses refer to tokens by id, so
/// a user agent is scanned once regardless of how many families share a token.
#[derive(Debug)]
pub(crate) struct SignatureSet {
    automaton: AhoCorasick,
    tokens: IndexSet<String>,
    /// Clauses of token ids, indexed by `BrowserFamily::index()`.
    clauses: [Vec<Vec<usize>>; 4],
}

impl SignatureSet {
    /// Compile a signature map. Families missing from `map` never match.
    pub fn build(map: &SignatureMap) -> Result<Self> {
        let mut tokens: IndexSet<String> = IndexSet::new();
        let mut clauses: [Vec<Vec<usize>>; 4] = Default::default();

        for family in BrowserFamily::ALL {
            let Some(family_clauses) = map.get(&family) else {
                continue;
            };
            for clause in family_clauses {
                if clause.is_empty() {
                    return Err(Error::EmptyClause { family });
                }
                let mut ids = Vec::with_capacity(clause.len());
                for token in clause {
                    if token.is_empty() {
                        return Err(Error::EmptyToken { family });
                    }
                    let (id, _) = tokens.insert_full(token.clone());
                    ids.push(id);
                }
                clauses[family.index()].push(ids);
            }
        }

        // Overlapping search needs standard match semantics.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(tokens.iter())?;

        tracing::trace!(
            tokens = tokens.len(),
            "browser signature automaton compiled"
        );

        Ok(Self {
            automaton,
            tokens,
            clauses,
        })
    }

    /// Scan `ua` once and record every token it contains.
    pub fn scan(&self, ua: &str) -> TokenHits {
        let mut hits = vec![false; self.tokens.len()];
        for m in self.automaton.find_overlapping_iter(ua) {
            hits[m.pattern().as_usize()] = true;
        }
        TokenHits(hits)
    }

    pub fn matches(&self, family: BrowserFamily, hits: &TokenHits) -> bool {
        self.clauses[family.index()]
            .iter()
            .any(|clause| clause.iter().all(|&id| hits.0[id]))
    }

    #[cfg(test)]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
