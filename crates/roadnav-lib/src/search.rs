//! Place-name autocomplete.
//!
//! Names are case-folded to lowercase and inserted into a character trie. Each
//! trie node exclusively owns its children; the whole tree is dropped with the
//! index. A separate case-preserving map serves exact lookups.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Node, NodeId};

/// Result cap used by callers that do not pick their own.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One autocomplete match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: NodeId,
    pub name: String,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Set when a folded name ends here.
    entry: Option<SearchHit>,
}

impl TrieNode {
    fn descend(&self, folded: &str) -> Option<&TrieNode> {
        folded
            .chars()
            .try_fold(self, |node, ch| node.children.get(&ch))
    }

    /// Pre-order walk; siblings are visited in character order.
    ///
    /// Uses an explicit stack so the depth of a long name does not grow the
    /// call stack.
    fn collect(&self, hits: &mut Vec<SearchHit>, limit: usize) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if hits.len() >= limit {
                break;
            }
            if let Some(hit) = &node.entry {
                hits.push(hit.clone());
            }
            stack.extend(node.children.values().rev());
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants first so each node drops with no children left.
        let mut pending: Vec<TrieNode> = Vec::new();
        pending.extend(std::mem::take(&mut self.children).into_values());
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Prefix search index over the named nodes of a graph.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    root: TrieNode,
    exact: HashMap<String, NodeId>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: &[Node]) -> Self {
        let mut index = Self::new();
        index.build_index(nodes);
        index
    }

    /// Rebuild the index from `nodes`, discarding any previous contents.
    ///
    /// Unnamed nodes are skipped. When two names fold to the same lowercase
    /// string, or an exact name repeats, the first node inserted wins.
    pub fn build_index(&mut self, nodes: &[Node]) {
        self.root = TrieNode::default();
        self.exact.clear();

        for node in nodes {
            if let Some(name) = node.name() {
                self.insert(node.id, name);
            }
        }
        debug!(names = self.exact.len(), "prefix index rebuilt");
    }

    fn insert(&mut self, id: NodeId, name: &str) {
        let folded = name.to_lowercase();
        let mut current = &mut self.root;
        for ch in folded.chars() {
            current = current.children.entry(ch).or_default();
        }
        current.entry.get_or_insert_with(|| SearchHit {
            id,
            name: name.to_string(),
        });
        self.exact.entry(name.to_string()).or_insert(id);
    }

    /// Return up to `max_results` places whose folded name starts with the
    /// folded `prefix`, in lexicographic order of the folded names.
    pub fn search(&self, prefix: &str, max_results: usize) -> Vec<SearchHit> {
        let mut hits = Vec::new();
        if prefix.is_empty() {
            return hits;
        }
        if let Some(node) = self.root.descend(&prefix.to_lowercase()) {
            node.collect(&mut hits, max_results);
        }
        hits
    }

    /// Exact, case-sensitive lookup of a display name. Does not consult the trie.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.exact.get(name).copied()
    }

    /// Resolve typed text to a node: an exact name first, then a name equal to
    /// it ignoring case, then a prefix that matches exactly one place.
    pub fn resolve(&self, text: &str) -> Result<NodeId> {
        if text.is_empty() {
            return Err(Error::EmptyQuery);
        }
        if let Some(id) = self.node_id(text) {
            return Ok(id);
        }
        if let Some(hit) = self
            .root
            .descend(&text.to_lowercase())
            .and_then(|node| node.entry.as_ref())
        {
            return Ok(hit.id);
        }

        let hits = self.search(text, 3);
        if let [hit] = hits.as_slice() {
            return Ok(hit.id);
        }
        let suggestions = if hits.is_empty() {
            self.suggestions(text, 3)
        } else {
            hits.into_iter().map(|hit| hit.name).collect()
        };
        Err(Error::UnknownPlace {
            name: text.to_string(),
            suggestions,
        })
    }

    /// Names similar to `text`, best match first.
    pub fn suggestions(&self, text: &str, limit: usize) -> Vec<String> {
        let folded = text.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .exact
            .keys()
            .map(|name| {
                let score = strsim::jaro_winkler(&folded, &name.to_lowercase());
                (score, name.as_str())
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Every indexed display name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.exact.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places() -> Vec<Node> {
        vec![
            Node::named(0, 0.0, 0.0, "Central Park"),
            Node::junction(1, 0.0, 0.0),
            Node::named(6, 0.0, 0.0, "City Hall"),
            Node::named(23, 0.0, 0.0, "Hospital"),
            Node::named(4, 0.0, 0.0, "Airport"),
        ]
    }

    #[test]
    fn empty_prefix_matches_nothing() {
        let index = PrefixIndex::from_nodes(&places());
        assert!(index.search("", DEFAULT_MAX_RESULTS).is_empty());
    }

    #[test]
    fn results_are_ordered_by_folded_name() {
        let index = PrefixIndex::from_nodes(&places());
        let names: Vec<_> = index
            .search("c", DEFAULT_MAX_RESULTS)
            .into_iter()
            .map(|hit| hit.name)
            .collect();
        assert_eq!(names, vec!["Central Park", "City Hall"]);
    }

    #[test]
    fn whole_name_is_a_prefix_of_itself() {
        let index = PrefixIndex::from_nodes(&places());
        let hits = index.search("hospital", 5);
        assert_eq!(hits, vec![SearchHit { id: 23, name: "Hospital".to_string() }]);
        assert!(index.search("hospitals", 5).is_empty());
    }

    #[test]
    fn zero_limit_returns_nothing() {
        let index = PrefixIndex::from_nodes(&places());
        assert!(index.search("c", 0).is_empty());
    }

    #[test]
    fn colliding_folds_keep_first_inserted() {
        let nodes = vec![
            Node::named(1, 0.0, 0.0, "Market"),
            Node::named(2, 0.0, 0.0, "MARKET"),
            Node::named(3, 0.0, 0.0, "Market"),
        ];
        let index = PrefixIndex::from_nodes(&nodes);

        assert_eq!(
            index.search("mark", 10),
            vec![SearchHit { id: 1, name: "Market".to_string() }]
        );
        assert_eq!(index.node_id("Market"), Some(1));
        assert_eq!(index.node_id("MARKET"), Some(2));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn rebuild_replaces_previous_contents() {
        let mut index = PrefixIndex::from_nodes(&places());
        index.build_index(&[Node::named(9, 0.0, 0.0, "Zoo")]);

        assert!(index.search("c", 10).is_empty());
        assert_eq!(index.node_id("City Hall"), None);
        assert_eq!(index.search("z", 10)[0].id, 9);
        assert_eq!(index.names(), vec!["Zoo"]);
    }

    #[test]
    fn non_ascii_names_fold() {
        let index = PrefixIndex::from_nodes(&[Node::named(5, 0.0, 0.0, "Österreich Platz")]);
        assert_eq!(index.search("öster", 10)[0].id, 5);
        assert_eq!(index.search("ÖSTER", 10)[0].id, 5);
    }

    #[test]
    fn resolve_prefers_exact_then_unique_prefix() {
        let index = PrefixIndex::from_nodes(&places());
        assert_eq!(index.resolve("Airport").unwrap(), 4);
        assert_eq!(index.resolve("hosp").unwrap(), 23);
        assert!(matches!(index.resolve(""), Err(Error::EmptyQuery)));

        match index.resolve("c") {
            Err(Error::UnknownPlace { suggestions, .. }) => {
                assert_eq!(suggestions, vec!["Central Park", "City Hall"]);
            }
            other => panic!("expected ambiguous prefix, got {other:?}"),
        }
    }

    #[test]
    fn resolve_accepts_full_name_in_any_case() {
        let index = PrefixIndex::from_nodes(&[
            Node::named(1, 0.0, 0.0, "Park"),
            Node::named(2, 0.0, 0.0, "Park Lane"),
        ]);
        assert_eq!(index.resolve("Park").unwrap(), 1);
        assert_eq!(index.resolve("park").unwrap(), 1);
        assert_eq!(index.resolve("PARK LANE").unwrap(), 2);
        assert!(matches!(
            index.resolve("par"),
            Err(Error::UnknownPlace { .. })
        ));
    }

    #[test]
    fn very_long_names_index_search_and_rebuild() {
        let name = "a".repeat(100_000);
        let mut index = PrefixIndex::from_nodes(&[
            Node::named(1, 0.0, 0.0, name.clone()),
            Node::named(2, 0.0, 0.0, "ab"),
        ]);

        let hits = index.search("a", 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 2);
        assert_eq!(index.search(&name, 10)[0].id, 1);
        assert_eq!(index.node_id(&name), Some(1));

        index.build_index(&[Node::named(3, 0.0, 0.0, "Zoo")]);
        assert!(index.search("a", 10).is_empty());
        drop(index);
    }

    #[test]
    fn suggestions_catch_typos() {
        let index = PrefixIndex::from_nodes(&places());
        assert_eq!(index.suggestions("Airprot", 3), vec!["Airport"]);
        assert!(index.suggestions("Xylophone", 3).is_empty());

        let err = index.resolve("Hospitl").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Hospital'?"));
    }
}
