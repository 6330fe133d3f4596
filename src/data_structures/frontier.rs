use std::collections::BTreeSet;
use std::fmt::Debug;

/// Ordered working set of candidate vertices for shortest path search
///
/// Members are ranked by `(key, vertex)` ascending, so equal keys are broken
/// by the smaller vertex index. The ordering key of a member can only be
/// changed through [`Frontier::upsert`], which removes the stale entry before
/// inserting the new one; the stored key therefore always matches the
/// distance the engine last assigned.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Members in extraction order
    ordered: BTreeSet<(P, usize)>,

    /// Current key of each vertex, `None` when it is not a member
    keys: Vec<Option<P>>,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty frontier able to hold vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        Frontier {
            ordered: BTreeSet::new(),
            keys: vec![None; vertex_count],
        }
    }

    /// Returns true if the frontier has no members
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Returns the number of members
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns true if `vertex` is currently a member
    pub fn contains(&self, vertex: usize) -> bool {
        self.keys.get(vertex).is_some_and(Option::is_some)
    }

    /// Inserts `vertex` under `key`, replacing its previous entry if present
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is outside the capacity given to [`Frontier::new`].
    pub fn upsert(&mut self, vertex: usize, key: P) {
        if let Some(stale) = self.keys[vertex].replace(key) {
            self.ordered.remove(&(stale, vertex));
        }
        self.ordered.insert((key, vertex));
    }

    /// Removes and returns the member with the smallest `(key, vertex)`
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        let (key, vertex) = self.ordered.pop_first()?;
        self.keys[vertex] = None;
        Some((vertex, key))
    }

    /// Returns the member with the smallest `(key, vertex)` without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.ordered.first().map(|&(key, vertex)| (vertex, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_key_order() {
        let mut frontier = Frontier::new(4);
        frontier.upsert(2, 5);
        frontier.upsert(0, 9);
        frontier.upsert(3, 1);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.peek(), Some((3, 1)));
        assert_eq!(frontier.extract_min(), Some((3, 1)));
        assert_eq!(frontier.extract_min(), Some((2, 5)));
        assert_eq!(frontier.extract_min(), Some((0, 9)));
        assert_eq!(frontier.extract_min(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_keys_prefer_smaller_vertex() {
        let mut frontier = Frontier::new(5);
        frontier.upsert(4, 3);
        frontier.upsert(1, 3);
        frontier.upsert(2, 3);

        assert_eq!(frontier.extract_min(), Some((1, 3)));
        assert_eq!(frontier.extract_min(), Some((2, 3)));
        assert_eq!(frontier.extract_min(), Some((4, 3)));
    }

    #[test]
    fn upsert_replaces_stale_entry() {
        let mut frontier = Frontier::new(3);
        frontier.upsert(1, 10);
        frontier.upsert(2, 6);
        frontier.upsert(1, 4);

        assert_eq!(frontier.len(), 2);
        assert!(frontier.contains(1));
        assert_eq!(frontier.extract_min(), Some((1, 4)));
        assert!(!frontier.contains(1));
        assert_eq!(frontier.extract_min(), Some((2, 6)));
    }

    #[test]
    fn reinsert_after_extraction() {
        let mut frontier = Frontier::new(2);
        frontier.upsert(0, 2);
        assert_eq!(frontier.extract_min(), Some((0, 2)));
        frontier.upsert(0, 1);
        assert_eq!(frontier.extract_min(), Some((0, 1)));
        assert!(!frontier.contains(7));
    }
}
