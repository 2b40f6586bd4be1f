use rustc_hash::FxHashMap;

use crate::{shape::InnerEdge, vertices::VertexId};

#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    pub const INVALID: EdgeId = EdgeId(usize::MAX);

    /// whether id is invalid
    pub fn invalid(&self) -> bool {
        self.0 == Self::INVALID.0
    }

    pub fn get<'b>(&self, edges: &'b EdgeStore) -> &'b InnerEdge {
        edges.get_unchecked(*self)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }

    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn into_option(self) -> Option<Self> {
        if self.invalid() {
            None
        } else {
            Some(self)
        }
    }
}

/// Unordered vertex pair, the lookup key of an edge
fn key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edge store. Keeps a vertex pair index so that "is there an edge between
/// a and b" is a hash lookup.
#[derive(Debug, Default, Clone)]
pub struct EdgeStore {
    edges: Vec<Option<InnerEdge>>,
    by_vertices: FxHashMap<(VertexId, VertexId), EdgeId>,
}

impl EdgeStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            by_vertices: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns number of alive edges
    pub fn len(&self) -> usize {
        self.by_vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vertices.is_empty()
    }

    /// insert a new edge between `a` and `b`, `a` stays the first end
    pub fn insert(&mut self, a: VertexId, b: VertexId) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len());
        let previous = self.by_vertices.insert(key(a, b), id);
        assert!(previous.is_none(), "edge between {a:?} and {b:?} exists");
        self.edges.push(Some(InnerEdge::new(a, b)));
        id
    }

    /// remove a detached edge
    pub fn remove(&mut self, id: EdgeId) -> Option<InnerEdge> {
        let removed = self.edges.get_mut(id.as_usize())?.take()?;
        debug_assert_eq!(removed.triangle_count(), 0, "removing edge with triangles");
        self.by_vertices
            .remove(&key(removed.vertices[0], removed.vertices[1]));
        Some(removed)
    }

    /// the edge between `a` and `b`, in any direction
    pub fn find(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        self.by_vertices.get(&key(a, b)).copied()
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: EdgeId) -> Option<&InnerEdge> {
        if id.invalid() {
            return None;
        }
        self.edges.get(id.as_usize())?.as_ref()
    }

    pub fn get_unchecked(&self, id: EdgeId) -> &InnerEdge {
        match self.get(id) {
            Some(e) => e,
            None => panic!("edge {id:?} is not alive"),
        }
    }

    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut InnerEdge> {
        if id.invalid() {
            return None;
        }
        self.edges.get_mut(id.as_usize())?.as_mut()
    }

    pub fn get_mut_unchecked(&mut self, id: EdgeId) -> &mut InnerEdge {
        match self.get_mut(id) {
            Some(e) => e,
            None => panic!("edge {id:?} is not alive"),
        }
    }

    /// iter alive edges
    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &InnerEdge)> {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(idx, e)| e.as_ref().map(|e| (EdgeId::from_index(idx), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_any_direction() {
        let mut edges = EdgeStore::default();
        let a = VertexId::from_index(3);
        let b = VertexId::from_index(1);

        let e = edges.insert(a, b);
        assert_eq!(edges.find(a, b), Some(e));
        assert_eq!(edges.find(b, a), Some(e));
        assert_eq!(e.get(&edges).vertices, [a, b]);
        assert_eq!(edges.len(), 1);

        edges.remove(e);
        assert_eq!(edges.find(a, b), None);
        assert!(!edges.contains(e));
        assert!(edges.is_empty());
    }

    #[test]
    #[should_panic(expected = "exists")]
    fn test_duplicate_edge() {
        let mut edges = EdgeStore::default();
        let a = VertexId::from_index(0);
        let b = VertexId::from_index(1);
        edges.insert(a, b);
        edges.insert(b, a);
    }
}
