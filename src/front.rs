use crate::{
    edges::{EdgeId, EdgeStore},
    shape::Point,
    vertices::{VertexId, Vertices},
};

/// Where a new vertex lands on the sweep front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// strictly between the two ends of the edge
    Edge(EdgeId),
    /// right above the vertex shared by two consecutive edges
    Vertex { left: EdgeId, right: EdgeId },
}

/// Sweep front, a doubly linked list of edges ordered left to right. The
/// links live on the edges (`next`/`prev`), the front only keeps both ends.
#[derive(Debug, Clone, Copy)]
pub struct SweepFront {
    pub head: EdgeId,
    pub tail: EdgeId,
}

impl SweepFront {
    /// Create the front from the two upper edges of the seed triangle
    pub fn new(left: EdgeId, right: EdgeId, edges: &mut EdgeStore) -> Self {
        {
            let l = edges.get_mut_unchecked(left);
            l.prev = EdgeId::INVALID;
            l.next = right;
        }
        {
            let r = edges.get_mut_unchecked(right);
            r.prev = left;
            r.next = EdgeId::INVALID;
        }
        Self {
            head: left,
            tail: right,
        }
    }

    pub fn next(&self, edge: EdgeId, edges: &EdgeStore) -> Option<EdgeId> {
        edge.get(edges).next.into_option()
    }

    pub fn prev(&self, edge: EdgeId, edges: &EdgeStore) -> Option<EdgeId> {
        edge.get(edges).prev.into_option()
    }

    /// left end of a front edge
    pub fn left(edge: EdgeId, edges: &EdgeStore) -> VertexId {
        edge.get(edges).vertices[0]
    }

    /// right end of a front edge
    pub fn right(edge: EdgeId, edges: &EdgeStore) -> VertexId {
        edge.get(edges).vertices[1]
    }

    pub fn iter<'a>(&self, edges: &'a EdgeStore) -> impl Iterator<Item = EdgeId> + 'a {
        let mut cursor = self.head.into_option();
        std::iter::from_fn(move || {
            let current = cursor?;
            cursor = current.get(edges).next.into_option();
            Some(current)
        })
    }

    /// Front vertices from left to right
    pub fn vertices(&self, edges: &EdgeStore) -> Vec<VertexId> {
        let mut result = vec![Self::left(self.head, edges)];
        result.extend(self.iter(edges).map(|e| Self::right(e, edges)));
        result
    }

    /// Replace the consecutive run `first..=last` with `new` edges, which
    /// must already be oriented left to right.
    pub fn splice(&mut self, first: EdgeId, last: EdgeId, new: &[EdgeId], edges: &mut EdgeStore) {
        debug_assert!(!new.is_empty());

        let before = first.get(edges).prev;
        let after = last.get(edges).next;

        // detach the old run
        let mut cursor = first;
        loop {
            let edge = edges.get_mut_unchecked(cursor);
            let next = edge.next;
            edge.unlink();
            if cursor == last {
                break;
            }
            cursor = next;
        }

        let mut prev = before;
        for &edge_id in new {
            {
                let edge = edges.get_mut_unchecked(edge_id);
                edge.prev = prev;
                edge.next = EdgeId::INVALID;
            }
            match prev.into_option() {
                Some(p) => edges.get_mut_unchecked(p).next = edge_id,
                None => self.head = edge_id,
            }
            prev = edge_id;
        }

        edges.get_mut_unchecked(prev).next = after;
        match after.into_option() {
            Some(a) => edges.get_mut_unchecked(a).prev = prev,
            None => self.tail = prev,
        }
    }

    /// locate the insertion point for `point`, scanning left to right
    pub fn locate(&self, point: Point, vertices: &Vertices, edges: &EdgeStore) -> Option<Insertion> {
        for edge in self.iter(edges) {
            let left = vertices.point(Self::left(edge, edges));
            let right = vertices.point(Self::right(edge, edges));

            if point.x == right.x {
                let next = self.next(edge, edges)?;
                return Some(Insertion::Vertex {
                    left: edge,
                    right: next,
                });
            }
            if left.x < point.x && point.x < right.x {
                return Some(Insertion::Edge(edge));
            }
        }
        None
    }
}
