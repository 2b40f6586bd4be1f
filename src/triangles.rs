use crate::shape::InnerTriangle;

#[derive(Debug, Hash, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TriangleId(usize);

impl TriangleId {
    pub const INVALID: TriangleId = TriangleId(usize::MAX);

    /// whether id is invalid
    pub fn invalid(&self) -> bool {
        self.0 == Self::INVALID.0
    }

    pub fn get<'b>(&self, triangles: &'b TriangleStore) -> &'b InnerTriangle {
        triangles.get_unchecked(*self)
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

/// Triangle store. Removed triangles leave an empty slot behind, ids are
/// never reused.
// Note: For n vetexes, there will around 2n triangles alive, plus the ones
//       removed by flips, so space complexity is O(n + flips).
#[derive(Debug, Default, Clone)]
pub struct TriangleStore {
    triangles: Vec<Option<InnerTriangle>>,
    alive: usize,
}

impl TriangleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
            alive: 0,
        }
    }

    /// Returns number of alive triangles
    pub fn len(&self) -> usize {
        self.alive
    }

    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }

    /// insert a new triangle
    pub fn insert(&mut self, triangle: InnerTriangle) -> TriangleId {
        let id = TriangleId::from_index(self.triangles.len());
        self.triangles.push(Some(triangle));
        self.alive += 1;
        id
    }

    /// remove the triangle, returns it if it was alive
    pub fn remove(&mut self, id: TriangleId) -> Option<InnerTriangle> {
        let removed = self.triangles.get_mut(id.as_usize())?.take();
        if removed.is_some() {
            self.alive -= 1;
        }
        removed
    }

    pub fn contains(&self, id: TriangleId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: TriangleId) -> Option<&InnerTriangle> {
        if id.invalid() {
            return None;
        }
        self.triangles.get(id.as_usize())?.as_ref()
    }

    pub fn get_unchecked(&self, id: TriangleId) -> &InnerTriangle {
        match self.get(id) {
            Some(t) => t,
            None => panic!("triangle {id:?} is not alive"),
        }
    }

    pub fn get_mut(&mut self, id: TriangleId) -> Option<&mut InnerTriangle> {
        if id.invalid() {
            return None;
        }
        self.triangles.get_mut(id.as_usize())?.as_mut()
    }

    /// iter alive triangles
    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &InnerTriangle)> {
        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.as_ref().map(|t| (TriangleId::from_index(idx), t)))
    }
}
