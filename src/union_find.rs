/// Union-Find (Disjoint Sets) data structure for incremental connectivity
///
/// Fixed universe of elements, weighted union (smaller tree under larger)
/// and path compression, giving near-constant amortized find/union. The
/// structure has no notion of "inactive" elements: every element starts as
/// its own singleton and callers decide which elements they ever union.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// Create a new DisjointSet with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        DisjointSet { parent, size }
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Union the sets containing x and y
    ///
    /// Weighted by subtree size: the root of the smaller tree is attached
    /// under the root of the larger tree. No-op if already connected.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x != root_y {
            if self.size[root_x] < self.size[root_y] {
                self.parent[root_x] = root_y;
                self.size[root_y] += self.size[root_x];
            } else {
                self.parent[root_y] = root_x;
                self.size[root_x] += self.size[root_y];
            }
        }
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
