/// Weighted union-find over the elements `0..n`.
///
/// Merges attach the root of the smaller tree under the root of the larger one
/// (union-by-size) and `find` repoints every visited node at its grandparent
/// (path halving), so trees stay O(log n) deep and repeated lookups amortise to
/// near constant time.
///
/// Indices outside `0..n` are a programming error and panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    // Only meaningful at roots.
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetForest {

    /// Creates a forest of `n` singleton components, each of size 1.
    pub fn new(n: usize) -> Self {
        DisjointSetForest {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// The number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of disjoint components currently in the forest.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root of the component containing `i`, halving the path on
    /// the way up.
    ///
    /// # Panics
    /// * if `i` is not a valid element index.
    pub fn find(&mut self, mut i: usize) -> usize {
        self.check_index(i);
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Returns the root of the component containing `i` without compressing
    /// the path. Usable through a shared reference.
    ///
    /// # Panics
    /// * if `i` is not a valid element index.
    pub fn root(&self, mut i: usize) -> usize {
        self.check_index(i);
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// The smaller component is attached below the root of the larger one; on
    /// a tie the root of `b` survives.
    ///
    /// # Returns
    /// * `true` if two distinct components were merged, `false` if `a` and `b`
    ///   were already connected.
    ///
    /// # Panics
    /// * if either index is not a valid element index.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (child, parent) = if self.size[root_a] <= self.size[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` belong to the same component.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The number of elements in the component containing `i`.
    pub fn component_size(&mut self, i: usize) -> usize {
        let root = self.find(i);
        self.size[root]
    }

    /// Read-only counterpart of [`DisjointSetForest::component_size`].
    pub fn size_of_root(&self, i: usize) -> usize {
        self.size[self.root(i)]
    }

    /// Points every element directly at its root. After this, `root` answers
    /// in a single step until the next effective `union`.
    pub fn flatten(&mut self) {
        for i in 0..self.len() {
            let root = self.find(i);
            self.parent[i] = root;
        }
    }

    fn check_index(&self, i: usize) {
        assert!(
            i < self.parent.len(),
            "index {i} out of range for forest of {} elements",
            self.parent.len()
        );
    }
}
