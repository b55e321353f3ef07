/// Disjoint-set (union-find) for cycle detection in Kruskal's algorithm.
///
/// Uses path compression in [`find`](UnionFind::find) and union by rank in
/// [`union`](UnionFind::union), which keeps the amortized cost of both
/// operations near constant. Sets only ever merge; there is no removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1), each in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression.
    ///
    /// # Panics
    /// Panics if `x >= self.len()`.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Unites the sets containing `x` and `y`.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    ///
    /// The root of lower rank is attached below the other. On equal ranks the
    /// root of `x` becomes the new root and its rank grows by one.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        if self.rank[x_root] < self.rank[y_root] {
            self.parent[x_root] = y_root;
        } else if self.rank[x_root] > self.rank[y_root] {
            self.parent[y_root] = x_root;
        } else {
            self.parent[y_root] = x_root;
            self.rank[x_root] += 1;
        }
        self.components -= 1;
        true
    }

    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Rank of the tree rooted at `x`'s representative.
    pub fn rank(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.rank[root]
    }
}
