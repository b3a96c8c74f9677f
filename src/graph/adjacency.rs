//! a dense 0/1 adjacency matrix over a fixed vertex set

pub struct AdjacencyMatrix {
    entries: Box<[u8]>,
    pub n: usize, // number of vertices
}

impl AdjacencyMatrix {
    /// constructs an edgeless graph on `n` vertices
    pub fn empty(n: usize) -> AdjacencyMatrix {
        AdjacencyMatrix {
            entries: vec![0; n * n].into_boxed_slice(),
            n,
        }
    }

    /// Builds a matrix from row-major entries.
    ///
    /// Entries must be 0 or 1 and there must be exactly n*n of them.
    pub fn new(entries: Box<[u8]>, n: usize) -> AdjacencyMatrix {
        assert!(
            entries.len() == n * n,
            "expected {} entries for a {}x{} matrix, got {}",
            n * n,
            n,
            n,
            entries.len()
        );
        assert!(
            entries.iter().all(|&e| e <= 1),
            "adjacency entries must be 0 or 1"
        );

        AdjacencyMatrix { entries, n }
    }

    /// builds a matrix from a slice of rows, validating that it is square
    pub fn from_rows(rows: &[Vec<u8>]) -> AdjacencyMatrix {
        let n = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == n),
            "matrix rows must all have length {}",
            n
        );

        let entries: Vec<u8> = rows.iter().flatten().copied().collect();
        AdjacencyMatrix::new(entries.into_boxed_slice(), n)
    }

    /// row `i` of the matrix
    pub fn row(&self, i: usize) -> &[u8] {
        assert!(i < self.n);
        &self.entries[i * self.n..(i + 1) * self.n]
    }

    /// whether vertices `i` and `j` are adjacent
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        assert!(i < self.n && j < self.n);
        self.entries[i * self.n + j] != 0
    }

    /// number of neighbors of `i`
    pub fn degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&e| e != 0).count()
    }

    /// inserts the edge in both directions
    pub fn add_edge(&mut self, i: usize, j: usize) {
        assert!(i < self.n && j < self.n);
        self.entries[i * self.n + j] = 1;
        self.entries[j * self.n + i] = 1;
    }

    /// True if any diagonal entry is set.
    ///
    /// The propagation model assumes a zero diagonal; inputs with self-loops
    /// are reported by the inspection tool rather than rejected here.
    pub fn has_self_loops(&self) -> bool {
        (0..self.n).any(|i| self.entries[i * self.n + i] != 0)
    }
}
