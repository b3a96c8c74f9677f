//! enumeration of initial coloring configurations

/// largest order for which the full configuration table is materialized
pub const MAX_ORDER: usize = 24;

/// a set of initially colored vertices, tracked with its cardinality
#[derive(Clone)]
pub struct ColorSet {
    members: Box<[bool]>,
    cardinality: usize,
}

impl ColorSet {
    /// builds the configuration whose members are the set bits of `bits`
    pub fn from_bits(bits: usize, order: usize) -> ColorSet {
        let mut members = vec![false; order].into_boxed_slice();
        let mut cardinality = 0;
        for (j, member) in members.iter_mut().enumerate() {
            if bits >> j & 1 == 1 {
                *member = true;
                cardinality += 1;
            }
        }

        ColorSet {
            members,
            cardinality,
        }
    }

    /// builds a configuration from an explicit membership vector
    pub fn from_members(members: Vec<bool>) -> ColorSet {
        let cardinality = members.iter().filter(|&&member| member).count();
        ColorSet {
            members: members.into_boxed_slice(),
            cardinality,
        }
    }

    /// number of vertices the configuration is defined over
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// true when no vertex is initially colored
    pub fn is_empty(&self) -> bool {
        self.cardinality == 0
    }

    /// number of initially colored vertices
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// whether vertex `v` is initially colored
    pub fn contains(&self, v: usize) -> bool {
        self.members[v]
    }

    /// membership vector, one entry per vertex
    pub fn members(&self) -> &[bool] {
        &self.members
    }
}

/// Enumerates all 2^order configurations of initially colored vertices.
///
/// Configuration `i` contains vertex `j` iff bit `j` of `i` is set, so the
/// table starts with the empty set and ends with the full vertex set. The
/// table depends only on the order and can be shared across every graph of
/// that order.
pub fn enumerate_color_sets(order: usize) -> Vec<ColorSet> {
    assert!(order >= 1, "order must be at least 1");
    assert!(
        order <= MAX_ORDER,
        "order {} exceeds the enumeration cap of {}",
        order,
        MAX_ORDER
    );

    (0..1usize << order)
        .map(|bits| ColorSet::from_bits(bits, order))
        .collect()
}
