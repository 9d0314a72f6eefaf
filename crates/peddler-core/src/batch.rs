//! Flat batch containers for instances, distance matrices, and adjacency.
//!
//! Each container holds B independent per-instance blocks in one
//! contiguous buffer. Per-instance data is exposed as plain slices so
//! callers can stay allocation-free on the hot path.

use crate::error::ShapeError;

/// A batch of TSP instances: B × C city coordinates in the plane.
///
/// Storage is a flat `Vec<f32>` of interleaved `(x, y)` pairs, city-major
/// within each instance: the coordinate of city `c` in instance `b`
/// starts at `((b * n_cities) + c) * 2`.
///
/// Shape invariants (`n_instances >= 1`, `n_cities >= 2`, buffer length
/// `n_instances * n_cities * 2`) are checked at construction; all
/// accessors rely on them.
#[derive(Clone, Debug, PartialEq)]
pub struct InstanceBatch {
    coords: Vec<f32>,
    n_instances: usize,
    n_cities: usize,
}

impl InstanceBatch {
    /// Build a batch from a flat interleaved-xy buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if the batch is empty, the city count is
    /// below 2, or the buffer length does not equal
    /// `n_instances * n_cities * 2`.
    pub fn from_flat(
        coords: Vec<f32>,
        n_instances: usize,
        n_cities: usize,
    ) -> Result<Self, ShapeError> {
        if n_instances == 0 {
            return Err(ShapeError::EmptyBatch);
        }
        if n_cities < 2 {
            return Err(ShapeError::TooFewCities {
                configured: n_cities,
            });
        }
        let expected = n_instances * n_cities * 2;
        if coords.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                got: coords.len(),
            });
        }
        Ok(Self {
            coords,
            n_instances,
            n_cities,
        })
    }

    /// Number of instances in the batch (B).
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Number of cities per instance (C).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// Coordinates of one city as `[x, y]`.
    ///
    /// # Panics
    ///
    /// Panics if `instance` or `city` is out of range.
    pub fn city(&self, instance: usize, city: usize) -> [f32; 2] {
        assert!(instance < self.n_instances, "instance index out of range");
        assert!(city < self.n_cities, "city index out of range");
        let base = (instance * self.n_cities + city) * 2;
        [self.coords[base], self.coords[base + 1]]
    }

    /// The interleaved-xy coordinate slice of one instance (`2 * C` floats).
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn instance(&self, instance: usize) -> &[f32] {
        assert!(instance < self.n_instances, "instance index out of range");
        let stride = self.n_cities * 2;
        &self.coords[instance * stride..(instance + 1) * stride]
    }

    /// The whole flat buffer, length `B * C * 2`.
    pub fn as_flat(&self) -> &[f32] {
        &self.coords
    }
}

/// A batch of per-instance C × C Euclidean distance matrices.
///
/// Produced by `compute_distances`; symmetric with a zero diagonal by
/// construction. Row-major within each instance.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceBatch {
    values: Vec<f32>,
    n_instances: usize,
    n_cities: usize,
}

impl DistanceBatch {
    /// Build a distance batch from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] on an empty batch, a city count below 2,
    /// or a buffer length other than `n_instances * n_cities * n_cities`.
    pub fn from_flat(
        values: Vec<f32>,
        n_instances: usize,
        n_cities: usize,
    ) -> Result<Self, ShapeError> {
        if n_instances == 0 {
            return Err(ShapeError::EmptyBatch);
        }
        if n_cities < 2 {
            return Err(ShapeError::TooFewCities {
                configured: n_cities,
            });
        }
        let expected = n_instances * n_cities * n_cities;
        if values.len() != expected {
            return Err(ShapeError::LengthMismatch {
                expected,
                got: values.len(),
            });
        }
        Ok(Self {
            values,
            n_instances,
            n_cities,
        })
    }

    /// Number of instances in the batch (B).
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Number of cities per instance (C).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// Distance between cities `i` and `j` of one instance.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn get(&self, instance: usize, i: usize, j: usize) -> f32 {
        assert!(instance < self.n_instances, "instance index out of range");
        assert!(i < self.n_cities && j < self.n_cities, "city index out of range");
        self.values[(instance * self.n_cities + i) * self.n_cities + j]
    }

    /// One row of an instance's matrix: distances from city `i` to all cities.
    ///
    /// # Panics
    ///
    /// Panics if `instance` or `i` is out of range.
    pub fn row(&self, instance: usize, i: usize) -> &[f32] {
        assert!(instance < self.n_instances, "instance index out of range");
        assert!(i < self.n_cities, "city index out of range");
        let base = (instance * self.n_cities + i) * self.n_cities;
        &self.values[base..base + self.n_cities]
    }

    /// The full row-major matrix of one instance (`C * C` floats).
    ///
    /// # Panics
    ///
    /// Panics if `instance` is out of range.
    pub fn instance(&self, instance: usize) -> &[f32] {
        assert!(instance < self.n_instances, "instance index out of range");
        let stride = self.n_cities * self.n_cities;
        &self.values[instance * stride..(instance + 1) * stride]
    }
}

/// A batch of per-instance C × C binary adjacency matrices.
///
/// Entries are stored as `u8` (0 or 1), row-major within each instance.
/// The diagonal is always zero; after edge sampling every row has
/// out-degree at least 1 (the forced nearest-neighbour edge). The
/// relation is directed: `edge(i, j)` and `edge(j, i)` are independent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyBatch {
    bits: Vec<u8>,
    n_instances: usize,
    n_cities: usize,
}

impl AdjacencyBatch {
    /// Create an all-zero adjacency batch.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] on an empty batch or a city count below 2.
    pub fn zeroed(n_instances: usize, n_cities: usize) -> Result<Self, ShapeError> {
        if n_instances == 0 {
            return Err(ShapeError::EmptyBatch);
        }
        if n_cities < 2 {
            return Err(ShapeError::TooFewCities {
                configured: n_cities,
            });
        }
        Ok(Self {
            bits: vec![0; n_instances * n_cities * n_cities],
            n_instances,
            n_cities,
        })
    }

    /// Number of instances in the batch (B).
    pub fn n_instances(&self) -> usize {
        self.n_instances
    }

    /// Number of cities per instance (C).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// Whether the directed edge `i -> j` is present in one instance.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn is_edge(&self, instance: usize, i: usize, j: usize) -> bool {
        self.bits[self.index(instance, i, j)] != 0
    }

    /// Set the directed edge `i -> j` in one instance.
    ///
    /// Self-loops are rejected with a panic rather than silently
    /// ignored; the diagonal-zero invariant is structural.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range or `i == j`.
    pub fn set_edge(&mut self, instance: usize, i: usize, j: usize) {
        assert_ne!(i, j, "self-loops are not representable");
        let idx = self.index(instance, i, j);
        self.bits[idx] = 1;
    }

    /// Out-degree of city `i` in one instance.
    ///
    /// # Panics
    ///
    /// Panics if `instance` or `i` is out of range.
    pub fn out_degree(&self, instance: usize, i: usize) -> usize {
        self.row(instance, i).iter().filter(|&&b| b != 0).count()
    }

    /// One row of an instance's matrix as raw 0/1 bytes.
    ///
    /// # Panics
    ///
    /// Panics if `instance` or `i` is out of range.
    pub fn row(&self, instance: usize, i: usize) -> &[u8] {
        assert!(instance < self.n_instances, "instance index out of range");
        assert!(i < self.n_cities, "city index out of range");
        let base = (instance * self.n_cities + i) * self.n_cities;
        &self.bits[base..base + self.n_cities]
    }

    fn index(&self, instance: usize, i: usize, j: usize) -> usize {
        assert!(instance < self.n_instances, "instance index out of range");
        assert!(i < self.n_cities && j < self.n_cities, "city index out of range");
        (instance * self.n_cities + i) * self.n_cities + j
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── InstanceBatch ──────────────────────────────────────────

    #[test]
    fn instance_batch_shape_checks() {
        assert_eq!(
            InstanceBatch::from_flat(vec![], 0, 4),
            Err(ShapeError::EmptyBatch)
        );
        assert_eq!(
            InstanceBatch::from_flat(vec![0.0; 2], 1, 1),
            Err(ShapeError::TooFewCities { configured: 1 })
        );
        assert_eq!(
            InstanceBatch::from_flat(vec![0.0; 7], 1, 2),
            Err(ShapeError::LengthMismatch {
                expected: 4,
                got: 7
            })
        );
    }

    #[test]
    fn instance_batch_indexing() {
        // 2 instances, 2 cities each.
        let coords = vec![
            0.0, 1.0, 2.0, 3.0, // instance 0: (0,1) (2,3)
            4.0, 5.0, 6.0, 7.0, // instance 1: (4,5) (6,7)
        ];
        let batch = InstanceBatch::from_flat(coords, 2, 2).unwrap();
        assert_eq!(batch.city(0, 0), [0.0, 1.0]);
        assert_eq!(batch.city(0, 1), [2.0, 3.0]);
        assert_eq!(batch.city(1, 1), [6.0, 7.0]);
        assert_eq!(batch.instance(1), &[4.0, 5.0, 6.0, 7.0]);
        assert_eq!(batch.as_flat().len(), 8);
    }

    #[test]
    #[should_panic(expected = "city index out of range")]
    fn instance_batch_city_out_of_range_panics() {
        let batch = InstanceBatch::from_flat(vec![0.0; 4], 1, 2).unwrap();
        batch.city(0, 2);
    }

    // ── DistanceBatch ──────────────────────────────────────────

    #[test]
    fn distance_batch_rows() {
        let values = vec![
            0.0, 1.0, 2.0, //
            1.0, 0.0, 3.0, //
            2.0, 3.0, 0.0,
        ];
        let d = DistanceBatch::from_flat(values, 1, 3).unwrap();
        assert_eq!(d.get(0, 1, 2), 3.0);
        assert_eq!(d.row(0, 2), &[2.0, 3.0, 0.0]);
        assert_eq!(d.instance(0).len(), 9);
    }

    #[test]
    fn distance_batch_rejects_bad_length() {
        assert!(DistanceBatch::from_flat(vec![0.0; 8], 1, 3).is_err());
    }

    // ── AdjacencyBatch ─────────────────────────────────────────

    #[test]
    fn adjacency_starts_empty_and_sets_edges() {
        let mut a = AdjacencyBatch::zeroed(2, 3).unwrap();
        assert_eq!(a.out_degree(0, 0), 0);

        a.set_edge(0, 0, 2);
        a.set_edge(1, 2, 1);
        assert!(a.is_edge(0, 0, 2));
        assert!(!a.is_edge(0, 2, 0), "edges are directed");
        assert!(a.is_edge(1, 2, 1));
        assert_eq!(a.out_degree(0, 0), 1);
        assert_eq!(a.row(1, 2), &[0, 1, 0]);
    }

    #[test]
    #[should_panic(expected = "self-loops")]
    fn adjacency_rejects_self_loop() {
        let mut a = AdjacencyBatch::zeroed(1, 2).unwrap();
        a.set_edge(0, 1, 1);
    }
}
