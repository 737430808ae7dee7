//! Dense distance matrix over a depot and its stops.

use crate::models::Point;

use super::haversine_km;

/// A dense n×n great-circle distance matrix stored in row-major order.
///
/// When built with [`from_depot_and_stops`](Self::from_depot_and_stops),
/// index 0 is the depot and `1..=n` are the stops in input order.
///
/// # Examples
///
/// ```
/// use aqua_route::models::Point;
/// use aqua_route::distance::DistanceMatrix;
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let stops = [Point::new(0.0, 1.0).unwrap(), Point::new(0.0, 2.0).unwrap()];
/// let dm = DistanceMatrix::from_depot_and_stops(&depot, &stops);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.get(0, 2) > dm.get(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes haversine distances between every pair of points.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Builds a matrix with the depot at index 0 followed by `stops`.
    pub fn from_depot_and_stops(depot: &Point, stops: &[Point]) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 1);
        points.push(*depot);
        points.extend_from_slice(stops);
        Self::from_points(&points)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Position within `candidates` of the location nearest to `from`.
    ///
    /// Scans left to right and only replaces the incumbent on a strictly
    /// smaller distance, so the first of several equidistant candidates wins.
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_among(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &c) in candidates.iter().enumerate() {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((pos, d)),
            }
        }
        best.map(|(pos, _)| pos)
    }
}
