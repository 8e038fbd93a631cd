//! Processing order model.
//!
//! An order is a permutation of job indices `0..N-1` — the primary output
//! of every sequencing algorithm. In a permutation flow shop the same
//! order is applied on every machine.

use serde::{Deserialize, Serialize};

/// A processing order: job indices in the sequence they are released
/// to the first machine.
///
/// Wraps a plain index vector; whether it actually is a permutation of a
/// job set's indices is checked by the evaluator via
/// [`is_permutation_of`](Order::is_permutation_of).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order(Vec<usize>);

impl Order {
    /// Creates an order from job indices.
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The job index at the given position.
    #[inline]
    pub fn job_at(&self, position: usize) -> usize {
        self.0[position]
    }

    /// Job indices in processing order.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this order is a permutation of `0..n`: length `n`, every
    /// index below `n`, each appearing exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &index in &self.0 {
            if index >= n || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    /// Consumes the order, returning the underlying index vector.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for Order {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        assert!(Order::new(vec![2, 0, 1]).is_permutation_of(3));
        assert!(Order::new(vec![0]).is_permutation_of(1));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!Order::new(vec![0, 1]).is_permutation_of(3));
        assert!(!Order::new(vec![0, 1, 2, 3]).is_permutation_of(3));
    }

    #[test]
    fn test_duplicate_index() {
        assert!(!Order::new(vec![0, 1, 1]).is_permutation_of(3));
    }

    #[test]
    fn test_out_of_range_index() {
        assert!(!Order::new(vec![0, 1, 3]).is_permutation_of(3));
    }

    #[test]
    fn test_accessors() {
        let order = Order::new(vec![3, 0, 2, 1]);
        assert_eq!(order.len(), 4);
        assert_eq!(order.job_at(0), 3);
        assert_eq!(order.indices(), &[3, 0, 2, 1]);
        assert_eq!(order.into_vec(), vec![3, 0, 2, 1]);
    }
}
