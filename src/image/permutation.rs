//! Seed-derived lattice hash shared by the gradient noise functions.

use rand::Rng;
use rand::seq::SliceRandom;

/// Number of distinct lattice hashes. Coordinates wrap modulo this size.
pub const TABLE_SIZE: usize = 256;

/// A shuffled permutation of `0..TABLE_SIZE`, stored twice in a row.
///
/// Doubling the table lets `perm[perm[x] + y]` index directly without a
/// second wrap. Building it costs one shuffle; every lookup afterwards is a
/// plain array read.
#[derive(Clone)]
pub struct PermutationTable {
    values: [u8; TABLE_SIZE * 2],
}

impl PermutationTable {
    /// Shuffles a fresh table with `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut base: [u8; TABLE_SIZE] = std::array::from_fn(|i| i as u8);
        base.shuffle(rng);

        let mut values = [0u8; TABLE_SIZE * 2];
        values[..TABLE_SIZE].copy_from_slice(&base);
        values[TABLE_SIZE..].copy_from_slice(&base);
        log::trace!("built permutation table");
        Self { values }
    }

    /// Hash of one lattice coordinate, wrapped into the table.
    #[inline]
    pub fn hash1(&self, x: i64) -> usize {
        self.values[wrap(x)] as usize
    }

    /// Hash of a 2-D lattice point.
    #[inline]
    pub fn hash2(&self, x: i64, y: i64) -> usize {
        self.values[self.hash1(x) + wrap(y)] as usize
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.values[..8])
            .finish_non_exhaustive()
    }
}

#[inline]
fn wrap(v: i64) -> usize {
    (v & (TABLE_SIZE as i64 - 1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RngHandle;

    #[test]
    fn test_is_a_permutation() {
        let table = PermutationTable::new(&mut RngHandle::new(Some(1)));
        let mut seen = [false; TABLE_SIZE];
        for &v in &table.values[..TABLE_SIZE] {
            assert!(!seen[v as usize], "duplicate entry {}", v);
            seen[v as usize] = true;
        }
        assert_eq!(&table.values[..TABLE_SIZE], &table.values[TABLE_SIZE..]);
    }

    #[test]
    fn test_same_seed_same_table() {
        let a = PermutationTable::new(&mut RngHandle::new(Some(5)));
        let b = PermutationTable::new(&mut RngHandle::new(Some(5)));
        assert_eq!(a.values, b.values);

        let c = PermutationTable::new(&mut RngHandle::new(Some(6)));
        assert_ne!(a.values, c.values);
    }

    #[test]
    fn test_hash_wraps_negative_coordinates() {
        let table = PermutationTable::new(&mut RngHandle::new(Some(2)));
        assert_eq!(table.hash1(-1), table.hash1(255));
        assert_eq!(table.hash2(-3, 7), table.hash2(253, 263));
        assert_eq!(table.hash2(i64::MIN, i64::MAX), table.hash2(0, 255));
    }
}
