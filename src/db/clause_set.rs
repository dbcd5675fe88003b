//! A set of clause keys, supporting constant time insertion, removal, membership, and uniform choice.
//!
//! Keys are stored contiguously, together with the position of each key in the contiguous storage.
//! Removal swaps the last key into the position of the removed key, and so the order of keys in the set depends on the history of the set.
//!
//! ```rust
//! # use flip_sat::db::clause_set::ClauseSet;
//! let mut set = ClauseSet::new(4);
//! assert!(set.insert(3));
//! assert!(set.insert(1));
//! assert!(!set.insert(3));
//!
//! assert!(set.remove(3));
//! assert!(!set.contains(3));
//! assert_eq!(set.as_slice(), &[1]);
//! ```

use rand::{seq::SliceRandom, Rng};

use crate::db::ClauseKey;

/// Marks a key which is not a member of the set.
const ABSENT: usize = usize::MAX;

/// A set of clause keys.
#[derive(Clone, Debug)]
pub struct ClauseSet {
    /// The members of the set.
    keys: Vec<ClauseKey>,

    /// The position of each key in `keys`, or [ABSENT].
    positions: Vec<usize>,
}

impl ClauseSet {
    /// A fresh set for keys less than `clause_count`.
    pub fn new(clause_count: usize) -> Self {
        ClauseSet {
            keys: Vec::with_capacity(clause_count),
            positions: vec![ABSENT; clause_count],
        }
    }

    /// Removes all keys from the set.
    pub fn clear(&mut self) {
        for key in self.keys.drain(..) {
            self.positions[key as usize] = ABSENT;
        }
    }

    /// Adds the key to the set, returning true if the key was not already present.
    pub fn insert(&mut self, key: ClauseKey) -> bool {
        match self.positions[key as usize] {
            ABSENT => {
                self.positions[key as usize] = self.keys.len();
                self.keys.push(key);
                true
            }
            _ => false,
        }
    }

    /// Removes the key from the set, returning true if the key was present.
    pub fn remove(&mut self, key: ClauseKey) -> bool {
        let position = self.positions[key as usize];
        if position == ABSENT {
            return false;
        }

        self.keys.swap_remove(position);
        if let Some(moved) = self.keys.get(position) {
            self.positions[*moved as usize] = position;
        }
        self.positions[key as usize] = ABSENT;
        true
    }

    /// Whether the key is a member of the set.
    pub fn contains(&self, key: ClauseKey) -> bool {
        self.positions[key as usize] != ABSENT
    }

    /// A count of keys in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The members of the set, in no particular order.
    pub fn as_slice(&self) -> &[ClauseKey] {
        &self.keys
    }

    /// A key chosen uniformly at random from the set, if the set is not empty.
    pub fn choose(&self, rng: &mut impl Rng) -> Option<ClauseKey> {
        self.keys.choose(rng).copied()
    }

    /// The members of the set, in ascending order.
    pub fn sorted(&self) -> Vec<ClauseKey> {
        let mut keys = self.keys.clone();
        keys.sort_unstable();
        keys
    }
}
