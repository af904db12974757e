//! Id-keyed element storage with monotonic id allocation.

use std::collections::BTreeMap;

use crate::types::{ElementId, ELEMENT_ID_INIT};

/// Keyed storage for one kind of element.
///
/// Ids come from a counter that only ever increments, so an id removed from
/// the store is never handed out again. Iteration follows ascending id order.
#[derive(Debug, Clone)]
pub struct Store<K, T> {
    elements: BTreeMap<K, T>,
    next_id: u64,
}

impl<K: ElementId, T> Store<K, T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            next_id: ELEMENT_ID_INIT,
        }
    }

    /// Allocate the next id, build the element from it and insert it.
    pub fn insert_with(&mut self, build: impl FnOnce(K) -> T) -> K {
        let id = K::from_raw(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, build(id));
        id
    }

    /// Remove an element, returning it if it was present.
    pub fn remove(&mut self, id: K) -> Option<T> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: K) -> Option<&T> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: K) -> Option<&mut T> {
        self.elements.get_mut(&id)
    }

    /// Mutable access to two distinct elements at once, in argument order.
    ///
    /// Returns `None` if `a == b` or either id is absent.
    pub fn get_pair_mut(&mut self, a: K, b: K) -> Option<(&mut T, &mut T)> {
        if a == b {
            return None;
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let mut range = self.elements.range_mut(low..=high);
        let (low_id, low_element) = range.next()?;
        let (high_id, high_element) = range.next_back()?;
        if *low_id != low || *high_id != high {
            return None;
        }
        if a < b {
            Some((low_element, high_element))
        } else {
            Some((high_element, low_element))
        }
    }

    pub fn contains(&self, id: K) -> bool {
        self.elements.contains_key(&id)
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The id the next insertion will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Stored ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = K> + '_ {
        self.elements.keys().copied()
    }

    /// Stored elements in ascending id order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.elements.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.elements.values_mut()
    }

    /// `(id, element)` pairs in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> + '_ {
        self.elements.iter().map(|(id, element)| (*id, element))
    }
}

impl<K: ElementId, T> Default for Store<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove the first entry equal to `item`. Returns whether one was found.
pub(crate) fn remove_first<T: PartialEq>(list: &mut Vec<T>, item: &T) -> bool {
    match list.iter().position(|entry| entry == item) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
