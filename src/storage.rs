//! Sparse Storage
//!
//! `SparseStorage<K, T>` maps small integer keys to data through a
//! `Vec<Option<T>>`. Only keys issued by an allocator that reuses freed
//! indices belong here, such as render slots.

use std::marker::PhantomData;

/// Anything that can index a sparse array.
pub trait StorageKey: Copy {
    fn storage_index(&self) -> usize;
}

impl StorageKey for crate::engine::RenderSlot {
    fn storage_index(&self) -> usize {
        self.index() as usize
    }
}

/// Sparse array of `T` indexed by `K`.
///
/// Uses Option<T> so there can be holes where a key has no data.
pub struct SparseStorage<K, T> {
    /// Sparse array indexed by key
    data: Vec<Option<T>>,
    _key: PhantomData<fn(K)>,
}

impl<K: StorageKey, T> SparseStorage<K, T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            _key: PhantomData,
        }
    }

    fn ensure_capacity(&mut self, index: usize) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
    }

    /// Insert data for a key, returning what was there before.
    pub fn insert(&mut self, key: K, value: T) -> Option<T> {
        let idx = key.storage_index();
        self.ensure_capacity(idx);
        self.data[idx].replace(value)
    }

    pub fn remove(&mut self, key: K) -> Option<T> {
        self.data.get_mut(key.storage_index()).and_then(|opt| opt.take())
    }

    pub fn get(&self, key: K) -> Option<&T> {
        self.data.get(key.storage_index()).and_then(|opt| opt.as_ref())
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.data.get_mut(key.storage_index()).and_then(|opt| opt.as_mut())
    }

    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over all (index, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_ref().map(|v| (idx, v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_mut().map(|v| (idx, v)))
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Number of occupied keys.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|opt| opt.is_some()).count()
    }
}

impl<K: StorageKey, T> Default for SparseStorage<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
