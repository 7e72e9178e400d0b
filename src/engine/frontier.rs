//! The growth boundary: unset cells adjacent to at least one set cell.

/// Ordered set of frontier indices.
///
/// Kept sorted ascending so iteration order — and with it the engine's
/// lowest-index tie-break — is defined, unlike a hash set whose "first
/// element encountered" varies between runs.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    indices: Vec<usize>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Inserts `index`, keeping the set sorted. Returns `false` when already
    /// present.
    pub fn insert(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(_) => false,
            Err(pos) => {
                self.indices.insert(pos, index);
                true
            }
        }
    }

    /// Removes `index`. Returns `false` when it was not present.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.indices.binary_search(&index) {
            Ok(pos) => {
                self.indices.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Members in ascending index order.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}
