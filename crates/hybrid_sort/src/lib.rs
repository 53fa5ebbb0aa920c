mod algorithms;

use std::collections::TryReserveError;

pub use algorithms::common::{find_inversion, insertion_sort, merge};

/// Partitions of at most this many elements are finished by insertion sort.
pub const DEFAULT_INSERTION_THRESHOLD: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortParams {
    pub insertion_threshold: usize,
}

pub const DEFAULT_PARAMS: SortParams = SortParams {
    insertion_threshold: DEFAULT_INSERTION_THRESHOLD,
};

impl Default for SortParams {
    fn default() -> Self {
        DEFAULT_PARAMS
    }
}

impl SortParams {
    pub fn with_threshold(insertion_threshold: usize) -> Self {
        Self {
            insertion_threshold,
        }
    }
}

/// Owns the scratch buffer shared by every merge of a sort.
///
/// The buffer only ever grows, so sorting inputs of the same or a smaller
/// length through one context never reallocates.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Copy + Default> SortContext<T> {
    /// Allocates a scratch buffer for inputs of up to `len` elements,
    /// reporting allocation failure instead of aborting.
    pub fn try_for_len(len: usize) -> Result<Self, TryReserveError> {
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(len)?;
        scratch.resize(len, T::default());
        Ok(Self { scratch })
    }

    #[inline]
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> &mut [T] {
        if self.scratch.len() < len {
            self.scratch.resize(len, T::default());
        }
        &mut self.scratch[..len]
    }
}

/// Sorts `data` with a freshly allocated scratch buffer and default params.
pub fn hybrid_merge_sort<T: Ord + Copy + Default>(data: &mut [T]) {
    let mut ctx = SortContext::default();
    hybrid_merge_sort_with_ctx(data, &mut ctx, DEFAULT_PARAMS);
}

pub fn hybrid_merge_sort_with_ctx<T: Ord + Copy + Default>(
    data: &mut [T],
    ctx: &mut SortContext<T>,
    params: SortParams,
) {
    algorithms::hybrid_merge_sort::sort(data, ctx, params);
}

/// Sorts `data` in place, reusing `scratch` for every merge.
///
/// # Panics
///
/// Panics if `scratch` is shorter than `data`.
pub fn hybrid_merge_sort_with_scratch<T: Ord + Copy>(
    data: &mut [T],
    scratch: &mut [T],
    params: SortParams,
) {
    algorithms::hybrid_merge_sort::sort_with_scratch(data, scratch, params);
}
