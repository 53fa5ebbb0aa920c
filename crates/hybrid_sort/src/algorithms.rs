pub mod common;
pub mod hybrid_merge_sort;
