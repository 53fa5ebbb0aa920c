use crate::{SortContext, SortParams};

use super::common;

pub fn sort<T: Ord + Copy + Default>(data: &mut [T], ctx: &mut SortContext<T>, params: SortParams) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let buf = ctx.ensure_scratch(len);
    sort_with_scratch(data, buf, params);
}

pub fn sort_with_scratch<T: Ord + Copy>(data: &mut [T], scratch: &mut [T], params: SortParams) {
    if data.len() < 2 {
        return;
    }
    assert!(
        scratch.len() >= data.len(),
        "scratch buffer holds {} elements, need at least {}",
        scratch.len(),
        data.len(),
    );

    // A zero threshold would never bottom out on single-element partitions.
    let threshold = params.insertion_threshold.max(1);
    merge_sort_recursive(data, scratch, threshold);
}

fn merge_sort_recursive<T: Ord + Copy>(data: &mut [T], scratch: &mut [T], threshold: usize) {
    let len = data.len();
    if len <= threshold {
        common::insertion_sort(data);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = data.split_at_mut(mid);
        merge_sort_recursive(left, scratch, threshold);
        merge_sort_recursive(right, scratch, threshold);
    }

    common::merge(data, scratch);
}
