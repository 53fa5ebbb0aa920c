/// Stable in-place insertion sort. Elements only move by adjacent shifts.
#[inline]
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            // Equal elements stop the shift, which keeps the sort stable.
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}

/// Merges the sorted runs `data[..len / 2]` and `data[len / 2..]` through
/// `scratch[..len]` and copies the result back into `data`.
///
/// On equal elements the left run is emitted first.
#[inline]
pub fn merge<T: Ord + Copy>(data: &mut [T], scratch: &mut [T]) {
    let len = data.len();
    let mid = len / 2;
    let out = &mut scratch[..len];

    let mut i = 0usize;
    let mut j = mid;
    let mut k = 0usize;

    while i < mid && j < len {
        if data[j] < data[i] {
            out[k] = data[j];
            j += 1;
        } else {
            out[k] = data[i];
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        out[k..k + (mid - i)].copy_from_slice(&data[i..mid]);
    } else if j < len {
        out[k..].copy_from_slice(&data[j..len]);
    }

    data.copy_from_slice(out);
}

/// Index `i` of the first adjacent pair with `data[i - 1] > data[i]`.
#[inline]
pub fn find_inversion<T: Ord>(data: &[T]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1]).map(|i| i + 1)
}
