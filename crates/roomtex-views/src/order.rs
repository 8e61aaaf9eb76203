//! Visit-order permutation for turntable passes.

/// Interleaved visit order for `len` evenly spaced views.
///
/// Keeps index 0 first, then alternates between the near and far half of
/// the remaining indices so that consecutive views stay geometrically
/// close instead of sweeping a full monotonic circle. Even lengths pair
/// `k` with `len - k` and end on the midpoint; odd lengths pair `k` with
/// `k + len / 2`. Lengths 0 and 1 come back unchanged. The result is a
/// total permutation of `0..len`.
pub fn alternating_order(len: usize) -> Vec<usize> {
    if len < 2 {
        return (0..len).collect();
    }

    let mid = len / 2;
    let mut order = Vec::with_capacity(len);
    order.push(0);
    if len % 2 == 0 {
        for k in 1..mid {
            order.push(k);
            order.push(len - k);
        }
        order.push(mid);
    } else {
        for k in 1..=mid {
            order.push(k);
            order.push(k + mid);
        }
    }
    order
}

/// Apply a visit order produced by [`alternating_order`].
pub(crate) fn reorder<T: Copy>(values: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&i| values[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_lengths_are_defined() {
        assert_eq!(alternating_order(0), Vec::<usize>::new());
        assert_eq!(alternating_order(1), vec![0]);
        assert_eq!(alternating_order(2), vec![0, 1]);
    }

    #[test]
    fn even_lengths_end_on_the_midpoint() {
        assert_eq!(alternating_order(4), vec![0, 1, 3, 2]);
        assert_eq!(alternating_order(6), vec![0, 1, 5, 2, 4, 3]);
        assert_eq!(alternating_order(8), vec![0, 1, 7, 2, 6, 3, 5, 4]);
    }

    #[test]
    fn odd_lengths_pair_across_the_midpoint() {
        assert_eq!(alternating_order(5), vec![0, 1, 3, 2, 4]);
        assert_eq!(alternating_order(7), vec![0, 1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn every_length_is_a_total_permutation() {
        for len in 0..32 {
            let mut order = alternating_order(len);
            assert_eq!(order.len(), len);
            order.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            assert_eq!(order, expected, "length {len}");
        }
    }

    #[test]
    fn reorder_applies_the_permutation() {
        let values = [10, 20, 30, 40];
        assert_eq!(reorder(&values, &alternating_order(4)), vec![10, 20, 40, 30]);
    }
}
