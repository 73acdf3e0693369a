use crate::BucketingError;

/// Computes how many groups to form and how large each one is.
///
/// The group count is `round(element_count / target_size)` (halves round
/// up), clamped to at least one. Sizes differ by at most one, and the larger
/// groups come first.
///
/// # Returns
/// An empty plan for zero elements. Otherwise a sequence whose sum is
/// exactly `element_count`.
///
/// # Errors
/// [`BucketingError::InvalidClusterSize`] if `target_size` is zero.
pub fn plan(element_count: usize, target_size: usize) -> Result<Vec<usize>, BucketingError> {
    if target_size == 0 {
        return Err(BucketingError::InvalidClusterSize(target_size));
    }
    if element_count == 0 {
        return Ok(Vec::new());
    }

    // floor(n / t + 1/2) without going through floats.
    let group_count = ((2 * element_count + target_size) / (2 * target_size)).max(1);

    let low = element_count / group_count;
    let high = element_count.div_ceil(group_count);
    let high_count = element_count - group_count * low;

    Ok((0..group_count)
        .map(|i| if i < high_count { high } else { low })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        assert_eq!(plan(8, 4).unwrap(), vec![4, 4]);
        assert_eq!(plan(12, 3).unwrap(), vec![3, 3, 3, 3]);
    }

    #[test]
    fn empty() {
        assert_eq!(plan(0, 1).unwrap(), Vec::<usize>::new());
        assert_eq!(plan(0, 50).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn fewer_elements_than_target() {
        assert_eq!(plan(3, 4).unwrap(), vec![3]);
        assert_eq!(plan(1, 50).unwrap(), vec![1]);
    }

    #[test]
    fn halves_round_up() {
        // 5 / 2 = 2.5 -> 3 groups.
        assert_eq!(plan(5, 2).unwrap(), vec![2, 2, 1]);
        // 10 / 4 = 2.5 -> 3 groups.
        assert_eq!(plan(10, 4).unwrap(), vec![4, 3, 3]);
        // 6 / 4 = 1.5 -> 2 groups.
        assert_eq!(plan(6, 4).unwrap(), vec![3, 3]);
    }

    #[test]
    fn below_half_rounds_down() {
        // 9 / 4 = 2.25 -> 2 groups.
        assert_eq!(plan(9, 4).unwrap(), vec![5, 4]);
        // 12 / 5 = 2.4 -> 2 groups.
        assert_eq!(plan(12, 5).unwrap(), vec![6, 6]);
    }

    #[test]
    fn larger_groups_first() {
        let p = plan(100, 7).unwrap();
        assert_eq!(p.len(), 14);
        assert_eq!(&p[..2], &[8, 8]);
        assert!(p[2..].iter().all(|&s| s == 7));
    }

    #[test]
    fn sizes_sum_and_stay_within_one() {
        for n in 0..200 {
            for t in 1..30 {
                let p = plan(n, t).unwrap();
                assert_eq!(p.iter().sum::<usize>(), n, "plan({n}, {t}) = {p:?}");
                if let (Some(min), Some(max)) = (p.iter().min(), p.iter().max()) {
                    assert!(max - min <= 1, "plan({n}, {t}) = {p:?}");
                    assert!(*min > 0, "plan({n}, {t}) = {p:?}");
                }
            }
        }
    }

    #[test]
    fn zero_target_rejected() {
        assert_eq!(plan(10, 0), Err(BucketingError::InvalidClusterSize(0)));
        assert_eq!(plan(0, 0), Err(BucketingError::InvalidClusterSize(0)));
    }
}
