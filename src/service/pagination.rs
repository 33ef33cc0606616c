/// Number of questions per page on every listing endpoint.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice the 1-based `page` out of an ordered sequence.
///
/// Pages past the end, and page `0`, come back empty; callers decide
/// whether an empty page is an error.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_at_most_ten() {
        assert_eq!(paginate(&seq(25), 1), seq(10));
        assert_eq!(paginate(&seq(3), 1), seq(3));
    }

    #[test]
    fn page_matches_slice_bounds() {
        let items = seq(25);
        for page in 1..=3 {
            let start = (page - 1) * QUESTIONS_PER_PAGE;
            let end = (page * QUESTIONS_PER_PAGE).min(items.len());
            assert_eq!(paginate(&items, page), items[start..end].to_vec());
        }
    }

    #[test]
    fn out_of_range_and_zero_pages_are_empty() {
        assert!(paginate(&seq(25), 4).is_empty());
        assert!(paginate(&seq(25), 1000).is_empty());
        assert!(paginate(&seq(25), 0).is_empty());
        assert!(paginate::<usize>(&[], 1).is_empty());
        assert!(paginate(&seq(5), usize::MAX).is_empty());
    }
}
