///
/// PageWindow
///
/// Half-open window bounds in usize domain after clamping.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageWindow {
    pub start: usize,
    pub stop: usize,
}

/// Compute the clamped window for a 1-based page over `len` records.
///
/// `page == 0` is treated as page 1. A `stop` of zero (`limit == 0`) or one
/// past the end clamps to `len`; a `start` at or past the end clamps back to
/// zero. An out-of-range request therefore degrades to the whole set from
/// index 0 rather than an empty page; callers that want "no results" must
/// keep the page within range.
#[must_use]
pub fn page_window(len: usize, page: u32, limit: u32) -> PageWindow {
    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);

    let mut start = (page - 1).saturating_mul(limit);
    let mut stop = page.saturating_mul(limit);

    if stop == 0 || stop > len {
        stop = len;
    }
    if start >= len {
        start = 0;
    }

    PageWindow { start, stop }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_page_takes_limit_rows() {
        assert_eq!(page_window(4, 1, 2), PageWindow { start: 0, stop: 2 });
    }

    #[test]
    fn later_pages_advance_the_window() {
        assert_eq!(page_window(10, 2, 3), PageWindow { start: 3, stop: 6 });
        assert_eq!(page_window(10, 4, 3), PageWindow { start: 9, stop: 10 });
    }

    #[test]
    fn page_zero_is_page_one() {
        assert_eq!(page_window(4, 0, 2), page_window(4, 1, 2));
    }

    #[test]
    fn zero_limit_returns_everything() {
        assert_eq!(page_window(4, 1, 0), PageWindow { start: 0, stop: 4 });
        assert_eq!(page_window(4, 3, 0), PageWindow { start: 0, stop: 4 });
    }

    #[test]
    fn out_of_range_page_falls_back_to_start() {
        // Past the last page the window resets to index 0, it does not
        // come back empty.
        assert_eq!(page_window(4, 9, 2), PageWindow { start: 0, stop: 4 });
    }

    #[test]
    fn partial_last_page_clamps_stop() {
        assert_eq!(page_window(5, 2, 3), PageWindow { start: 3, stop: 5 });
    }

    #[test]
    fn empty_set_is_an_empty_window() {
        assert_eq!(page_window(0, 1, 10), PageWindow { start: 0, stop: 0 });
        assert_eq!(page_window(0, 0, 0), PageWindow { start: 0, stop: 0 });
    }

    proptest! {
        // Windows are always slice-safe and the first page holds
        // min(limit, len) rows when a limit is set.
        #[test]
        fn window_is_always_in_bounds(len in 0usize..64, page in 0u32..16, limit in 0u32..16) {
            let window = page_window(len, page, limit);
            prop_assert!(window.start <= window.stop);
            prop_assert!(window.stop <= len);
        }

        #[test]
        fn first_page_length_is_min_of_limit_and_len(len in 0usize..64, limit in 1u32..16) {
            let window = page_window(len, 1, limit);
            prop_assert_eq!(window.stop - window.start, len.min(limit as usize));
        }
    }
}
