//! Page cursoring for list endpoints

use crate::data_fetcher::models::Paging;

/// Returns the page after the one described by `paging`, or `None` when the
/// last page has been fetched. `total == 0` means there is nothing to page.
pub fn next_page(paging: &Paging) -> Option<u32> {
    if paging.current < paging.total {
        Some(paging.current + 1)
    } else {
        None
    }
}

impl Paging {
    pub fn next_page(&self) -> Option<u32> {
        next_page(self)
    }

    pub fn is_last(&self) -> bool {
        next_page(self).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_when_more_pages() {
        assert_eq!(next_page(&Paging { current: 1, total: 3 }), Some(2));
        assert_eq!(next_page(&Paging { current: 2, total: 3 }), Some(3));
    }

    #[test]
    fn test_no_next_page_on_last_page() {
        assert_eq!(next_page(&Paging { current: 3, total: 3 }), None);
        assert_eq!(next_page(&Paging { current: 1, total: 1 }), None);
    }

    #[test]
    fn test_no_next_page_when_total_is_zero() {
        assert_eq!(next_page(&Paging { current: 1, total: 0 }), None);
        assert!(Paging { current: 1, total: 0 }.is_last());
    }

    #[test]
    fn test_next_page_for_all_small_values() {
        for total in 0..=6u32 {
            for current in 1..=6u32 {
                let paging = Paging { current, total };
                let expected = if current < total { Some(current + 1) } else { None };
                assert_eq!(paging.next_page(), expected, "paging {paging:?}");
            }
        }
    }

    #[test]
    fn test_next_page_does_not_mutate_input() {
        let paging = Paging { current: 4, total: 9 };
        let _ = next_page(&paging);
        assert_eq!(paging, Paging { current: 4, total: 9 });
    }
}
