// src/pagination.rs

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Returns the 1-based `page_number`-th page of `items`.
///
/// No clamping happens here: a page past the end, page 0, or a zero page size
/// all yield an empty slice. Use [`clamp_page`] first when the caller wants the
/// nearest valid page instead.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    let start = match page_number.checked_sub(1).and_then(|p| p.checked_mul(page_size)) {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `item_count` items; never less than one.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    item_count.div_ceil(page_size).max(1)
}

pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// One page of results plus the numbers needed to render "Showing first - last of total".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub total_pages: usize,
    pub first: usize, // 1-based position of the first item shown, 0 when empty
    pub last: usize,
    pub total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Clamps `requested_page` into range, then slices out that page.
    pub fn new(items: &'a [T], page_size: usize, requested_page: usize) -> Self {
        let total_pages = total_pages(items.len(), page_size);
        let number = clamp_page(requested_page, total_pages);
        let slice = paginate(items, page_size, number);

        let (first, last) = if slice.is_empty() {
            (0, 0)
        } else {
            let first = (number - 1) * page_size + 1;
            (first, first + slice.len() - 1)
        };

        Self {
            items: slice,
            number,
            total_pages,
            first,
            last,
            total_items: items.len(),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_basic_pages() {
        let items = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(paginate(&items, 2, 2), &['c', 'd']);
        assert_eq!(paginate(&items, 2, 3), &['e']);
        assert_eq!(paginate(&['a', 'b', 'c'], 10, 1), &['a', 'b', 'c']);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items = ['a', 'b', 'c'];
        assert!(paginate(&items, 2, 5).is_empty());
        assert!(paginate(&items, 2, 0).is_empty());
        assert!(paginate(&items, 0, 1).is_empty());
        assert!(paginate(&items, usize::MAX, 2).is_empty());
        assert!(paginate::<char>(&[], 10, 1).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_window() {
        let items: Vec<u32> = (1..=45).collect();
        let page = Page::new(&items, 20, 7);

        assert_eq!(page.number, 3, "Requested page should clamp to the last page");
        assert_eq!(page.total_pages, 3);
        assert_eq!((page.first, page.last, page.total_items), (41, 45, 45));
        assert_eq!(page.items, &[41, 42, 43, 44, 45]);
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_window_empty() {
        let items: Vec<u32> = Vec::new();
        let page = Page::new(&items, DEFAULT_PAGE_SIZE, 1);

        assert_eq!((page.number, page.total_pages), (1, 1));
        assert_eq!((page.first, page.last), (0, 0));
        assert!(!page.has_previous() && !page.has_next());
    }
}
