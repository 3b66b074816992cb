//! In-memory collection paging for table views.

use serde::Serialize;

/// One page of a collection plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Slice an in-memory collection into a 1-indexed page.
///
/// Out-of-range pages and a zero `page` or `page_size` yield an empty
/// page rather than an error; table rendering must always have something
/// to work with.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };

    if page == 0 || page_size == 0 {
        return Page {
            items: Vec::new(),
            total,
            page,
            page_size,
            total_pages,
        };
    }
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = page.saturating_mul(page_size).min(total);

    Page {
        items: items[start..end].to_vec(),
        total,
        page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::paginate;
    use pretty_assertions::assert_eq;

    #[test]
    fn slices_a_middle_page() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, 2, 20);

        assert_eq!(page.items, (21..=40).collect::<Vec<u32>>());
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 20);
    }

    #[test]
    fn last_page_is_short() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, 3, 20);
        assert_eq!(page.items, (41..=45).collect::<Vec<u32>>());
    }

    #[test]
    fn empty_collection_yields_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 20);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn out_of_range_page_yields_empty_slice() {
        let items = vec![1, 2, 3];
        let page = paginate(&items, 5, 20);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn zero_page_or_page_size_yields_empty_page() {
        let items = vec![1, 2, 3];
        assert!(paginate(&items, 0, 20).items.is_empty());
        assert!(paginate(&items, 1, 0).items.is_empty());
        assert_eq!(paginate(&items, 1, 0).total_pages, 0);
    }

    #[test]
    fn zero_page_still_reports_total_pages() {
        let items: Vec<u32> = (1..=45).collect();
        let page = paginate(&items, 0, 20);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages, 3);
    }
}
