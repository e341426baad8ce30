/// One page of a result set plus the page count it was cut from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// Cut page `page` (1-based) out of `records`. Does not clamp: a page outside
/// `1..=total_pages` gives an empty slice.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(records.len(), page_size);

    let items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(records.len());
            let end = start.saturating_add(page_size).min(records.len());
            &records[start..end]
        }
        None => &records[..0],
    };

    PageSlice { items, total_pages }
}
