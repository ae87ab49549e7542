// web_app/listing/pagination.rs - Page slicing math
//
// Pages are 1-based. These helpers never panic: out-of-range pages give an
// empty slice and page 0 is read as page 1.

/// Rows shown per page on the list pages
pub const ITEMS_PER_PAGE: usize = 8;

/// Returns the items of `page`, i.e. `[(page-1)*size, page*size)` clamped
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items, at least 1
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Page controls are only worth showing when the items overflow one page
pub fn needs_pagination(len: usize, page_size: usize) -> bool {
    len > page_size
}

/// Clamps a requested page into `1..=page_count`
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size))
}
