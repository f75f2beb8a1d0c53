//! # Pagination
//!
//! Splits an ordered sequence into fixed-size pages and computes page
//! metadata. Out-of-range page requests clamp instead of erroring; the
//! caller resets to page 1 whenever the underlying filtered set changes.

/// Page size of the 4x4 project grid.
pub const PROJECTS_PER_PAGE: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Requested page clamped to `[1, total_pages]`.
    pub current_page: usize,
    /// At least 1, even for an empty collection.
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based inclusive display range; `0..=0` when the page is empty.
    pub first_item: usize,
    pub last_item: usize,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * per_page;
    let end = (start + per_page).min(total_items);
    let (first_item, last_item) = if total_items == 0 { (0, 0) } else { (start + 1, end) };

    Page {
        items: items[start.min(total_items)..end].to_vec(),
        current_page,
        total_pages,
        total_items,
        first_item,
        last_item,
    }
}

/// One slot in a rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    /// A collapsed run of page numbers.
    Gap,
}

/// Windowed page-number strip: all pages when there are five or fewer,
/// otherwise first, a window around the current page, and last, with
/// gaps where runs were collapsed.
pub fn page_links(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 5 {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let mut links = vec![PageLink::Page(1)];
    if current_page > 3 {
        links.push(PageLink::Gap);
    }

    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = (current_page + 1).min(total_pages - 1);
    links.extend((window_start..=window_end).map(PageLink::Page));

    if current_page + 2 < total_pages {
        links.push(PageLink::Gap);
    }
    links.push(PageLink::Page(total_pages));
    links
}
