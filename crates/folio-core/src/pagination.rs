//! Page links, result summaries and the bounded page-number window

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Placeholder substituted with the page number in a [`PageTemplate`]
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Navigation target for page links.
///
/// The page number goes into the `{page}` placeholder when the template has
/// one, otherwise it is appended as a `page` query parameter. Extra
/// parameters (filters, search terms) are carried on every link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTemplate {
    template: String,
    params: Vec<(String, String)>,
}

impl PageTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter; empty values are dropped
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.params.push((key.into(), value));
        }
        self
    }

    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in params {
            self = self.with_param(k, v);
        }
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn href(&self, page: u32) -> String {
        let page = page.to_string();
        let has_placeholder = self.template.contains(PAGE_PLACEHOLDER);

        let mut url = self.template.replace(PAGE_PLACEHOLDER, &page);
        for (key, value) in &self.params {
            push_query(&mut url, key, value);
        }
        if !has_placeholder {
            push_query(&mut url, "page", &page);
        }
        url
    }
}

/// Append `key=value` to `url`, url-encoding both and choosing `?` or `&`
pub fn push_query(url: &mut String, key: &str, value: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&urlencoding::encode(key));
    url.push('=');
    url.push_str(&urlencoding::encode(value));
}

/// Numbers needed to render page links and a result-count summary.
///
/// Callers must keep `1 <= current_page <= last_page`; values outside that
/// range produce unspecified (but non-panicking) output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub template: PageTemplate,
}

impl PaginationDescriptor {
    /// Index of the first item on the current page (1-based, 0 when empty)
    pub fn first_item(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let offset = u64::from(self.current_page.saturating_sub(1)) * u64::from(self.per_page);
        (offset + 1).min(self.total)
    }

    /// Index of the last item on the current page
    pub fn last_item(&self) -> u64 {
        (u64::from(self.current_page) * u64::from(self.per_page)).min(self.total)
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {}",
            self.first_item(),
            self.last_item(),
            self.total
        )
    }

    /// Links to every page plus the summary, or `None` for a single page
    pub fn view(&self) -> Option<PaginationView> {
        if self.last_page <= 1 {
            return None;
        }

        let links = (1..=self.last_page)
            .map(|number| PageLink {
                number,
                href: self.template.href(number),
                active: number == self.current_page,
            })
            .collect();

        Some(PaginationView {
            links,
            summary: self.summary(),
        })
    }
}

/// One page-number link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub href: String,
    /// The current page; rendered highlighted and not clickable
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub links: Vec<PageLink>,
    pub summary: String,
}

/// Contiguous range of page numbers centered on `current` where possible.
///
/// The window is `min(width, total)` pages wide and never leaves
/// `1..=total`. An empty range is returned when `total` is zero.
pub fn page_window(current: u32, total: u32, width: u32) -> RangeInclusive<u32> {
    if total == 0 || width == 0 {
        #[allow(clippy::reversed_empty_ranges)]
        return 1..=0;
    }

    let current = i64::from(current);
    let total = i64::from(total);
    let width = i64::from(width);

    let mut start = (current - width / 2).max(1);
    let end = (start + width - 1).min(total);
    if end - start < width - 1 {
        start = (end - width + 1).max(1);
    }

    // Both bounds are within 1..=total here
    (start as u32)..=(end as u32)
}

/// Standalone pager: bounded window plus First/Previous/Next/Last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
    pub window: RangeInclusive<u32>,
}

impl Pager {
    pub fn new(current: u32, total: u32, width: u32) -> Self {
        Self {
            current,
            total,
            window: page_window(current, total, width),
        }
    }

    pub fn show_first(&self) -> bool {
        self.current > 1
    }

    pub fn show_previous(&self) -> bool {
        self.current > 1
    }

    pub fn show_next(&self) -> bool {
        self.current < self.total
    }

    pub fn show_last(&self) -> bool {
        self.current < self.total
    }

    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    /// Target of the Previous control, never below page 1
    pub fn previous_page(&self) -> u32 {
        self.current.saturating_sub(1).max(1)
    }

    /// Target of the Next control, never past the last page
    pub fn next_page(&self) -> u32 {
        self.current.saturating_add(1).min(self.total)
    }

    pub fn pages(&self) -> Vec<u32> {
        self.window.clone().collect()
    }

    pub fn links(&self, template: &PageTemplate) -> Vec<PageLink> {
        self.window
            .clone()
            .map(|number| PageLink {
                number,
                href: template.href(number),
                active: number == self.current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(current: u32, last: u32, per_page: u32, total: u64) -> PaginationDescriptor {
        PaginationDescriptor {
            current_page: current,
            last_page: last,
            per_page,
            total,
            template: PageTemplate::new("/admin/posts"),
        }
    }

    #[test]
    fn test_window_examples() {
        assert_eq!(page_window(1, 10, 5), 1..=5);
        assert_eq!(page_window(10, 10, 5), 6..=10);
        assert_eq!(page_window(5, 10, 5), 3..=7);
        assert_eq!(page_window(2, 10, 5), 1..=5);
        assert_eq!(page_window(9, 10, 5), 6..=10);
        assert_eq!(page_window(2, 3, 5), 1..=3);
    }

    #[test]
    fn test_window_invariants_exhaustive() {
        for total in 1..=40u32 {
            for current in 1..=total {
                let window = page_window(current, total, 5);
                let (start, end) = (*window.start(), *window.end());
                assert!(1 <= start, "start {} for {}/{}", start, current, total);
                assert!(start <= end);
                assert!(end <= total);
                assert_eq!(end - start + 1, total.min(5));
                assert!(window.contains(&current));
            }
        }
    }

    #[test]
    fn test_window_even_width() {
        assert_eq!(page_window(5, 10, 4), 3..=6);
        assert_eq!(page_window(10, 10, 4), 7..=10);
    }

    #[test]
    fn test_window_empty_total() {
        assert!(page_window(1, 0, 5).is_empty());
        assert!(!Pager::new(1, 0, 5).is_visible());
    }

    #[test]
    fn test_pager_controls() {
        let first = Pager::new(1, 10, 5);
        assert!(!first.show_first());
        assert!(!first.show_previous());
        assert!(first.show_next());
        assert!(first.show_last());

        let last = Pager::new(10, 10, 5);
        assert!(last.show_previous());
        assert!(!last.show_next());
        assert_eq!(last.pages(), vec![6, 7, 8, 9, 10]);

        let single = Pager::new(1, 1, 5);
        assert!(!single.is_visible());
        assert!(!single.show_next());
    }

    #[test]
    fn test_pager_step_targets() {
        let pager = Pager::new(4, 9, 5);
        assert_eq!(pager.previous_page(), 3);
        assert_eq!(pager.next_page(), 5);

        let first = Pager::new(1, 9, 5);
        assert_eq!(first.previous_page(), 1);

        let last = Pager::new(9, 9, 5);
        assert_eq!(last.next_page(), 9);

        let huge = Pager::new(u32::MAX, u32::MAX, 5);
        assert!(!huge.show_next());
        assert_eq!(huge.next_page(), u32::MAX);
    }

    #[test]
    fn test_push_query_encodes_and_joins() {
        let mut url = "/posts".to_string();
        push_query(&mut url, "q", "rust & wasm");
        push_query(&mut url, "page", "2");
        assert_eq!(url, "/posts?q=rust%20%26%20wasm&page=2");

        let mut url = "/posts?sort=new".to_string();
        push_query(&mut url, "tag", "a/b");
        assert_eq!(url, "/posts?sort=new&tag=a%2Fb");
    }

    #[test]
    fn test_pager_links_mark_current() {
        let pager = Pager::new(4, 10, 5);
        let links = pager.links(&PageTemplate::new("/blog"));
        assert_eq!(links.len(), 5);
        let active: Vec<u32> = links.iter().filter(|l| l.active).map(|l| l.number).collect();
        assert_eq!(active, vec![4]);
        assert_eq!(links[0].href, "/blog?page=2");
    }

    #[test]
    fn test_template_href() {
        let plain = PageTemplate::new("/admin/posts");
        assert_eq!(plain.href(2), "/admin/posts?page=2");

        let placeholder = PageTemplate::new("/blog/page/{page}");
        assert_eq!(placeholder.href(3), "/blog/page/3");

        let filtered = PageTemplate::new("/blog")
            .with_param("tag", "rust lang")
            .with_param("q", "");
        assert_eq!(filtered.href(2), "/blog?tag=rust%20lang&page=2");
        assert_eq!(filtered.params().len(), 1);

        let existing_query = PageTemplate::new("/admin/posts?sort=title");
        assert_eq!(existing_query.href(1), "/admin/posts?sort=title&page=1");
    }

    #[test]
    fn test_single_page_has_no_controls() {
        assert!(descriptor(1, 1, 15, 4).view().is_none());
        assert!(descriptor(1, 0, 15, 0).view().is_none());
    }

    #[test]
    fn test_three_pages_render_three_links() {
        let view = descriptor(3, 3, 10, 25).view().unwrap();
        assert_eq!(view.links.len(), 3);
        assert_eq!(view.summary, "Showing 21 to 25 of 25");
        assert!(view.links[2].active);
        assert!(!view.links[0].active);
        assert_eq!(view.links[1].href, "/admin/posts?page=2");

        let view = descriptor(2, 3, 10, 25).view().unwrap();
        assert_eq!(view.summary, "Showing 11 to 20 of 25");
    }

    #[test]
    fn test_summary_bounds() {
        let desc = descriptor(1, 1, 15, 0);
        assert_eq!(desc.summary(), "Showing 0 to 0 of 0");
        let desc = descriptor(2, 2, 15, 16);
        assert_eq!(desc.first_item(), 16);
        assert_eq!(desc.last_item(), 16);
    }
}
