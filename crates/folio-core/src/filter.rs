//! List filters carried in the query string

use crate::pagination::PageTemplate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub tag: Option<String>,
    pub category: Option<String>,
    pub search: String,
    pub page: u32,
}

impl ListFilter {
    /// Build from query parameters; unknown keys and bad page numbers are ignored
    pub fn from_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut filter = Self {
            page: 1,
            ..Default::default()
        };
        for (key, value) in pairs {
            let value = value.trim();
            match key {
                "tag" if !value.is_empty() => filter.tag = Some(value.to_string()),
                "category" if !value.is_empty() => filter.category = Some(value.to_string()),
                "q" => filter.search = value.to_string(),
                "page" => filter.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1),
                _ => {}
            }
        }
        filter
    }

    /// Select a tag; choosing the active tag clears it
    pub fn toggle_tag(&mut self, slug: &str) {
        if self.tag.as_deref() == Some(slug) {
            self.tag = None;
        } else {
            self.tag = Some(slug.to_string());
        }
        self.page = 1;
    }

    pub fn toggle_category(&mut self, slug: &str) {
        if self.category.as_deref() == Some(slug) {
            self.category = None;
        } else {
            self.category = Some(slug.to_string());
        }
        self.page = 1;
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.trim().to_string();
        self.page = 1;
    }

    pub fn clear(&mut self) {
        *self = Self {
            page: 1,
            ..Default::default()
        };
    }

    pub fn is_active(&self) -> bool {
        self.tag.is_some() || self.category.is_some() || !self.search.is_empty()
    }

    /// Filter parameters, without the page number
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(tag) = &self.tag {
            params.push(("tag".to_string(), tag.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category".to_string(), category.clone()));
        }
        if !self.search.is_empty() {
            params.push(("q".to_string(), self.search.clone()));
        }
        params
    }

    /// Page-link template for `base` that keeps the filter
    pub fn template(&self, base: &str) -> PageTemplate {
        PageTemplate::new(base).with_params(self.params())
    }

    /// URL of the current filter state on page `page`
    pub fn href(&self, base: &str) -> String {
        if self.page <= 1 && !self.is_active() {
            return base.to_string();
        }
        self.template(base).href(self.page.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_query() {
        let filter = ListFilter::from_query([("tag", "rust"), ("page", "3"), ("utm", "x")]);
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(filter.page, 3);

        let filter = ListFilter::from_query([("page", "zero"), ("tag", " ")]);
        assert_eq!(filter.page, 1);
        assert!(filter.tag.is_none());

        let filter = ListFilter::from_query([("page", "0")]);
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_toggle_tag_resets_page() {
        let mut filter = ListFilter::from_query([("page", "4")]);
        filter.toggle_tag("rust");
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(filter.page, 1);

        filter.page = 2;
        filter.toggle_tag("rust");
        assert!(filter.tag.is_none());
        assert_eq!(filter.page, 1);

        filter.toggle_tag("rust");
        filter.toggle_tag("wasm");
        assert_eq!(filter.tag.as_deref(), Some("wasm"));
    }

    #[test]
    fn test_page_links_keep_filter() {
        let mut filter = ListFilter::default();
        filter.toggle_tag("rust");
        filter.set_search(" leptos ");
        let template = filter.template("/blog");
        assert_eq!(template.href(2), "/blog?tag=rust&q=leptos&page=2");
    }

    #[test]
    fn test_href() {
        let filter = ListFilter::from_query(Vec::<(&str, &str)>::new());
        assert_eq!(filter.href("/blog"), "/blog");
        let filter = ListFilter::from_query([("category", "news")]);
        assert_eq!(filter.href("/blog"), "/blog?category=news&page=1");

        let mut filter = filter;
        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(filter.page, 1);
    }
}
