//! Navigation items and active-link detection

use crate::filter::ListFilter;

/// Current location, read once from the router and passed down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: String::new(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into().trim_start_matches('?').to_string();
        self
    }

    /// Path without a trailing slash (the root stays `/`)
    pub fn normalized(&self) -> &str {
        normalize(&self.path)
    }

    /// Value of a query parameter
    pub fn param(&self, key: &str) -> Option<String> {
        self.query
            .split('&')
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| decode(v))
    }

    /// All query parameters, decoded, in order
    pub fn params(&self) -> Vec<(String, String)> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(k), decode(v))
            })
            .collect()
    }

    /// List filter carried in the query string
    pub fn list_filter(&self) -> ListFilter {
        let params = self.params();
        ListFilter::from_query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Page number from `?page=`, defaulting to 1
    pub fn page(&self) -> u32 {
        self.param("page")
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

fn decode(s: &str) -> String {
    let s = s.replace('+', " ");
    urlencoding::decode(&s)
        .map(|c| c.into_owned())
        .unwrap_or(s)
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Matching {
    Exact,
    /// The item and everything beneath it
    #[default]
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    pub icon: Option<&'static str>,
    pub matching: Matching,
}

impl NavItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            icon: None,
            matching: Matching::Prefix,
        }
    }

    pub fn exact(mut self) -> Self {
        self.matching = Matching::Exact;
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn is_active(&self, location: &Location) -> bool {
        let href = normalize(&self.href);
        let path = location.normalized();
        match self.matching {
            Matching::Exact => path == href,
            Matching::Prefix => {
                path == href
                    || href == "/"
                    || path
                        .strip_prefix(href)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
        }
    }
}

/// Titled group of navigation items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: Option<String>,
    pub items: Vec<NavItem>,
}

/// Admin sidebar entries
pub fn admin_navigation() -> Vec<NavSection> {
    vec![
        NavSection {
            title: None,
            items: vec![NavItem::new("/admin", "Dashboard").icon("home").exact()],
        },
        NavSection {
            title: Some("Content".into()),
            items: vec![
                NavItem::new("/admin/posts", "Posts").icon("file-text"),
                NavItem::new("/admin/projects", "Projects").icon("briefcase"),
                NavItem::new("/admin/pages", "Pages").icon("file"),
            ],
        },
        NavSection {
            title: Some("Taxonomies".into()),
            items: vec![
                NavItem::new("/admin/categories", "Categories").icon("folder"),
                NavItem::new("/admin/tags", "Tags").icon("tag"),
                NavItem::new("/admin/brandings", "Brandings").icon("award"),
                NavItem::new("/admin/industries", "Industries").icon("layers"),
            ],
        },
        NavSection {
            title: Some("Access".into()),
            items: vec![
                NavItem::new("/admin/users", "Users").icon("users"),
                NavItem::new("/admin/roles", "Roles").icon("shield"),
            ],
        },
    ]
}

/// Public site header links
pub fn public_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new("/", "Home").exact(),
        NavItem::new("/portfolio", "Portfolio"),
        NavItem::new("/blog", "Blog"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_respects_segments() {
        let item = NavItem::new("/admin/posts", "Posts");
        assert!(item.is_active(&Location::new("/admin/posts")));
        assert!(item.is_active(&Location::new("/admin/posts/")));
        assert!(item.is_active(&Location::new("/admin/posts/4/edit")));
        assert!(!item.is_active(&Location::new("/admin/postsx")));
        assert!(!item.is_active(&Location::new("/admin")));
    }

    #[test]
    fn test_exact_matching() {
        let dashboard = NavItem::new("/admin", "Dashboard").exact();
        assert!(dashboard.is_active(&Location::new("/admin/")));
        assert!(!dashboard.is_active(&Location::new("/admin/posts")));

        let home = NavItem::new("/", "Home").exact();
        assert!(home.is_active(&Location::new("")));
        assert!(!home.is_active(&Location::new("/blog")));
    }

    #[test]
    fn test_single_active_admin_item() {
        let location = Location::new("/admin/tags/3/edit");
        let active: Vec<String> = admin_navigation()
            .into_iter()
            .flat_map(|s| s.items)
            .filter(|i| i.is_active(&location))
            .map(|i| i.label)
            .collect();
        assert_eq!(active, vec!["Tags".to_string()]);
    }

    #[test]
    fn test_query_params() {
        let location = Location::new("/blog").with_query("?tag=rust%20lang&page=3&flag");
        assert_eq!(location.param("tag").as_deref(), Some("rust lang"));
        assert_eq!(location.param("flag").as_deref(), Some(""));
        assert_eq!(location.param("missing"), None);
        assert_eq!(location.page(), 3);

        assert_eq!(Location::new("/blog").with_query("page=-1").page(), 1);
    }

    #[test]
    fn test_list_filter_from_location() {
        let location = Location::new("/blog").with_query("tag=rust&q=async+io&page=2");
        assert_eq!(location.params().len(), 3);

        let filter = location.list_filter();
        assert_eq!(filter.tag.as_deref(), Some("rust"));
        assert_eq!(filter.search, "async io");
        assert_eq!(filter.page, 2);
        assert!(Location::new("/").list_filter().params().is_empty());
    }
}
