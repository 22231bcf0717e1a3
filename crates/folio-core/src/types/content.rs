//! Content types: posts, projects, taxonomies and static pages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Tone};

/// Publication state of a post, project or page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
}

impl PublishStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Published",
            Self::Scheduled => "Scheduled",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::Draft => Tone::Neutral,
            Self::Published => Tone::Success,
            Self::Scheduled => Tone::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Scheduled => "scheduled",
        }
    }

    pub fn all() -> [PublishStatus; 3] {
        [Self::Draft, Self::Published, Self::Scheduled]
    }
}

impl std::str::FromStr for PublishStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "scheduled" => Ok(Self::Scheduled),
            other => Err(crate::Error::InvalidArgument(format!(
                "Unknown publish status: {}",
                other
            ))),
        }
    }
}

/// Categories, tags, brandings and industries share one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items_count: Option<u64>,
}

impl Record for Taxonomy {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Which taxonomy collection a screen manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Category,
    Tag,
    Branding,
    Industry,
}

impl TaxonomyKind {
    /// Collection path segment, shared by the API and the admin routes
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Tag => "tags",
            Self::Branding => "brandings",
            Self::Industry => "industries",
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Tag => "Tag",
            Self::Branding => "Branding",
            Self::Industry => "Industry",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Category => "Categories",
            Self::Tag => "Tags",
            Self::Branding => "Brandings",
            Self::Industry => "Industries",
        }
    }

    /// Label of the "items" count column
    pub fn items_label(&self) -> &'static str {
        match self {
            Self::Category | Self::Tag => "Posts",
            Self::Branding | Self::Industry => "Projects",
        }
    }

    pub fn from_collection(segment: &str) -> Option<Self> {
        match segment {
            "categories" => Some(Self::Category),
            "tags" => Some(Self::Tag),
            "brandings" => Some(Self::Branding),
            "industries" => Some(Self::Industry),
            _ => None,
        }
    }
}

/// Write payload for any taxonomy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyInput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Taxonomy> for TaxonomyInput {
    fn from(t: &Taxonomy) -> Self {
        Self {
            name: t.name.clone(),
            slug: t.slug.clone(),
            description: t.description.clone(),
        }
    }
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Rendered HTML body
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<Taxonomy>,
    #[serde(default)]
    pub tags: Vec<Taxonomy>,
}

impl Record for Post {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub status: PublishStatus,
    pub category_id: Option<u64>,
    pub tag_ids: Vec<u64>,
    /// Existing cover images the editor chose to drop
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_images: Vec<String>,
}

impl From<&Post> for PostInput {
    fn from(p: &Post) -> Self {
        Self {
            title: p.title.clone(),
            slug: p.slug.clone(),
            excerpt: p.excerpt.clone(),
            body: p.body.clone(),
            status: p.status,
            category_id: p.category.as_ref().map(|c| c.id),
            tag_ids: p.tags.iter().map(|t| t.id).collect(),
            removed_images: Vec::new(),
        }
    }
}

/// Portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub branding: Option<Taxonomy>,
    #[serde(default)]
    pub industry: Option<Taxonomy>,
}

impl Project {
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Record for Project {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub slug: String,
    pub summary: Option<String>,
    pub description: String,
    pub client: Option<String>,
    pub year: Option<u16>,
    pub status: PublishStatus,
    pub branding_id: Option<u64>,
    pub industry_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub removed_images: Vec<String>,
}

impl From<&Project> for ProjectInput {
    fn from(p: &Project) -> Self {
        Self {
            title: p.title.clone(),
            slug: p.slug.clone(),
            summary: p.summary.clone(),
            description: p.description.clone(),
            client: p.client.clone(),
            year: p.year,
            status: p.status,
            branding_id: p.branding.as_ref().map(|b| b.id),
            industry_id: p.industry.as_ref().map(|i| i.id),
            removed_images: Vec::new(),
        }
    }
}

/// Static page (about, contact, imprint...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticPage {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: PublishStatus,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for StaticPage {
    fn key(&self) -> String {
        self.id.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticPageInput {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub status: PublishStatus,
}

impl From<&StaticPage> for StaticPageInput {
    fn from(p: &StaticPage) -> Self {
        Self {
            title: p.title.clone(),
            slug: p.slug.clone(),
            body: p.body.clone(),
            status: p.status,
        }
    }
}

/// Admin dashboard counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub posts: u64,
    pub projects: u64,
    pub pages: u64,
    pub users: u64,
    #[serde(default)]
    pub recent_posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_decodes_with_defaults() {
        let json = r#"{"id": 3, "title": "Hello", "slug": "hello"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.status, PublishStatus::Draft);
        assert!(post.tags.is_empty());
        assert!(post.category.is_none());
    }

    #[test]
    fn test_publish_status_round_trip_names() {
        for status in PublishStatus::all() {
            assert_eq!(status.as_str().parse::<PublishStatus>().unwrap(), status);
        }
        assert!("archived".parse::<PublishStatus>().is_err());
    }

    #[test]
    fn test_taxonomy_kind_collections() {
        assert_eq!(TaxonomyKind::Industry.collection(), "industries");
        assert_eq!(
            TaxonomyKind::from_collection("brandings"),
            Some(TaxonomyKind::Branding)
        );
        assert_eq!(TaxonomyKind::from_collection("posts"), None);
        assert_eq!(TaxonomyKind::Tag.items_label(), "Posts");
    }

    #[test]
    fn test_post_input_from_post() {
        let post = Post {
            id: 1,
            title: "T".into(),
            slug: "t".into(),
            excerpt: None,
            body: "<p>b</p>".into(),
            cover_image: None,
            status: PublishStatus::Published,
            published_at: None,
            author: None,
            category: Some(Taxonomy {
                id: 9,
                name: "News".into(),
                slug: "news".into(),
                description: None,
                items_count: None,
            }),
            tags: vec![],
        };
        let input = PostInput::from(&post);
        assert_eq!(input.category_id, Some(9));
        assert_eq!(input.status, PublishStatus::Published);

        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("removed_images").is_none());
    }
}
