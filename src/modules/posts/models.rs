use serde::{Deserialize, Serialize};

/// A single blog article, either from the seed catalog or freshly generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPost {
    /// Unique within a catalog
    pub id: String,
    pub title: String,
    /// Short summary shown on feed cards
    pub excerpt: String,
    pub content: String,
    /// Free-text place name
    pub destination: String,
    pub country: String,
    /// Not checked for reachability
    pub image_url: String,
    /// ISO-8601 timestamp
    pub published_at: String,
    /// Estimated minutes to read, always positive
    pub read_time: u32,
    /// Filter vocabulary; order is display order
    pub tags: Vec<String>,
    pub ai_generated: bool,
}

impl TravelPost {
    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Success envelope for the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub post: TravelPost,
    pub message: String,
}

impl GenerateResponse {
    pub fn new(post: TravelPost) -> Self {
        Self {
            success: true,
            post,
            message: "AI travel post generated successfully".to_string(),
        }
    }
}

/// Query string accepted by the feed endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedQuery {
    pub tag: Option<String>,
}

impl FeedQuery {
    /// An empty `tag` parameter means "all posts".
    pub fn selected_tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.is_empty())
    }
}
