//! Read-only views over a catalog.
//!
//! The caller owns the catalog; nothing here mutates it.

use std::collections::HashSet;

use serde::Serialize;

use super::models::TravelPost;

/// Every distinct tag across `posts`, in first-seen order.
pub fn all_tags(posts: &[TravelPost]) -> Vec<&str> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .flat_map(|post| post.tags.iter())
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Posts carrying `selected_tag`, in catalog order. `None` keeps every post.
pub fn filter_by_tag<'a>(
    posts: &'a [TravelPost],
    selected_tag: Option<&str>,
) -> Vec<&'a TravelPost> {
    match selected_tag {
        None => posts.iter().collect(),
        Some(tag) => posts.iter().filter(|post| post.has_tag(tag)).collect(),
    }
}

/// A new catalog with `new_post` in front of `posts`.
pub fn prepend(posts: &[TravelPost], new_post: TravelPost) -> Vec<TravelPost> {
    let mut catalog = Vec::with_capacity(posts.len() + 1);
    catalog.push(new_post);
    catalog.extend_from_slice(posts);
    catalog
}

/// What a feed page renders: the filtered posts plus the tag vocabulary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView<'a> {
    pub posts: Vec<&'a TravelPost>,
    pub tags: Vec<&'a str>,
    pub selected_tag: Option<String>,
    pub total: usize,
}

impl<'a> FeedView<'a> {
    pub fn project(posts: &'a [TravelPost], selected_tag: Option<&str>) -> Self {
        let filtered = filter_by_tag(posts, selected_tag);
        Self {
            total: filtered.len(),
            posts: filtered,
            tags: all_tags(posts),
            selected_tag: selected_tag.map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, tags: &[&str]) -> TravelPost {
        TravelPost {
            id: id.to_string(),
            title: format!("Post {id}"),
            excerpt: "excerpt".to_string(),
            content: "content".to_string(),
            destination: "Somewhere".to_string(),
            country: "Nowhere".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            published_at: "2024-01-15T06:30:00Z".to_string(),
            read_time: 5,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ai_generated: true,
        }
    }

    fn two_post_catalog() -> Vec<TravelPost> {
        vec![post("1", &["Greece"]), post("2", &["Japan"])]
    }

    fn ids(posts: &[&TravelPost]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_tags_is_the_deduplicated_union() {
        let catalog = vec![
            post("1", &["Greece", "Sunrise"]),
            post("2", &["Japan", "Nightlife"]),
            post("3", &["Greece", "Nightlife"]),
        ];
        assert_eq!(
            all_tags(&catalog),
            vec!["Greece", "Sunrise", "Japan", "Nightlife"]
        );
    }

    #[test]
    fn all_tags_of_empty_catalog_is_empty() {
        assert!(all_tags(&[]).is_empty());
    }

    #[test]
    fn filter_without_tag_keeps_everything_in_order() {
        let catalog = two_post_catalog();
        assert_eq!(ids(&filter_by_tag(&catalog, None)), vec!["1", "2"]);
    }

    #[test]
    fn filter_selects_matching_posts() {
        let catalog = two_post_catalog();
        assert_eq!(ids(&filter_by_tag(&catalog, Some("Greece"))), vec!["1"]);
        assert!(filter_by_tag(&catalog, Some("Italy")).is_empty());
    }

    #[test]
    fn filter_is_case_sensitive() {
        let catalog = two_post_catalog();
        assert!(filter_by_tag(&catalog, Some("greece")).is_empty());
    }

    #[test]
    fn filter_with_shared_tag_keeps_original_order() {
        let catalog = vec![
            post("a", &["Culture", "Bali"]),
            post("b", &["Culture"]),
            post("c", &["Morocco", "Culture"]),
        ];
        assert_eq!(
            ids(&filter_by_tag(&catalog, Some("Culture"))),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn prepend_puts_new_post_first_and_leaves_input_alone() {
        let catalog = two_post_catalog();
        let snapshot = catalog.clone();

        let updated = prepend(&catalog, post("new", &["AI Generated"]));

        assert_eq!(updated.len(), catalog.len() + 1);
        assert_eq!(updated[0].id, "new");
        assert_eq!(&updated[1..], &catalog[..]);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn feed_view_projects_tags_over_whole_catalog() {
        let catalog = two_post_catalog();
        let view = FeedView::project(&catalog, Some("Japan"));

        assert_eq!(view.total, 1);
        assert_eq!(view.posts[0].id, "2");
        assert_eq!(view.tags, vec!["Greece", "Japan"]);
        assert_eq!(view.selected_tag.as_deref(), Some("Japan"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["selectedTag"], "Japan");
        assert_eq!(json["posts"][0]["imageUrl"], "https://example.com/a.jpg");
    }

    #[test]
    fn feed_view_for_unknown_tag_is_empty() {
        let catalog = two_post_catalog();
        let view = FeedView::project(&catalog, Some("Italy"));
        assert!(view.is_empty());
        assert_eq!(view.tags.len(), 2);
    }
}
