//! Text post types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a post in the in-memory store
pub type PostId = i64;

/// A text post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Request body for creating a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
}

impl From<PostCreate> for Post {
    fn from(req: PostCreate) -> Self {
        Post {
            title: req.title,
            content: req.content,
        }
    }
}

/// Result of listing posts.
///
/// Without a limit the whole id -> post mapping is returned; with a limit the
/// first posts are returned as an array, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostListing {
    All(BTreeMap<PostId, Post>),
    Page(Vec<Post>),
}

impl PostListing {
    pub fn len(&self) -> usize {
        match self {
            PostListing::All(posts) => posts.len(),
            PostListing::Page(posts) => posts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Posts every fresh store starts with, keyed 1..=10
pub fn seed_posts() -> BTreeMap<PostId, Post> {
    [
        ("New Post", "Cool test post"),
        ("Python Tip", "Use list comprehensions for cleaner loops."),
        ("Daily Motivation", "Consistency beats intensity every time."),
        (
            "Fun Fact",
            "The first computer bug was an actual moth found in a Harvard Mark II.",
        ),
        (
            "Update",
            "Just launched my new project! Excited to share more soon.",
        ),
        (
            "Tech Insight",
            "Async IO in Python can massively speed up I/O bound tasks.",
        ),
        (
            "Quote",
            "Programs must be written for people to read, and only incidentally for machines.",
        ),
        (
            "Weekend Plans",
            "Might finally clean up my GitHub repos... or just play some Minecraft.",
        ),
        (
            "Question",
            "What's the most underrated Python library you've ever used?",
        ),
        (
            "Mini Announcement",
            "New video drops tomorrow covering the weirdest Python features!",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, content), id)| (id, Post::new(title, content)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_keys_are_contiguous() {
        let seed = seed_posts();
        assert_eq!(seed.keys().copied().collect::<Vec<_>>(), (1..=10).collect::<Vec<_>>());
        assert_eq!(seed[&1].title, "New Post");
        assert_eq!(seed[&10].title, "Mini Announcement");
    }

    #[test]
    fn test_listing_serializes_untagged() {
        let mut all = BTreeMap::new();
        all.insert(2, Post::new("a", "b"));
        let json = serde_json::to_value(PostListing::All(all)).unwrap();
        assert_eq!(json, serde_json::json!({"2": {"title": "a", "content": "b"}}));

        let page = PostListing::Page(vec![Post::new("a", "b")]);
        let json = serde_json::to_value(page).unwrap();
        assert_eq!(json, serde_json::json!([{"title": "a", "content": "b"}]));
    }

    #[test]
    fn test_post_create_rejects_missing_field() {
        let result = serde_json::from_str::<PostCreate>(r#"{"title": "only"}"#);
        assert!(result.is_err());
    }
}
