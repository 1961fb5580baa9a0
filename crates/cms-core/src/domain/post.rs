use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Conventional publication states. The field itself is free-form.
pub mod status {
    pub const DRAFT: &str = "draft";
    pub const PUBLISHED: &str = "published";
}

/// Post entity - a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub status: String,
    pub cover_image: Option<String>,
    pub author_id: Option<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied post fields, used for both create and full-replace update.
///
/// `author_id` is only honoured on create; an update never re-assigns authorship.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: String,
    pub cover_image: Option<String>,
    pub author_id: Option<RecordId>,
}

impl PostDraft {
    /// A draft-status post with the given title and content.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status: status::DRAFT.to_string(),
            cover_image: None,
            author_id: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn with_author(mut self, author_id: RecordId) -> Self {
        self.author_id = Some(author_id);
        self
    }
}

impl Post {
    /// Materialize a draft as a stored record stamped at `now`.
    pub fn from_draft(id: RecordId, draft: PostDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            status: draft.status,
            cover_image: draft.cover_image,
            author_id: draft.author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the editable fields; identity, author and creation time are kept.
    pub fn apply(&mut self, changes: PostDraft, now: DateTime<Utc>) {
        self.title = changes.title;
        self.content = changes.content;
        self.status = changes.status;
        self.cover_image = changes.cover_image;
        self.updated_at = now.max(self.updated_at);
    }

    /// Case-insensitive substring match against title or content.
    pub fn mentions(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.content.to_lowercase().contains(needle_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::from_seq;

    #[test]
    fn from_draft_stamps_both_timestamps() {
        let now = Utc::now();
        let post = Post::from_draft(from_seq(1), PostDraft::new("Hello", ""), now);

        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.status, status::DRAFT);
        assert!(post.content.is_empty());
    }

    #[test]
    fn apply_replaces_fields_but_keeps_identity() {
        let created = Utc::now();
        let author = from_seq(9);
        let mut post = Post::from_draft(
            from_seq(1),
            PostDraft::new("Old", "old body").with_author(author),
            created,
        );

        let later = created + chrono::Duration::seconds(5);
        post.apply(
            PostDraft::new("New", "new body")
                .with_status(status::PUBLISHED)
                .with_cover_image("https://cdn.example.com/c.png"),
            later,
        );

        assert_eq!(post.id, from_seq(1));
        assert_eq!(post.title, "New");
        assert_eq!(post.status, status::PUBLISHED);
        assert_eq!(post.author_id, Some(author));
        assert_eq!(post.created_at, created);
        assert_eq!(post.updated_at, later);
    }

    #[test]
    fn apply_never_moves_updated_at_backwards() {
        let created = Utc::now();
        let mut post = Post::from_draft(from_seq(1), PostDraft::new("a", "b"), created);

        post.apply(PostDraft::new("c", "d"), created - chrono::Duration::seconds(30));

        assert_eq!(post.updated_at, created);
    }

    #[test]
    fn mentions_matches_title_or_content() {
        let now = Utc::now();
        let title_hit = Post::from_draft(from_seq(1), PostDraft::new("Category News", ""), now);
        let body_hit = Post::from_draft(
            from_seq(2),
            PostDraft::new("Strings", "Concatenate strings"),
            now,
        );
        let miss = Post::from_draft(from_seq(3), PostDraft::new("Dogs", "Woof"), now);

        assert!(title_hit.mentions("cat"));
        assert!(body_hit.mentions("cat"));
        assert!(!miss.mentions("cat"));
    }
}
