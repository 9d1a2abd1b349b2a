//! Post Store - the in-memory library of generated posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{GeneratedPost, Platform, PostId};

/// Ordered post library, most recent first.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PostStore {
    posts: Vec<GeneratedPost>,
    #[serde(skip)]
    last_id: Option<i64>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a post and put it at the front of the library.
    ///
    /// Ids come from the creation time in milliseconds; two posts created
    /// within the same millisecond get consecutive ids.
    pub fn create(
        &mut self,
        platform: Platform,
        topic: String,
        text: String,
        at: DateTime<Utc>,
    ) -> &GeneratedPost {
        let mut millis = at.timestamp_millis();
        if let Some(last) = self.last_id {
            if millis <= last {
                millis = last + 1;
            }
        }
        self.last_id = Some(millis);

        let post = GeneratedPost::new(PostId::from_millis(millis), platform, topic, text, at);
        tracing::debug!(post_id = %post.id, platform = %post.platform, "Post created");

        self.posts.insert(0, post);
        &self.posts[0]
    }

    /// Replace the text of the post with `id`. Returns `false` when absent.
    pub fn update_text(&mut self, id: &PostId, text: String) -> bool {
        match self.posts.iter_mut().find(|p| &p.id == id) {
            Some(post) => {
                post.text = text;
                true
            }
            None => false,
        }
    }

    /// Remove the post with `id`, if present.
    pub fn remove(&mut self, id: &PostId) -> Option<GeneratedPost> {
        let index = self.posts.iter().position(|p| &p.id == id)?;
        Some(self.posts.remove(index))
    }

    pub fn get(&self, id: &PostId) -> Option<&GeneratedPost> {
        self.posts.iter().find(|p| &p.id == id)
    }

    /// The most recently created post.
    pub fn first(&self) -> Option<&GeneratedPost> {
        self.posts.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedPost> {
        self.posts.iter()
    }

    pub fn as_slice(&self) -> &[GeneratedPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    fn seeded() -> PostStore {
        let mut store = PostStore::new();
        store.create(Platform::Telegram, "a".into(), "first".into(), at(1_000));
        store.create(Platform::Instagram, "b".into(), "second".into(), at(2_000));
        store.create(Platform::Threads, "c".into(), "third".into(), at(3_000));
        store
    }

    #[test]
    fn create_prepends_most_recent_first() {
        let store = seeded();
        let topics: Vec<_> = store.iter().map(|p| p.topic.as_str()).collect();
        assert_eq!(topics, vec!["c", "b", "a"]);
        assert_eq!(store.first().unwrap().id, PostId::new("3000"));
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut store = PostStore::new();
        let a = store
            .create(Platform::Telegram, "a".into(), "x".into(), at(5_000))
            .id
            .clone();
        let b = store
            .create(Platform::Telegram, "b".into(), "y".into(), at(5_000))
            .id
            .clone();
        let c = store
            .create(Platform::Telegram, "c".into(), "z".into(), at(4_000))
            .id
            .clone();

        assert_eq!(a, PostId::new("5000"));
        assert_eq!(b, PostId::new("5001"));
        assert_eq!(c, PostId::new("5002"));
    }

    #[test]
    fn bumped_id_keeps_creation_timestamp() {
        let mut store = PostStore::new();
        store.create(Platform::Vk, "a".into(), "x".into(), at(7_000));
        let post = store.create(Platform::Vk, "b".into(), "y".into(), at(7_000));

        assert_eq!(post.id, PostId::new("7001"));
        assert_eq!(post.timestamp, at(7_000));
    }

    #[test]
    fn update_touches_only_the_target() {
        let mut store = seeded();
        let before: Vec<_> = store.iter().cloned().collect();

        assert!(store.update_text(&PostId::new("2000"), "edited".into()));

        for (old, new) in before.iter().zip(store.iter()) {
            if new.id == PostId::new("2000") {
                assert_eq!(new.text, "edited");
                assert_eq!(new.topic, old.topic);
                assert_eq!(new.timestamp, old.timestamp);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut store = seeded();
        let before: Vec<_> = store.iter().cloned().collect();
        assert!(!store.update_text(&PostId::new("42"), "nope".into()));
        assert_eq!(store.as_slice(), before.as_slice());
    }

    #[test]
    fn remove_deletes_exactly_one_entry() {
        let mut store = seeded();
        let removed = store.remove(&PostId::new("1000")).unwrap();
        assert_eq!(removed.topic, "a");
        assert_eq!(store.len(), 2);
        assert!(store.get(&PostId::new("1000")).is_none());

        assert!(store.remove(&PostId::new("1000")).is_none());
        assert_eq!(store.len(), 2);
    }
}
