//! Scheduled Post Index - post copies tagged with a display date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{GeneratedPost, PostId, ScheduledPost};

/// Scheduled posts in insertion order.
///
/// No uniqueness on id: scheduling the same post twice yields two entries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ScheduleIndex {
    entries: Vec<ScheduledPost>,
}

impl ScheduleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `post` tagged with `date`.
    pub fn schedule(&mut self, post: &GeneratedPost, date: NaiveDate) -> &ScheduledPost {
        self.entries.push(ScheduledPost::new(post.clone(), date));
        tracing::debug!(post_id = %post.id, date = %date, "Post scheduled");
        &self.entries[self.entries.len() - 1]
    }

    /// Remove every entry carrying `id`. Returns how many were removed.
    pub fn unschedule(&mut self, id: &PostId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        before - self.entries.len()
    }

    /// Entries scheduled on `date`, in insertion order.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&ScheduledPost> {
        self.entries
            .iter()
            .filter(|entry| entry.scheduled_date == date)
            .collect()
    }

    /// All entries ordered by date; entries sharing a date keep insertion order.
    pub fn sorted_by_date(&self) -> Vec<&ScheduledPost> {
        let mut sorted: Vec<&ScheduledPost> = self.entries.iter().collect();
        // sort_by_key is stable
        sorted.sort_by_key(|entry| entry.scheduled_date);
        sorted
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledPost> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
