//! In-memory timeline.

use crate::github::models::{CommentId, IssueComment};
use crate::timeline::{LoaderId, Notice, TimelineSink};
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEntry {
    Comment { comment: IssueComment, is_new: bool },
    Loader {
        id: LoaderId,
        hidden_count: u64,
        busy: bool,
    },
    Notice(Notice),
}

/// A [`TimelineSink`] that keeps entries in a vector.
///
/// Comments are kept in creation order (`created_at`, then id) and a comment
/// id is only ever shown once. Loaders sit directly after their anchor
/// comment; notices and freshly posted comments go to the end.
#[derive(Debug, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    next_loader_id: LoaderId,
    remeasure_requests: usize,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Ids of the rendered comments, top to bottom.
    #[must_use]
    pub fn comment_ids(&self) -> Vec<CommentId> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TimelineEntry::Comment { comment, .. } => Some(comment.id),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn comment_count(&self) -> usize {
        self.comment_ids().len()
    }

    /// `(id, hidden_count, busy)` of every live loader.
    #[must_use]
    pub fn loaders(&self) -> Vec<(LoaderId, u64, bool)> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TimelineEntry::Loader {
                    id,
                    hidden_count,
                    busy,
                } => Some((*id, *hidden_count, *busy)),
                _ => None,
            })
            .collect()
    }

    /// Position of the first loader among all entries.
    #[must_use]
    pub fn loader_position(&self) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| matches!(entry, TimelineEntry::Loader { .. }))
    }

    #[must_use]
    pub fn notices(&self) -> Vec<&Notice> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TimelineEntry::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn remeasure_requests(&self) -> usize {
        self.remeasure_requests
    }

    /// Plain-text rendering, one block per entry.
    #[must_use]
    pub fn render_text(&self) -> String {
        let blocks: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match entry {
                TimelineEntry::Comment { comment, is_new } => format!(
                    "{marker}@{author} commented {date}\n{body}",
                    marker = if *is_new { "* " } else { "" },
                    author = comment.author,
                    date = comment.created_at.format("%Y-%m-%d %H:%M UTC"),
                    body = comment.body,
                ),
                TimelineEntry::Loader {
                    hidden_count, busy, ..
                } => {
                    if *busy {
                        "  ... Loading ...".to_string()
                    } else {
                        format!("  ... {hidden_count} hidden items. Load more ...")
                    }
                }
                TimelineEntry::Notice(notice) => notice.to_text(),
            })
            .collect();
        blocks.join("\n\n")
    }

    fn contains_comment(&self, id: CommentId) -> bool {
        self.entries.iter().any(
            |entry| matches!(entry, TimelineEntry::Comment { comment, .. } if comment.id == id),
        )
    }

    fn position_of_comment(&self, id: CommentId) -> Option<usize> {
        self.entries.iter().position(
            |entry| matches!(entry, TimelineEntry::Comment { comment, .. } if comment.id == id),
        )
    }
}

impl TimelineSink for Timeline {
    fn insert_comment(&mut self, comment: &IssueComment, is_new: bool) {
        if self.contains_comment(comment.id) {
            debug!("Comment {} already rendered, skipping", comment.id);
            return;
        }
        let entry = TimelineEntry::Comment {
            comment: comment.clone(),
            is_new,
        };
        if is_new {
            self.entries.push(entry);
            return;
        }
        let key = (comment.created_at, comment.id);
        let position = self.entries.iter().position(|existing| {
            matches!(existing, TimelineEntry::Comment { comment: other, .. } if (other.created_at, other.id) > key)
        });
        match position {
            Some(index) => self.entries.insert(index, entry),
            None => self.entries.push(entry),
        }
    }

    fn insert_page_loader(&mut self, after: Option<CommentId>, hidden_count: u64) -> LoaderId {
        self.next_loader_id += 1;
        let id = self.next_loader_id;
        let entry = TimelineEntry::Loader {
            id,
            hidden_count,
            busy: false,
        };
        match after.and_then(|id| self.position_of_comment(id)) {
            Some(index) => self.entries.insert(index + 1, entry),
            None => self.entries.push(entry),
        }
        id
    }

    fn set_loader_busy(&mut self, loader: LoaderId, busy: bool) {
        for entry in &mut self.entries {
            if let TimelineEntry::Loader { id, busy: state, .. } = entry
                && *id == loader
            {
                *state = busy;
            }
        }
    }

    fn remove_loader(&mut self, loader: LoaderId) {
        self.entries
            .retain(|entry| !matches!(entry, TimelineEntry::Loader { id, .. } if *id == loader));
    }

    fn insert_notice(&mut self, notice: &Notice) {
        self.entries.push(TimelineEntry::Notice(notice.clone()));
    }

    fn request_remeasure(&mut self) {
        self.remeasure_requests += 1;
    }
}
