//! Messages page: conversation filtering and the local chat thread.

use strum::{Display, EnumIter};
use uuid::Uuid;

use crate::data;
use crate::models::{ChatMessage, Conversation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum InboxFilter {
    #[default]
    All,
    Unread,
    Archived,
}

#[derive(Debug, Clone)]
pub struct InboxView {
    pub selected: Option<Uuid>,
    pub compose: String,
    pub search: String,
    pub filter: InboxFilter,
    /// Local copy of the open thread; sent messages append here and vanish
    /// with the page.
    pub thread: Vec<ChatMessage>,
}

impl Default for InboxView {
    fn default() -> Self {
        Self::new()
    }
}

impl InboxView {
    pub fn new() -> Self {
        Self {
            selected: data::conversations().first().map(|c| c.id),
            compose: String::new(),
            search: String::new(),
            filter: InboxFilter::default(),
            thread: data::chat_thread().to_vec(),
        }
    }

    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn selected_conversation<'a>(
        &self,
        all: &'a [Conversation],
    ) -> Option<&'a Conversation> {
        let id = self.selected?;
        all.iter().find(|c| c.id == id)
    }

    /// Apply the search box and the unread filter. Nothing is ever
    /// archived in the mock data, so that filter yields an empty list.
    pub fn filtered<'a>(&self, all: &'a [Conversation]) -> Vec<&'a Conversation> {
        let query = self.search.to_lowercase();
        all.iter()
            .filter(|conversation| {
                let matches_search = query.is_empty()
                    || conversation.sender.to_lowercase().contains(&query)
                    || conversation.subject.to_lowercase().contains(&query);
                let matches_filter = match self.filter {
                    InboxFilter::All => true,
                    InboxFilter::Unread => conversation.unread,
                    InboxFilter::Archived => false,
                };
                matches_search && matches_filter
            })
            .collect()
    }

    /// Append the composed text to the open thread; blank input is a no-op.
    pub fn send(&mut self, sender: &str) -> bool {
        let body = self.compose.trim().to_string();
        if body.is_empty() {
            return false;
        }
        self.thread.push(ChatMessage {
            sender: sender.to_string(),
            body,
            timestamp: "Just now".into(),
            outgoing: true,
        });
        self.compose.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_first_conversation_opens_by_default() {
        let view = InboxView::new();
        let selected = view.selected_conversation(data::conversations());
        assert!(selected.is_some());
    }

    #[test]
    fn search_matches_sender_and_subject_case_insensitively() {
        let mut view = InboxView::new();
        view.search = "carter".into();
        let hits = view.filtered(data::conversations());
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|c| c.sender.to_lowercase().contains("carter")
            || c.subject.to_lowercase().contains("carter")));

        view.search = "screening".into();
        assert!(!view.filtered(data::conversations()).is_empty());
    }

    #[test]
    fn the_unread_filter_hides_read_conversations() {
        let mut view = InboxView::new();
        view.filter = InboxFilter::Unread;
        assert!(view.filtered(data::conversations()).iter().all(|c| c.unread));

        view.filter = InboxFilter::Archived;
        assert!(view.filtered(data::conversations()).is_empty());
    }

    #[test]
    fn sending_appends_and_clears_the_compose_box() {
        let mut view = InboxView::new();
        let before = view.thread.len();
        view.compose = "  Thank you, doctor.  ".into();
        assert!(view.send("Sarah Johnson"));
        assert_eq!(view.thread.len(), before + 1);
        let last = view.thread.last().expect("just appended");
        assert_eq!(last.body, "Thank you, doctor.");
        assert!(last.outgoing);
        assert!(view.compose.is_empty());
    }

    #[test]
    fn blank_messages_are_not_sent() {
        let mut view = InboxView::new();
        let before = view.thread.len();
        view.compose = "   ".into();
        assert!(!view.send("Sarah Johnson"));
        assert_eq!(view.thread.len(), before);
    }
}
