//! Chat session store.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::message::{Message, MessageRole};
use super::model::ChatSession;
use crate::config::ChatConfig;
use crate::responder::{Locale, classify, response_text, welcome_text};

/// Internal mutable state guarded by the store lock.
#[derive(Debug, Default)]
struct ChatState {
    /// Sessions, most recently created first.
    sessions: Vec<ChatSession>,
    /// The session the user is looking at, if any.
    current: Option<ChatSession>,
    /// True while the assistant reply is pending.
    is_typing: bool,
    /// True while session history is being fetched.
    is_loading: bool,
}

/// Manages chat sessions and synthesizes assistant replies.
///
/// Like the journal store, all mutation goes through named operations and
/// lookups by an unknown id are silent no-ops. The only suspension point
/// is the simulated thinking delay inside [`ChatStore::send_message`];
/// the state lock is not held across it, so other operations interleave
/// freely while a reply is pending.
#[derive(Clone)]
pub struct ChatStore {
    state: Arc<RwLock<ChatState>>,
    config: ChatConfig,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// Creates a store with the production config.
    pub fn new() -> Self {
        Self::with_config(ChatConfig::default())
    }

    /// Creates a store with a custom config.
    pub fn with_config(config: ChatConfig) -> Self {
        Self {
            state: Arc::new(RwLock::new(ChatState::default())),
            config,
        }
    }

    /// Creates a new session, seeded with the assistant welcome message,
    /// inserts it at the head of the session list and makes it current.
    ///
    /// When no title is supplied a deterministic default is derived from
    /// today's date.
    pub async fn create_session(&self, title: Option<String>) -> ChatSession {
        let now = Utc::now();
        let session = ChatSession {
            id: Uuid::new_v4().to_string(),
            title: title.unwrap_or_else(|| format!("Chat {}", now.format("%Y-%m-%d"))),
            messages: vec![Message::new(
                welcome_text(self.config.default_locale),
                MessageRole::Assistant,
                None,
            )],
            created_at: now,
            last_activity: now,
        };

        let mut state = self.state.write().await;
        state.sessions.insert(0, session.clone());
        state.current = Some(session.clone());
        tracing::debug!(session_id = %session.id, "chat session created");
        session
    }

    /// Sets or clears the current session.
    pub async fn set_current_session(&self, session: Option<ChatSession>) {
        self.state.write().await.current = session;
    }

    /// Appends a message to the current session.
    ///
    /// Assigns a fresh id and timestamp, bumps the session's
    /// `last_activity` and keeps the session list's copy in sync with
    /// the current one. Silent no-op when there is no current session.
    pub async fn add_message(
        &self,
        content: impl Into<String>,
        role: MessageRole,
        dream_id: Option<String>,
    ) {
        let mut state = self.state.write().await;
        let Some(session_id) = state.current.as_ref().map(|s| s.id.clone()) else {
            return;
        };
        Self::append_message(&mut state, &session_id, Message::new(content, role, dream_id));
    }

    /// Replaces the content of a message in the current session.
    /// Silent no-op when there is no current session or no such message.
    pub async fn update_message(&self, message_id: &str, content: impl Into<String>) {
        let mut state = self.state.write().await;
        let Some(current) = state.current.as_mut() else {
            return;
        };
        if let Some(message) = current.messages.iter_mut().find(|m| m.id == message_id) {
            message.content = content.into();
            let snapshot = current.clone();
            Self::sync_session_list(&mut state, snapshot);
        }
    }

    /// Removes a message from the current session.
    /// Silent no-op when there is no current session or no such message.
    pub async fn delete_message(&self, message_id: &str) {
        let mut state = self.state.write().await;
        let Some(current) = state.current.as_mut() else {
            return;
        };
        let before = current.messages.len();
        current.messages.retain(|m| m.id != message_id);
        if current.messages.len() != before {
            let snapshot = current.clone();
            Self::sync_session_list(&mut state, snapshot);
        }
    }

    /// Removes a session from the list; clears the current session if it
    /// was the one deleted.
    pub async fn delete_session(&self, session_id: &str) {
        let mut state = self.state.write().await;
        state.sessions.retain(|s| s.id != session_id);
        if state.current.as_ref().is_some_and(|s| s.id == session_id) {
            state.current = None;
        }
        tracing::debug!(session_id = %session_id, "chat session deleted");
    }

    /// Sends a user message and produces the assistant reply.
    ///
    /// The full turn: append the user message, raise the typing flag,
    /// sleep the configured thinking delay, pick the canned reply for the
    /// classified content, clear the flag, append the reply.
    ///
    /// The target session is pinned when the call starts: a session
    /// switch during the delay does not redirect the reply, and the reply
    /// is dropped entirely when the pinned session was deleted meanwhile.
    /// Silent no-op when there is no current session at call time.
    pub async fn send_message(
        &self,
        content: &str,
        dream_id: Option<String>,
        locale: Option<Locale>,
    ) {
        let locale = locale.unwrap_or(self.config.default_locale);

        let session_id = {
            let mut state = self.state.write().await;
            let Some(session_id) = state.current.as_ref().map(|s| s.id.clone()) else {
                return;
            };
            Self::append_message(
                &mut state,
                &session_id,
                Message::new(content, MessageRole::User, dream_id),
            );
            state.is_typing = true;
            session_id
        };

        // Simulated thinking time; the lock is released while we wait.
        tokio::time::sleep(self.config.sample_delay()).await;

        let reply = response_text(locale, classify(content));

        let mut state = self.state.write().await;
        state.is_typing = false;
        Self::append_message(
            &mut state,
            &session_id,
            Message::new(reply, MessageRole::Assistant, None),
        );
    }

    /// Looks up a session by id in the session list.
    pub async fn get_session_by_id(&self, session_id: &str) -> Option<ChatSession> {
        let state = self.state.read().await;
        state.sessions.iter().find(|s| s.id == session_id).cloned()
    }

    /// Returns sessions sorted by `last_activity` descending, truncated
    /// to `limit` (10 when not supplied).
    pub async fn recent_sessions(&self, limit: Option<usize>) -> Vec<ChatSession> {
        let state = self.state.read().await;
        let mut sessions = state.sessions.clone();
        sessions.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        sessions.truncate(limit.unwrap_or(10));
        sessions
    }

    /// Returns all sessions, most recently created first.
    pub async fn sessions(&self) -> Vec<ChatSession> {
        self.state.read().await.sessions.clone()
    }

    /// Returns the current session, if any.
    pub async fn current_session(&self) -> Option<ChatSession> {
        self.state.read().await.current.clone()
    }

    /// True while an assistant reply is pending.
    pub async fn is_typing(&self) -> bool {
        self.state.read().await.is_typing
    }

    /// True while session history is being fetched.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Sets the loading flag.
    pub async fn set_loading(&self, loading: bool) {
        self.state.write().await.is_loading = loading;
    }

    /// Appends `message` to the session with the given id, bumping its
    /// `last_activity` and keeping the current-session copy in sync.
    /// Falls back to a detached current session when the id is not in the
    /// list; does nothing when the session is gone entirely.
    fn append_message(state: &mut ChatState, session_id: &str, message: Message) {
        let now = Utc::now();
        if let Some(index) = state.sessions.iter().position(|s| s.id == session_id) {
            let session = &mut state.sessions[index];
            session.messages.push(message);
            session.last_activity = now;
            let snapshot = session.clone();
            if state.current.as_ref().is_some_and(|c| c.id == session_id) {
                state.current = Some(snapshot);
            }
        } else if let Some(current) = state
            .current
            .as_mut()
            .filter(|c| c.id == session_id)
        {
            current.messages.push(message);
            current.last_activity = now;
        }
    }

    /// Writes an updated current-session snapshot back over the session
    /// list's copy.
    fn sync_session_list(state: &mut ChatState, snapshot: ChatSession) {
        if let Some(session) = state.sessions.iter_mut().find(|s| s.id == snapshot.id) {
            *session = snapshot;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn instant_store() -> ChatStore {
        ChatStore::with_config(ChatConfig::instant())
    }

    fn paced_store(delay_ms: u64) -> ChatStore {
        ChatStore::with_config(ChatConfig {
            min_response_delay_ms: delay_ms,
            max_response_delay_ms: delay_ms,
            ..ChatConfig::default()
        })
    }

    #[tokio::test]
    async fn test_create_session_seeds_welcome_and_becomes_current() {
        let store = instant_store();
        let session = store.create_session(None).await;

        assert_eq!(session.messages.len(), 1);
        assert_eq!(session.messages[0].role, MessageRole::Assistant);
        assert_eq!(session.messages[0].content, welcome_text(Locale::En));
        assert_eq!(store.current_session().await.unwrap().id, session.id);
        assert!(session.title.starts_with("Chat "));

        let titled = store.create_session(Some("Nightmares".to_string())).await;
        assert_eq!(titled.title, "Nightmares");
        // Newest session sits at the head of the list.
        assert_eq!(store.sessions().await[0].id, titled.id);
    }

    #[tokio::test]
    async fn test_add_message_without_current_session_is_a_no_op() {
        let store = instant_store();
        store.add_message("hello?", MessageRole::User, None).await;
        assert!(store.sessions().await.is_empty());
        assert!(store.current_session().await.is_none());
    }

    #[tokio::test]
    async fn test_add_message_appends_and_syncs_list_copy() {
        let store = instant_store();
        let session = store.create_session(None).await;

        std::thread::sleep(Duration::from_millis(2));
        store
            .add_message("about last night", MessageRole::User, Some("dream-1".to_string()))
            .await;

        let current = store.current_session().await.unwrap();
        let listed = store.get_session_by_id(&session.id).await.unwrap();
        assert_eq!(current, listed);
        assert_eq!(listed.messages.len(), 2);
        assert_eq!(listed.messages[1].dream_id.as_deref(), Some("dream-1"));
        assert!(listed.last_activity > session.last_activity);
    }

    #[tokio::test]
    async fn test_update_and_delete_message_target_current_session_only() {
        let store = instant_store();
        store.create_session(None).await;
        store.add_message("typo", MessageRole::User, None).await;
        let message_id = store.current_session().await.unwrap().messages[1].id.clone();

        store.update_message(&message_id, "fixed").await;
        let listed = store.sessions().await[0].clone();
        assert_eq!(listed.messages[1].content, "fixed");

        store.update_message("missing", "ignored").await;
        assert_eq!(store.sessions().await[0], listed);

        store.delete_message(&message_id).await;
        assert_eq!(store.current_session().await.unwrap().messages.len(), 1);
        store.delete_message("missing").await;
        assert_eq!(store.current_session().await.unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_session_clears_matching_current() {
        let store = instant_store();
        let first = store.create_session(None).await;
        let second = store.create_session(None).await;

        store.delete_session(&first.id).await;
        // Current still points at the second session.
        assert_eq!(store.current_session().await.unwrap().id, second.id);

        store.delete_session(&second.id).await;
        assert!(store.current_session().await.is_none());
        assert!(store.sessions().await.is_empty());
    }

    #[tokio::test]
    async fn test_send_message_appends_user_then_canned_reply() {
        let store = instant_store();
        store.create_session(None).await;

        store
            .send_message("I was flying last night", Some("dream-1".to_string()), None)
            .await;

        let session = store.current_session().await.unwrap();
        // welcome + user + assistant
        assert_eq!(session.messages.len(), 3);
        assert_eq!(session.messages[1].role, MessageRole::User);
        assert_eq!(session.messages[1].dream_id.as_deref(), Some("dream-1"));
        assert_eq!(session.messages[2].role, MessageRole::Assistant);
        assert_eq!(
            session.messages[2].content,
            response_text(Locale::En, classify("I was flying last night"))
        );
        assert!(!store.is_typing().await);
    }

    #[tokio::test]
    async fn test_send_message_generic_fallback_and_locale() {
        let store = instant_store();
        store.create_session(None).await;

        store
            .send_message("random text with no keywords", None, Some(Locale::Tr))
            .await;

        let session = store.current_session().await.unwrap();
        assert_eq!(
            session.messages[2].content,
            response_text(Locale::Tr, crate::responder::ReplyCategory::Generic)
        );
    }

    #[tokio::test]
    async fn test_send_message_without_current_session_is_a_no_op() {
        let store = instant_store();
        store.send_message("hello?", None, None).await;
        assert!(store.sessions().await.is_empty());
        assert!(!store.is_typing().await);
    }

    #[tokio::test]
    async fn test_send_message_raises_typing_flag_while_pending() {
        let store = paced_store(40);
        store.create_session(None).await;

        let worker = {
            let store = store.clone();
            tokio::spawn(async move {
                store.send_message("I was flying", None, None).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.is_typing().await);
        worker.await.unwrap();
        assert!(!store.is_typing().await);
    }

    #[tokio::test]
    async fn test_reply_is_pinned_to_the_originating_session() {
        let store = paced_store(40);
        let origin = store.create_session(None).await;

        let worker = {
            let store = store.clone();
            tokio::spawn(async move {
                store.send_message("I was flying", None, None).await;
            })
        };

        // Switch sessions while the reply is pending.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let other = store.create_session(None).await;
        worker.await.unwrap();

        let origin = store.get_session_by_id(&origin.id).await.unwrap();
        let other = store.get_session_by_id(&other.id).await.unwrap();
        // welcome + user + assistant in the originating session...
        assert_eq!(origin.messages.len(), 3);
        assert_eq!(origin.messages[2].role, MessageRole::Assistant);
        // ...and only the welcome in the one the user switched to.
        assert_eq!(other.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_reply_is_dropped_when_pinned_session_was_deleted() {
        let store = paced_store(40);
        let origin = store.create_session(None).await;

        let worker = {
            let store = store.clone();
            tokio::spawn(async move {
                store.send_message("I was flying", None, None).await;
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        store.delete_session(&origin.id).await;
        worker.await.unwrap();

        assert!(store.get_session_by_id(&origin.id).await.is_none());
        assert!(store.sessions().await.is_empty());
        assert!(!store.is_typing().await);
    }

    #[tokio::test]
    async fn test_recent_sessions_sorts_by_activity_and_truncates() {
        let store = instant_store();
        let oldest = store.create_session(Some("a".to_string())).await;
        std::thread::sleep(Duration::from_millis(2));
        let middle = store.create_session(Some("b".to_string())).await;
        std::thread::sleep(Duration::from_millis(2));
        let newest = store.create_session(Some("c".to_string())).await;

        // Reviving the oldest session moves it to the front.
        std::thread::sleep(Duration::from_millis(2));
        store.set_current_session(Some(oldest.clone())).await;
        store.add_message("back again", MessageRole::User, None).await;

        let recents = store.recent_sessions(None).await;
        assert_eq!(recents[0].id, oldest.id);
        assert_eq!(recents[1].id, newest.id);
        assert_eq!(recents[2].id, middle.id);

        assert_eq!(store.recent_sessions(Some(2)).await.len(), 2);
    }
}
