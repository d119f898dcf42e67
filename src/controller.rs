//! View controller: owns the session, the conversation registry, the active
//! selection and the open thread, and turns user intents and simulated network
//! events into state transitions. It knows nothing about the toolkit that
//! renders [`RenderProps`].

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use crate::auth::AuthForm;
use crate::chat::{ActiveSelection, ChatDataSource, ConversationRegistry, MessageFeed};
use crate::common::{ChatMessage, ConversationSummary, Identity, NetworkCommand, NetworkEvent};
use crate::error::{ChatError, Result};
use crate::notice::NoticeBoard;
use crate::session::SessionStore;

const AUTH_FAILED: &str = "Authentication failed. Please try again.";

/// Everything a user can ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SubmitAuth,
    ToggleAuthMode,
    Search(String),
    Select(String),
    Send(String),
    AddConversation(String),
    RemoveConversation(String),
    Logout,
}

/// Render-ready snapshot handed to the view each frame.
#[derive(Debug)]
pub struct RenderProps<'a> {
    pub identity: Option<&'a Identity>,
    pub conversations: Vec<&'a ConversationSummary>,
    pub active_id: Option<&'a str>,
    pub active: Option<&'a ConversationSummary>,
    pub messages: &'a [ChatMessage],
    pub search: &'a str,
    pub auth_form: &'a AuthForm,
}

pub struct ViewController {
    session: SessionStore,
    source: Box<dyn ChatDataSource>,
    registry: ConversationRegistry,
    selection: ActiveSelection,
    feed: MessageFeed,
    auth_form: AuthForm,
    search: String,
    notices: NoticeBoard,
    command_sender: mpsc::Sender<NetworkCommand>,
    /// Request id of the in-flight sign-in, if any.
    pending_auth: Option<u64>,
    /// Reply ticket -> conversation id.
    pending_replies: HashMap<u64, String>,
    next_id: u64,
}

impl ViewController {
    /// Builds the controller and picks up a session left by a previous run.
    pub fn new(
        mut session: SessionStore,
        source: Box<dyn ChatDataSource>,
        command_sender: mpsc::Sender<NetworkCommand>,
        notice_ttl: Duration,
    ) -> Self {
        session.restore();
        Self {
            session,
            source,
            registry: ConversationRegistry::new(),
            selection: ActiveSelection::default(),
            feed: MessageFeed::default(),
            auth_form: AuthForm::default(),
            search: String::new(),
            notices: NoticeBoard::new(notice_ttl),
            command_sender,
            pending_auth: None,
            pending_replies: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.current().is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.current()
    }

    pub fn registry(&self) -> &ConversationRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &ActiveSelection {
        &self.selection
    }

    pub fn feed(&self) -> &MessageFeed {
        &self.feed
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies.len()
    }

    pub fn props(&self) -> RenderProps<'_> {
        RenderProps {
            identity: self.session.current(),
            conversations: self.registry.list(&self.search),
            active_id: self.selection.id(),
            active: self.selection.resolve(&self.registry),
            messages: self.feed.messages(),
            search: &self.search,
            auth_form: &self.auth_form,
        }
    }

    /// Applies one intent. Validation failures are reported on the notice
    /// board and returned; nothing is mutated in that case.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::SubmitAuth => self.submit_auth(),
            Intent::ToggleAuthMode => {
                self.auth_form.toggle_mode();
                Ok(())
            }
            Intent::Search(query) => {
                self.search = query;
                Ok(())
            }
            Intent::Select(id) => {
                self.select(&id);
                Ok(())
            }
            Intent::Send(text) => {
                self.send(&text);
                Ok(())
            }
            Intent::AddConversation(name) => self.add_conversation(&name),
            Intent::RemoveConversation(id) => {
                self.remove_conversation(&id);
                Ok(())
            }
            Intent::Logout => {
                self.logout();
                Ok(())
            }
        }
    }

    pub fn handle_event(&mut self, event: NetworkEvent) {
        match event {
            NetworkEvent::AuthCompleted {
                request_id,
                username,
            } => self.complete_auth(request_id, username),
            NetworkEvent::ReplyArrived {
                ticket,
                conversation_id,
            } => self.receive_reply(ticket, &conversation_id),
        }
    }

    fn submit_auth(&mut self) -> Result<()> {
        if self.is_authenticated() || self.auth_form.is_loading {
            return Ok(());
        }

        let username = match self.auth_form.validate() {
            Ok(username) => username,
            Err(err) => {
                match err {
                    ChatError::PasswordMismatch => self
                        .notices
                        .error("Passwords do not match", "Confirm your password and try again."),
                    _ => self.notices.error("Error", err.to_string()),
                }
                return Err(err);
            }
        };

        let request_id = self.next_id();
        self.auth_form.is_loading = true;
        self.pending_auth = Some(request_id);

        if !self.send_command(NetworkCommand::Authenticate {
            request_id,
            username,
        }) {
            self.auth_form.is_loading = false;
            self.pending_auth = None;
            self.notices.error(AUTH_FAILED, "The secure channel is unavailable.");
        }
        Ok(())
    }

    fn complete_auth(&mut self, request_id: u64, username: String) {
        if self.pending_auth != Some(request_id) {
            log::warn!("Ignoring stale sign-in completion {request_id}");
            return;
        }
        self.pending_auth = None;
        self.auth_form.is_loading = false;

        let identity = Identity {
            username,
            id: self.source.identity_id(),
        };
        let welcome = format!("Welcome, {}.", identity.username);

        match self.session.authenticate(identity) {
            Ok(()) => {
                self.auth_form.reset();
                self.notices.info("Authentication successful!", welcome);
            }
            Err(err) => {
                log::error!("Failed to persist session: {err}");
                self.notices.error(AUTH_FAILED, "Your session could not be saved.");
            }
        }
    }

    fn select(&mut self, id: &str) {
        let Some(user_id) = self.session.current().map(|identity| identity.id.clone()) else {
            return;
        };
        let Some(conversation) = self.registry.get(id).cloned() else {
            log::debug!("Ignoring selection of unknown conversation {id}");
            return;
        };

        self.registry.mark_read(id);
        if self.selection.is(id) && self.feed.conversation_id() == Some(id) {
            return;
        }

        self.selection.select(id);
        self.feed.reset();
        let history = self.source.history(&conversation, &user_id);
        self.feed.load(id, history);
        log::debug!("Opened conversation {} ({} messages)", id, self.feed.messages().len());
    }

    fn send(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let Some(user_id) = self.session.current().map(|identity| identity.id.clone()) else {
            return;
        };
        let Some(conversation_id) = self
            .selection
            .resolve(&self.registry)
            .map(|conversation| conversation.id.clone())
        else {
            return;
        };

        self.feed.append(ChatMessage::new(user_id, text, Utc::now()));
        self.registry.record_outgoing(&conversation_id, text);
        self.notices.info(
            "Encrypted Message Sent",
            "Your message has been encrypted and sent securely.",
        );

        let ticket = self.next_id();
        self.pending_replies.insert(ticket, conversation_id.clone());
        if !self.send_command(NetworkCommand::ScheduleReply {
            ticket,
            conversation_id,
        }) {
            self.pending_replies.remove(&ticket);
        }
    }

    fn receive_reply(&mut self, ticket: u64, conversation_id: &str) {
        match self.pending_replies.remove(&ticket) {
            Some(expected) if expected == conversation_id => {}
            _ => {
                log::warn!("Ignoring stale reply {ticket} for {conversation_id}");
                return;
            }
        }
        let Some(conversation) = self.registry.get(conversation_id).cloned() else {
            return;
        };

        let text = self.source.reply_text(&conversation);
        self.registry.record_incoming(conversation_id, &text);

        if self.feed.conversation_id() == Some(conversation_id) {
            self.feed
                .append(ChatMessage::new(conversation_id, text.as_str(), Utc::now()));
        } else {
            self.registry.bump_unread(conversation_id);
        }

        self.notices.info(
            format!("New message from {}", conversation.name),
            text,
        );
    }

    fn add_conversation(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            let err = ChatError::EmptyConversationName;
            self.notices.error("Error", err.to_string());
            return Err(err);
        }
        if !self.is_authenticated() {
            return Ok(());
        }

        let online = self.source.online_flag();
        let conversation = self.registry.add(name, online);
        self.select(&conversation.id);
        self.notices.info(
            "Chat Created",
            format!("Secure chat with {name} has been created."),
        );
        Ok(())
    }

    fn remove_conversation(&mut self, id: &str) {
        let Some(removed) = self.registry.remove(id) else {
            return;
        };
        if self.selection.is(id) {
            self.selection.clear();
        }
        if self.feed.conversation_id() == Some(id) {
            self.feed.reset();
        }

        self.pending_replies
            .retain(|_, conversation_id| conversation_id != id);
        self.send_command(NetworkCommand::CancelReplies {
            conversation_id: id.to_string(),
        });
        log::info!("Conversation {} with {} removed", removed.id, removed.name);
    }

    fn logout(&mut self) {
        self.session.logout();
        self.selection.clear();
        self.feed.reset();
        self.registry.clear();
        self.search.clear();
        self.auth_form.reset();
        self.pending_auth = None;
        self.pending_replies.clear();
        self.send_command(NetworkCommand::CancelAll);
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn send_command(&self, command: NetworkCommand) -> bool {
        match self.command_sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send command to network: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthMode;
    use crate::common::JUST_NOW;
    use crate::session::SESSION_KEY;
    use crate::storage::{KeyValueStore, MemoryStore};
    use chrono::Duration as ChronoDuration;

    /// Deterministic data: two-message histories tagged with a load counter.
    struct ScriptedSource {
        loads: usize,
        online: bool,
    }

    impl ChatDataSource for ScriptedSource {
        fn identity_id(&mut self) -> String {
            "user-1".to_string()
        }

        fn online_flag(&mut self) -> bool {
            self.online
        }

        fn history(&mut self, conversation: &ConversationSummary, current_user_id: &str) -> Vec<ChatMessage> {
            self.loads += 1;
            let now = Utc::now();
            vec![
                ChatMessage::new(
                    conversation.id.as_str(),
                    format!("load {} from {}", self.loads, conversation.name),
                    now - ChronoDuration::seconds(5),
                ),
                ChatMessage::new(
                    current_user_id,
                    format!("load {} to {}", self.loads, conversation.name),
                    now - ChronoDuration::seconds(60),
                ),
            ]
        }

        fn reply_text(&mut self, _conversation: &ConversationSummary) -> String {
            "canned".to_string()
        }
    }

    fn controller_with(slots: MemoryStore) -> (ViewController, mpsc::Receiver<NetworkCommand>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);
        let controller = ViewController::new(
            SessionStore::new(Box::new(slots)),
            Box::new(ScriptedSource {
                loads: 0,
                online: true,
            }),
            cmd_tx,
            Duration::from_secs(4),
        );
        (controller, cmd_rx)
    }

    fn signed_in() -> (ViewController, mpsc::Receiver<NetworkCommand>) {
        let slots = MemoryStore::with_entry(SESSION_KEY, r#"{"username":"me","id":"user-1"}"#);
        controller_with(slots)
    }

    fn last_title(controller: &ViewController) -> String {
        controller
            .notices()
            .latest()
            .map(|notice| notice.title.clone())
            .unwrap_or_default()
    }

    #[test]
    fn starts_signed_out_without_a_slot() {
        let (controller, _rx) = controller_with(MemoryStore::new());
        assert!(!controller.is_authenticated());
        assert!(controller.props().identity.is_none());
    }

    #[test]
    fn restores_a_stored_session() {
        let (controller, _rx) = signed_in();
        assert_eq!(controller.identity().map(|i| i.username.as_str()), Some("me"));
    }

    #[test]
    fn corrupted_slot_starts_signed_out_and_is_purged() {
        let slots = MemoryStore::with_entry(SESSION_KEY, "garbage{");
        let (controller, _rx) = controller_with(slots.clone());
        assert!(!controller.is_authenticated());
        assert!(slots.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn login_round_trip_sets_identity_and_persists() {
        let slots = MemoryStore::new();
        let (mut controller, mut rx) = controller_with(slots.clone());
        controller.auth_form_mut().username = "carol".to_string();
        controller.auth_form_mut().password = "pw".to_string();

        controller.dispatch(Intent::SubmitAuth).unwrap();
        assert!(controller.props().auth_form.is_loading);

        let Ok(NetworkCommand::Authenticate { request_id, username }) = rx.try_recv() else {
            panic!("expected an authenticate command");
        };
        assert_eq!(username, "carol");

        controller.handle_event(NetworkEvent::AuthCompleted { request_id, username });

        let identity = controller.identity().cloned().unwrap();
        assert_eq!(identity.username, "carol");
        assert!(!controller.props().auth_form.is_loading);
        assert_eq!(last_title(&controller), "Authentication successful!");

        let stored: Identity = serde_json::from_str(&slots.get(SESSION_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, identity);
    }

    #[test]
    fn padded_username_is_kept_verbatim() {
        let (mut controller, mut rx) = controller_with(MemoryStore::new());
        controller.auth_form_mut().username = " carol ".to_string();
        controller.auth_form_mut().password = "   ".to_string();

        controller.dispatch(Intent::SubmitAuth).unwrap();
        let Ok(NetworkCommand::Authenticate { request_id, username }) = rx.try_recv() else {
            panic!("expected an authenticate command");
        };
        controller.handle_event(NetworkEvent::AuthCompleted { request_id, username });

        assert_eq!(controller.identity().map(|i| i.username.as_str()), Some(" carol "));
    }

    #[test]
    fn conversation_name_is_kept_as_typed() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation(" Dave ".to_string())).unwrap();

        assert_eq!(controller.props().active.map(|c| c.name.as_str()), Some(" Dave "));
        assert_eq!(last_title(&controller), "Chat Created");
    }

    #[test]
    fn register_mismatch_never_contacts_the_network() {
        let (mut controller, mut rx) = controller_with(MemoryStore::new());
        controller.dispatch(Intent::ToggleAuthMode).unwrap();
        let form = controller.auth_form_mut();
        assert_eq!(form.mode, AuthMode::Register);
        form.username = "carol".to_string();
        form.password = "one".to_string();
        form.confirm_password = "two".to_string();

        let result = controller.dispatch(Intent::SubmitAuth);

        assert!(matches!(result, Err(ChatError::PasswordMismatch)));
        assert!(rx.try_recv().is_err());
        assert!(!controller.is_authenticated());
        assert_eq!(last_title(&controller), "Passwords do not match");
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let (mut controller, mut rx) = controller_with(MemoryStore::new());
        controller.auth_form_mut().username = "carol".to_string();

        assert!(matches!(
            controller.dispatch(Intent::SubmitAuth),
            Err(ChatError::MissingCredentials)
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stale_auth_completion_is_ignored() {
        let (mut controller, _rx) = controller_with(MemoryStore::new());
        controller.handle_event(NetworkEvent::AuthCompleted {
            request_id: 77,
            username: "mallory".to_string(),
        });
        assert!(!controller.is_authenticated());
    }

    #[test]
    fn add_conversation_appends_and_selects() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        controller.dispatch(Intent::AddConversation("Dave".to_string())).unwrap();

        let props = controller.props();
        let names: Vec<_> = props.conversations.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Dave"]);
        assert_ne!(props.conversations[0].id, props.conversations[1].id);
        assert_eq!(props.active.map(|c| c.name.as_str()), Some("Dave"));
        assert_eq!(props.messages.len(), 2);
        assert_eq!(last_title(&controller), "Chat Created");
    }

    #[test]
    fn blank_conversation_name_mutates_nothing() {
        let (mut controller, _rx) = signed_in();
        let result = controller.dispatch(Intent::AddConversation("   ".to_string()));
        assert!(matches!(result, Err(ChatError::EmptyConversationName)));
        assert!(controller.registry().is_empty());
        assert_eq!(controller.selection().id(), None);
        assert_eq!(last_title(&controller), "Error");
    }

    #[test]
    fn switching_conversations_regenerates_the_feed() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();
        controller.dispatch(Intent::Send("only in alice".to_string())).unwrap();
        controller.dispatch(Intent::AddConversation("Bob".to_string())).unwrap();

        let contents: Vec<_> = controller
            .feed()
            .messages()
            .iter()
            .map(|m| m.content.clone())
            .collect();
        assert_eq!(contents, vec!["load 2 to Bob", "load 2 from Bob"]);

        controller.dispatch(Intent::Select(alice)).unwrap();
        assert!(
            controller
                .feed()
                .messages()
                .iter()
                .all(|m| m.content.starts_with("load 3"))
        );
    }

    #[test]
    fn reselecting_the_open_conversation_keeps_the_thread() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();
        controller.dispatch(Intent::Send("hello".to_string())).unwrap();

        controller.dispatch(Intent::Select(alice)).unwrap();
        assert_eq!(controller.feed().messages().len(), 3);
    }

    #[test]
    fn send_echoes_updates_preview_and_schedules_reply() {
        let (mut controller, mut rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();

        controller.dispatch(Intent::Send("hello".to_string())).unwrap();

        let last = controller.feed().messages().last().unwrap();
        assert_eq!(last.content, "hello");
        assert_eq!(last.sender_id, "user-1");
        assert!(last.encrypted);

        let summary = controller.registry().get(&alice).unwrap();
        assert_eq!(summary.last_message.as_deref(), Some("hello"));
        assert_eq!(summary.last_timestamp.as_deref(), Some(JUST_NOW));
        assert_eq!(last_title(&controller), "Encrypted Message Sent");

        let Ok(NetworkCommand::ScheduleReply { conversation_id, .. }) = rx.try_recv() else {
            panic!("expected a scheduled reply");
        };
        assert_eq!(conversation_id, alice);
        assert_eq!(controller.pending_replies(), 1);
    }

    #[test]
    fn blank_or_unselected_sends_are_ignored() {
        let (mut controller, mut rx) = signed_in();
        controller.dispatch(Intent::Send("nobody to talk to".to_string())).unwrap();
        assert!(rx.try_recv().is_err());

        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        controller.dispatch(Intent::Send("   ".to_string())).unwrap();
        assert_eq!(controller.feed().messages().len(), 2);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reply_for_open_thread_appends_to_feed() {
        let (mut controller, mut rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        controller.dispatch(Intent::Send("hello".to_string())).unwrap();
        let Ok(NetworkCommand::ScheduleReply { ticket, conversation_id }) = rx.try_recv() else {
            panic!("expected a scheduled reply");
        };

        controller.handle_event(NetworkEvent::ReplyArrived {
            ticket,
            conversation_id: conversation_id.clone(),
        });

        let summary = controller.registry().get(&conversation_id).unwrap();
        assert_eq!(summary.last_message.as_deref(), Some("canned"));
        assert_eq!(summary.unread_count, 0);
        let last = controller.feed().messages().last().unwrap();
        assert_eq!(last.content, "canned");
        assert_eq!(last.sender_id, conversation_id);
        assert_eq!(last_title(&controller), "New message from Alice");
    }

    #[test]
    fn reply_for_background_thread_counts_as_unread() {
        let (mut controller, mut rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();
        controller.dispatch(Intent::Send("hello".to_string())).unwrap();
        let Ok(NetworkCommand::ScheduleReply { ticket, .. }) = rx.try_recv() else {
            panic!("expected a scheduled reply");
        };
        controller.dispatch(Intent::AddConversation("Bob".to_string())).unwrap();
        let bob_feed = controller.feed().clone();

        controller.handle_event(NetworkEvent::ReplyArrived {
            ticket,
            conversation_id: alice.clone(),
        });

        assert_eq!(controller.registry().get(&alice).unwrap().unread_count, 1);
        assert_eq!(controller.feed(), &bob_feed);

        controller.dispatch(Intent::Select(alice.clone())).unwrap();
        assert_eq!(controller.registry().get(&alice).unwrap().unread_count, 0);
    }

    #[test]
    fn unknown_reply_tickets_are_ignored() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();

        controller.handle_event(NetworkEvent::ReplyArrived {
            ticket: 999,
            conversation_id: alice.clone(),
        });
        assert_eq!(controller.registry().get(&alice).unwrap().last_message, None);
    }

    #[test]
    fn removing_the_open_conversation_clears_selection_and_replies() {
        let (mut controller, mut rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();
        controller.dispatch(Intent::Send("hello".to_string())).unwrap();
        let Ok(NetworkCommand::ScheduleReply { ticket, .. }) = rx.try_recv() else {
            panic!("expected a scheduled reply");
        };

        controller
            .dispatch(Intent::RemoveConversation(alice.clone()))
            .unwrap();

        assert!(controller.props().active.is_none());
        assert_eq!(controller.selection().id(), None);
        assert!(controller.feed().is_empty());
        assert_eq!(controller.pending_replies(), 0);
        assert_eq!(
            rx.try_recv().ok(),
            Some(NetworkCommand::CancelReplies {
                conversation_id: alice.clone()
            })
        );

        controller.handle_event(NetworkEvent::ReplyArrived {
            ticket,
            conversation_id: alice,
        });
        assert!(controller.registry().is_empty());
    }

    #[test]
    fn search_filters_case_insensitively() {
        let (mut controller, _rx) = signed_in();
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        controller.dispatch(Intent::AddConversation("Bob".to_string())).unwrap();

        controller.dispatch(Intent::Search("ali".to_string())).unwrap();
        let names: Vec<_> = controller
            .props()
            .conversations
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["Alice".to_string()]);
    }

    #[test]
    fn logout_resets_everything_and_cancels_jobs() {
        let slots = MemoryStore::with_entry(SESSION_KEY, r#"{"username":"me","id":"user-1"}"#);
        let (mut controller, mut rx) = controller_with(slots.clone());
        controller.dispatch(Intent::AddConversation("Alice".to_string())).unwrap();
        let alice = controller.selection().id().unwrap().to_string();
        controller.dispatch(Intent::Send("hello".to_string())).unwrap();
        let Ok(NetworkCommand::ScheduleReply { ticket, .. }) = rx.try_recv() else {
            panic!("expected a scheduled reply");
        };

        controller.dispatch(Intent::Logout).unwrap();

        assert!(!controller.is_authenticated());
        assert!(slots.is_empty());
        assert!(controller.registry().is_empty());
        assert!(controller.feed().is_empty());
        assert_eq!(rx.try_recv().ok(), Some(NetworkCommand::CancelAll));

        controller.handle_event(NetworkEvent::ReplyArrived {
            ticket,
            conversation_id: alice,
        });
        assert!(controller.registry().is_empty());
        assert!(controller.notices().iter().all(|n| !n.title.starts_with("New message")));
    }
}
