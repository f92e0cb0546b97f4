use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use super::{ChatError, ReplyEngine};
use crate::profile::CHAT_GREETING;

/// Artificial "thinking" time before a bot reply lands.
pub const REPLY_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Visitor(String),
    Bot(String),
}

impl Message {
    pub fn text(&self) -> &str {
        match self {
            Self::Visitor(s) | Self::Bot(s) => s,
        }
    }

    pub fn is_bot(&self) -> bool {
        matches!(self, Self::Bot(_))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickReply {
    Email,
    Phone,
    LinkedIn,
    GitHub,
    Projects,
    Joke,
}

impl QuickReply {
    pub fn all() -> [QuickReply; 6] {
        [
            Self::Email,
            Self::Phone,
            Self::LinkedIn,
            Self::GitHub,
            Self::Projects,
            Self::Joke,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Projects => "Projects",
            Self::Joke => "Joke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A bot reply that has been computed but not yet appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: Ticket,
    pub text: String,
}

/// Timer handles for replies still waiting on their delay, keyed by
/// ticket. A handle is dropped as soon as its timer fires, so only
/// outstanding timers are left for teardown to clear.
#[derive(Debug)]
pub struct PendingTimers<H> {
    handles: HashMap<Ticket, H>,
}

impl<H> Default for PendingTimers<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> PendingTimers<H> {
    pub fn insert(&mut self, ticket: Ticket, handle: H) {
        self.handles.insert(ticket, handle);
    }

    /// Forgets the handle of a timer that has fired.
    pub fn fired(&mut self, ticket: Ticket) -> Option<H> {
        self.handles.remove(&ticket)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.handles.drain().map(|(_, h)| h)
    }
}

/// One open period of the chat widget.
///
/// The log is append-only. Replies are appended in the order their delay
/// timers fire, which is not necessarily the order the visitor sent the
/// messages in.
pub struct ChatSession {
    engine: Arc<ReplyEngine>,
    greeting: String,
    state: WidgetState,
    greeted: bool,
    log: Vec<Message>,
    pending: HashSet<Ticket>,
    next_ticket: u64,
}

impl ChatSession {
    pub fn new(engine: Arc<ReplyEngine>) -> Self {
        Self {
            engine,
            greeting: CHAT_GREETING.to_string(),
            state: WidgetState::Closed,
            greeted: false,
            log: Vec::new(),
            pending: HashSet::new(),
            next_ticket: 0,
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == WidgetState::Open
    }

    /// Opens the widget. Returns true if this was the first open and the
    /// greeting was appended.
    pub fn open(&mut self) -> bool {
        self.state = WidgetState::Open;
        if self.greeted {
            return false;
        }
        self.greeted = true;
        self.log.push(Message::Bot(self.greeting.clone()));
        log::debug!("chat session started");
        true
    }

    pub fn close(&mut self) {
        self.state = WidgetState::Closed;
    }

    pub fn toggle(&mut self) {
        match self.state {
            WidgetState::Open => self.close(),
            WidgetState::Closed => {
                self.open();
            }
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.log
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Appends the visitor message and computes the reply to deliver later.
    pub fn submit(&mut self, text: &str) -> Result<PendingReply, ChatError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(self.enqueue(text))
    }

    pub fn quick_reply(&mut self, quick: QuickReply) -> PendingReply {
        self.enqueue(quick.label())
    }

    fn enqueue(&mut self, text: &str) -> PendingReply {
        self.log.push(Message::Visitor(text.to_string()));
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(ticket);
        PendingReply {
            ticket,
            text: self.engine.classify(text),
        }
    }

    /// Appends the reply unless it was cancelled. Returns whether it landed.
    pub fn deliver(&mut self, reply: PendingReply) -> bool {
        if !self.pending.remove(&reply.ticket) {
            log::debug!("dropping cancelled reply {:?}", reply.ticket);
            return false;
        }
        self.log.push(Message::Bot(reply.text));
        true
    }

    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        self.pending.remove(&ticket)
    }

    pub fn cancel_all(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{RandomSource, FALLBACK_REPLY};

    struct First;

    impl RandomSource for First {
        fn pick(&self, _len: usize) -> usize {
            0
        }
    }

    fn session() -> ChatSession {
        ChatSession::new(Arc::new(ReplyEngine::default().with_random_source(Arc::new(First))))
    }

    #[test]
    fn test_first_open_greets_once() {
        let mut chat = session();
        assert_eq!(chat.state(), WidgetState::Closed);
        assert!(chat.messages().is_empty());

        assert!(chat.open());
        assert!(chat.is_open());
        assert_eq!(chat.messages(), &[Message::Bot(CHAT_GREETING.to_string())]);

        chat.close();
        assert!(!chat.open());
        chat.toggle();
        chat.toggle();
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_github_exchange() {
        let mut chat = session();
        chat.open();
        let before = chat.messages().len();

        let reply = chat.submit("github").expect("github should be accepted");
        assert_eq!(chat.messages().last(), Some(&Message::Visitor("github".to_string())));
        assert!(chat.is_waiting());

        let expected = ReplyEngine::default().classify("github");
        assert_eq!(reply.text, expected);
        assert!(chat.deliver(reply));
        assert!(!chat.is_waiting());

        assert_eq!(chat.messages().len(), before + 2);
        assert_eq!(chat.messages().last(), Some(&Message::Bot(expected)));
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut chat = session();
        chat.open();
        assert_eq!(chat.submit(""), Err(ChatError::EmptyMessage));
        assert_eq!(chat.submit("   \t\n"), Err(ChatError::EmptyMessage));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_quick_reply_matches_typed_label() {
        let mut typed = session();
        let mut clicked = session();
        for quick in QuickReply::all() {
            let a = typed.submit(quick.label()).expect("labels are not blank");
            let b = clicked.quick_reply(quick);
            assert_eq!(a.text, b.text);
            assert_ne!(b.text, FALLBACK_REPLY, "{} should match a rule", quick.label());
            typed.deliver(a);
            clicked.deliver(b);
        }
        assert_eq!(typed.messages(), clicked.messages());
    }

    #[test]
    fn test_replies_land_in_delivery_order() {
        let mut chat = session();
        chat.open();
        let first = chat.submit("email").expect("valid");
        let second = chat.submit("phone").expect("valid");

        // second timer fires first
        chat.deliver(second.clone());
        chat.deliver(first.clone());

        let texts = chat
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.text().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec!["email".to_string(), "phone".to_string(), second.text, first.text]
        );
    }

    #[test]
    fn test_new_message_does_not_cancel_pending() {
        let mut chat = session();
        let first = chat.submit("email").expect("valid");
        let _second = chat.submit("joke").expect("valid");
        assert!(chat.deliver(first));
    }

    #[test]
    fn test_cancelled_reply_never_lands() {
        let mut chat = session();
        chat.open();
        let a = chat.submit("linkedin").expect("valid");
        let b = chat.submit("projects").expect("valid");
        assert!(chat.cancel(a.ticket));
        assert!(!chat.cancel(a.ticket));
        assert!(!chat.deliver(a));

        assert_eq!(chat.cancel_all(), 1);
        assert!(!chat.deliver(b));
        assert_eq!(chat.messages().iter().filter(|m| m.is_bot()).count(), 1);
    }

    #[test]
    fn test_replies_after_close_still_land() {
        let mut chat = session();
        chat.open();
        let reply = chat.submit("name").expect("valid");
        chat.close();
        assert!(chat.deliver(reply));
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn test_custom_greeting() {
        let mut chat = session().with_greeting("Howdy");
        chat.toggle();
        assert_eq!(chat.messages()[0].text(), "Howdy");
        assert!(chat.messages()[0].is_bot());
    }

    #[test]
    fn test_reply_delay() {
        assert_eq!(REPLY_DELAY, Duration::from_millis(800));
    }

    #[test]
    fn test_fired_timers_are_forgotten() {
        let mut chat = session();
        chat.open();
        let mut timers = PendingTimers::default();
        for _ in 0..50 {
            let reply = chat.submit("joke").expect("valid");
            timers.insert(reply.ticket, reply.ticket);
            assert_eq!(timers.fired(reply.ticket), Some(reply.ticket));
            assert!(chat.deliver(reply));
        }
        assert!(timers.is_empty());

        let a = chat.submit("email").expect("valid");
        let b = chat.submit("phone").expect("valid");
        let mut named = PendingTimers::default();
        named.insert(a.ticket, "a");
        named.insert(b.ticket, "b");
        assert_eq!(named.fired(a.ticket), Some("a"));
        assert_eq!(named.fired(a.ticket), None);
        assert_eq!(named.len(), 1);
        assert_eq!(named.drain().collect::<Vec<_>>(), ["b"]);
        assert!(named.is_empty());
    }
}
