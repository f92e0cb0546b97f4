mod engine;
mod session;

pub use engine::{JokePool, Reply, ReplyEngine, RandomSource, Rule, RuleSet, ThreadRandom, FALLBACK_REPLY};
pub use session::{
    ChatSession, Message, PendingReply, PendingTimers, QuickReply, Ticket, WidgetState,
    REPLY_DELAY,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Message is empty")]
    EmptyMessage,
    #[error("Joke pool needs at least one joke")]
    EmptyJokePool,
}
