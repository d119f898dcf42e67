//! Every piece of fabricated data goes through [`ChatDataSource`], so the
//! controller never touches randomness directly.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{ChatMessage, ConversationSummary};

pub const MIN_HISTORY: usize = 2;
pub const MAX_HISTORY: usize = 6;
/// How far back synthesized history may reach.
const HISTORY_WINDOW_MS: i64 = 1_000_000;

pub trait ChatDataSource {
    /// Label for a freshly authenticated user.
    fn identity_id(&mut self) -> String;
    /// Presence flag for a newly added conversation.
    fn online_flag(&mut self) -> bool;
    /// Thread history shown when a conversation is opened. Order is not required.
    fn history(&mut self, conversation: &ConversationSummary, current_user_id: &str) -> Vec<ChatMessage>;
    /// Text of the counterpart's simulated answer.
    fn reply_text(&mut self, conversation: &ConversationSummary) -> String;
}

pub struct RandomSource {
    rng: StdRng,
    reply_text: String,
}

impl RandomSource {
    pub fn new(seed: Option<u64>, reply_text: impl Into<String>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            reply_text: reply_text.into(),
        }
    }
}

impl ChatDataSource for RandomSource {
    fn identity_id(&mut self) -> String {
        format!("user-{}", self.rng.gen_range(0..10_000))
    }

    fn online_flag(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn history(&mut self, conversation: &ConversationSummary, current_user_id: &str) -> Vec<ChatMessage> {
        let count = self.rng.gen_range(MIN_HISTORY..=MAX_HISTORY);
        let now = Utc::now();

        (0..count)
            .map(|_| {
                let from_me = self.rng.gen_bool(0.5);
                let age = Duration::milliseconds(self.rng.gen_range(0..HISTORY_WINDOW_MS));
                if from_me {
                    ChatMessage::new(
                        current_user_id,
                        format!("Hey {}, how's it going?", conversation.name),
                        now - age,
                    )
                } else {
                    ChatMessage::new(conversation.id.as_str(), "Hi there, I'm doing well!", now - age)
                }
            })
            .collect()
    }

    fn reply_text(&mut self, _conversation: &ConversationSummary) -> String {
        self.reply_text.clone()
    }
}
