pub mod feed;
pub mod registry;
pub mod selection;
pub mod source;

pub use feed::MessageFeed;
pub use registry::ConversationRegistry;
pub use selection::ActiveSelection;
pub use source::{ChatDataSource, RandomSource};
