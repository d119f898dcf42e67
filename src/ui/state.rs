/// Widget buffers that only the view cares about.
#[derive(Debug, Default)]
pub struct UiState {
    pub message_input: String,
    pub search_input: String,
    pub new_conversation_name: String,
    pub new_conversation_open: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_new_conversation(&mut self) {
        self.new_conversation_open = false;
        self.new_conversation_name.clear();
    }

    /// Drops everything typed during the previous session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
