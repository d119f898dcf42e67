pub mod chat_area;
pub mod input_bar;
pub mod login_form;
pub mod new_conversation;
pub mod notices;
pub mod sidebar;
