use eframe::egui;

use crate::controller::Intent;
use crate::ui::state::UiState;

/// Modal-ish window asking for a username. Closing is left to the caller,
/// which only does so once the controller accepted the name.
pub fn render(ctx: &egui::Context, state: &mut UiState) -> Option<Intent> {
    if !state.new_conversation_open {
        return None;
    }

    let mut intent = None;
    let mut cancel = false;
    let mut open = true;

    egui::Window::new("Start New Encrypted Chat")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Username");
            let response = ui.add(
                egui::TextEdit::singleline(&mut state.new_conversation_name)
                    .hint_text("Enter username"),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if ui.button("Start Secure Chat").clicked() || enter {
                    intent = Some(Intent::AddConversation(state.new_conversation_name.clone()));
                }
            });
        });

    if cancel || !open {
        state.close_new_conversation();
    }
    intent
}
