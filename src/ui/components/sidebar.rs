use eframe::egui;

use crate::common::types::initial_of;
use crate::controller::{Intent, RenderProps};
use crate::ui::state::UiState;

pub fn render(ui: &mut egui::Ui, props: &RenderProps<'_>, state: &mut UiState) -> Vec<Intent> {
    let mut intents = Vec::new();

    if let Some(identity) = props.identity {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(initial_of(&identity.username)).strong().size(20.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&identity.username).strong());
                ui.label(egui::RichText::new("Online").small().weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⎋ Log out").clicked() {
                    intents.push(Intent::Logout);
                }
            });
        });
    }

    let search = ui.add(
        egui::TextEdit::singleline(&mut state.search_input).hint_text("🔍 Search contacts..."),
    );
    if search.changed() {
        intents.push(Intent::Search(state.search_input.clone()));
    }
    ui.separator();

    ui.label(egui::RichText::new("Conversations").weak());

    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - 40.0).max(0.0))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if props.conversations.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(egui::RichText::new("👤").size(32.0).weak());
                    ui.label(egui::RichText::new("No conversations found").weak());
                });
                return;
            }

            for conversation in &props.conversations {
                let selected = props.active_id == Some(conversation.id.as_str());
                ui.horizontal(|ui| {
                    let presence = if conversation.online {
                        egui::RichText::new("●").color(egui::Color32::GREEN)
                    } else {
                        egui::RichText::new("○").weak()
                    };
                    ui.label(presence);

                    let mut title = format!("{}  {}", conversation.initial(), conversation.name);
                    if let Some(stamp) = &conversation.last_timestamp {
                        title.push_str(&format!("  · {stamp}"));
                    }
                    if ui.selectable_label(selected, title).clicked() {
                        intents.push(Intent::Select(conversation.id.clone()));
                    }

                    if conversation.unread_count > 0 {
                        ui.label(
                            egui::RichText::new(conversation.unread_count.to_string())
                                .strong()
                                .color(egui::Color32::LIGHT_BLUE),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Remove conversation").clicked() {
                            intents.push(Intent::RemoveConversation(conversation.id.clone()));
                        }
                    });
                });
                if let Some(preview) = &conversation.last_message {
                    ui.label(egui::RichText::new(preview).small().weak());
                }
                ui.add_space(4.0);
            }
        });

    ui.separator();
    if ui.button("➕ New Secure Chat").clicked() {
        state.new_conversation_open = true;
    }

    intents
}
