use chrono::Local;
use eframe::egui;

use crate::common::types::initial_of;
use crate::controller::RenderProps;

pub fn render(ui: &mut egui::Ui, props: &RenderProps<'_>) {
    let Some(conversation) = props.active else {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("🛡 Secure Chat");
            ui.label(
                egui::RichText::new(
                    "Select a conversation to start chatting with end-to-end encryption",
                )
                .weak(),
            );
        });
        return;
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(initial_of(&conversation.name)).strong().size(20.0));
        if conversation.online {
            ui.colored_label(egui::Color32::GREEN, "●");
        }
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&conversation.name).strong());
            ui.colored_label(egui::Color32::GREEN, "🔒 End-to-end encrypted");
        });
    });
    ui.separator();

    let user_id = props.identity.map(|identity| identity.id.as_str()).unwrap_or_default();
    let height = (ui.available_height() - 60.0).max(0.0);

    egui::ScrollArea::vertical()
        .max_height(height)
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in props.messages {
                let sent_by_me = message.is_from(user_id);
                let layout = if sent_by_me {
                    egui::Layout::top_down(egui::Align::Max)
                } else {
                    egui::Layout::top_down(egui::Align::Min)
                };
                ui.with_layout(layout, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.label(&message.content);
                    });
                    let time = message
                        .timestamp
                        .with_timezone(&Local)
                        .format("%I:%M %p")
                        .to_string();
                    let mut meta = String::new();
                    if message.encrypted {
                        meta.push_str("🔒 ");
                    }
                    meta.push_str(&time);
                    if sent_by_me {
                        meta.push_str(" ✔");
                    }
                    ui.label(egui::RichText::new(meta).small().weak());
                });
                ui.add_space(6.0);
            }
        });
}
