use eframe::egui;

use crate::auth::{AuthForm, AuthMode};
use crate::controller::Intent;

pub fn render(ui: &mut egui::Ui, form: &mut AuthForm) -> Option<Intent> {
    let mut intent = None;

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 6.0);
        ui.heading(egui::RichText::new("Secure Chat").size(32.0).strong());
        ui.label(egui::RichText::new("End-to-end encrypted messaging platform").weak());
        ui.add_space(24.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_max_width(350.0);
            ui.label(egui::RichText::new("🛡").size(28.0));
            ui.label(egui::RichText::new(form.subtitle()).weak());
            ui.add_space(8.0);

            let mut submitted = false;
            ui.label("Username");
            let user = ui.add(
                egui::TextEdit::singleline(&mut form.username).hint_text("Enter your username"),
            );
            ui.label("Password");
            let pass = ui.add(
                egui::TextEdit::singleline(&mut form.password)
                    .password(true)
                    .hint_text("Enter your password"),
            );
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            submitted |= enter && (user.lost_focus() || pass.lost_focus());

            if form.mode == AuthMode::Register {
                ui.label("Confirm Password");
                let confirm = ui.add(
                    egui::TextEdit::singleline(&mut form.confirm_password)
                        .password(true)
                        .hint_text("Confirm your password"),
                );
                submitted |= enter && confirm.lost_focus();
            }

            ui.add_space(8.0);
            let button = egui::Button::new(form.submit_label()).min_size(egui::vec2(200.0, 0.0));
            if ui.add_enabled(!form.is_loading, button).clicked() || (submitted && !form.is_loading) {
                intent = Some(Intent::SubmitAuth);
            }
            if ui.link(form.toggle_label()).clicked() {
                intent = Some(Intent::ToggleAuthMode);
            }
        });
    });

    intent
}
