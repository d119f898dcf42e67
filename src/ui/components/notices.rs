use std::time::Instant;

use eframe::egui;

use crate::notice::{NoticeBoard, NoticeKind};

pub fn render(ctx: &egui::Context, board: &mut NoticeBoard) {
    egui::Area::new(egui::Id::new("notice_board"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for notice in board.visible(Instant::now()) {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(280.0);
                    let title = egui::RichText::new(&notice.title).strong();
                    let title = match notice.kind {
                        NoticeKind::Info => title,
                        NoticeKind::Error => title.color(egui::Color32::LIGHT_RED),
                    };
                    ui.label(title);
                    if !notice.description.is_empty() {
                        ui.label(egui::RichText::new(&notice.description).small());
                    }
                });
                ui.add_space(6.0);
            }
        });
}
