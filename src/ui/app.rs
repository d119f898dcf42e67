use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::NetworkEvent;
use crate::controller::{Intent, ViewController};

use super::components::{chat_area, input_bar, login_form, new_conversation, notices, sidebar};
use super::state::UiState;

/// Simulated replies arrive between frames; this keeps the UI polling for them.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct ChatApp {
    controller: ViewController,
    state: UiState,
    event_receiver: mpsc::Receiver<NetworkEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        controller: ViewController,
        event_receiver: mpsc::Receiver<NetworkEvent>,
    ) -> Self {
        Self {
            controller,
            state: UiState::new(),
            event_receiver,
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.controller.handle_event(event);
        }
    }

    fn apply(&mut self, intent: Intent) {
        let adds_conversation = matches!(intent, Intent::AddConversation(_));
        let logs_out = intent == Intent::Logout;

        match self.controller.dispatch(intent) {
            Ok(()) => {
                if adds_conversation {
                    self.state.close_new_conversation();
                }
                if logs_out {
                    self.state.reset();
                }
            }
            Err(err) if err.is_validation() => log::debug!("Intent rejected: {err}"),
            Err(err) => log::warn!("Intent failed: {err}"),
        }
    }

    fn render_login(&mut self, ctx: &egui::Context) -> Vec<Intent> {
        let mut intents = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(intent) = login_form::render(ui, self.controller.auth_form_mut()) {
                intents.push(intent);
            }
        });
        intents
    }

    fn render_chat(&mut self, ctx: &egui::Context) -> Vec<Intent> {
        let mut intents = Vec::new();
        let props = self.controller.props();

        egui::SidePanel::left("conversation_sidebar")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                intents.extend(sidebar::render(ui, &props, &mut self.state));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, &props);

            if props.active.is_some() {
                ui.separator();
                if let Some(content) = input_bar::render(ui, &mut self.state.message_input) {
                    intents.push(Intent::Send(content));
                }
            }
        });

        if let Some(intent) = new_conversation::render(ctx, &mut self.state) {
            intents.push(intent);
        }
        intents
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        let intents = if self.controller.is_authenticated() {
            self.render_chat(ctx)
        } else {
            self.render_login(ctx)
        };
        for intent in intents {
            self.apply(intent);
        }

        notices::render(ctx, self.controller.notices_mut());

        ctx.request_repaint_after(EVENT_POLL_INTERVAL);
    }
}
