use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::sync::mpsc;

use secure_chat::chat::RandomSource;
use secure_chat::config::{self, AppConfig};
use secure_chat::network::SimulatedClient;
use secure_chat::session::SessionStore;
use secure_chat::storage::{KeyValueStore, MemoryStore, SlotDatabase};
use secure_chat::ui::ChatApp;
use secure_chat::ViewController;

#[derive(Parser)]
#[command(
    name = "secure_chat",
    version,
    about = "Secure chat demo client with simulated messaging"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(
        long,
        env = "SECURE_CHAT_CONFIG",
        default_value = config::DEFAULT_CONFIG_PATH,
        value_name = "FILE"
    )]
    config: String,
    /// Keep the session slot in memory instead of the SQLite file
    #[arg(long)]
    ephemeral: bool,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Forget the stored session and exit
    ClearSession,
    /// Write the default config file and exit
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    match cli.mode {
        Some(Mode::ClearSession) => {
            clear_session(&app_config);
            Ok(())
        }
        Some(Mode::InitConfig) => {
            if let Err(err) = config::save_config(&cli.config, &AppConfig::default()) {
                log::error!("Failed to write config {}: {err}", cli.config);
            } else {
                log::info!("Wrote default config to {}", cli.config);
            }
            Ok(())
        }
        None => run_client(app_config, cli.ephemeral).await,
    }
}

fn open_slots(app_config: &AppConfig, ephemeral: bool) -> Box<dyn KeyValueStore> {
    if ephemeral {
        return Box::new(MemoryStore::new());
    }
    match SlotDatabase::with_path(&app_config.session_db_path) {
        Ok(db) => Box::new(db),
        Err(err) => {
            log::warn!(
                "Failed to open session database {} ({err}); session will not survive restart",
                app_config.session_db_path
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn clear_session(app_config: &AppConfig) {
    let mut session = SessionStore::new(open_slots(app_config, false));
    session.logout();
    log::info!("Session slot in {} cleared", app_config.session_db_path);
}

async fn run_client(app_config: AppConfig, ephemeral: bool) -> Result<(), eframe::Error> {
    // UI -> simulated network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Simulated network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let latency = app_config.latency();
    tokio::spawn(async move {
        SimulatedClient::new(event_tx, cmd_rx, latency).run().await;
    });

    let session = SessionStore::new(open_slots(&app_config, ephemeral));
    let source = RandomSource::new(app_config.rng_seed, app_config.reply_text.clone());
    let controller = ViewController::new(session, Box::new(source), cmd_tx, app_config.notice_ttl());

    let options = eframe::NativeOptions::default();
    let mut parts = Some((controller, event_rx));

    eframe::run_native(
        "Secure Chat",
        options,
        Box::new(move |cc| {
            let (controller, event_receiver) = parts
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!(
                "Client started ({})",
                if controller.is_authenticated() {
                    "session restored"
                } else {
                    "signed out"
                }
            );

            Ok(Box::new(ChatApp::new(cc, controller, event_receiver)))
        }),
    )
}
