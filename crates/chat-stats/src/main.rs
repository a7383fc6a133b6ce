mod bootstrap;

use anyhow::Result;
use stats_core::error::StatsError;
use stats_core::settings::Settings;
use stats_data::analysis::analyze_chat;
use stats_data::reader::load_messages;
use stats_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("chat-stats v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let chat_file = match settings.chat_file.clone() {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            bootstrap::discover_chat_file_in(&cwd).ok_or(StatsError::NoChatFile(cwd))?
        }
    };
    tracing::info!("Analyzing {}", chat_file.display());

    match settings.view.as_str() {
        // Dump the parsed messages as JSON and exit; statistics are left to
        // whatever consumes the output.
        "json" => {
            let messages = load_messages(&chat_file)?;
            let stdout = std::io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), &messages)?;
            println!();
        }

        view => {
            let analysis = analyze_chat(&chat_file)?;

            let source = chat_file
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| chat_file.display().to_string());

            let app = App::new(&settings.theme, ViewMode::from_name(view), source);
            app.run(&analysis)?;
        }
    }

    Ok(())
}
