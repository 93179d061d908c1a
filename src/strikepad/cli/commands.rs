use super::print::{format_log, format_rendered, print_messages};
use super::setup::{Cli, Commands};
use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use strikepad::config::{StrikeConfig, CONFIG_KEYS};
use strikepad::controller::CmdMessage;
use strikepad::error::{Result, StrikeError};
use strikepad::export::export_filename;
use strikepad::session::{Replay, Session};

struct AppContext {
    config: StrikeConfig,
    config_dir: PathBuf,
}

#[derive(Debug, Clone)]
enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::Render { session } => handle_render(&ctx, &session),
        Commands::Export {
            session,
            output,
            stdout,
        } => handle_export(&ctx, &session, output, stdout),
        Commands::Log { session } => handle_log(&session),
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            handle_config(ctx, action)
        }
    }
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("strikepad=debug")
        } else {
            EnvFilter::new("strikepad=info")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "strikepad", "strikepad")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| StrikeError::Config("Could not determine config dir".into()))?,
    };
    let config = StrikeConfig::load(&config_dir)?;
    tracing::debug!(dir = %config_dir.display(), "config loaded");

    Ok(AppContext { config, config_dir })
}

/// Loads a session script, or wraps a plain text file as a session with no events.
fn load_session(path: &Path) -> Result<Replay> {
    let is_script = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let session = if is_script {
        Session::load(path)?
    } else {
        let text = fs::read_to_string(path)
            .map_err(|e| StrikeError::Session(format!("{}: {}", path.display(), e)))?;
        Session::from_document(text)
    };
    tracing::debug!(
        path = %path.display(),
        events = session.events.len(),
        "session loaded"
    );
    Ok(session.replay())
}

fn handle_render(ctx: &AppContext, session: &Path) -> Result<()> {
    let replay = load_session(session)?;
    print_messages(&replay.messages);
    println!(
        "{}",
        format_rendered(&replay.controller.render(), &ctx.config.placeholder)
    );
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    session: &Path,
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let replay = load_session(session)?;
    let content = replay.controller.export_with(&ctx.config);

    if stdout {
        print!("{}", content);
        return Ok(());
    }

    let path = output.unwrap_or_else(|| PathBuf::from(export_filename(Utc::now())));
    fs::write(&path, content)?;
    print_messages(&[CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    ))]);
    Ok(())
}

fn handle_log(session: &Path) -> Result<()> {
    let replay = load_session(session)?;
    let log = replay.controller.state().deletions_by_sequence();
    if log.is_empty() {
        println!("No deletions recorded.");
        return Ok(());
    }
    for line in format_log(&log, Utc::now()) {
        println!("{}", line);
    }
    Ok(())
}

fn handle_config(mut ctx: AppContext, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::ShowAll => {
            for key in CONFIG_KEYS {
                if let Some(value) = ctx.config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
        ConfigAction::ShowKey(key) => match ctx.config.get(&key) {
            Some(value) => println!("{}", value),
            None => print_messages(&[CmdMessage::error(format!("Unknown config key: {}", key))]),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = ctx.config.set(&key, &value) {
                print_messages(&[CmdMessage::error(e.to_string())]);
                return Ok(());
            }
            ctx.config.save(&ctx.config_dir)?;
            print_messages(&[CmdMessage::success(format!("{} set to {}", key, value))]);
        }
    }
    Ok(())
}
