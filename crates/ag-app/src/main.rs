//! Main application entry point

use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use tracing::{error, info};

use ag_core::{AppContext, FileSettingsStore, Handler, NavigationEvent, NavigationError, PageDescriptor, SiteConfig};

mod commands;
mod renderer;

use commands::Command;
use renderer::ConsoleRenderer;

/// Print a navigation failure without leaving the shell
fn report(result: Result<NavigationEvent<PageDescriptor>, NavigationError>) {
    if let Err(err) = result {
        error!("navigation failed: {err}");
    }
}

/// Carry out one command. Returns `false` when the shell should exit.
///
/// Failures are logged and the shell keeps running.
fn execute(context: &AppContext, command: Command) -> bool {
    match command {
        Command::Go(path) => report(context.navigation.navigate_to(&path)),
        Command::Default => report(context.navigation.navigate_to_default()),
        Command::Error(status) => report(context.navigation.navigate_to_error(status)),
        Command::Pages => {
            for path in context.navigation.registered_paths() {
                println!("{path}");
            }
        }
        Command::ToggleDark => match context.update_settings(|s| s.dark_mode = !s.dark_mode) {
            Ok(settings) => info!(dark_mode = settings.dark_mode, "display settings saved"),
            Err(err) => error!("could not save display settings: {err}"),
        },
        Command::Landing(path) => match context.update_settings(|s| s.landing_page = Some(path.clone())) {
            Ok(_) => {
                context.navigation.set_default_path(&path);
                info!(landing_page = %path, "display settings saved");
            }
            Err(err) => error!("could not save display settings: {err}"),
        },
        Command::Help => println!("{}", commands::HELP),
        Command::Quit => return false,
    }
    true
}

fn run(context: &AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command")?;
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if !execute(context, command) {
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting autograder front-end shell");

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => SiteConfig::load(&path)
            .with_context(|| format!("failed to load site configuration from {}", path.display()))?,
        None => SiteConfig::default(),
    };

    let store = Arc::new(FileSettingsStore::new(config.settings_dir.clone()));
    info!(dir = %store.dir().display(), "display settings directory");
    let context = AppContext::bootstrap(&config, store).context("invalid page registrations")?;

    let renderer: Handler<NavigationEvent<PageDescriptor>> =
        Arc::new(ConsoleRenderer::new(context.settings.clone()));
    context.navigation.subscribe(renderer);

    context
        .navigation
        .navigate_to_default()
        .context("failed to open the default page")?;

    run(&context)
}
