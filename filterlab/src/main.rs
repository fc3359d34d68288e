use std::path::PathBuf;

use clap::Parser;

use filterlab::prelude::*;
use filterlab::runtime::serialization::GlobalSettings;
use filterlab::runtime::shell_bridge::{ShellBridge, ShellOptions};
use filterlab::runtime::{shell, storage};

#[derive(Parser, Debug)]
#[command(version, about = "Compose CSS filter and backdrop-filter effects")]
struct Args {
    /// Directory holding global_settings.json
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Comma-separated target ids (or labels) to select at startup. An empty
    /// value starts with nothing selected.
    #[arg(long, value_delimiter = ',')]
    targets: Option<Vec<String>>,

    /// Start in backdrop-filter mode
    #[arg(long)]
    backdrop: bool,

    /// Print copied declarations instead of writing them to the clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Reset without asking for confirmation
    #[arg(long)]
    yes: bool,

    /// Write the effective settings back to the config dir
    #[arg(long)]
    save_settings: bool,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let config_dir = args.config_dir.clone().or_else(storage::config_dir);
    let mut settings = load_settings(config_dir.as_deref());

    if args.backdrop {
        settings.backdrop_mode = true;
    }
    if args.no_clipboard {
        settings.copy_to_clipboard = false;
    }

    let (registry, errors) = settings.registry();
    for err in errors {
        warn!("ignoring target from settings: {}", err);
    }
    if registry.is_empty() {
        warn!("no preview targets registered; select targets by id");
    }

    if let Some(targets) = &args.targets {
        settings.selected_targets = Some(
            targets
                .iter()
                .map(|word| shell::resolve_target(word.trim(), &registry))
                .filter(|id| !id.is_empty())
                .collect(),
        );
    }

    if args.save_settings {
        match config_dir.as_deref() {
            Some(dir) => match storage::save_global_state(dir, &settings) {
                Ok(path) => info!("Saved settings to {}", path.display()),
                Err(err) => error!("failed to save settings: {}", err),
            },
            None => warn!("no config dir available; settings not saved"),
        }
    }

    let targets = settings.initial_selection(&registry);
    let mode = settings.mode();
    info!("Selected targets: {:?}, mode: {}", targets, mode);

    let (command_tx, command_rx) = command_channel();
    let (event_tx, event_rx) = event_channel();

    let playground = Playground::new(targets.clone(), mode, Some(event_tx));

    println!("{}", shell::HELP);

    let bridge = ShellBridge::launch(
        command_tx,
        event_rx,
        registry,
        ShellOptions {
            copy_to_clipboard: settings.copy_to_clipboard,
            assume_yes: args.yes,
            mode,
            targets,
        },
    );

    run_playground(playground, command_rx);
    drop(bridge);
}

fn load_settings(config_dir: Option<&std::path::Path>) -> GlobalSettings {
    let Some(dir) = config_dir else {
        return GlobalSettings::default();
    };

    match storage::load_global_state_if_exists(dir) {
        Ok(Some(settings)) => {
            debug!("Loaded settings from {}", dir.display());
            settings
        }
        Ok(None) => GlobalSettings::default(),
        Err(err) => {
            warn!("failed to load settings, using defaults: {}", err);
            GlobalSettings::default()
        }
    }
}
