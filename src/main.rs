use std::process;

use dl::cli::{build_cli, describe, CONFIG_ENV};
use dl::commands::{self, completions};
use dl::core::SystemRunner;
use dl::{Config, DlError};

fn main() {
    let mut cli = build_cli(help_description());
    let matches = cli.clone().get_matches();

    dl::init_logging(matches.get_flag("debug"));

    let result = if matches.get_flag("version") {
        commands::version()
    } else if let Some(shell) = matches.get_one::<clap_complete::Shell>("completions") {
        completions::execute(*shell, &mut cli)
    } else {
        commands::download(&matches)
    };

    if let Err(err) = result {
        let code = err
            .downcast_ref::<DlError>()
            .map(DlError::exit_code)
            .unwrap_or(1);
        dl::ui::error(&format!("Error: {:#}", err));
        process::exit(code);
    }
}

/// Describe the current configuration, but only when help was requested
fn help_description() -> Option<String> {
    let wants_help = std::env::args().skip(1).any(|a| a == "-h" || a == "--help");
    if !wants_help {
        return None;
    }

    let path = match std::env::var(CONFIG_ENV) {
        Ok(path) => Config::expand_path(&path),
        Err(_) => Config::default_path().ok()?,
    };
    Config::load(&path, &SystemRunner::default())
        .ok()
        .map(|config| describe(&config))
}
