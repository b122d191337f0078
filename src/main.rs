// SPDX-License-Identifier: MPL-2.0
use helix_ui::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
helix-ui: showcase of the helix_ui primitives

USAGE:
  helix-ui [OPTIONS]

OPTIONS:
  --max-toasts <N>    Number of toasts kept before the oldest is evicted
  --config <PATH>     Read settings from PATH instead of the default location
  -h, --help          Print this help

ENVIRONMENT:
  RUST_LOG            Log filter (default: helix_ui=info)
  HELIX_UI_CONFIG_DIR Directory holding settings.toml
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        max_toasts: args.opt_value_from_str("--max-toasts")?,
        config_path: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("helix_ui=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match parse_flags() {
        Ok(Some(flags)) => app::run(flags),
        Ok(None) => {
            print!("{HELP}");
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    }
}
