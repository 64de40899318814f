// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_folio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --data-dir <DIR>      Directory for stored preferences
  --config-dir <DIR>    Directory containing settings.toml
  --catalog <FILE>      Project catalog replacing the built-in one
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_folio=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        data_dir: optional_arg(&mut args, "--data-dir"),
        config_dir: optional_arg(&mut args, "--config-dir"),
        catalog: optional_arg(&mut args, "--catalog"),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}

/// Reads `--key value`; a malformed value is logged and ignored.
fn optional_arg(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, key, "invalid command-line value");
            None
        }
    }
}
