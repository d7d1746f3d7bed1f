// SPDX-License-Identifier: MPL-2.0
use belmonts::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
The Belmonts: Forged in Honor, Bound by Legacy

USAGE:
  belmonts [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Read settings.toml from DIR
  --reduced-motion     Show every animation in its final state
  --log <FILTER>       Log filter, e.g. `belmonts=debug` (default: RUST_LOG)
  -h, --help           Print this help
";

const DEFAULT_LOG_FILTER: &str = "belmonts=info";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let reduced_motion = args.contains("--reduced-motion");
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            eprintln!("invalid --config-dir: {err}");
            None
        });
    let log: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("invalid --log: {err}");
        None
    });

    init_logging(log.as_deref());

    for unknown in args.finish() {
        tracing::warn!(argument = ?unknown, "ignoring unknown argument");
    }

    app::run(Flags {
        config_dir,
        reduced_motion,
    })
}

/// Installs the `fmt` subscriber. `--log` wins over `RUST_LOG`.
fn init_logging(cli_filter: Option<&str>) {
    let filter = cli_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
