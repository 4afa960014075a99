// SPDX-License-Identifier: MPL-2.0
use folio::app::{self, paths, Flags};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Folio - portfolio site viewer

USAGE:
  folio [OPTIONS] [SITE_DIR]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, ko)
  --config-dir <DIR>    Directory holding settings.toml
  --page <PAGE>         Start page: a project file name or a site-relative path
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = option(&mut args, "--lang");
    let config_dir = option(&mut args, "--config-dir");
    let page = option(&mut args, "--page");

    let remaining = args.finish();
    let site_dir = remaining
        .first()
        .and_then(|s| s.clone().into_string().ok());
    if remaining.len() > 1 {
        tracing::warn!(extra = remaining.len() - 1, "ignoring extra arguments");
    }

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        site_dir,
        page,
        config_dir,
    })
}

fn option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid option");
            None
        }
    }
}
