// SPDX-License-Identifier: MPL-2.0
use brochure_lens::app::{self, Flags};
use brochure_lens::config::{self, CliOverrides, Config};
use brochure_lens::logging;
use std::path::PathBuf;

const HELP: &str = "\
BrochureLens - image brochure viewer

USAGE:
  brochure_lens [OPTIONS] [LINK]

ARGS:
  [LINK]                Page to open: #page-4, page-4 or a full link

OPTIONS:
  --lang <id>           Interface language (en-US, fr)
  --pages <n>           Number of pages in the brochure
  --assets <dir>        Directory holding page1.jpg, page2.jpg, ...
  --config-dir <dir>    Directory holding settings.toml
  --write-config        Write the default settings file and exit
  -h, --help            Print this help
";

struct Args {
    flags: Flags,
    config_dir: Option<String>,
    write_config: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let overrides = CliOverrides {
        language: args.opt_value_from_str("--lang")?,
        total_pages: args.opt_value_from_str("--pages")?,
        assets_dir: args.opt_value_from_str::<_, PathBuf>("--assets")?,
    };
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let write_config = args.contains("--write-config");
    let link = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    Ok(Some(Args {
        flags: Flags { link, overrides },
        config_dir,
        write_config,
    }))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init();
    app::paths::init_cli_overrides(args.config_dir);

    if args.write_config {
        match config::save(&Config::default()) {
            Ok(()) => tracing::info!("default settings written"),
            Err(err) => {
                tracing::error!(%err, "could not write settings");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    app::run(args.flags)
}
