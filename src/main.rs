// SPDX-License-Identifier: MPL-2.0
use podium::app::{self, paths, variant::Variant, Flags};
use podium::logging;
use std::process::ExitCode;

const HELP: &str = "\
podium - bilingual speaker portfolio

USAGE:
  podium [OPTIONS]

OPTIONS:
  --lang <he|en>            Display language (saved as the new preference)
  --variant <home|preview>  Page variant to open
  --config-dir <DIR>        Directory of settings.toml
  --data-dir <DIR>          Directory of the stored preferences
  --assets-dir <DIR>        Directory of the flyer and photo images
  -v, --verbose             Debug logging (RUST_LOG overrides)
  -h, --help                Print this help
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let (flags, dirs, verbose) = match parse_args(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(verbose);

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(dirs);

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(
    args: &mut pico_args::Arguments,
) -> Result<(Flags, paths::CliDirs, bool), pico_args::Error> {
    let verbose = args.contains(["-v", "--verbose"]);
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        variant: args.opt_value_from_str::<_, Variant>("--variant")?,
    };
    let dirs = paths::CliDirs {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
    };
    Ok((flags, dirs, verbose))
}
