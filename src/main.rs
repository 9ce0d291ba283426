// SPDX-License-Identifier: MPL-2.0
use journal_wall::app::{self, paths, Flags};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: journal_wall [OPTIONS] <SRC>

Arguments:
  <SRC>                 Path or http(s) URL of the journal page photo

Options:
  --alt <TEXT>          Description of the page
  --wall <CODE>         Wall the entry belongs to
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --data-dir <DIR>      Where pending submissions are written
  --config-dir <DIR>    Where settings.toml is read from
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let alt = args.opt_value_from_str("--alt")?;
    let wall = args.opt_value_from_str("--wall")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let source: String = args.free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Flags {
        lang,
        source,
        alt,
        wall,
        data_dir,
        config_dir,
    })
}
