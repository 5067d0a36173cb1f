// SPDX-License-Identifier: MPL-2.0
use iced_drop::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_drop [OPTIONS] [FILES...]

Options:
  --lang <id>          UI language (e.g. en-US, zh-CN)
  --data-dir <dir>     Directory for the upload registry and session state
  --config-dir <dir>   Directory for settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_drop=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let files = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Flags {
        lang,
        files,
        data_dir,
        config_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(values.iter().map(OsString::from).collect())
    }

    #[test]
    fn parse_flags_collects_options_and_files() {
        let flags = parse_flags(args(&["--lang", "zh-CN", "a.png", "b.jpg"])).expect("flags");

        assert_eq!(flags.lang.as_deref(), Some("zh-CN"));
        assert_eq!(flags.files, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
        assert!(flags.data_dir.is_none());
    }

    #[test]
    fn parse_flags_rejects_missing_option_value() {
        assert!(parse_flags(args(&["--data-dir"])).is_err());
    }
}
