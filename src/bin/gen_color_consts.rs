use std::path::PathBuf;

use named_color_consts::generator::{GeneratorOptions, InvalidEntryPolicy};
use named_color_consts::logging::ConstsLogger;
use named_color_consts::name::is_valid_identifier;
use named_color_consts::render::RenderOptions;
use named_color_consts::tables::BuiltinProvider;
use named_color_consts::Generator;

const ENV_OUTPUT: &str = "COLOR_CONSTS_OUTPUT";
const ENV_XKCD: &str = "COLOR_CONSTS_XKCD";
const ENV_LOG: &str = "COLOR_CONSTS_LOG";

/// Colour constant generator. Flags are parsed by hand, see `HELP_TEXT`.
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let cfg = match parse_args(args) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.help {
        print!("{HELP_TEXT}");
        return;
    }

    let cfg = match cfg.with_env(|key| std::env::var(key).ok()) {
        Ok(cfg) => cfg,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if cfg.log_level() != LogLevel::Off {
        init_logger(cfg.log_level());
    }

    let generator = Generator::new(cfg.generator_options());
    let result = match &cfg.json {
        #[cfg(feature = "json")]
        Some(path) => generator.run(&named_color_consts::tables::JsonProvider::new(path)),
        #[cfg(not(feature = "json"))]
        Some(_) => {
            eprintln!("`--json` requires the `json` feature.");
            std::process::exit(2);
        }
        None => generator.run(&cfg.builtin_provider()),
    };

    match result {
        Ok(generated) => {
            if !generated.skipped.is_empty() {
                eprintln!("{} entries skipped", generated.skipped.len());
            }
            log::debug!("{} constants emitted", generated.emitted);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_logger(level: LogLevel) {
    let logger = ConstsLogger::new().level(level.to_level_filter());

    if let Err(err) = logger.init() {
        eprintln!("Warning: Failed to initialize logger: {err}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid --log-level value `{value}` (expected: off|error|warn|info|debug|trace)."
            )),
        }
    }

    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Off => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Config {
    help: bool,
    output: Option<PathBuf>,
    xkcd: Option<PathBuf>,
    json: Option<PathBuf>,
    type_name: Option<String>,
    with_type: bool,
    on_invalid: InvalidEntryPolicy,
    log_level: Option<LogLevel>,
}

impl Config {
    /// Fill settings not given as flags from `COLOR_CONSTS_*` variables.
    fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if self.output.is_none() {
            self.output = lookup(ENV_OUTPUT).map(PathBuf::from);
        }
        if self.xkcd.is_none() && self.json.is_none() {
            self.xkcd = lookup(ENV_XKCD).map(PathBuf::from);
        }
        if self.log_level.is_none()
            && let Some(raw) = lookup(ENV_LOG)
        {
            self.log_level = Some(
                LogLevel::parse(&raw).map_err(|e| format!("{e} (from ${ENV_LOG})"))?,
            );
        }
        Ok(self)
    }

    fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    fn generator_options(&self) -> GeneratorOptions {
        let mut options = GeneratorOptions::new().on_invalid(self.on_invalid);
        if let Some(output) = &self.output {
            options = options.output(output);
        }
        let mut render = RenderOptions::new().with_type_definition(self.with_type);
        if let Some(type_name) = &self.type_name {
            render = render.type_name(type_name);
        }
        options.render(render)
    }

    fn builtin_provider(&self) -> BuiltinProvider {
        match &self.xkcd {
            Some(path) => BuiltinProvider::new().xkcd_path(path),
            None => BuiltinProvider::new(),
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::default();
    let mut seen_on_invalid = false;

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "-o" | "--output" => {
                let raw = next_value(&mut iter, "--output")?;
                set_once(&mut cfg.output, PathBuf::from(raw), "--output")?;
            }
            "--xkcd" => {
                let raw = next_value(&mut iter, "--xkcd")?;
                set_once(&mut cfg.xkcd, PathBuf::from(raw), "--xkcd")?;
            }
            "--json" => {
                let raw = next_value(&mut iter, "--json")?;
                set_once(&mut cfg.json, PathBuf::from(raw), "--json")?;
            }
            "--type-name" => {
                let raw = next_value(&mut iter, "--type-name")?;
                if !is_valid_identifier(&raw) {
                    return Err(format!(
                        "Invalid --type-name value `{raw}` (expected a Rust identifier)."
                    ));
                }
                set_once(&mut cfg.type_name, raw, "--type-name")?;
            }
            "--with-type" => {
                if cfg.with_type {
                    return Err("`--with-type` provided more than once.".to_string());
                }
                cfg.with_type = true;
            }
            "--on-invalid" => {
                if seen_on_invalid {
                    return Err("`--on-invalid` provided more than once.".to_string());
                }
                seen_on_invalid = true;
                let raw = next_value(&mut iter, "--on-invalid")?;
                cfg.on_invalid = InvalidEntryPolicy::parse(&raw)?;
            }
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                set_once(&mut cfg.log_level, LogLevel::parse(&raw)?, "--log-level")?;
            }
            _ if !arg.starts_with('-') || arg == "--" => {
                return Err(
                    "Unexpected positional arguments (this CLI has no positional args)."
                        .to_string(),
                );
            }
            _ => {
                return Err(format!(
                    "Unknown flag: {arg}\n\nRun with `--help` to see valid options."
                ));
            }
        }
    }

    if cfg.json.is_some() && cfg.xkcd.is_some() {
        return Err("`--json` and `--xkcd` cannot be combined.".to_string());
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn set_once<T>(slot: &mut Option<T>, value: T, flag: &str) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("`{flag}` provided more than once."));
    }
    *slot = Some(value);
    Ok(())
}

const HELP_TEXT: &str = r"gen_color_consts: documented Rust constants for matplotlib's named colours

USAGE:
    gen_color_consts [OPTIONS]

Writes one `pub const NAME: Color = Color(r, g, b);` block per colour of the
BASE_COLORS, CSS4_COLORS and XKCD_COLORS tables, in that order.

OPTIONS:
    -o, --output <path>         Output file (default: all_the_colors.txt)
        --xkcd <path>           Read XKCD_COLORS from an xkcd survey rgb.txt instead
        --json <path>           Read all three tables from a JSON dump instead
        --type-name <ident>     Type the constants are declared as (default: Color)
        --with-type             Also emit the definition of that type
        --on-invalid <policy>   skip|abort on entries that cannot be emitted (default: skip)
        --log-level <level>     off|error|warn|info|debug|trace (default: warn)
    -h, --help                  Print this help and exit

ENVIRONMENT:
    COLOR_CONSTS_OUTPUT         Same as --output
    COLOR_CONSTS_XKCD           Same as --xkcd
    COLOR_CONSTS_LOG            Same as --log-level

Flags take precedence over environment variables.

EXIT CODES:
    0   Output written (skipped entries are reported but do not fail the run)
    1   Reading the tables or writing the output failed, or --on-invalid abort hit a bad entry
    2   Usage error
";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(argv: &[&str]) -> Result<Config, String> {
        parse_args(argv.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn no_args_uses_defaults() {
        let cfg = parse(&["gen_color_consts"]).expect("parse");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.log_level(), LogLevel::Warn);
        assert_eq!(
            cfg.generator_options().output_path(),
            std::path::Path::new("all_the_colors.txt")
        );
    }

    #[test]
    fn help_flag_sets_help() {
        assert!(parse(&["gen_color_consts", "--help"]).expect("parse").help);
        assert!(parse(&["gen_color_consts", "-h"]).expect("parse").help);
    }

    #[test]
    fn output_and_xkcd_parse() {
        let cfg = parse(&["gen_color_consts", "-o", "colors.rs", "--xkcd", "data/rgb.txt"])
            .expect("parse");
        assert_eq!(cfg.output, Some(PathBuf::from("colors.rs")));
        assert_eq!(cfg.xkcd, Some(PathBuf::from("data/rgb.txt")));
        assert_eq!(
            cfg.builtin_provider(),
            BuiltinProvider::new().xkcd_path("data/rgb.txt")
        );
    }

    #[test]
    fn duplicate_flags_rejected() {
        let err = parse(&["gen_color_consts", "-o", "a", "--output", "b"]).expect_err("error");
        assert!(err.contains("more than once"));

        let err = parse(&["gen_color_consts", "--on-invalid", "skip", "--on-invalid", "abort"])
            .expect_err("error");
        assert!(err.contains("more than once"));
    }

    #[test]
    fn missing_value_rejected() {
        let err = parse(&["gen_color_consts", "--xkcd"]).expect_err("error");
        assert!(err.contains("Missing value for `--xkcd`"));
    }

    #[test]
    fn unknown_flag_and_positional_rejected() {
        let err = parse(&["gen_color_consts", "--wat"]).expect_err("error");
        assert!(err.contains("Unknown flag: --wat"));

        let err = parse(&["gen_color_consts", "colors.txt"]).expect_err("error");
        assert!(err.contains("positional"));
    }

    #[test]
    fn type_name_must_be_identifier() {
        let cfg = parse(&["gen_color_consts", "--type-name", "Rgb8"]).expect("parse");
        assert_eq!(cfg.type_name.as_deref(), Some("Rgb8"));

        let err = parse(&["gen_color_consts", "--type-name", "my color"]).expect_err("error");
        assert!(err.contains("--type-name"));
    }

    #[test]
    fn with_type_emits_definition() {
        let cfg = parse(&["gen_color_consts", "--with-type", "--type-name", "Rgb"]).expect("parse");
        assert!(cfg.with_type);
        assert_eq!(
            cfg.generator_options().render_options(),
            &RenderOptions::new().type_name("Rgb").with_type_definition(true)
        );

        let err = parse(&["gen_color_consts", "--with-type", "--with-type"]).expect_err("error");
        assert!(err.contains("more than once"));
    }

    #[test]
    fn on_invalid_parses() {
        let cfg = parse(&["gen_color_consts", "--on-invalid", "abort"]).expect("parse");
        assert_eq!(cfg.on_invalid, InvalidEntryPolicy::Abort);
        assert_eq!(cfg.generator_options().policy(), InvalidEntryPolicy::Abort);
        assert!(parse(&["gen_color_consts", "--on-invalid", "maybe"]).is_err());
    }

    #[test]
    fn json_conflicts_with_xkcd() {
        let err = parse(&["gen_color_consts", "--json", "t.json", "--xkcd", "rgb.txt"])
            .expect_err("error");
        assert!(err.contains("cannot be combined"));
    }

    #[test]
    fn log_level_parses_all_values() {
        let cases = [
            ("off", LogLevel::Off),
            ("none", LogLevel::Off),
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("warning", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ];
        for (raw, expected) in cases {
            assert_eq!(LogLevel::parse(raw), Ok(expected), "{raw}");
        }
        assert!(LogLevel::parse("loud").is_err());
    }

    #[test]
    fn env_fills_unset_values() {
        let cfg = parse(&["gen_color_consts"])
            .expect("parse")
            .with_env(env(&[
                (ENV_OUTPUT, "from_env.txt"),
                (ENV_XKCD, "env_rgb.txt"),
                (ENV_LOG, "debug"),
            ]))
            .expect("env");
        assert_eq!(cfg.output, Some(PathBuf::from("from_env.txt")));
        assert_eq!(cfg.xkcd, Some(PathBuf::from("env_rgb.txt")));
        assert_eq!(cfg.log_level(), LogLevel::Debug);
    }

    #[test]
    fn flags_beat_env() {
        let cfg = parse(&["gen_color_consts", "-o", "flag.txt", "--log-level", "off"])
            .expect("parse")
            .with_env(env(&[(ENV_OUTPUT, "env.txt"), (ENV_LOG, "trace")]))
            .expect("env");
        assert_eq!(cfg.output, Some(PathBuf::from("flag.txt")));
        assert_eq!(cfg.log_level(), LogLevel::Off);
    }

    #[test]
    fn env_xkcd_ignored_with_json() {
        let cfg = parse(&["gen_color_consts", "--json", "t.json"])
            .expect("parse")
            .with_env(env(&[(ENV_XKCD, "env_rgb.txt")]))
            .expect("env");
        assert_eq!(cfg.xkcd, None);
    }

    #[test]
    fn env_bad_log_level_rejected() {
        let err = parse(&["gen_color_consts"])
            .expect("parse")
            .with_env(env(&[(ENV_LOG, "loud")]))
            .expect_err("error");
        assert!(err.contains(ENV_LOG));
    }

    #[test]
    fn blank_env_values_ignored() {
        let cfg = parse(&["gen_color_consts"])
            .expect("parse")
            .with_env(env(&[(ENV_OUTPUT, "  ")]))
            .expect("env");
        assert_eq!(cfg.output, None);
    }
}
