use super::error::Error;
use log::LevelFilter;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: smbios-dump [OPTIONS]

Options:
  -d, --from-dump FILE  Read the table from a dump file instead of firmware
  -t, --type N          Only show structures of type N (repeatable)
  -H, --hex             Hex dump structures of unrecognized type
  -v, --verbose         Log more (repeatable)
  -q, --quiet           Log errors only
  -h, --help            Print this help
";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub from_dump: Option<PathBuf>,
    pub types: Vec<u8>,
    pub hex: bool,
    pub verbose: u8,
    pub quiet: bool,
    pub help: bool,
}

impl Config {
    /// Parses command line arguments, excluding the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, Error> {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-d" | "--from-dump" => {
                    let path = value(&arg, args.next())?;
                    config.from_dump = Some(PathBuf::from(path));
                }
                "-t" | "--type" => {
                    let ty = value(&arg, args.next())?;
                    config.types.push(parse_type(&ty)?);
                }
                "-H" | "--hex" => config.hex = true,
                "-q" | "--quiet" => config.quiet = true,
                "-h" | "--help" => config.help = true,
                "-v" | "--verbose" => config.verbose = config.verbose.saturating_add(1),
                _ if is_verbose_cluster(&arg) => {
                    let count = (arg.len() - 1) as u8;
                    config.verbose = config.verbose.saturating_add(count);
                }
                _ => return Err(Error::Usage(format!("unknown option '{}'", arg))),
            }
        }

        Ok(config)
    }

    pub fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }

        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn value(option: &str, value: Option<String>) -> Result<String, Error> {
    value.ok_or_else(|| Error::Usage(format!("option '{}' requires a value", option)))
}

fn is_verbose_cluster(arg: &str) -> bool {
    arg.len() > 2 && arg.starts_with('-') && arg[1..].bytes().all(|c| c == b'v')
}

fn parse_type(value: &str) -> Result<u8, Error> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|_| Error::Usage(format!("invalid structure type '{}'", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, Error> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.level(), LevelFilter::Warn);
    }

    #[test]
    fn all_options() {
        let config = parse(&[
            "--from-dump",
            "table.bin",
            "-t",
            "17",
            "--type",
            "0x7F",
            "-H",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.from_dump, Some(PathBuf::from("table.bin")));
        assert_eq!(config.types, vec![17, 127]);
        assert!(config.hex);
        assert_eq!(config.level(), LevelFilter::Info);
        assert!(!config.help);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(parse(&["-vv"]).unwrap().level(), LevelFilter::Debug);
        assert_eq!(parse(&["-v", "-v", "-v"]).unwrap().level(), LevelFilter::Trace);
        assert_eq!(parse(&["-vvvvv"]).unwrap().level(), LevelFilter::Trace);
        assert_eq!(parse(&["-vv", "-q"]).unwrap().level(), LevelFilter::Error);
    }

    #[test]
    fn help() {
        assert!(parse(&["-h"]).unwrap().help);
        assert!(parse(&["--help"]).unwrap().help);
    }

    #[test]
    fn missing_value() {
        assert!(matches!(parse(&["-d"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-H", "--type"]), Err(Error::Usage(_))));
    }

    #[test]
    fn bad_type() {
        assert!(matches!(parse(&["-t", "256"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-t", "0xZZ"]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["-t", "-1"]), Err(Error::Usage(_))));
    }

    #[test]
    fn unknown_option() {
        match parse(&["--bogus"]) {
            Err(Error::Usage(reason)) => assert!(reason.contains("--bogus")),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(matches!(parse(&["-vx"]), Err(Error::Usage(_))));
    }
}
