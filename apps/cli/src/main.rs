//! # sift CLI
//!
//! Runs one validator over one input and reports the verdict.
//!
//! Exit codes: `0` valid, `1` invalid, `2` usage, configuration or selector
//! error.

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sift_validator::prelude::*;
use sift_validator::validators::date::parse_date;
use tracing_subscriber::EnvFilter;

use crate::config::SiftConfig;
use crate::report::Report;

/// String validation from the command line.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about, long_about = None)]
struct Cli {
    /// Verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to ./sift.toml when present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the verdict as a JSON object.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// URL with optional scheme, credentials, port, path, query and fragment.
    Url(UrlArgs),

    /// Fully qualified domain name.
    Fqdn(FqdnArgs),

    /// ISBN-10 or ISBN-13; hyphens and spaces are ignored.
    Isbn {
        input: String,
        /// any, 10 or 13.
        #[arg(long, default_value = "any")]
        version: String,
    },

    /// UUID of a given version.
    Uuid {
        input: String,
        /// any, 3, 4 or 5.
        #[arg(long, default_value = "any")]
        version: String,
    },

    /// Mobile phone number for a locale such as en-US or zh-CN.
    Phone {
        input: String,
        #[arg(long)]
        locale: String,
    },

    /// Card number passing the Luhn checksum.
    CreditCard { input: String },

    /// IPv4 or IPv6 address.
    Ip {
        input: String,
        /// any, 4 or 6.
        #[arg(long, default_value = "any")]
        version: String,
    },

    /// Email address.
    Email { input: String },

    /// JSON document (an object unless --allow-primitives).
    Json {
        input: String,
        #[arg(long)]
        allow_primitives: bool,
    },

    /// Date or date-time, optionally bounded.
    Date {
        input: String,
        /// Must be strictly after this date.
        #[arg(long, value_name = "DATE")]
        after: Option<String>,
        /// Must be strictly before this date.
        #[arg(long, value_name = "DATE")]
        before: Option<String>,
    },

    /// Base64 text (line breaks ignored).
    Base64 { input: String },

    /// One of the character-class predicates.
    Check { predicate: Predicate, input: String },

    /// List the locales known to `phone`.
    Locales,
}

#[derive(Args, Debug)]
struct UrlArgs {
    input: String,

    /// Accepted scheme; repeat to accept several. Replaces the configured list.
    #[arg(long = "protocol", value_name = "SCHEME")]
    protocols: Vec<String>,

    #[arg(long)]
    require_protocol: bool,

    #[arg(long)]
    allow_underscores: bool,

    #[arg(long)]
    allow_trailing_dot: bool,

    /// Only accept this host; repeatable.
    #[arg(long = "allow-host", value_name = "HOST")]
    allow_hosts: Vec<String>,

    /// Reject this host; repeatable.
    #[arg(long = "deny-host", value_name = "HOST")]
    deny_hosts: Vec<String>,
}

impl UrlArgs {
    fn apply(&self, mut options: UrlOptions) -> UrlOptions {
        if !self.protocols.is_empty() {
            options.protocols.clone_from(&self.protocols);
        }
        options.require_protocol |= self.require_protocol;
        options.allow_underscores |= self.allow_underscores;
        options.allow_trailing_dot |= self.allow_trailing_dot;
        if !self.allow_hosts.is_empty() {
            options.host_whitelist = Some(self.allow_hosts.clone());
        }
        if !self.deny_hosts.is_empty() {
            options.host_blacklist = Some(self.deny_hosts.clone());
        }
        options
    }
}

#[derive(Args, Debug)]
struct FqdnArgs {
    input: String,

    /// Accept names without a top-level label (`localhost`).
    #[arg(long)]
    no_require_tld: bool,

    #[arg(long)]
    allow_underscores: bool,

    #[arg(long)]
    allow_trailing_dot: bool,
}

impl FqdnArgs {
    fn apply(&self, mut options: FqdnOptions) -> FqdnOptions {
        options.require_tld &= !self.no_require_tld;
        options.allow_underscores |= self.allow_underscores;
        options.allow_trailing_dot |= self.allow_trailing_dot;
        options
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Predicate {
    Alpha,
    Numeric,
    Alphanumeric,
    Hexadecimal,
    HexColor,
    MongoId,
    Lowercase,
    Uppercase,
    Ascii,
    Multibyte,
    FullWidth,
    HalfWidth,
    VariableWidth,
    SurrogatePair,
    Int,
    Float,
    Null,
}

impl Predicate {
    fn validate(self, input: &str) -> Result<(), ValidationError> {
        match self {
            Self::Alpha => alpha().validate(input),
            Self::Numeric => numeric().validate(input),
            Self::Alphanumeric => alphanumeric().validate(input),
            Self::Hexadecimal => hexadecimal().validate(input),
            Self::HexColor => hex_color().validate(input),
            Self::MongoId => mongo_id().validate(input),
            Self::Lowercase => lowercase().validate(input),
            Self::Uppercase => uppercase().validate(input),
            Self::Ascii => ascii().validate(input),
            Self::Multibyte => multibyte().validate(input),
            Self::FullWidth => full_width().validate(input),
            Self::HalfWidth => half_width().validate(input),
            Self::VariableWidth => variable_width().validate(input),
            Self::SurrogatePair => surrogate_pair().validate(input),
            Self::Int => int().validate(input),
            Self::Float => float().validate(input),
            Self::Null => is_null().validate(input),
        }
    }

    fn name(self) -> String {
        self.to_possible_value()
            .map_or_else(|| format!("{self:?}"), |v| v.get_name().to_owned())
    }
}

fn reference_date(value: Option<&str>, flag: &str) -> anyhow::Result<Option<NaiveDateTime>> {
    value
        .map(|text| {
            parse_date(text).with_context(|| format!("--{flag}: cannot parse date `{text}`"))
        })
        .transpose()
}

/// Runs the selected check. `Ok(None)` means the command printed its own
/// output and has no verdict.
fn run(cli: &Cli) -> anyhow::Result<Option<Report>> {
    let config = SiftConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "effective configuration");

    let (check, input, result): (String, &str, Result<(), ValidationError>) = match &cli.command {
        Command::Url(args) => {
            let v = Url::with_options(args.apply(config.url));
            ("url".into(), args.input.as_str(), v.validate(&args.input))
        }
        Command::Fqdn(args) => {
            let v = Fqdn::with_options(args.apply(config.fqdn));
            ("fqdn".into(), args.input.as_str(), v.validate(&args.input))
        }
        Command::Isbn { input, version } => {
            let version = IsbnVersion::try_from(version.as_str())?;
            ("isbn".into(), input.as_str(), isbn(version).validate(input))
        }
        Command::Uuid { input, version } => {
            let version = UuidVersion::try_from(version.as_str())?;
            ("uuid".into(), input.as_str(), uuid(version).validate(input))
        }
        Command::Phone { input, locale } => {
            ("phone".into(), input.as_str(), mobile_phone(locale.as_str()).validate(input))
        }
        Command::CreditCard { input } => {
            ("credit-card".into(), input.as_str(), credit_card().validate(input))
        }
        Command::Ip { input, version } => {
            let version = IpVersion::try_from(version.as_str())?;
            ("ip".into(), input.as_str(), ip(version).validate(input))
        }
        Command::Email { input } => ("email".into(), input.as_str(), email().validate(input)),
        Command::Json { input, allow_primitives } => {
            let v = if *allow_primitives { json().allow_primitives() } else { json() };
            ("json".into(), input.as_str(), v.validate(input))
        }
        Command::Date { input, after: after_ref, before: before_ref } => {
            let after_ref = reference_date(after_ref.as_deref(), "after")?;
            let before_ref = reference_date(before_ref.as_deref(), "before")?;
            let result = date()
                .validate(input)
                .and_then(|()| after_ref.map_or(Ok(()), |r| after(r).validate(input)))
                .and_then(|()| before_ref.map_or(Ok(()), |r| before(r).validate(input)));
            ("date".into(), input.as_str(), result)
        }
        Command::Base64 { input } => ("base64".into(), input.as_str(), base64().validate(input)),
        Command::Check { predicate, input } => {
            (predicate.name(), input.as_str(), predicate.validate(input))
        }
        Command::Locales => {
            for locale in supported_locales() {
                println!("{locale}");
            }
            return Ok(None);
        }
    };

    Ok(Some(Report::new(check, input, &result)))
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let report = match run(&cli) {
        Ok(Some(report)) => report,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sift: {e:#}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match report.to_json() {
            Ok(line) => println!("{line}"),
            Err(e) => {
                eprintln!("sift: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        println!("{report}");
    }

    report.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_isbn_with_version() {
        let cli = Cli::try_parse_from(["sift", "isbn", "0596004427", "--version", "10"]).unwrap();
        match cli.command {
            Command::Isbn { input, version } => {
                assert_eq!(input, "0596004427");
                assert_eq!(version, "10");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["sift", "email", "a@b.com", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_check_predicate() {
        let cli = Cli::try_parse_from(["sift", "check", "hex-color", "#fff"]).unwrap();
        match cli.command {
            Command::Check { predicate, .. } => {
                assert_eq!(predicate, Predicate::HexColor);
                assert_eq!(predicate.name(), "hex-color");
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["sift", "check", "nope", "x"]).is_err());
    }

    #[test]
    fn url_flags_override_config() {
        let args = UrlArgs {
            input: String::new(),
            protocols: vec!["gopher".into()],
            require_protocol: true,
            allow_underscores: false,
            allow_trailing_dot: false,
            allow_hosts: Vec::new(),
            deny_hosts: vec!["evil.com".into()],
        };
        let options = args.apply(UrlOptions::default());
        assert_eq!(options.protocols, ["gopher"]);
        assert!(options.require_protocol);
        assert_eq!(options.host_whitelist, None);
        assert_eq!(options.host_blacklist, Some(vec!["evil.com".to_owned()]));
    }

    #[test]
    fn fqdn_flags_override_config() {
        let args = FqdnArgs {
            input: String::new(),
            no_require_tld: true,
            allow_underscores: true,
            allow_trailing_dot: false,
        };
        let options = args.apply(FqdnOptions::default());
        assert!(!options.require_tld);
        assert!(options.allow_underscores);
        assert!(!options.allow_trailing_dot);
    }

    #[test]
    fn predicates_validate() {
        assert!(Predicate::Int.validate("-42").is_ok());
        assert!(Predicate::Null.validate("").is_ok());
        assert!(Predicate::Uppercase.validate("abc").is_err());
    }
}
