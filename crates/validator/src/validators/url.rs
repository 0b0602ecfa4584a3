//! URL validator.
//!
//! The URL is checked by an ordered list of stages. Each stage looks at what
//! the previous one left over, decides whether its own part is valid and
//! hands the rest on:
//!
//! | stage    | splits on        | keeps for the next stage |
//! |----------|------------------|--------------------------|
//! | protocol | first `://`      | after                    |
//! | fragment | first `#`        | before                   |
//! | query    | first `?`        | before                   |
//! | path     | first `/`        | before                   |
//! | auth     | last `@`         | after                    |
//! | host     | port `:` or `]:` | nothing                  |
//!
//! The first failing stage rejects the URL. The auth stage always cuts at the
//! *last* `@`, so a password containing `@` still leaves a clean host.

use serde::{Deserialize, Serialize};

use crate::foundation::{Validate, ValidationError};
use crate::validators::fqdn::{Fqdn, FqdnOptions};
use crate::validators::ip::{IpVersion, ip};
use crate::validators::pattern::is_ascii_digits;

/// Inputs of this many UTF-16 code units or more are rejected outright, so a
/// char outside the Basic Multilingual Plane counts twice.
pub const MAX_URL_CHARS: usize = 2083;

// ============================================================================
// OPTIONS
// ============================================================================

/// Switches for [`Url`].
///
/// Host lists are compared against the bare host (no port, no brackets) by
/// exact string equality. Both lists are enforced when both are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlOptions {
    /// Accepted schemes, compared case-sensitively. Default `http`, `https`, `ftp`.
    pub protocols: Vec<String>,
    /// The host must carry a top-level label unless it is an IP or `localhost`.
    pub require_tld: bool,
    /// Reject URLs with no `scheme://` prefix.
    pub require_protocol: bool,
    /// Passed through to the host's [`Fqdn`] check.
    pub allow_underscores: bool,
    /// Passed through to the host's [`Fqdn`] check.
    pub allow_trailing_dot: bool,
    /// When set, only these hosts pass.
    pub host_whitelist: Option<Vec<String>>,
    /// When set, these hosts are rejected.
    pub host_blacklist: Option<Vec<String>>,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            protocols: vec!["http".into(), "https".into(), "ftp".into()],
            require_tld: true,
            require_protocol: false,
            allow_underscores: false,
            allow_trailing_dot: false,
            host_whitelist: None,
            host_blacklist: None,
        }
    }
}

impl UrlOptions {
    fn fqdn(&self) -> Fqdn {
        Fqdn::with_options(FqdnOptions {
            require_tld: self.require_tld,
            allow_underscores: self.allow_underscores,
            allow_trailing_dot: self.allow_trailing_dot,
        })
    }
}

// ============================================================================
// STAGES
// ============================================================================

/// Verdict of one stage plus the part of the input left for the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    is_valid: bool,
    remainder: &'a str,
}

impl<'a> Segment<'a> {
    const fn new(is_valid: bool, remainder: &'a str) -> Self {
        Self {
            is_valid,
            remainder,
        }
    }
}

type Stage = for<'a> fn(&UrlOptions, &'a str) -> Segment<'a>;

const STAGES: &[(&str, Stage)] = &[
    ("protocol", protocol_stage),
    ("fragment", fragment_stage),
    ("query", query_stage),
    ("path", path_stage),
    ("auth", auth_stage),
    ("host", host_stage),
];

fn protocol_stage<'a>(options: &UrlOptions, input: &'a str) -> Segment<'a> {
    match input.split_once("://") {
        Some((protocol, rest)) => {
            Segment::new(options.protocols.iter().any(|p| p == protocol), rest)
        }
        None => Segment::new(!options.require_protocol, input),
    }
}

fn fragment_stage<'a>(_: &UrlOptions, input: &'a str) -> Segment<'a> {
    match input.split_once('#') {
        Some((rest, fragment)) => Segment::new(!fragment.is_empty(), rest),
        None => Segment::new(true, input),
    }
}

fn query_stage<'a>(_: &UrlOptions, input: &'a str) -> Segment<'a> {
    match input.split_once('?') {
        Some((rest, query)) => Segment::new(!query.is_empty(), rest),
        None => Segment::new(true, input),
    }
}

fn path_stage<'a>(_: &UrlOptions, input: &'a str) -> Segment<'a> {
    match input.split_once('/') {
        Some((rest, path)) => Segment::new(!path.contains(' '), rest),
        None => Segment::new(true, input),
    }
}

fn auth_stage<'a>(_: &UrlOptions, input: &'a str) -> Segment<'a> {
    let Some((auth, host)) = input.rsplit_once('@') else {
        return Segment::new(true, input);
    };

    let is_valid = auth
        .split_once(':')
        .is_none_or(|(user, pass)| !user.is_empty() && !pass.is_empty());
    Segment::new(is_valid, host)
}

/// Splits `host[:port]` or `[v6][:port]` into the bare host, the port text
/// and whether the host was bracketed. `None` for a malformed bracket.
fn split_host_port(input: &str) -> Option<(&str, Option<&str>, bool)> {
    if let Some(rest) = input.strip_prefix('[') {
        let (host, after) = rest.split_once(']')?;
        return match after {
            "" => Some((host, None, true)),
            _ => after.strip_prefix(':').map(|port| (host, Some(port), true)),
        };
    }

    Some(match input.split_once(':') {
        Some((host, port)) => (host, Some(port), false),
        None => (input, None, false),
    })
}

fn is_valid_port(port: &str) -> bool {
    is_ascii_digits(port) && port.parse::<u32>().is_ok_and(|p| (1..=65_535).contains(&p))
}

fn host_stage<'a>(options: &UrlOptions, input: &'a str) -> Segment<'a> {
    let Some((host, port, bracketed)) = split_host_port(input) else {
        return Segment::new(false, "");
    };

    if host.is_empty() || port.is_some_and(|p| !is_valid_port(p)) {
        return Segment::new(false, "");
    }

    let host_ok = if bracketed {
        ip(IpVersion::Six).is_valid(host)
    } else {
        ip(IpVersion::Four).is_valid(host)
            || options.fqdn().is_valid(host)
            || host.eq_ignore_ascii_case("localhost")
    };

    let listed = |list: Option<&[String]>| list.map(|hosts| hosts.iter().any(|h| h == host));
    let allowed = listed(options.host_whitelist.as_deref()).unwrap_or(true);
    let blocked = listed(options.host_blacklist.as_deref()).unwrap_or(false);

    Segment::new(host_ok && allowed && !blocked, "")
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

/// Validates a URL under [`UrlOptions`].
///
/// # Examples
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{url, Url, UrlOptions};
///
/// assert!(url().is_valid("http://www.foobar.com:8080/path?q=1#frag"));
/// assert!(url().is_valid("foobar.com"));
/// assert!(!url().is_valid("mailto:someone@example.com"));
///
/// let strict = Url::with_options(UrlOptions {
///     require_protocol: true,
///     ..UrlOptions::default()
/// });
/// assert!(!strict.is_valid("foobar.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Url {
    options: UrlOptions,
}

impl Url {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: UrlOptions) -> Self {
        Self { options }
    }

    /// Replaces the accepted schemes.
    #[must_use = "builder methods must be chained or built"]
    pub fn protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.protocols = protocols.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn require_protocol(mut self, yes: bool) -> Self {
        self.options.require_protocol = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn require_tld(mut self, yes: bool) -> Self {
        self.options.require_tld = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_underscores(mut self, yes: bool) -> Self {
        self.options.allow_underscores = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_trailing_dot(mut self, yes: bool) -> Self {
        self.options.allow_trailing_dot = yes;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn host_whitelist<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.host_whitelist = Some(hosts.into_iter().map(Into::into).collect());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn host_blacklist<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.host_blacklist = Some(hosts.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub const fn options(&self) -> &UrlOptions {
        &self.options
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.trim().is_empty() {
            return Err(ValidationError::new("empty_url", "URL cannot be empty"));
        }

        let chars = input.encode_utf16().count();
        if chars >= MAX_URL_CHARS {
            return Err(ValidationError::new(
                "url_too_long",
                format!("URL must be shorter than {MAX_URL_CHARS} characters"),
            )
            .with_param("actual", chars.to_string()));
        }

        if input.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("mailto:")) {
            return Err(ValidationError::new("mailto_url", "mailto: addresses are not URLs"));
        }

        let mut remainder = input;
        for (name, stage) in STAGES {
            let segment = stage(&self.options, remainder);
            if !segment.is_valid {
                tracing::trace!(stage = *name, remainder, "url stage rejected input");
                return Err(ValidationError::new("invalid_url", format!("URL {name} is invalid"))
                    .with_param("stage", *name));
            }
            remainder = segment.remainder;
        }

        Ok(())
    }
}

/// Creates a [`Url`] validator with default options.
#[must_use]
pub fn url() -> Url {
    Url::new()
}

// ============================================================================
// TESTS
// ============================================================================
