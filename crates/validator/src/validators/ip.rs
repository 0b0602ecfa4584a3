//! IP address validator.
//!
//! Parsing is done by `std::net`, which rejects octets with leading zeros
//! and IPv6 zone suffixes (`fe80::1%eth0`).

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::foundation::{SelectorError, Validate, ValidationError};

/// Which address family to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IpVersion {
    Four,
    Six,
    #[default]
    Any,
}

impl TryFrom<u8> for IpVersion {
    type Error = SelectorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            6 => Ok(Self::Six),
            other => Err(SelectorError::unsupported("is_ip", other)),
        }
    }
}

impl FromStr for IpVersion {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.strip_prefix('v').unwrap_or(&normalized) {
            "any" => Ok(Self::Any),
            "4" => Ok(Self::Four),
            "6" => Ok(Self::Six),
            _ => Err(SelectorError::unsupported("is_ip", s)),
        }
    }
}

impl TryFrom<&str> for IpVersion {
    type Error = SelectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Four => "4",
            Self::Six => "6",
            Self::Any => "any",
        })
    }
}

/// An IP address of the selected family.
///
/// ```
/// use sift_validator::foundation::Validate;
/// use sift_validator::validators::{ip, IpVersion};
///
/// assert!(ip(IpVersion::Any).is_valid("::1"));
/// assert!(ip(IpVersion::Four).is_valid("127.0.0.1"));
/// assert!(!ip(IpVersion::Four).is_valid("::1"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ip {
    version: IpVersion,
}

impl Ip {
    #[must_use]
    pub const fn new(version: IpVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub const fn version(&self) -> IpVersion {
        self.version
    }
}

impl Validate for Ip {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let parsed = match self.version {
            IpVersion::Four => Ipv4Addr::from_str(input).is_ok(),
            IpVersion::Six => Ipv6Addr::from_str(input).is_ok(),
            IpVersion::Any => IpAddr::from_str(input).is_ok(),
        };

        if parsed {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("IP address")
                .with_param("version", self.version.to_string()))
        }
    }
}

#[must_use]
pub const fn ip(version: IpVersion) -> Ip {
    Ip::new(version)
}
