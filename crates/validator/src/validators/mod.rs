//! Built-in validators
//!
//! Every validator here checks a `&str` and comes with a lower-case factory
//! function (`alpha()`, `url()`, `isbn(IsbnVersion::Any)`, ...).
//!
//! # Categories
//!
//! - **Checksums**: ISBN-10/13 and Luhn credit card numbers
//! - **Structure**: FQDN and URL, split into parts and checked part by part
//! - **Tables**: mobile phone by locale, UUID by version
//! - **Formats**: email, IP, base64, JSON, dates
//! - **Character classes**: alpha, numeric, hex, case, width, length
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::prelude::*;
//!
//! let handle = length(3, 20).and(alphanumeric()).and(lowercase());
//! assert!(handle.is_valid("sift42"));
//!
//! let host = any_of![ip(IpVersion::Any), fqdn()];
//! assert!(host.is_valid("10.0.0.1"));
//! assert!(host.is_valid("example.org"));
//! ```

// Checksums
pub mod checksum;
pub mod credit_card;
pub mod isbn;

// Structure
pub mod fqdn;
pub mod url;

// Tables
pub mod phone;
pub mod uuid;

// Formats
pub mod base64;
pub mod date;
pub mod email;
pub mod ip;
pub mod json;

// Character classes
pub mod content;
pub mod length;
pub mod number;
pub mod pattern;
pub mod width;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use base64::{Base64, base64};
pub use content::{Contains, Equals, IsIn, IsNull, Matches, contains, equals, is_in, is_null, matches};
pub use credit_card::{CreditCard, credit_card};
pub use date::{After, Before, Date, after, before, date};
pub use email::{Email, email};
pub use fqdn::{Fqdn, FqdnOptions, fqdn};
pub use ip::{Ip, IpVersion, ip};
pub use isbn::{Isbn, Isbn10, Isbn13, IsbnVersion, isbn};
pub use json::{Json, json};
pub use length::{ByteLength, Length, byte_length, length};
pub use number::{DivisibleBy, Float, Int, divisible_by, float, int};
pub use pattern::{
    Alpha, Alphanumeric, Ascii, HexColor, Hexadecimal, Lowercase, MongoId, Numeric, Uppercase,
    alpha, alphanumeric, ascii, hex_color, hexadecimal, lowercase, mongo_id, numeric, uppercase,
};
pub use phone::{MobilePhone, mobile_phone, supported_locales};
pub use url::{MAX_URL_CHARS, Url, UrlOptions, url};
pub use uuid::{Uuid, UuidVersion, uuid};
pub use width::{
    FullWidth, HalfWidth, MultiByte, SurrogatePair, VariableWidth, full_width, half_width,
    multibyte, surrogate_pair, variable_width,
};
