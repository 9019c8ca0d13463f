use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Path prefix under which short codes are served.
pub const SHORT_PATH_PREFIX: &str = "/ln/";

const MIN_LENGTH: usize = 1;
const MAX_LENGTH: usize = 4;

/// A validated, lowercase hexadecimal short code.
///
/// Codes handed out by the allocator are always four digits wide
/// (`0000`..=`ffff`). Parsing accepts one to four digits in either case and
/// stores them lowercased, without padding: `4ac` and `04ac` are different
/// codes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a four digit, zero-padded code from a 16-bit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_core::ShortCode;
    ///
    /// assert_eq!(ShortCode::from_u16(0x04ac).as_str(), "04ac");
    /// ```
    pub fn from_u16(value: u16) -> Self {
        Self(format!("{:04x}", value))
    }

    /// Creates a new `ShortCode` after validating the input.
    ///
    /// Valid codes are 1-4 characters of `[0-9a-fA-F]`.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let mut code = code.into();
        Self::validate(&code)?;
        code.make_ascii_lowercase();
        Ok(Self(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The request path this code is served under, e.g. `/ln/a1b2`.
    pub fn to_path(&self) -> String {
        format!("{}{}", SHORT_PATH_PREFIX, self.0)
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        if code.len() < MIN_LENGTH || code.len() > MAX_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH,
                MAX_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only hexadecimal digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl FromStr for ShortCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ShortCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

impl From<u16> for ShortCode {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
