use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shape of a rendered summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured value (the default for unrecognized names).
    #[default]
    Array,
    /// Serialized JSON text.
    Json,
}

impl OutputFormat {
    /// Resolve a format name case-insensitively; unknown names fall back to
    /// [`OutputFormat::Array`].
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Array
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Array => "array",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("Array"), OutputFormat::Array);
        assert_eq!("aRrAy".parse::<OutputFormat>(), Ok(OutputFormat::Array));
    }

    #[test]
    fn unknown_format_defaults_to_array() {
        assert_eq!(OutputFormat::from_name("xml"), OutputFormat::Array);
        assert_eq!(OutputFormat::from_name(""), OutputFormat::Array);
    }
}
