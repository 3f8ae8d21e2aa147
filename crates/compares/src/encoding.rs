//! Supported document encodings and comparer selection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::comparer::Comparer;
use crate::json::JsonComparer;
use crate::yaml::YamlComparer;

/// A serialized document encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Json,
    Yaml,
}

impl Encoding {
    /// Guess the encoding from a file extension.
    ///
    /// Returns `None` when the path has no extension or an unrecognized one.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        ext.parse().ok()
    }

    /// A comparer for this encoding.
    pub fn comparer(self) -> Box<dyn Comparer> {
        match self {
            Encoding::Json => Box::new(JsonComparer),
            Encoding::Yaml => Box::new(YamlComparer),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => f.write_str("json"),
            Encoding::Yaml => f.write_str("yaml"),
        }
    }
}

/// Returned when an encoding name is not recognized.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown encoding: {0}")]
pub struct UnknownEncoding(pub String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "yaml" | "yml" => Ok(Encoding::Yaml),
            _ => Err(UnknownEncoding(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("json".parse(), Ok(Encoding::Json));
        assert_eq!("JSON".parse(), Ok(Encoding::Json));
        assert_eq!("yaml".parse(), Ok(Encoding::Yaml));
        assert_eq!("yml".parse(), Ok(Encoding::Yaml));
        assert_eq!(
            "toml".parse::<Encoding>(),
            Err(UnknownEncoding("toml".into()))
        );
    }

    #[test]
    fn detect_from_extension() {
        assert_eq!(Encoding::from_path("a/b/config.json"), Some(Encoding::Json));
        assert_eq!(Encoding::from_path("values.yaml"), Some(Encoding::Yaml));
        assert_eq!(Encoding::from_path("values.YML"), Some(Encoding::Yaml));
        assert_eq!(Encoding::from_path("Makefile"), None);
        assert_eq!(Encoding::from_path("notes.txt"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for enc in [Encoding::Json, Encoding::Yaml] {
            assert_eq!(enc.to_string().parse(), Ok(enc));
        }
    }

    #[test]
    fn comparer_matches_encoding() {
        assert_eq!(Encoding::Json.comparer().encoding(), Encoding::Json);
        assert_eq!(Encoding::Yaml.comparer().encoding(), Encoding::Yaml);
    }
}
