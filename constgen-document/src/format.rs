//! Input document formats.

use std::{fmt, path::Path, str::FromStr};

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// Returns the format identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Json => "json",
            DocumentFormat::Toml => "toml",
        }
    }

    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            "json" => Some(DocumentFormat::Json),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(format!(
                "unknown format '{}', expected 'yaml', 'json', or 'toml'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(DocumentFormat::from_str("yaml").unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_str("yml").unwrap(), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_str("JSON").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_str("toml").unwrap(), DocumentFormat::Toml);
        assert!(DocumentFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("config.yaml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b/config.YML")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("config.json")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("Cargo.toml")),
            Some(DocumentFormat::Toml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("config.ini")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(DocumentFormat::Yaml.to_string(), "yaml");
        assert_eq!(DocumentFormat::Json.to_string(), "json");
        assert_eq!(DocumentFormat::Toml.to_string(), "toml");
    }
}
