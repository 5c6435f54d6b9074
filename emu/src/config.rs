use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

use crate::error::Error;

/// Emulator settings. Read from a YAML file, then overridden by flags.
///
/// ```yaml
/// tmax: 100
/// format: yaml
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Stop after this many executed instructions.
    pub tmax: Option<u64>,
    pub format: Format,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Boxed table per step
    #[default]
    Table,
    /// YAML document with every step
    Yaml,
    /// Halt report only
    Quiet,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Config(path.to_string(), e))
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text).map_err(|e| Error::Config(format!("<inline>"), e))
    }

    /// Apply command line overrides.
    pub fn merge(mut self, tmax: Option<u64>, format: Option<Format>) -> Self {
        if tmax.is_some() {
            self.tmax = tmax;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }

    pub fn validate(self) -> Result<Self, Error> {
        match self.tmax {
            Some(0) => Err(Error::ZeroLimit),
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_yaml() {
        let cfg = Config::parse("tmax: 20\nformat: quiet\n").unwrap();
        assert_eq!(cfg.tmax, Some(20));
        assert_eq!(cfg.format, Format::Quiet);
    }

    #[test]
    fn defaults() {
        let cfg = Config::parse("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.format, Format::Table);
    }

    #[test]
    fn zero_limit() {
        let cfg = Config::parse("tmax: 0").unwrap();
        assert!(matches!(cfg.validate(), Err(Error::ZeroLimit)));
    }

    #[test]
    fn reject_unknown_key() {
        assert!(Config::parse("speed: 3").is_err());
    }

    #[test]
    fn flags_override_file() {
        let cfg = Config::parse("tmax: 20\nformat: yaml").unwrap();
        let cfg = cfg.merge(Some(5), None);
        assert_eq!(cfg.tmax, Some(5));
        assert_eq!(cfg.format, Format::Yaml);
    }
}
