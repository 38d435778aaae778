// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};
use url::Url;

use crate::error::Error;
use crate::i18n::{Dictionary, DEFAULT_LOCALE};
use crate::present::depth::parse_depth_chain;

/// Everything one tree map needs to know about the page it is drawn on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Level drawn as the leaf rectangles, e.g. `municipality`.
    pub squares: String,
    /// Level used to colour and group the rectangles, e.g. `section`.
    pub group: String,
    /// `+`-delimited levels the user can drill through.
    pub depths: String,
    pub dataset: String,
    /// Pre-encoded query string appended to the dataset request.
    pub filters: String,
    pub locale: String,
    pub api_base: String,
    pub icon_base: String,
    /// Selector of the element the renderer draws into.
    pub container: String,
    /// Label overrides for the current locale.
    pub labels: HashMap<String, String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            squares: String::new(),
            group: String::new(),
            depths: String::new(),
            dataset: String::new(),
            filters: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
            api_base: "http://localhost:5000/".to_string(),
            icon_base: "/static/img/icons".to_string(),
            container: "#treemap".to_string(),
            labels: HashMap::new(),
        }
    }
}

impl ViewConfig {
    /// Read a view from a YAML file. Missing keys take their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing {:?}", path))
    }

    pub fn depth_chain(&self) -> Vec<String> {
        parse_depth_chain(&self.depths)
    }

    pub fn dictionary(&self) -> Dictionary {
        Dictionary::new(&self.locale).with_overrides(self.labels.clone())
    }

    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("squares", &self.squares),
            ("group", &self.group),
            ("dataset", &self.dataset),
            ("locale", &self.locale),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("`{}` must not be empty", name)));
            }
        }

        let depths = self.depth_chain();
        if depths.is_empty() {
            return Err(Error::InvalidConfig("`depths` must name at least one level".into()));
        }
        match depths.iter().filter(|d| **d == self.squares).count() {
            0 => return Err(Error::DepthNotFound(self.squares.clone())),
            1 => {}
            _ => return Err(Error::DuplicateDepth(self.squares.clone())),
        }

        Url::parse(&self.api_base)
            .map_err(|e| Error::InvalidConfig(format!("`api_base` {}: {}", self.api_base, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn view() -> ViewConfig {
        ViewConfig {
            squares: "state".to_string(),
            group: "section".to_string(),
            depths: "region+state".to_string(),
            dataset: "secex".to_string(),
            ..ViewConfig::default()
        }
    }

    #[test]
    fn test_from_yaml_file_fills_defaults() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(
            tmp,
            "squares: municipality\ngroup: section\ndepths: region+state+municipality\ndataset: secex\nfilters: year=2012\nlocale: pt\nlabels:\n  value: Exportações"
        )?;

        let cfg = ViewConfig::from_yaml_file(tmp.path())?;
        assert_eq!(cfg.squares, "municipality");
        assert_eq!(cfg.depth_chain(), vec!["region", "state", "municipality"]);
        assert_eq!(cfg.container, "#treemap");
        assert_eq!(cfg.icon_base, "/static/img/icons");
        assert_eq!(cfg.dictionary().label("value"), "Exportações");
        assert_eq!(cfg.dictionary().label("share"), "Participação");
        cfg.validate()?;
        Ok(())
    }

    #[test]
    fn test_validate_accepts_complete_view() {
        assert_eq!(view().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let cfg = ViewConfig {
            dataset: " ".to_string(),
            ..view()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));

        let cfg = ViewConfig {
            depths: "+".to_string(),
            ..view()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_requires_squares_in_depths_once() {
        let cfg = ViewConfig {
            squares: "municipality".to_string(),
            ..view()
        };
        assert_eq!(
            cfg.validate(),
            Err(Error::DepthNotFound("municipality".to_string()))
        );

        let cfg = ViewConfig {
            depths: "state+region+state".to_string(),
            ..view()
        };
        assert_eq!(cfg.validate(), Err(Error::DuplicateDepth("state".to_string())));
    }

    #[test]
    fn test_validate_rejects_bad_api_base() {
        let cfg = ViewConfig {
            api_base: "localhost".to_string(),
            ..view()
        };
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
    }
}
