// src/i18n.rs

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const DEFAULT_LOCALE: &str = "en";

type Table = HashMap<&'static str, &'static str>;

static LABELS: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    let en: Table = [
        ("value", "Value"),
        ("share", "Share"),
        ("kg", "Weight (kg)"),
        ("region", "Region"),
        ("state", "State"),
        ("mesoregion", "Mesoregion"),
        ("microregion", "Microregion"),
        ("municipality", "Municipality"),
        ("section", "Section"),
        ("hs_2", "HS2"),
        ("hs_4", "HS4"),
        ("hs_6", "HS6"),
        ("continent", "Continent"),
        ("country", "Country"),
    ]
    .into_iter()
    .collect();

    let pt: Table = [
        ("value", "Valor"),
        ("share", "Participação"),
        ("kg", "Peso (kg)"),
        ("region", "Região"),
        ("state", "Estado"),
        ("mesoregion", "Mesorregião"),
        ("microregion", "Microrregião"),
        ("municipality", "Município"),
        ("section", "Seção"),
        ("hs_2", "HS2"),
        ("hs_4", "HS4"),
        ("hs_6", "HS6"),
        ("continent", "Continente"),
        ("country", "País"),
    ]
    .into_iter()
    .collect();

    [("en", en), ("pt", pt)].into_iter().collect()
});

/// Display labels for one locale.
///
/// Lookups check the per-view overrides first, then the built-in table for the
/// locale, then the English table. Unknown keys come back unchanged.
#[derive(Debug, Clone)]
pub struct Dictionary {
    locale: String,
    overrides: HashMap<String, String>,
}

impl Dictionary {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into().to_lowercase(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn label(&self, key: &str) -> String {
        if let Some(text) = self.overrides.get(key) {
            return text.clone();
        }
        [self.locale.as_str(), DEFAULT_LOCALE]
            .iter()
            .find_map(|locale| LABELS.get(locale)?.get(key))
            .map(|text| text.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_per_locale() {
        assert_eq!(Dictionary::new("en").label("value"), "Value");
        assert_eq!(Dictionary::new("pt").label("value"), "Valor");
        assert_eq!(Dictionary::new("PT").label("state"), "Estado");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(Dictionary::new("de").label("share"), "Share");
    }

    #[test]
    fn test_unknown_key_passes_through() {
        assert_eq!(Dictionary::new("pt").label("bra_9"), "bra_9");
    }

    #[test]
    fn test_overrides_win() {
        let dict = Dictionary::new("en").with_overrides(
            [("value".to_string(), "Exports (USD)".to_string())]
                .into_iter()
                .collect(),
        );
        assert_eq!(dict.label("value"), "Exports (USD)");
        assert_eq!(dict.label("share"), "Share");
    }
}
