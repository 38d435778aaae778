// src/present/depth.rs

use std::collections::BTreeMap;

use crate::error::Error;
use crate::i18n::Dictionary;

/// One entry of the depth selector: `{label: level}`.
pub type DepthOption = BTreeMap<String, String>;

/// Move `current` to the front of `depths`, keeping the others in order.
///
/// `current` must occur exactly once.
pub fn reorder<'a>(depths: &'a [String], current: &str) -> Result<Vec<&'a str>, Error> {
    let mut hits = depths.iter().filter(|d| *d == current);
    let first = hits
        .next()
        .ok_or_else(|| Error::DepthNotFound(current.to_string()))?;
    if hits.next().is_some() {
        return Err(Error::DuplicateDepth(current.to_string()));
    }

    Ok(std::iter::once(first.as_str())
        .chain(depths.iter().map(String::as_str).filter(|d| *d != current))
        .collect())
}

/// Reorder `depths` with `current` first and label every level for display.
pub fn reorder_depths(
    depths: &[String],
    current: &str,
    dictionary: &Dictionary,
) -> Result<Vec<DepthOption>, Error> {
    Ok(reorder(depths, current)?
        .into_iter()
        .map(|level| labelled(dictionary, level))
        .collect())
}

fn labelled(dictionary: &Dictionary, level: &str) -> DepthOption {
    let mut option = BTreeMap::new();
    option.insert(dictionary.label(level), level.to_string());
    option
}

/// Split a `+`-delimited depth chain, e.g. `"region+state+municipality"`.
pub fn parse_depth_chain(chain: &str) -> Vec<String> {
    chain
        .split('+')
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn option(label: &str, level: &str) -> DepthOption {
        [(label.to_string(), level.to_string())].into_iter().collect()
    }

    #[test]
    fn test_current_moves_to_front() {
        let depths = levels(&["a", "b", "c"]);
        let out = reorder_depths(&depths, "b", &Dictionary::default()).unwrap();
        assert_eq!(out, vec![option("b", "b"), option("a", "a"), option("c", "c")]);
    }

    #[test]
    fn test_labels_are_localized() {
        let depths = levels(&["region", "state", "municipality"]);
        let out = reorder_depths(&depths, "municipality", &Dictionary::new("pt")).unwrap();
        assert_eq!(
            out,
            vec![
                option("Município", "municipality"),
                option("Região", "region"),
                option("Estado", "state"),
            ]
        );
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let depths = levels(&["region", "state", "mesoregion", "microregion", "municipality"]);
        for current in &depths {
            let mut out = reorder(&depths, current).unwrap();
            assert_eq!(out[0], current.as_str());
            assert_eq!(out.len(), depths.len());
            out.sort_unstable();
            let mut expected: Vec<&str> = depths.iter().map(String::as_str).collect();
            expected.sort_unstable();
            assert_eq!(out, expected);
        }
    }

    #[test]
    fn test_current_already_first() {
        let depths = levels(&["a", "b"]);
        assert_eq!(reorder(&depths, "a").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_current_fails() {
        let depths = levels(&["a", "b"]);
        assert_eq!(
            reorder(&depths, "z"),
            Err(Error::DepthNotFound("z".to_string()))
        );
    }

    #[test]
    fn test_duplicate_current_fails() {
        let depths = levels(&["a", "b", "a"]);
        assert_eq!(
            reorder(&depths, "a"),
            Err(Error::DuplicateDepth("a".to_string()))
        );
    }

    #[test]
    fn test_parse_depth_chain() {
        assert_eq!(
            parse_depth_chain("region+state+municipality"),
            levels(&["region", "state", "municipality"])
        );
        assert_eq!(parse_depth_chain(" state + "), levels(&["state"]));
        assert!(parse_depth_chain("").is_empty());
    }
}
