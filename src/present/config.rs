// src/present/config.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::depth::{reorder_depths, DepthOption};
use crate::enrich::ICON_FIELD;
use crate::error::Error;
use crate::i18n::Dictionary;
use crate::model::EnrichedRecord;

/// Field used to size the rectangles.
pub const SIZE_FIELD: &str = "value";
/// Alternative size metric offered by the size switcher.
pub const WEIGHT_FIELD: &str = "kg";
/// Field names whose text is replaced by a localized label.
pub const LABELLED_FIELDS: [&str; 2] = ["value", "share"];

/// Declarative description of a tree map, handed to the external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Selector of the element the renderer draws into.
    pub container: String,
    pub data: Vec<EnrichedRecord>,
    /// Identifying levels, coarsest first.
    pub id: Vec<String>,
    pub size: String,
    /// Initial nesting depth: index of the deepest level in `id`.
    pub depth: usize,
    pub color: String,
    pub labels: LabelAlign,
    pub ui: Vec<UiControl>,
    pub format: TextFormat,
    pub icon: IconRule,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAlign {
    pub align: String,
    pub valign: String,
}

/// A switcher shown next to the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiControl {
    /// Renderer method the control drives, e.g. `"size"` or `"depth"`.
    pub method: String,
    pub value: Vec<UiOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UiOption {
    Field(String),
    Labelled(DepthOption),
}

/// Text substitution rule: only the listed field names are replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFormat {
    pub text: BTreeMap<String, String>,
}

impl TextFormat {
    pub fn new(dictionary: &Dictionary) -> Self {
        Self {
            text: LABELLED_FIELDS
                .iter()
                .map(|field| (field.to_string(), dictionary.label(field)))
                .collect(),
        }
    }

    pub fn format(&self, text: &str) -> String {
        self.text
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRule {
    pub value: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    pub order: LegendOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendOrder {
    pub sort: String,
    pub value: String,
}

/// Assemble the renderer configuration for `records`.
///
/// `depths` must contain `squares_column` exactly once; the depth switcher
/// lists it first and defaults to its position in `depths`.
pub fn build_render_config(
    records: Vec<EnrichedRecord>,
    depths: &[String],
    group_column: &str,
    squares_column: &str,
    dictionary: &Dictionary,
    container: &str,
) -> Result<RenderConfig, Error> {
    let depth_options = reorder_depths(depths, squares_column, dictionary)?;
    let squares_index = depths
        .iter()
        .position(|d| d == squares_column)
        .ok_or_else(|| Error::DepthNotFound(squares_column.to_string()))?;

    let ui = vec![
        UiControl {
            method: "size".to_string(),
            value: vec![
                UiOption::Field(SIZE_FIELD.to_string()),
                UiOption::Field(WEIGHT_FIELD.to_string()),
            ],
            default: None,
        },
        UiControl {
            method: "depth".to_string(),
            value: depth_options.into_iter().map(UiOption::Labelled).collect(),
            default: Some(squares_index),
        },
    ];

    debug!(
        records = records.len(),
        depths = depths.len(),
        squares_index,
        "built render config"
    );

    Ok(RenderConfig {
        container: container.to_string(),
        data: records,
        id: depths.to_vec(),
        size: SIZE_FIELD.to_string(),
        depth: depths.len() - 1,
        color: group_column.to_string(),
        labels: LabelAlign {
            align: "left".to_string(),
            valign: "top".to_string(),
        },
        ui,
        format: TextFormat::new(dictionary),
        icon: IconRule {
            value: ICON_FIELD.to_string(),
            style: "knockout".to_string(),
        },
        legend: Legend {
            order: LegendOrder {
                sort: "desc".to_string(),
                value: "size".to_string(),
            },
        },
    })
}
