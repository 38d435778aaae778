// src/enrich.rs

use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::Error;
use crate::model::{EnrichedRecord, LookupTable, ObservationTable};

/// Grouping level whose records carry an icon.
pub const SECTION: &str = "section";

/// Field added to section-grouped records.
pub const ICON_FIELD: &str = "icon";

/// Join every row of `table` against the entity and group lookups.
///
/// The entity and group codes are replaced by their `name_<locale>` values.
/// Rows where either code (or its localized name) is missing are left out;
/// the output keeps the input order of the remaining rows. When
/// `group_column` is `"section"` each record also gets an `icon` path under
/// `icon_base`.
///
/// Fails only when the table itself is malformed: a join column missing from
/// the headers, or a row with the wrong number of values.
#[instrument(level = "debug", skip_all, fields(rows = table.data.len(), entity_column = %entity_column, group_column = %group_column, locale = %locale))]
pub fn enrich(
    table: &ObservationTable,
    entity_lookup: &LookupTable,
    group_lookup: &LookupTable,
    entity_column: &str,
    group_column: &str,
    locale: &str,
    icon_base: &str,
) -> Result<Vec<EnrichedRecord>, Error> {
    let entity_idx = table.column_index(entity_column)?;
    let group_idx = table.column_index(group_column)?;
    let expected = table.headers.len();

    if let Some((row, values)) = table
        .data
        .iter()
        .enumerate()
        .find(|(_, values)| values.len() != expected)
    {
        return Err(Error::RowArity {
            row,
            expected,
            found: values.len(),
        });
    }

    let with_icon = group_column == SECTION;
    let icon_base = icon_base.trim_end_matches('/');

    let records: Vec<EnrichedRecord> = table
        .data
        .iter()
        .filter_map(|values| {
            let entity_name = code_of(&values[entity_idx])
                .and_then(|code| entity_lookup.name(&code, locale))?;
            let group_code = code_of(&values[group_idx])?;
            let group_name = group_lookup.name(&group_code, locale)?;

            let mut record: EnrichedRecord = table
                .headers
                .iter()
                .cloned()
                .zip(values.iter().cloned())
                .collect();
            record.insert(entity_column, entity_name);
            record.insert(group_column, group_name);
            if with_icon {
                record.insert(
                    ICON_FIELD,
                    format!("{}/{}/section_{}.png", icon_base, group_column, group_code),
                );
            }
            Some(record)
        })
        .collect();

    debug!(
        kept = records.len(),
        dropped = table.data.len() - records.len(),
        "joined rows against metadata"
    );
    Ok(records)
}

/// Lookup key for a raw code value. Codes arrive as strings or numbers.
fn code_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
