//! Declarative code-to-label tables.
//!
//! The source datasets encode categories as small integers (season 1..4,
//! weather situation 1..4, working day 0/1). Instead of inline conditionals,
//! each dataset carries a [`LabelTable`]: the code-to-label mapping plus the
//! order the labels are displayed in. New datasets add a table, in code or
//! in TOML configuration, rather than a new code path.

use serde::Deserialize;
use std::collections::HashMap;

/// Errors produced while loading label configuration.
#[derive(Debug, thiserror::Error)]
pub enum LabelConfigError {
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("table '{table}': code '{code}' is not an integer")]
    InvalidCode { table: String, code: String },
}

/// A mapping from an integer category code to a display label, with an
/// explicit display order.
///
/// # Examples
///
/// ```
/// use dashboard_analytics::core::labels::LabelTable;
///
/// let seasons = LabelTable::new(&[
///     (1, "Spring"),
///     (2, "Summer"),
///     (3, "Fall"),
///     (4, "Winter"),
/// ]);
///
/// assert_eq!(seasons.label(2), Some("Summer"));
/// assert_eq!(seasons.label(9), None);
/// assert_eq!(seasons.display_order()[0], "Spring");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: HashMap<i64, String>,
    order: Vec<String>,
}

impl LabelTable {
    /// Builds a table from `(code, label)` pairs; the display order is the
    /// order the pairs are listed in.
    pub fn new(pairs: &[(i64, &str)]) -> Self {
        Self {
            labels: pairs
                .iter()
                .map(|(code, label)| (*code, label.to_string()))
                .collect(),
            order: pairs.iter().map(|(_, label)| label.to_string()).collect(),
        }
    }

    /// Returns the label for `code`, or `None` for an unmapped code. An
    /// unmapped code excludes the record from the summary being built; no
    /// placeholder label is invented.
    pub fn label(&self, code: i64) -> Option<&str> {
        self.labels.get(&code).map(String::as_str)
    }

    /// The caller-facing display order of the labels.
    pub fn display_order(&self) -> &[String] {
        &self.order
    }
}

#[derive(Debug, Deserialize)]
struct RawLabelTable {
    labels: HashMap<String, String>,
    order: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawLabelsConfig {
    tables: HashMap<String, RawLabelTable>,
}

/// Named label tables loaded from TOML configuration.
///
/// ```
/// use dashboard_analytics::core::labels::LabelsConfig;
///
/// let config = LabelsConfig::from_toml_str(
///     r#"
///     [tables.season]
///     labels = { 1 = "Spring", 2 = "Summer" }
///     order = ["Spring", "Summer"]
///     "#,
/// )
/// .unwrap();
///
/// let seasons = config.table("season").unwrap();
/// assert_eq!(seasons.label(1), Some("Spring"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelsConfig {
    tables: HashMap<String, LabelTable>,
}

impl LabelsConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, LabelConfigError> {
        let raw: RawLabelsConfig = toml::from_str(input)?;

        let mut tables = HashMap::with_capacity(raw.tables.len());
        for (name, raw_table) in raw.tables {
            let mut labels = HashMap::with_capacity(raw_table.labels.len());
            for (code, label) in raw_table.labels {
                let code: i64 = code.parse().map_err(|_| LabelConfigError::InvalidCode {
                    table: name.clone(),
                    code,
                })?;
                labels.insert(code, label);
            }

            // Without an explicit order, fall back to ascending code order.
            let order = match raw_table.order {
                Some(order) => order,
                None => {
                    let mut pairs: Vec<(&i64, &String)> = labels.iter().collect();
                    pairs.sort_by_key(|(code, _)| **code);
                    pairs.into_iter().map(|(_, label)| label.clone()).collect()
                }
            };

            tables.insert(name, LabelTable { labels, order });
        }

        Ok(Self { tables })
    }

    pub fn table(&self, name: &str) -> Option<&LabelTable> {
        self.tables.get(name)
    }
}
