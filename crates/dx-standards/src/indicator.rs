#![deny(unsafe_code)]

use std::collections::BTreeMap;

use dx_model::{Axis, BucketKind};
use dx_normalization::normalize_key;

use crate::error::{Result, StandardsError};

/// The columns that realize one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorKind {
    /// One column holding one categorical value per row.
    Single { column: String },
    /// One yes/no column per bucket.
    Multi { columns: Vec<String> },
}

/// Columns, labels and (for ordinal axes) the fixed display order of one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSet {
    pub axis: Axis,
    pub kind: IndicatorKind,
    /// Normalized raw key (column code or response text) to label.
    labels: BTreeMap<String, String>,
    pub order: Option<Vec<String>>,
}

impl IndicatorSet {
    /// A single-valued set over `column` with raw-value labels.
    pub fn single<I, K, V>(axis: Axis, column: &str, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let column = column.trim();
        if column.is_empty() {
            return Err(StandardsError::invalid_set(axis, "column name is empty"));
        }
        Ok(Self {
            axis,
            kind: IndicatorKind::Single {
                column: column.to_string(),
            },
            labels: normalize_labels(labels),
            order: None,
        })
    }

    /// A multi-valued set over `(column, label)` pairs, in display order.
    pub fn multi<I, K, V>(axis: Axis, columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut codes = Vec::new();
        let mut labels = BTreeMap::new();
        for (column, label) in columns {
            let column = column.as_ref().trim();
            if column.is_empty() {
                return Err(StandardsError::invalid_set(axis, "column name is empty"));
            }
            if codes.iter().any(|existing: &String| existing == column) {
                return Err(StandardsError::invalid_set(
                    axis,
                    format!("column {column} listed twice"),
                ));
            }
            codes.push(column.to_string());
            labels.insert(normalize_key(column), label.into());
        }
        if codes.is_empty() {
            return Err(StandardsError::invalid_set(axis, "no columns"));
        }
        Ok(Self {
            axis,
            kind: IndicatorKind::Multi { columns: codes },
            labels,
            order: None,
        })
    }

    /// A set over the built-in constant tables, built without column checks.
    pub(crate) fn from_table<I, K, V>(axis: Axis, kind: IndicatorKind, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            axis,
            kind,
            labels: normalize_labels(labels),
            order: None,
        }
    }

    /// Pins the display order of labels.
    #[must_use]
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    /// Display label for a raw key; misses return `key` unchanged.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.labels
            .get(&normalize_key(key))
            .map_or(key, String::as_str)
    }

    pub fn has_label(&self, key: &str) -> bool {
        self.labels.contains_key(&normalize_key(key))
    }

    pub fn bucket_kind(&self) -> BucketKind {
        match self.kind {
            IndicatorKind::Single { .. } => BucketKind::Single,
            IndicatorKind::Multi { .. } => BucketKind::Multi,
        }
    }

    /// Source columns read by this set.
    pub fn columns(&self) -> &[String] {
        match &self.kind {
            IndicatorKind::Single { column } => std::slice::from_ref(column),
            IndicatorKind::Multi { columns } => columns,
        }
    }

    /// Fixed display order, for ordinal axes.
    pub fn order(&self) -> Option<&[String]> {
        self.order.as_deref()
    }

    /// Labels in display order: the fixed order when pinned, otherwise
    /// column order for multi-valued sets, otherwise distinct labels sorted.
    pub fn display_labels(&self) -> Vec<String> {
        if let Some(order) = &self.order {
            return order.clone();
        }
        let mut out: Vec<String> = Vec::new();
        let candidates: Vec<&str> = match &self.kind {
            IndicatorKind::Multi { columns } => {
                columns.iter().map(|column| self.label(column)).collect()
            }
            IndicatorKind::Single { .. } => self.labels.values().map(String::as_str).collect(),
        };
        for label in candidates {
            if !out.iter().any(|existing| existing == label) {
                out.push(label.to_string());
            }
        }
        out
    }

    /// Normalized raw key to label pairs.
    pub fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }
}

fn normalize_labels<I, K, V>(labels: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    labels
        .into_iter()
        .map(|(key, label)| (normalize_key(key.as_ref()), label.into()))
        .collect()
}
