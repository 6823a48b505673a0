//! Schema alignment: encoding feature records against the fixed model
//! column schema.
//!
//! This is the pipeline's central behavior contract. The output of
//! every alignment has exactly the schema's columns, in schema order.
//! A category value the schema has never seen activates nothing, and a
//! schema column the input cannot populate is zero-filled. Both cases
//! are silent: raising here would make every
//! out-of-training-distribution query unusable. The diagnostic report
//! exists so callers can still notice systematic mismatches.

use std::collections::BTreeMap;

use anyhow::Result;
use polars::prelude::{AnyValue, Column, DataFrame};

use tarf_model::{AlignedFeatureVector, ColumnKind, FeatureRecord, ModelColumnSchema};

use crate::data_utils::{any_to_f64, any_to_string};

/// Diagnostic counts from an alignment pass. Does not change alignment
/// behavior; it only makes the silent zero-fill observable.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AlignmentReport {
    /// Rows aligned.
    pub rows: usize,
    /// Per categorical feature: how many row values activated no schema
    /// column. A systematically high count suggests a schema/version
    /// mismatch rather than legitimately rare categories.
    pub unmatched: BTreeMap<String, usize>,
}

impl AlignmentReport {
    pub fn unmatched_total(&self) -> usize {
        self.unmatched.values().sum()
    }
}

/// Align a single live-query record against the schema.
///
/// The result has exactly `schema.len()` values in schema order.
pub fn align_record(record: &FeatureRecord, schema: &ModelColumnSchema) -> AlignedFeatureVector {
    let layout = schema.layout();
    let values = layout
        .iter()
        .map(|kind| match kind {
            ColumnKind::Continuous { feature } => {
                record.continuous_value(feature).unwrap_or(0.0)
            }
            ColumnKind::Indicator { feature, category } => {
                match record.categorical_value(feature) {
                    Some(value) if value == *category => 1.0,
                    _ => 0.0,
                }
            }
        })
        .collect();
    AlignedFeatureVector::new(values)
}

/// Align every row of a feature frame against the schema.
///
/// Schema columns whose feature is absent from the frame are
/// zero-filled for every row; frame columns the schema does not name
/// contribute nothing. Never fails for unseen categories.
pub fn align_frame(
    df: &DataFrame,
    schema: &ModelColumnSchema,
) -> Result<(Vec<AlignedFeatureVector>, AlignmentReport)> {
    let layout = schema.layout();

    // Feature -> known category set, for the diagnostic counts.
    let mut known: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for kind in &layout {
        if let ColumnKind::Indicator { feature, category } = kind {
            known
                .entry(feature.as_str())
                .or_default()
                .push(category.as_str());
        }
    }

    // Resolve each referenced feature to its frame column once.
    let mut sources: BTreeMap<&str, Option<Column>> = BTreeMap::new();
    for kind in &layout {
        let feature = match kind {
            ColumnKind::Continuous { feature } | ColumnKind::Indicator { feature, .. } => feature,
        };
        sources
            .entry(feature.as_str())
            .or_insert_with(|| df.column(feature).ok().cloned());
    }

    let mut report = AlignmentReport {
        rows: df.height(),
        ..AlignmentReport::default()
    };
    let mut vectors = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut values = Vec::with_capacity(layout.len());
        for kind in &layout {
            match kind {
                ColumnKind::Continuous { feature } => {
                    let value = sources[feature.as_str()]
                        .as_ref()
                        .and_then(|col| any_to_f64(col.get(idx).unwrap_or(AnyValue::Null)))
                        .unwrap_or(0.0);
                    values.push(value);
                }
                ColumnKind::Indicator { feature, category } => {
                    let active = sources[feature.as_str()]
                        .as_ref()
                        .map(|col| any_to_string(col.get(idx).unwrap_or(AnyValue::Null)))
                        .is_some_and(|cell| cell == *category);
                    values.push(if active { 1.0 } else { 0.0 });
                }
            }
        }
        vectors.push(AlignedFeatureVector::new(values));

        for (feature, categories) in &known {
            let Some(col) = sources[*feature].as_ref() else {
                continue;
            };
            let cell = any_to_string(col.get(idx).unwrap_or(AnyValue::Null));
            if !categories.iter().any(|category| *category == cell) {
                *report.unmatched.entry((*feature).to_string()).or_insert(0) += 1;
            }
        }
    }

    if report.unmatched_total() > 0 {
        tracing::debug!(
            rows = report.rows,
            unmatched = report.unmatched_total(),
            "alignment zero-filled category values"
        );
    }
    Ok((vectors, report))
}
