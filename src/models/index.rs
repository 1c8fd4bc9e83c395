//! Satellite index time-series model.
//!
//! The remote reducer returns one sample per acquisition date. Readings can
//! be absent (cloud cover, no acquisition); absent values are dropped before
//! analysis, never interpolated and never treated as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remote-sensing index kind requested from the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    /// Normalized difference vegetation index.
    Ndvi,
    /// Normalized difference water index.
    Ndwi,
}

impl IndexKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexKind::Ndvi => "ndvi",
            IndexKind::Ndwi => "ndwi",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ndvi" => Ok(IndexKind::Ndvi),
            "ndwi" => Ok(IndexKind::Ndwi),
            other => Err(format!("unknown index kind: {}", other)),
        }
    }
}

/// One reading of an index over the field polygon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexSample {
    /// Acquisition date.
    pub date: NaiveDate,
    /// Mean index value over the polygon; `None` when the acquisition
    /// produced no usable reading.
    pub value: Option<f64>,
}

/// Chronological series of index samples for one polygon and date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTimeSeries {
    pub kind: IndexKind,
    pub samples: Vec<IndexSample>,
}

impl IndexTimeSeries {
    pub fn new(kind: IndexKind, samples: Vec<IndexSample>) -> Self {
        Self { kind, samples }
    }

    /// Whether the samples are sorted ascending by acquisition date.
    pub fn is_chronological(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].date <= w[1].date)
    }

    /// Sort samples ascending by date. The analysis core requires this
    /// ordering and does not re-sort; callers own it.
    pub fn sort_chronologically(&mut self) {
        self.samples.sort_by_key(|s| s.date);
    }

    /// Present values in chronological order, absent readings dropped.
    pub fn present_values(&self) -> Vec<f64> {
        self.samples.iter().filter_map(|s| s.value).collect()
    }

    /// Most recent present value, if any.
    pub fn latest_value(&self) -> Option<f64> {
        self.samples.iter().rev().find_map(|s| s.value)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Inclusive acquisition date range for reducer queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, String> {
        if start > end {
            return Err(format!("date range start {} is after end {}", start, end));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
