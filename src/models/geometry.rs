//! Field polygon geometry model.
//!
//! A field is registered as a single closed ring of WGS84 (longitude,
//! latitude) vertices. The ring is replaced wholesale on save and never
//! edited partially.

use serde::{Deserialize, Serialize};

/// Closed ring of (longitude, latitude) vertices in WGS84 degrees.
///
/// Serializes as `[[lon, lat], ...]`, matching the GeoJSON-style payload the
/// map frontend produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPolygon {
    pub ring: Vec<(f64, f64)>,
}

impl FieldPolygon {
    pub fn new(ring: Vec<(f64, f64)>) -> Self {
        Self { ring }
    }

    /// Number of distinct vertices, ignoring the closing vertex if present.
    pub fn distinct_vertex_count(&self) -> usize {
        let mut open = self.ring.clone();
        if open.len() > 1 && open.first() == open.last() {
            open.pop();
        }
        let mut distinct: Vec<(f64, f64)> = Vec::with_capacity(open.len());
        for v in open {
            if !distinct.contains(&v) {
                distinct.push(v);
            }
        }
        distinct.len()
    }

    /// Whether the first and last vertices coincide.
    pub fn is_closed(&self) -> bool {
        self.ring.len() > 2 && self.ring.first() == self.ring.last()
    }

    /// The ring with the closing vertex appended if the input left it open.
    pub fn closed_ring(&self) -> Vec<(f64, f64)> {
        let mut ring = self.ring.clone();
        if !ring.is_empty() && ring.first() != ring.last() {
            ring.push(ring[0]);
        }
        ring
    }

    /// First vertex of the ring, used by the frontend for map centering.
    pub fn first_vertex(&self) -> Option<(f64, f64)> {
        self.ring.first().copied()
    }

    /// Canonical JSON representation used for checksumming.
    ///
    /// Serialization of a numeric array is stable, so identical rings always
    /// hash identically across saves.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(&self.ring).unwrap_or_default()
    }
}
