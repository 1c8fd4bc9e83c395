//! Polygon area computation.
//!
//! The registered ring is WGS84 longitude/latitude; hectares require a
//! metric, equal-area view of it. Rather than assuming one fixed UTM zone,
//! the projection is selected per polygon: a Lambert azimuthal equal-area
//! projection on the authalic sphere, centered on the ring's centroid.
//! Equal-area by construction, so the planar shoelace area of the projected
//! ring is the spherical area of the field.

use geo::{Area, Centroid, Coord, LineString, MapCoords, Polygon, Validation};

use crate::models::FieldPolygon;
use crate::services::error::{AnalysisError, AnalysisResult};

/// Radius of the sphere with the same surface area as the WGS84 ellipsoid.
const AUTHALIC_RADIUS_M: f64 = 6_371_007.181;

const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Compute the area of a field polygon in hectares.
///
/// Fails with `InvalidGeometry` when the ring has fewer than 3 distinct
/// vertices or self-intersects. The result is invariant under traversal
/// direction of the ring.
pub fn polygon_area_hectares(field: &FieldPolygon) -> AnalysisResult<f64> {
    let distinct = field.distinct_vertex_count();
    if distinct < 3 {
        return Err(AnalysisError::InvalidGeometry(format!(
            "polygon ring needs at least 3 distinct vertices, got {}",
            distinct
        )));
    }

    let ring: Vec<Coord<f64>> = field
        .closed_ring()
        .into_iter()
        .map(|(lon, lat)| Coord { x: lon, y: lat })
        .collect();
    let polygon = Polygon::new(LineString::new(ring), vec![]);

    if !polygon.is_valid() {
        return Err(AnalysisError::InvalidGeometry(
            "polygon ring is self-intersecting or otherwise invalid".to_string(),
        ));
    }

    let center = polygon.centroid().ok_or_else(|| {
        AnalysisError::InvalidGeometry("polygon has no computable centroid".to_string())
    })?;
    let lon0 = center.x().to_radians();
    let lat0 = center.y().to_radians();

    let projected = polygon.map_coords(|Coord { x, y }| {
        let (px, py) = laea_forward(lon0, lat0, x, y);
        Coord { x: px, y: py }
    });

    Ok(projected.unsigned_area() / SQUARE_METERS_PER_HECTARE)
}

/// Forward Lambert azimuthal equal-area projection on the sphere, centered
/// at (lon0, lat0) radians. Input in degrees, output in meters.
fn laea_forward(lon0: f64, lat0: f64, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let lam = lon_deg.to_radians() - lon0;
    let phi = lat_deg.to_radians();

    let denom = 1.0 + lat0.sin() * phi.sin() + lat0.cos() * phi.cos() * lam.cos();
    // denom approaches 0 only for points antipodal to the projection
    // center, which a field-sized ring centered on its own centroid
    // cannot contain.
    let k = (2.0 / denom.max(f64::EPSILON)).sqrt();

    let x = AUTHALIC_RADIUS_M * k * phi.cos() * lam.sin();
    let y = AUTHALIC_RADIUS_M * k * (lat0.cos() * phi.sin() - lat0.sin() * phi.cos() * lam.cos());
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 0.001° square with its southwest corner at (lon, lat).
    fn small_square(lon: f64, lat: f64) -> FieldPolygon {
        let d = 0.001;
        FieldPolygon::new(vec![
            (lon, lat),
            (lon + d, lat),
            (lon + d, lat + d),
            (lon, lat + d),
            (lon, lat),
        ])
    }

    #[test]
    fn test_equator_square_area() {
        // Spherical area of a 0.001° square at the equator:
        // R² · Δλ · (sin φ₂ − sin φ₁) ≈ 12364.3 m²
        let area = polygon_area_hectares(&small_square(77.2, 0.0)).unwrap();
        assert_relative_eq!(area, 1.23643, max_relative = 1e-3);
    }

    #[test]
    fn test_area_shrinks_with_latitude() {
        let area = polygon_area_hectares(&small_square(10.0, 45.0)).unwrap();
        assert_relative_eq!(area, 0.87429, max_relative = 1e-3);
    }

    #[test]
    fn test_reversal_invariance() {
        let square = small_square(102.5, 13.0);
        let mut reversed_ring = square.ring.clone();
        reversed_ring.reverse();
        let reversed = FieldPolygon::new(reversed_ring);

        let forward_area = polygon_area_hectares(&square).unwrap();
        let reverse_area = polygon_area_hectares(&reversed).unwrap();
        assert_relative_eq!(forward_area, reverse_area, max_relative = 1e-9);
    }

    #[test]
    fn test_open_ring_is_closed_for_computation() {
        let open = FieldPolygon::new(vec![
            (77.2, 12.9),
            (77.201, 12.9),
            (77.201, 12.901),
            (77.2, 12.901),
        ]);
        let area = polygon_area_hectares(&open).unwrap();
        assert!(area > 0.0);
    }

    #[test]
    fn test_rejects_too_few_vertices() {
        let line = FieldPolygon::new(vec![(0.0, 0.0), (1.0, 1.0)]);
        let err = polygon_area_hectares(&line).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidGeometry(_)));
    }

    #[test]
    fn test_rejects_duplicate_only_vertices() {
        let degenerate = FieldPolygon::new(vec![(5.0, 5.0), (5.0, 5.0), (5.0, 5.0), (6.0, 6.0)]);
        assert!(polygon_area_hectares(&degenerate).is_err());
    }

    #[test]
    fn test_rejects_self_intersecting_ring() {
        // Bowtie: edges (0,0)→(1,1) and (1,0)→(0,1) cross.
        let bowtie = FieldPolygon::new(vec![
            (0.0, 0.0),
            (0.001, 0.001),
            (0.001, 0.0),
            (0.0, 0.001),
            (0.0, 0.0),
        ]);
        let err = polygon_area_hectares(&bowtie).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidGeometry(_)));
    }

    #[test]
    fn test_empty_ring_rejected() {
        let empty = FieldPolygon::new(vec![]);
        assert!(polygon_area_hectares(&empty).is_err());
    }
}
