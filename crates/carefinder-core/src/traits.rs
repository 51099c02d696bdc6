use crate::types::GeoPoint;

/// Resolves a free-text place name to coordinates.
///
/// Network-backed implementations live with the caller; the engine itself
/// only ever receives an already resolved point.
pub trait Geocoder: Send + Sync {
    fn locate(&self, place: &str) -> anyhow::Result<Option<GeoPoint>>;
}
