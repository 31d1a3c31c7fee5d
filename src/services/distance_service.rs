//! Straight-line distances between coordinates.
//!
//! Landmarks are compared "as the crow flies" on a spherical Earth. Road and
//! ferry routes are resolved by the client against a routing service and are
//! not modelled here.

use crate::models::landmark::GeoPoint;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub struct DistanceService;

impl DistanceService {
    /// Great-circle distance in kilometres using the haversine formula.
    pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
        let lat1 = from.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let dlat = (to.lat - from.lat).to_radians();
        let dlng = (to.lng - from.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}
