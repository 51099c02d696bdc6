//! Great-circle distance and offline district geocoding.

use crate::traits::Geocoder;
use crate::types::GeoPoint;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate district centres.
const DISTRICT_CENTRES: &[(&str, f64, f64)] = &[
    ("Chennai", 13.0827, 80.2707),
    ("Coimbatore", 11.0168, 76.9558),
    ("Madurai", 9.9252, 78.1198),
    ("Tiruchirappalli", 10.7905, 78.7047),
    ("Salem", 11.6643, 78.1460),
    ("Tirunelveli", 8.7139, 77.7567),
    ("Tiruppur", 11.1085, 77.3411),
    ("Vellore", 12.9165, 79.1325),
    ("Erode", 11.3410, 77.7172),
    ("Thoothukudi", 8.7642, 78.1348),
    ("Dindigul", 10.3673, 77.9803),
    ("Thanjavur", 10.7870, 79.1378),
    ("Ranipet", 12.9296, 79.3324),
    ("Virudhunagar", 9.5872, 77.9514),
    ("Karur", 10.9601, 78.0766),
    ("Nilgiris", 11.4064, 76.6932),
    ("Krishnagiri", 12.5186, 78.2138),
    ("Kanyakumari", 8.0883, 77.5385),
    ("Kancheepuram", 12.8342, 79.7031),
    ("Namakkal", 11.2189, 78.1672),
    ("Thiruvallur", 13.1435, 79.9129),
    ("Theni", 10.0104, 77.4768),
    ("Ramanathapuram", 9.3639, 78.8395),
    ("Sivaganga", 9.8433, 78.4809),
    ("Thiruvarur", 10.7661, 79.6344),
    ("Pudukkottai", 10.3797, 78.8202),
    ("Tenkasi", 8.9594, 77.3129),
    ("Chengalpattu", 12.6939, 79.9757),
    ("Ariyalur", 11.1398, 79.0734),
    ("Cuddalore", 11.7480, 79.7714),
    ("Dharmapuri", 12.1270, 78.1589),
    ("Kallakurichi", 11.7384, 78.9639),
    ("Mayiladuthurai", 11.1075, 79.6524),
    ("Nagapattinam", 10.7672, 79.8449),
    ("Perambalur", 11.2342, 78.8756),
    ("Tirupathur", 12.4925, 78.5639),
    ("Tiruvannamalai", 12.2253, 79.0747),
    ("Villupuram", 11.9401, 79.4861),
];

/// Haversine distance in kilometres, rounded to one decimal place.
///
/// Non-finite input yields non-finite output.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    round_tenth(EARTH_RADIUS_KM * c)
}

fn round_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Case-insensitive lookup of a district (or city) centre.
pub fn district_centre(name: &str) -> Option<GeoPoint> {
    let name = name.trim();
    DISTRICT_CENTRES
        .iter()
        .find(|(district, _, _)| district.eq_ignore_ascii_case(name))
        .map(|&(_, lat, lng)| GeoPoint::new(lat, lng))
}

/// Geocoder backed by the built-in district table. Never touches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct DistrictGeocoder;

impl Geocoder for DistrictGeocoder {
    fn locate(&self, place: &str) -> anyhow::Result<Option<GeoPoint>> {
        Ok(district_centre(place))
    }
}
