/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A coordinate fix further than this from every known city gets no label.
const MAX_LABEL_DISTANCE_KM: f64 = 100.0;

/// City centers the client can label a location fix with.
const CITIES: &[(&str, f64, f64)] = &[
    ("San Francisco, CA", 37.7749, -122.4194),
    ("New York, NY", 40.7128, -74.0060),
    ("Austin, TX", 30.2672, -97.7431),
    ("Chicago, IL", 41.8781, -87.6298),
    ("Seattle, WA", 47.6062, -122.3321),
    ("Boston, MA", 42.3601, -71.0589),
    ("Denver, CO", 39.7392, -104.9903),
    ("Miami, FL", 25.7617, -80.1918),
    ("Portland, OR", 45.5152, -122.6784),
    ("Los Angeles, CA", 34.0522, -118.2437),
];

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Label a device location fix with the nearest known city.
///
/// The profile editor shows this as "City, ST". Returns None when the fix is
/// not within [`MAX_LABEL_DISTANCE_KM`] of any city in the table.
pub fn nearest_city_label(latitude: f64, longitude: f64) -> Option<&'static str> {
    let (label, distance_km) = CITIES
        .iter()
        .map(|(label, lat, lon)| (*label, haversine_distance(latitude, longitude, *lat, *lon)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))?;

    if distance_km <= MAX_LABEL_DISTANCE_KM {
        Some(label)
    } else {
        tracing::debug!(
            "No city within {}km of ({}, {})",
            MAX_LABEL_DISTANCE_KM,
            latitude,
            longitude
        );
        None
    }
}
