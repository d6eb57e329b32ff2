use super::*;

// -----------------------------------------------------------------------
// /@ path (Google Maps / Google Earth)
// -----------------------------------------------------------------------

#[test]
fn at_path_google_maps() {
    let c = extract_from_url("https://www.google.com/maps/@48.8584,2.2945,17z").unwrap();
    assert_eq!(c.lat, 48.8584);
    assert_eq!(c.lon, 2.2945);
    assert_eq!(c.zoom, 17.0);
    assert!(c.bearing.is_none());
    assert!(c.pitch.is_none());
}

#[test]
fn at_path_strips_zoom_suffix_letter() {
    let c = extract_from_url("https://www.google.com/maps/@48.8584,2.2945,13.75z").unwrap();
    assert_eq!(c.zoom, 13.75);
}

#[test]
fn at_path_google_earth_heading_and_tilt() {
    let c = extract_from_url("https://earth.google.com/web/@48.8,2.29,500a,35y,45h,60t/data=abc")
        .unwrap();
    assert_eq!(c.lat, 48.8);
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.zoom, 500.0);
    assert_eq!(c.bearing, Some(45.0));
    assert_eq!(c.pitch, Some(60.0));
}

#[test]
fn at_path_ignores_trailing_path_chunks() {
    let c = extract_from_url("https://www.google.com/maps/@10,20,5z/data=!3m1!4b1").unwrap();
    assert_eq!(c.lat, 10.0);
    assert_eq!(c.lon, 20.0);
}

#[test]
fn at_path_two_segments_is_not_a_match() {
    assert!(extract_from_url("https://www.google.com/maps/@48.8584,2.2945").is_none());
}

// -----------------------------------------------------------------------
// Planet mosaic path
// -----------------------------------------------------------------------

#[test]
fn mosaic_path_lon_lat_zoom_order() {
    let c = extract_from_url("https://www.planet.com/mosaic/global_monthly/center/2.29/48.85/12")
        .unwrap();
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.zoom, 12.0);
}

// -----------------------------------------------------------------------
// #map= hash (OpenStreetMap)
// -----------------------------------------------------------------------

#[test]
fn hash_map_openstreetmap() {
    let c = extract_from_url("https://www.openstreetmap.org/#map=13/48.85891/2.2768").unwrap();
    assert_eq!(c.lat, 48.85891);
    assert_eq!(c.lon, 2.2768);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn hash_map_nested_in_hash_query() {
    let c = extract_from_url("https://example.org/app#/view?map=11/40.7/-74.0").unwrap();
    assert_eq!(c.zoom, 11.0);
    assert_eq!(c.lat, 40.7);
    assert_eq!(c.lon, -74.0);
}

// -----------------------------------------------------------------------
// Positional hash (Mapbox and friends)
// -----------------------------------------------------------------------

#[test]
fn positional_hash_with_bearing_and_pitch() {
    let c = extract_from_url("https://labs.mapbox.com/foo#12/40.7/-74.0/30/60").unwrap();
    assert_eq!(c.lat, 40.7);
    assert_eq!(c.lon, -74.0);
    assert_eq!(c.zoom, 12.0);
    assert_eq!(c.bearing, Some(30.0));
    assert_eq!(c.pitch, Some(60.0));
}

#[test]
fn positional_hash_three_segments() {
    let c = extract_from_url("https://demo.example.com/#13.75/48.85/2.27").unwrap();
    assert_eq!(c.zoom, 13.75);
    assert!(c.bearing.is_none());
    assert!(c.pitch.is_none());
}

#[test]
fn positional_hash_zero_bearing_dropped() {
    let c = extract_from_url("https://demo.example.com/#13/48.85/2.27/0/45").unwrap();
    assert!(c.bearing.is_none());
    assert_eq!(c.pitch, Some(45.0));
}

#[test]
fn positional_hash_leading_slash_tolerated() {
    let c = extract_from_url("https://demo.example.com/#/13/48.85/2.27").unwrap();
    assert_eq!(c.zoom, 13.0);
}

// -----------------------------------------------------------------------
// center= parameter
// -----------------------------------------------------------------------

#[test]
fn center_percent_encoded_in_hash_query() {
    let c = extract_from_url("https://demo.example.com/edit#/viewer?center=2.29%2F48.85%2F13")
        .unwrap();
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn center_comma_separated_in_query() {
    let c = extract_from_url("https://demo.example.com/?center=2.29,48.85,13").unwrap();
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.lat, 48.85);
}

#[test]
fn center_with_bearing_and_pitch() {
    let c = extract_from_url("https://demo.example.com/#?center=2.29/48.85/13/30/45").unwrap();
    assert_eq!(c.bearing, Some(30.0));
    assert_eq!(c.pitch, Some(45.0));
}

#[test]
fn center_two_parts_defaults_zoom() {
    let c = extract_from_url("https://demo.example.com/?center=2.29,48.85").unwrap();
    assert_eq!(c.zoom, 15.0);
}

// -----------------------------------------------------------------------
// Query parameters
// -----------------------------------------------------------------------

#[test]
fn query_lat_lng_with_z() {
    let c = extract_from_url("https://www.mapillary.com/app?lat=48.85&lng=2.29&z=17").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.zoom, 17.0);
}

#[test]
fn query_zoom_defaults_to_fifteen() {
    let c = extract_from_url("https://example.com/?lat=48.85&lon=2.29").unwrap();
    assert_eq!(c.zoom, 15.0);
}

#[test]
fn query_lvl_recognized_as_zoom() {
    let c = extract_from_url("https://example.com/?lat=48.85&lon=2.29&lvl=9").unwrap();
    assert_eq!(c.zoom, 9.0);
}

#[test]
fn query_bearing_and_pitch_params() {
    let c =
        extract_from_url("https://example.com/?lat=48.85&lon=2.29&zoom=10&bearing=30&pitch=45")
            .unwrap();
    assert_eq!(c.bearing, Some(30.0));
    assert_eq!(c.pitch, Some(45.0));
}

#[test]
fn query_osm_marker_params() {
    let c = extract_from_url("https://www.openstreetmap.org/?mlat=48.85891&mlon=2.2768").unwrap();
    assert_eq!(c.lat, 48.85891);
    assert_eq!(c.lon, 2.2768);
}

#[test]
fn query_hash_embedded_lat_lng() {
    let c = extract_from_url("https://example.com/app#lat=48.85&lng=2.29").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
}

// -----------------------------------------------------------------------
// Service-specific idioms
// -----------------------------------------------------------------------

#[test]
fn here_map_is_lat_first() {
    let c = extract_from_url("https://wego.here.com/?map=48.85,2.29,13,normal").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn console_map_is_lon_first() {
    let c = extract_from_url("https://console.example.com/debug?map=2.29,48.85,13z").unwrap();
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn route_centroid_averages_waypoints() {
    let c = extract_from_url("https://console.example.com/debug?route=2,48;4,50").unwrap();
    assert_eq!(c.lon, 3.0);
    assert_eq!(c.lat, 49.0);
    assert_eq!(c.zoom, 15.0);
}

#[test]
fn route_centroid_takes_zoom_from_map_token() {
    let c = extract_from_url("https://console.example.com/debug?route=2,48;4,50&map=3,49,11z")
        .unwrap();
    assert_eq!(c.lon, 3.0);
    assert_eq!(c.lat, 49.0);
    assert_eq!(c.zoom, 11.0);
}

#[test]
fn route_wins_over_its_own_map_token() {
    // The centroid, not the map token position, is the representative point.
    let c = extract_from_url("https://console.example.com/debug?route=0,10;2,12&map=5,5,9z")
        .unwrap();
    assert_eq!(c.lon, 1.0);
    assert_eq!(c.lat, 11.0);
    assert_eq!(c.zoom, 9.0);
}

#[test]
fn apple_ll_is_lat_first() {
    let c = extract_from_url("https://maps.apple.com/?ll=48.85,2.29&z=13").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn yandex_ll_is_lon_first() {
    let c = extract_from_url("https://yandex.com/maps/?ll=2.29,48.85&z=13").unwrap();
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn bing_cp_with_lvl() {
    let c = extract_from_url("https://www.bing.com/maps?cp=48.85~2.29&lvl=13").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
    assert_eq!(c.zoom, 13.0);
}

#[test]
fn satellites_pro_hash() {
    let c = extract_from_url("https://satellites.pro/USA_map#37.25,-97.82,5").unwrap();
    assert_eq!(c.lat, 37.25);
    assert_eq!(c.lon, -97.82);
    assert_eq!(c.zoom, 5.0);
}

// -----------------------------------------------------------------------
// Validation boundary
// -----------------------------------------------------------------------

#[test]
fn boundary_values_accepted() {
    assert!(extract_from_url("https://example.com/?lat=90&lon=180").is_some());
    assert!(extract_from_url("https://example.com/?lat=-90&lon=-180").is_some());
}

#[test]
fn lat_beyond_boundary_rejected() {
    assert!(extract_from_url("https://example.com/?lat=90.0001&lon=2").is_none());
}

#[test]
fn lon_beyond_boundary_rejected() {
    assert!(extract_from_url("https://example.com/?lat=48&lon=-180.5").is_none());
}

#[test]
fn invalid_candidate_falls_through_to_later_rule() {
    // The positional hash parses to lat=200 (out of range) and is treated
    // as a non-match; the ll= idiom further down the list still applies.
    let c = extract_from_url("https://example.com/?ll=2.29,48.85#100/200/300").unwrap();
    assert_eq!(c.lat, 48.85);
    assert_eq!(c.lon, 2.29);
}

// -----------------------------------------------------------------------
// Rule priority
// -----------------------------------------------------------------------

#[test]
fn hash_beats_query_params_on_mapbox_host() {
    let c = extract_from_url("https://api.mapbox.com/styles?lat=1&lon=2#12/40.7/-74.0").unwrap();
    assert_eq!(c.lat, 40.7);
    assert_eq!(c.lon, -74.0);
    assert_eq!(c.zoom, 12.0);
}

#[test]
fn at_path_beats_hash() {
    let c = extract_from_url("https://www.google.com/maps/@10,20,5z#12/40.7/-74.0").unwrap();
    assert_eq!(c.lat, 10.0);
    assert_eq!(c.lon, 20.0);
}

// -----------------------------------------------------------------------
// No match
// -----------------------------------------------------------------------

#[test]
fn non_map_url_yields_none() {
    assert!(extract_from_url("https://example.com/about").is_none());
}

#[test]
fn unparsable_url_yields_none() {
    assert!(extract_from_url("not a url at all").is_none());
}

#[test]
fn numbers_that_are_not_coordinates_yield_none() {
    assert!(extract_from_url("https://example.com/blog/2024/11/05").is_none());
}
