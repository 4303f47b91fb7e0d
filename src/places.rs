//! Address search against the Google Places (New) API, used to fill a
//! site's address and coordinates.

use crate::config::{Config, MapCenter, PLACES_KEY_ENV};
use crate::core::geofence::GeoPoint;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

pub const PLACES_BASE: &str = "https://places.googleapis.com/v1";
const AUTOCOMPLETE_MASK: &str = "suggestions.placePrediction.place,suggestions.placePrediction.text";
const DETAILS_MASK: &str = "displayName,formattedAddress,location";
/// Search bias radius around the map center, in meters.
pub const BIAS_RADIUS_M: f64 = 20_000.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub place_id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    pub name: String,
    pub address: String,
    pub location: GeoPoint,
}

// ---- wire types ----

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutocompleteRequest<'a> {
    input: &'a str,
    location_bias: LocationBias,
    language_code: &'a str,
}

#[derive(Serialize)]
struct LocationBias {
    circle: Circle,
}

#[derive(Serialize)]
struct Circle {
    center: LatLng,
    radius: f64,
}

#[derive(Serialize, Deserialize)]
struct LatLng {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize, Default)]
struct AutocompleteResponse {
    #[serde(default)]
    suggestions: Vec<RawSuggestion>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    place_prediction: Option<PlacePrediction>,
}

#[derive(Deserialize)]
struct PlacePrediction {
    place: String,
    text: Option<FormattableText>,
}

#[derive(Deserialize)]
struct FormattableText {
    text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPlace {
    display_name: Option<FormattableText>,
    formatted_address: Option<String>,
    location: Option<LatLng>,
}

#[derive(Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Parse an autocomplete body. Entries without a place prediction are
/// skipped and the `places/` prefix is removed from ids.
pub fn parse_autocomplete(body: &str) -> AppResult<Vec<Suggestion>> {
    if body.trim().is_empty() || body.trim() == "{}" {
        return Ok(Vec::new());
    }
    let resp: AutocompleteResponse = serde_json::from_str(body)
        .map_err(|e| AppError::Places(format!("unexpected autocomplete body: {e}")))?;

    Ok(resp
        .suggestions
        .into_iter()
        .filter_map(|s| s.place_prediction)
        .map(|p| Suggestion {
            place_id: p.place.trim_start_matches("places/").to_string(),
            description: p.text.map(|t| t.text).unwrap_or_default(),
        })
        .collect())
}

/// Parse a place details body. A place without a location is an error.
pub fn parse_details(body: &str) -> AppResult<PlaceDetails> {
    let raw: RawPlace = serde_json::from_str(body)
        .map_err(|e| AppError::Places(format!("unexpected place body: {e}")))?;

    let loc = raw
        .location
        .ok_or_else(|| AppError::Places("place has no location".into()))?;

    Ok(PlaceDetails {
        name: raw.display_name.map(|t| t.text).unwrap_or_default(),
        address: raw.formatted_address.unwrap_or_default(),
        location: GeoPoint::new(loc.latitude, loc.longitude)?,
    })
}

fn google_message(status: u16, body: &str) -> String {
    serde_json::from_str::<GoogleError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("HTTP {status}"))
}

pub struct PlacesClient {
    http: Client,
    api_key: String,
    center: MapCenter,
}

impl PlacesClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let api_key = cfg.places_key().ok_or_else(|| {
            AppError::Places(format!(
                "no API key: set places_api_key in the config or {PLACES_KEY_ENV}"
            ))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_key,
            center: cfg.map_center,
        })
    }

    pub fn autocomplete(&self, input: &str) -> AppResult<Vec<Suggestion>> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        let req = AutocompleteRequest {
            input,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: self.center.lat,
                        longitude: self.center.lon,
                    },
                    radius: BIAS_RADIUS_M,
                },
            },
            language_code: "es",
        };

        let url = format!("{PLACES_BASE}/places:autocomplete");
        debug!("POST {url}");
        let resp = self
            .http
            .post(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", AUTOCOMPLETE_MASK)
            .json(&req)
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        if !(200..300).contains(&status) {
            let msg = google_message(status, &body);
            error!("places autocomplete failed: {msg}");
            return Err(AppError::Places(msg));
        }
        parse_autocomplete(&body)
    }

    pub fn details(&self, place_id: &str) -> AppResult<PlaceDetails> {
        let id = place_id.trim().trim_start_matches("places/");
        let url = format!("{PLACES_BASE}/places/{id}");
        debug!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", DETAILS_MASK)
            .send()?;

        let status = resp.status().as_u16();
        let body = resp.text()?;
        if !(200..300).contains(&status) {
            let msg = google_message(status, &body);
            error!("places details failed: {msg}");
            return Err(AppError::Places(msg));
        }
        parse_details(&body)
    }
}
