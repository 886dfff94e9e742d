//! Best-effort location lookup used to flavor the prompt.
//!
//! Two hops: an IP-based lookup for coordinates, then a reverse geocode for
//! the place name. Every failure collapses to `None`; the rest of the app
//! never waits on, or hears about, this.

use reqwest::Client;
use serde::Deserialize;

const IP_LOOKUP_URL: &str = "https://ipapi.co/json/";
const REVERSE_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Detected place, set at most once per session.
#[derive(Debug, Clone)]
pub struct LocationInfo {
    pub city: String,
    pub country: String,
    pub country_code: String,
}

#[derive(Debug, Deserialize)]
struct IpLookup {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ReverseGeocode {
    city: Option<String>,
    locality: Option<String>,
    #[serde(rename = "countryName")]
    country_name: Option<String>,
    #[serde(rename = "countryCode")]
    country_code: Option<String>,
}

impl ReverseGeocode {
    fn into_location(self) -> Option<LocationInfo> {
        let city = self
            .city
            .filter(|c| !c.is_empty())
            .or(self.locality)
            .filter(|c| !c.is_empty())?;
        Some(LocationInfo {
            city,
            country: self.country_name.unwrap_or_default(),
            country_code: self.country_code.unwrap_or_default(),
        })
    }
}

/// Resolve the user's place from their IP, best effort.
pub async fn detect() -> Option<LocationInfo> {
    let client = Client::builder()
        .user_agent("cinematic/0.1")
        .build()
        .ok()?;

    let coords: IpLookup = client
        .get(IP_LOOKUP_URL)
        .send()
        .await
        .ok()?
        .json()
        .await
        .ok()?;

    let geo: ReverseGeocode = client
        .get(REVERSE_GEOCODE_URL)
        .query(&[
            ("latitude", coords.latitude.to_string()),
            ("longitude", coords.longitude.to_string()),
            ("localityLanguage", "en".to_string()),
        ])
        .send()
        .await
        .ok()?
        .json()
        .await
        .ok()?;

    geo.into_location()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_geocode_prefers_city_over_locality() {
        let geo: ReverseGeocode = serde_json::from_str(
            r#"{"city":"Porto","locality":"Cedofeita","countryName":"Portugal","countryCode":"PT"}"#,
        )
        .unwrap();
        let loc = geo.into_location().unwrap();
        assert_eq!(loc.city, "Porto");
        assert_eq!(loc.country, "Portugal");
        assert_eq!(loc.country_code, "PT");
    }

    #[test]
    fn reverse_geocode_falls_back_to_locality() {
        let geo: ReverseGeocode = serde_json::from_str(
            r#"{"city":"","locality":"Cedofeita","countryName":"Portugal","countryCode":"PT"}"#,
        )
        .unwrap();
        assert_eq!(geo.into_location().unwrap().city, "Cedofeita");
    }

    #[test]
    fn reverse_geocode_without_any_place_name_is_none() {
        let geo: ReverseGeocode =
            serde_json::from_str(r#"{"countryName":"Portugal","countryCode":"PT"}"#).unwrap();
        assert!(geo.into_location().is_none());
    }
}
