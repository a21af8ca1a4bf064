use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// A position fix. Only its presence matters to the chat; the facility links are static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location services are not supported on this device")]
    Unsupported,

    #[error("location lookup failed: {0}")]
    Lookup(String),
}

/// Source of the user's position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Whether the capability exists at all. Checked before anything is shown to the user.
    fn is_supported(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<PositionFix, LocationError>;
}

/// How the app resolves a location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationMode {
    /// Approximate position from a public IP lookup service
    Ip,
    /// The user refused the permission
    Deny,
    /// No location capability
    Off,
}

impl FromStr for GeolocationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ip" => Ok(Self::Ip),
            "deny" | "denied" => Ok(Self::Deny),
            "off" | "none" | "unsupported" => Ok(Self::Off),
            other => Err(format!("unknown geolocation mode '{other}'")),
        }
    }
}

impl fmt::Display for GeolocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ip => "ip",
            Self::Deny => "deny",
            Self::Off => "off",
        };
        f.write_str(name)
    }
}

pub fn from_mode(mode: GeolocationMode, endpoint: &str) -> Arc<dyn Geolocator> {
    match mode {
        GeolocationMode::Ip => Arc::new(IpGeolocator::new(endpoint)),
        GeolocationMode::Deny => Arc::new(DeniedGeolocator),
        GeolocationMode::Off => Arc::new(UnsupportedGeolocator),
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl IpLookupResponse {
    fn into_fix(self) -> Result<PositionFix, LocationError> {
        if self.error {
            let reason = self.reason.unwrap_or_else(|| "unknown error".to_string());
            return Err(LocationError::Lookup(reason));
        }
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(PositionFix { latitude, longitude }),
            _ => Err(LocationError::Lookup("response without coordinates".to_string())),
        }
    }
}

/// Resolves an approximate position through an ipapi.co style JSON endpoint.
pub struct IpGeolocator {
    http_client: reqwest::Client,
    endpoint: String,
}

impl IpGeolocator {
    pub fn new(endpoint: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    async fn lookup(&self) -> anyhow::Result<IpLookupResponse> {
        let response = self
            .http_client
            .get(&self.endpoint)
            .header("User-Agent", concat!("ayurakshak/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(anyhow::anyhow!("geolocation API error: {} - {}", status, text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        let response = self
            .lookup()
            .await
            .map_err(|e| LocationError::Lookup(e.to_string()))?;
        response.into_fix()
    }
}

/// Behaves like a user who refused the location prompt.
pub struct DeniedGeolocator;

#[async_trait]
impl Geolocator for DeniedGeolocator {
    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}

pub struct UnsupportedGeolocator;

#[async_trait]
impl Geolocator for UnsupportedGeolocator {
    fn is_supported(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<PositionFix, LocationError> {
        Err(LocationError::Unsupported)
    }
}
