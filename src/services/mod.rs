pub mod geolocation;

pub use geolocation::{GeolocationMode, Geolocator, LocationError, PositionFix};
