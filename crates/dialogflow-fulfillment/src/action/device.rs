use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Device location, present once the user granted a location permission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub coordinates: Option<Coordinates>,
    pub formatted_address: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Device {
    location: Option<Location>,
}

impl Device {
    pub fn new(data: &Value) -> Self {
        let location = data.get("location").and_then(|location| {
            serde_json::from_value::<Location>(location.clone())
                .map_err(|e| tracing::debug!("Ignoring malformed device location: {}", e))
                .ok()
        });
        Device { location }
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_device_location() {
        let device = Device::new(&json!({
            "location": {
                "coordinates": {"latitude": 37.42, "longitude": -122.08},
                "formattedAddress": "1600 Amphitheatre Pkwy",
                "zipCode": "94043",
                "city": "Mountain View"
            }
        }));

        let location = device.location().unwrap();
        assert_eq!(
            location.coordinates,
            Some(Coordinates {
                latitude: 37.42,
                longitude: -122.08
            })
        );
        assert_eq!(location.zip_code.as_deref(), Some("94043"));
        assert_eq!(location.city.as_deref(), Some("Mountain View"));
    }

    #[test]
    fn test_device_without_permission() {
        assert!(Device::new(&json!({})).location().is_none());
    }
}
