/// Case-insensitive city identifier.
///
/// Only case is normalized. Whitespace and other differences are kept, so
/// `" new york"` does not match `"new york"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityKey(String);

impl CityKey {
    pub fn new(city: &str) -> Self {
        CityKey(city.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CityKey {
    fn from(value: &str) -> Self {
        CityKey::new(value)
    }
}

/// A supported city: its lookup key, canned weather and IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityRecord {
    /// Lowercased name the input is compared against.
    pub key: &'static str,
    pub weather_report: &'static str,
    pub timezone: &'static str,
}

const CITIES: &[CityRecord] = &[CityRecord {
    key: "new york",
    weather_report: "The weather in New York is sunny with a temperature of 25 degrees Celsius (77 degrees Fahrenheit).",
    timezone: "America/New_York",
}];

/// Find the record for a city, if it is supported.
pub fn find_city(key: &CityKey) -> Option<&'static CityRecord> {
    CITIES.iter().find(|record| record.key == key.as_str())
}

/// All supported cities.
pub fn supported_cities() -> &'static [CityRecord] {
    CITIES
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_case() {
        assert_eq!(CityKey::new("New York"), CityKey::new("NEW YORK"));
        assert_eq!(CityKey::new("nEw YoRk").as_str(), "new york");
    }

    #[test]
    fn key_keeps_whitespace() {
        assert_ne!(CityKey::new(" new york "), CityKey::new("new york"));
        assert!(find_city(&CityKey::new("new york ")).is_none());
    }

    #[test]
    fn only_new_york_is_supported() {
        assert_eq!(supported_cities().len(), 1);
        let record = find_city(&"New York".into()).expect("new york is in the table");
        assert_eq!(record.timezone, "America/New_York");
        assert!(find_city(&"Beijing".into()).is_none());
        assert!(find_city(&"".into()).is_none());
    }
}
