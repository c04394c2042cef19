use chrono::NaiveDate;
use serde::Serialize;

pub const SERVICE_VERSION: &str = "3.5.1";
pub const PLACEHOLDER_GAME_NAME: &str = "Crazy Game";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VersionResponse {
    pub version: &'static str,
    pub last_build: NaiveDate,
}

impl VersionResponse {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            version: SERVICE_VERSION,
            last_build: today,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameResponse {
    pub id: u64,
    pub name: &'static str,
    pub release_date: NaiveDate,
}

impl GameResponse {
    /// Placeholder record: only the id comes from the caller.
    pub fn placeholder(id: u64, today: NaiveDate) -> Self {
        Self {
            id,
            name: PLACEHOLDER_GAME_NAME,
            release_date: today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn version_serializes_in_field_order() {
        let body = serde_json::to_string(&VersionResponse::new(new_year())).unwrap();
        assert_eq!(body, r#"{"version":"3.5.1","last_build":"2024-01-01"}"#);
    }

    #[test]
    fn game_serializes_in_field_order() {
        let body = serde_json::to_string(&GameResponse::placeholder(42, new_year())).unwrap();
        assert_eq!(
            body,
            r#"{"id":42,"name":"Crazy Game","release_date":"2024-01-01"}"#
        );
    }

    #[test]
    fn dates_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(987, 3, 9).unwrap();
        let body = serde_json::to_value(VersionResponse::new(date)).unwrap();
        assert_eq!(body["last_build"], "0987-03-09");
    }
}
