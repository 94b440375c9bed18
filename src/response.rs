use serde::{Deserialize, Serialize};

pub const LOAD_MESSAGE: &str = "CPU Load generated!";

/// Body returned by the engine once a request has finished burning CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResponse {
    pub message: String,
}

impl LoadResponse {
    /// The one payload the engine ever sends.
    pub fn generated() -> Self {
        Self {
            message: LOAD_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_fixed_payload() {
        let body = serde_json::to_string(&LoadResponse::generated()).unwrap();
        assert_eq!(body, r#"{"message":"CPU Load generated!"}"#);
    }

    #[test]
    fn parses_payload_with_whitespace() {
        let parsed: LoadResponse =
            serde_json::from_str(r#"{"message": "CPU Load generated!"}"#).unwrap();
        assert_eq!(parsed, LoadResponse::generated());
    }
}
