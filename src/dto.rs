use serde::{Deserialize, Serialize};

/// Plain acknowledgement body used by logout and the delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Content kind as known to the metadata service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&MediaType::Movie).unwrap(), "\"movie\"");
        assert_eq!(serde_json::to_string(&MediaType::Tv).unwrap(), "\"tv\"");
        let parsed: MediaType = serde_json::from_str("\"tv\"").unwrap();
        assert_eq!(parsed, MediaType::Tv);
        assert_eq!(parsed.as_str(), "tv");
    }
}
