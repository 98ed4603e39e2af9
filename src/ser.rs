//! Serializers for the core types.

use serde::ser::{Serialize, Serializer};

use crate::Mbid;

impl Serialize for Mbid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Performs the conversion into a JSON string indented by two spaces.
pub fn to_pretty_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(v) => v,
        Err(e) => {
            debug!("serialization error: {}", e);
            "{}".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_pretty_json;
    use crate::{Mbid, Tag};

    #[test]
    fn mbid_test() {
        let id: Mbid = "5b11f4ce-a62d-471e-81fc-a69a8278c7da".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, r#""5b11f4ce-a62d-471e-81fc-a69a8278c7da""#);
    }

    #[test]
    fn pretty_json_test() {
        let tag = Tag {
            name: "grunge".to_string(),
            count: 3,
        };

        assert_eq!(
            to_pretty_json(&tag),
            "{\n  \"name\": \"grunge\",\n  \"count\": 3\n}"
        );
    }
}
