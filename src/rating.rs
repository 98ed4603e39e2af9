use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::des_null_to_default;
use crate::null_object::impl_null_object;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Average rating of an entity, from 0 to 5.
pub struct Rating {
    #[serde(deserialize_with = "des_null_to_default")]
    pub value: f32,

    #[serde(rename = "votes-count")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub votes_count: u32,
}

impl_null_object!(Rating, Rating::default());

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1} ({} votes)", self.value, self.votes_count)
    }
}

#[cfg(test)]
mod tests {
    use super::Rating;
    use crate::NullObject;

    #[test]
    fn rating_deserialize_test() {
        let answer = r#"{"value":null,"votes-count":0}"#;
        let answer: Rating = serde_json::from_str(answer).unwrap();

        assert!(answer.is_null_object());

        let answer = r#"{"value":4.35,"votes-count":20}"#;
        let answer: Rating = serde_json::from_str(answer).unwrap();

        assert_eq!(answer.votes_count, 20);
        assert_eq!(answer.to_string(), "4.3 (20 votes)");
    }
}
