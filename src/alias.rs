use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::null_object::{impl_null_object, NULL_OBJECT_NAME};
use crate::ser::to_pretty_json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// An alternate name or a misspelling of an entity.
pub struct Alias {
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    #[serde(rename = "sort-name")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub sort_name: String,

    #[serde(rename = "type")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub alias_type: String,

    #[serde(rename = "type-id")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub type_id: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub primary: bool,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub locale: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub begin: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub end: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub ended: bool,

    #[serde(rename = "begin-date")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub begin_date: String,

    #[serde(rename = "end-date")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub end_date: String,
}

impl_null_object!(
    Alias,
    Alias {
        name: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl Alias {
    /// Returns `begin`, or `begin-date` when the former is empty.
    pub fn starting_date(&self) -> &str {
        if self.begin.is_empty() {
            &self.begin_date
        } else {
            &self.begin
        }
    }

    /// Returns `end`, or `end-date` when the former is empty.
    pub fn ending_date(&self) -> &str {
        if self.end.is_empty() {
            &self.end_date
        } else {
            &self.end
        }
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_pretty_json(self))
    }
}
