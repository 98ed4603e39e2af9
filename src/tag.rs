use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::null_object::{impl_null_object, NULL_OBJECT_NAME};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// A folksonomy tag and the number of users who applied it.
pub struct Tag {
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub count: u32,
}

impl_null_object!(
    Tag,
    Tag {
        name: NULL_OBJECT_NAME.to_string(),
        count: 0,
    }
);

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// A genre, a tag from the curated list of MusicBrainz genres.
pub struct Genre {
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub id: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub disambiguation: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub count: u32,
}

impl_null_object!(
    Genre,
    Genre {
        name: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}
