use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::null_object::{impl_null_object, NULL_OBJECT_ID, NULL_OBJECT_NAME};
use crate::ser::to_pretty_json;
use crate::{Alias, Genre, LifeSpan, Tag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// A geographic region or settlement.
///
/// [https://musicbrainz.org/doc/Area]
pub struct Area {
    /// The MBID of the area.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub id: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    #[serde(rename = "sort-name")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub sort_name: String,

    /// Country, Subdivision, County, Municipality, City, District or Island.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub area_type: String,

    #[serde(rename = "type-id")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub type_id: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub disambiguation: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub annotation: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub aliases: Vec<Alias>,

    #[serde(deserialize_with = "des_null_to_default")]
    pub tags: Vec<Tag>,

    #[serde(deserialize_with = "des_null_to_default")]
    pub genres: Vec<Genre>,

    #[serde(rename = "iso-3166-1-codes")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub iso_3166_1_codes: Vec<String>,

    #[serde(rename = "iso-3166-2-codes")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub iso_3166_2_codes: Vec<String>,

    #[serde(rename = "life-span")]
    #[serde(with = "crate::fallback_on_null")]
    pub life_span: LifeSpan,

    /// Only used in search results.
    #[serde(deserialize_with = "des_null_to_default")]
    pub score: u32,
}

impl_null_object!(
    Area,
    Area {
        id: NULL_OBJECT_ID.to_string(),
        name: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_pretty_json(self))
    }
}
