use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::null_object::{impl_null_object, NULL_OBJECT_ID, NULL_OBJECT_NAME};
use crate::ser::to_pretty_json;
use crate::{Alias, Area, Genre, LifeSpan, NullObject, Rating, ReleaseGroup, Tag};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// A musician, a group of musicians, or another music professional.
///
/// [https://musicbrainz.org/doc/Artist]
pub struct Artist {
    /// The MBID of the artist.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub id: String,

    /// Person, Group, Orchestra, Choir, Character or Other.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub artist_type: String,

    #[serde(rename = "type-id")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub type_id: String,

    /// The official name of the artist, be it a person or a band.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    /// A variant of the name used when sorting artists by name.
    #[serde(rename = "sort-name")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub sort_name: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub country: String,

    #[serde(with = "crate::fallback_on_null")]
    pub area: Area,

    #[serde(rename = "begin-area")]
    #[serde(with = "crate::fallback_on_null")]
    pub begin_area: Area,

    #[serde(rename = "end-area")]
    #[serde(with = "crate::fallback_on_null")]
    pub end_area: Area,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub disambiguation: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub annotation: String,

    /// For a person it is birth and death, for a group it is formation and dissolution.
    #[serde(rename = "life-span")]
    #[serde(with = "crate::fallback_on_null")]
    pub life_span: LifeSpan,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub gender: String,

    #[serde(rename = "gender-id")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub gender_id: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub aliases: Vec<Alias>,

    #[serde(deserialize_with = "des_null_to_default")]
    pub genres: Vec<Genre>,

    #[serde(deserialize_with = "des_null_to_default")]
    pub tags: Vec<Tag>,

    /// Interested Party Information codes.
    #[serde(deserialize_with = "des_null_to_default")]
    pub ipis: Vec<String>,

    /// International Standard Name Identifiers.
    #[serde(deserialize_with = "des_null_to_default")]
    pub isnis: Vec<String>,

    #[serde(with = "crate::fallback_on_null")]
    pub rating: Rating,

    #[serde(rename = "release-groups")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub release_groups: Vec<ReleaseGroup>,

    /// Only used in search results.
    #[serde(deserialize_with = "des_null_to_default")]
    pub score: u32,
}

impl Default for Artist {
    fn default() -> Self {
        Artist {
            id: String::new(),
            artist_type: String::new(),
            type_id: String::new(),
            name: String::new(),
            sort_name: String::new(),
            country: String::new(),
            area: Area::null_object().clone(),
            begin_area: Area::null_object().clone(),
            end_area: Area::null_object().clone(),
            disambiguation: String::new(),
            annotation: String::new(),
            life_span: LifeSpan::null_object().clone(),
            gender: String::new(),
            gender_id: String::new(),
            aliases: vec![],
            genres: vec![],
            tags: vec![],
            ipis: vec![],
            isnis: vec![],
            rating: Rating::null_object().clone(),
            release_groups: vec![],
            score: 0,
        }
    }
}

impl_null_object!(
    Artist,
    Artist {
        id: NULL_OBJECT_ID.to_string(),
        name: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_pretty_json(self))
    }
}
