use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::artist_credit::credited_names;
use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::life_span::parse_partial_date;
use crate::null_object::{impl_null_object, NULL_OBJECT_ID, NULL_OBJECT_NAME};
use crate::ser::to_pretty_json;
use crate::{ArtistCredit, Genre, Rating, Tag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Groups the different releases of the same album, single or EP.
///
/// [https://musicbrainz.org/doc/Release_Group]
pub struct ReleaseGroup {
    /// The MBID of the release group.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub id: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub title: String,

    /// Album, Single, EP, Broadcast or Other.
    #[serde(rename = "primary-type")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub primary_type: String,

    #[serde(rename = "primary-type-id")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub primary_type_id: String,

    /// Compilation, Soundtrack, Live, Remix and so on.
    #[serde(rename = "secondary-types")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub secondary_types: Vec<String>,

    #[serde(rename = "secondary-type-ids")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub secondary_type_ids: Vec<String>,

    #[serde(rename = "first-release-date")]
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub first_release_date: String,

    #[serde(rename = "artist-credit")]
    #[serde(deserialize_with = "des_null_to_default")]
    pub artist_credit: Vec<ArtistCredit>,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub disambiguation: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub annotation: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub tags: Vec<Tag>,

    #[serde(deserialize_with = "des_null_to_default")]
    pub genres: Vec<Genre>,

    #[serde(with = "crate::fallback_on_null")]
    pub rating: Rating,

    /// Only used in search results.
    #[serde(deserialize_with = "des_null_to_default")]
    pub score: u32,
}

impl_null_object!(
    ReleaseGroup,
    ReleaseGroup {
        id: NULL_OBJECT_ID.to_string(),
        title: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl ReleaseGroup {
    /// Returns the artist credit as printed on the release.
    pub fn artist_name(&self) -> String {
        credited_names(&self.artist_credit)
    }

    /// Returns the year of the first release, if known.
    pub fn first_release_year(&self) -> Option<i32> {
        parse_partial_date(&self.first_release_date).map(|d| d.year())
    }
}

impl fmt::Display for ReleaseGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_pretty_json(self))
    }
}
