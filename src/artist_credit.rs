use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::des_null_to_empty_string;
use crate::null_object::{impl_null_object, NULL_OBJECT_NAME};
use crate::{Artist, NullObject};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// The artist as credited on a release, a release group or a recording.
pub struct ArtistCredit {
    /// The name used in the credit, it may differ from the artist's name.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub name: String,

    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub joinphrase: String,

    #[serde(with = "crate::fallback_on_null")]
    pub artist: Artist,
}

impl Default for ArtistCredit {
    fn default() -> Self {
        ArtistCredit {
            name: String::new(),
            joinphrase: String::new(),
            artist: Artist::null_object().clone(),
        }
    }
}

impl_null_object!(
    ArtistCredit,
    ArtistCredit {
        name: NULL_OBJECT_NAME.to_string(),
        ..Default::default()
    }
);

impl fmt::Display for ArtistCredit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.name, self.joinphrase)
    }
}

/// Joins the credits into the text shown on the cover, e.g. "Simon & Garfunkel".
pub fn credited_names(credits: &[ArtistCredit]) -> String {
    credits.iter().map(|c| c.to_string()).collect()
}
