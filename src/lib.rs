//! # brainz_fallback
//!
//! The `brainz_fallback` crate keeps `null` out of the MusicBrainz data model.
//!
//! A field marked with `#[serde(with = "brainz_fallback::fallback_on_null")]`
//! receives the fallback registered for its type when the JSON value is `null`.
//! Every entity of the crate registers its "null object" as such a fallback;
//! strings, numbers and lists receive an empty value instead.
//!
//! ## Reading data
//!
//! ```rust
//! # use brainz_fallback::{Artist, NullObject};
//! #
//! let json = r#"{"id":"5b11f4ce-a62d-471e-81fc-a69a8278c7da","name":"Nirvana","gender":null,"end-area":null}"#;
//! let artist: Artist = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(artist.gender, "");
//! assert!(artist.end_area.is_null_object());
//! ```
//!
//! ## Making requests
//!
//! Create the required lookup and pass it to the client:
//!
//! ```rust,no_run
//! # use brainz_fallback::{Artist, ArtistInclude, ArtistLookup, BrainzClient};
//! #
//! let q = ArtistLookup::new(
//!     "5b11f4ce-a62d-471e-81fc-a69a8278c7da",
//!     &[ArtistInclude::Aliases, ArtistInclude::Tags],
//! )
//! .unwrap();
//!
//! let result = BrainzClient::<Artist>::get(&q).unwrap();
//! match result {
//!     Some(artist) => println!("{}", artist),
//!     None => println!("Nothing found"),
//! };
//! ```
//!

#[macro_use]
extern crate log;

use regex::Regex;
use std::{fmt, fmt::Display, str::FromStr};

mod error;
pub use crate::error::{BrainzServerError, Error};

/// A `Result` alias where the `Err` case is `brainz_fallback::Error`.
type Result<T> = std::result::Result<T, Error>;

mod null_object;
pub use crate::null_object::{fallback, register_fallback, FallbackMap, NullObject};
pub use crate::null_object::{NULL_OBJECT_ID, NULL_OBJECT_NAME};

pub mod fallback_on_null;

mod des;
pub use crate::des::{des_null_to_default, des_null_to_empty_string};

mod ser;
pub use crate::ser::to_pretty_json;

mod client;
pub use crate::client::{BrainzClient, BrainzClientInterface, ClientSettings};

mod lookup;
pub use crate::lookup::{join_includes, Include};
pub use crate::lookup::{AreaInclude, ArtistInclude, ReleaseGroupInclude};
pub use crate::lookup::{AreaLookup, ArtistLookup, ReleaseGroupLookup};

mod alias;
pub use crate::alias::Alias;

mod area;
pub use crate::area::Area;

mod artist;
pub use crate::artist::Artist;

mod artist_credit;
pub use crate::artist_credit::{credited_names, ArtistCredit};

mod life_span;
pub use crate::life_span::LifeSpan;

mod rating;
pub use crate::rating::Rating;

mod release_group;
pub use crate::release_group::ReleaseGroup;

mod tag;
pub use crate::tag::{Genre, Tag};

lazy_static::lazy_static! {
    static ref MBID_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A MusicBrainz identifier, the UUID of an entity.
pub struct Mbid(String);

impl Mbid {
    /// Returns true if the text looks like an MBID: 8-4-4-4-12 hexadecimal digits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use brainz_fallback::Mbid;
    /// #
    /// assert!(Mbid::appears_valid("5b11f4ce-a62d-471e-81fc-a69a8278c7da"));
    /// assert!(!Mbid::appears_valid("5b11f4ce-a62d-471e-81fc"));
    /// ```
    pub fn appears_valid(s: &str) -> bool {
        MBID_REGEX.is_match(s)
    }

    /// Returns the identifier as text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Mbid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Mbid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if !Mbid::appears_valid(s) {
            return Err(Error::ParseMbidError(s.to_string()));
        }

        Ok(Mbid(s.to_lowercase()))
    }
}
