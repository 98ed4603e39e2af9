use serde::de::DeserializeOwned;
use std::any::type_name;

use crate::client::{BrainzClientInterface, ClientSettings};
use crate::{error::Error, Result};
use crate::{Area, Artist, Mbid, NullObject, ReleaseGroup};

/// An `inc` parameter value of a lookup.
pub trait Include {
    fn value(&self) -> &'static str;
}

/// Joins the includes the way MusicBrainz expects: "aliases+tags".
///
/// Returns `None` if there is nothing to include.
pub fn join_includes<I: Include>(includes: &[I]) -> Option<String> {
    if includes.is_empty() {
        return None;
    }

    let mut values: Vec<&str> = Vec::with_capacity(includes.len());
    for value in includes.iter().map(|i| i.value()) {
        if !values.contains(&value) {
            values.push(value);
        }
    }
    Some(values.join("+"))
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Additional data of an artist lookup.
pub enum ArtistInclude {
    Recordings,
    Releases,
    ReleaseGroups,
    Works,
    Aliases,
    Annotation,
    Tags,
    Ratings,
    Genres,
    AreaRels,
    ArtistRels,
    UrlRels,
}

impl Include for ArtistInclude {
    fn value(&self) -> &'static str {
        match *self {
            ArtistInclude::Recordings => "recordings",
            ArtistInclude::Releases => "releases",
            ArtistInclude::ReleaseGroups => "release-groups",
            ArtistInclude::Works => "works",
            ArtistInclude::Aliases => "aliases",
            ArtistInclude::Annotation => "annotation",
            ArtistInclude::Tags => "tags",
            ArtistInclude::Ratings => "ratings",
            ArtistInclude::Genres => "genres",
            ArtistInclude::AreaRels => "area-rels",
            ArtistInclude::ArtistRels => "artist-rels",
            ArtistInclude::UrlRels => "url-rels",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Additional data of an area lookup.
pub enum AreaInclude {
    Aliases,
    Annotation,
    Tags,
    Ratings,
    Genres,
}

impl Include for AreaInclude {
    fn value(&self) -> &'static str {
        match *self {
            AreaInclude::Aliases => "aliases",
            AreaInclude::Annotation => "annotation",
            AreaInclude::Tags => "tags",
            AreaInclude::Ratings => "ratings",
            AreaInclude::Genres => "genres",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Additional data of a release group lookup.
pub enum ReleaseGroupInclude {
    Artists,
    Releases,
    Aliases,
    Annotation,
    Tags,
    Ratings,
    Genres,
}

impl Include for ReleaseGroupInclude {
    fn value(&self) -> &'static str {
        match *self {
            ReleaseGroupInclude::Artists => "artists",
            ReleaseGroupInclude::Releases => "releases",
            ReleaseGroupInclude::Aliases => "aliases",
            ReleaseGroupInclude::Annotation => "annotation",
            ReleaseGroupInclude::Tags => "tags",
            ReleaseGroupInclude::Ratings => "ratings",
            ReleaseGroupInclude::Genres => "genres",
        }
    }
}

/// Artist lookup by MBID.
pub struct ArtistLookup {
    mbid: Mbid,
    includes: Vec<ArtistInclude>,
}

impl ArtistLookup {
    /// Takes an artist MBID and the additional data to include.
    ///
    /// # Errors
    ///
    /// The method fails if the MBID is malformed.
    pub fn new(mbid: &str, includes: &[ArtistInclude]) -> Result<Self> {
        let mbid: Mbid = mbid.parse()?;
        debug!("query: artist {}", mbid);

        Ok(ArtistLookup {
            mbid,
            includes: includes.to_vec(),
        })
    }
}

impl BrainzClientInterface<Artist> for ArtistLookup {
    fn request_data(&self, settings: &ClientSettings) -> String {
        lookup_url(settings, "artist", &self.mbid, join_includes(&self.includes))
    }

    fn deserialize_reply_data(&self, body: &str) -> Result<Option<Artist>> {
        deserialize_entity(body)
    }
}

/// Area lookup by MBID.
pub struct AreaLookup {
    mbid: Mbid,
    includes: Vec<AreaInclude>,
}

impl AreaLookup {
    /// Takes an area MBID and the additional data to include.
    ///
    /// # Errors
    ///
    /// The method fails if the MBID is malformed.
    pub fn new(mbid: &str, includes: &[AreaInclude]) -> Result<Self> {
        let mbid: Mbid = mbid.parse()?;
        debug!("query: area {}", mbid);

        Ok(AreaLookup {
            mbid,
            includes: includes.to_vec(),
        })
    }
}

impl BrainzClientInterface<Area> for AreaLookup {
    fn request_data(&self, settings: &ClientSettings) -> String {
        lookup_url(settings, "area", &self.mbid, join_includes(&self.includes))
    }

    fn deserialize_reply_data(&self, body: &str) -> Result<Option<Area>> {
        deserialize_entity(body)
    }
}

/// Release group lookup by MBID.
pub struct ReleaseGroupLookup {
    mbid: Mbid,
    includes: Vec<ReleaseGroupInclude>,
}

impl ReleaseGroupLookup {
    /// Takes a release group MBID and the additional data to include.
    ///
    /// # Errors
    ///
    /// The method fails if the MBID is malformed.
    pub fn new(mbid: &str, includes: &[ReleaseGroupInclude]) -> Result<Self> {
        let mbid: Mbid = mbid.parse()?;
        debug!("query: release group {}", mbid);

        Ok(ReleaseGroupLookup {
            mbid,
            includes: includes.to_vec(),
        })
    }
}

impl BrainzClientInterface<ReleaseGroup> for ReleaseGroupLookup {
    fn request_data(&self, settings: &ClientSettings) -> String {
        lookup_url(
            settings,
            "release-group",
            &self.mbid,
            join_includes(&self.includes),
        )
    }

    fn deserialize_reply_data(&self, body: &str) -> Result<Option<ReleaseGroup>> {
        deserialize_entity(body)
    }
}

fn lookup_url(
    settings: &ClientSettings,
    entity: &str,
    mbid: &Mbid,
    inc: Option<String>,
) -> String {
    match inc {
        Some(inc) => format!(
            "{}/{}/{}\
                ?inc={}\
                &fmt=json",
            settings.base_url(),
            entity,
            mbid,
            inc
        ),
        None => format!("{}/{}/{}?fmt=json", settings.base_url(), entity, mbid),
    }
}

fn deserialize_entity<T>(body: &str) -> Result<Option<T>>
where
    T: DeserializeOwned + NullObject,
{
    let entity: T = match serde_json::from_str(body) {
        Err(e) => return Err(Error::DeserializeError(format!("{}", e))),
        Ok(r) => r,
    };

    if entity.is_null_object() {
        info!("{} is a null object", type_name::<T>());
        return Ok(None);
    }

    Ok(Some(entity))
}

#[cfg(test)]
mod tests {
    use super::{join_includes, AreaInclude, ArtistInclude, ReleaseGroupInclude};
    use super::{AreaLookup, ArtistLookup, ReleaseGroupLookup};
    use crate::client::{BrainzClientInterface, ClientSettings};
    use crate::error::Error;
    use crate::NullObject;

    const NIRVANA: &str = "5b11f4ce-a62d-471e-81fc-a69a8278c7da";

    #[test]
    fn join_includes_test() {
        assert_eq!(join_includes::<ArtistInclude>(&[]), None);
        assert_eq!(
            join_includes(&[ArtistInclude::Aliases]),
            Some("aliases".to_string())
        );
        assert_eq!(
            join_includes(&[
                ArtistInclude::ReleaseGroups,
                ArtistInclude::Tags,
                ArtistInclude::Tags,
                ArtistInclude::UrlRels,
            ]),
            Some("release-groups+tags+url-rels".to_string())
        );
        assert_eq!(
            join_includes(&[
                ArtistInclude::Aliases,
                ArtistInclude::Tags,
                ArtistInclude::Aliases,
            ]),
            Some("aliases+tags".to_string())
        );
    }

    #[test]
    fn lookup_test() {
        assert!(ArtistLookup::new("", &[]).is_err());
        assert!(ArtistLookup::new("nirvana", &[]).is_err());
        assert!(matches!(
            AreaLookup::new("45f07934-675a-46d6-a577", &[]),
            Err(Error::ParseMbidError(_))
        ));
        assert!(ArtistLookup::new(NIRVANA, &[]).is_ok());
    }

    #[test]
    fn request_data_test() {
        let settings = ClientSettings::default();

        let q = ArtistLookup::new(NIRVANA, &[]).unwrap();
        assert_eq!(
            q.request_data(&settings),
            "https://musicbrainz.org/ws/2/artist/5b11f4ce-a62d-471e-81fc-a69a8278c7da?fmt=json"
        );

        let includes = [ArtistInclude::Aliases, ArtistInclude::Genres];
        let q = ArtistLookup::new(NIRVANA, &includes).unwrap();
        assert_eq!(
            q.request_data(&settings),
            "https://musicbrainz.org/ws/2/artist/5b11f4ce-a62d-471e-81fc-a69a8278c7da?inc=aliases+genres&fmt=json"
        );

        let q = AreaLookup::new(
            "45f07934-675a-46d6-a577-6f8637a411b1",
            &[AreaInclude::Aliases],
        )
        .unwrap();
        assert_eq!(
            q.request_data(&settings),
            "https://musicbrainz.org/ws/2/area/45f07934-675a-46d6-a577-6f8637a411b1?inc=aliases&fmt=json"
        );

        let settings = settings.with_base_url("http://localhost:5000/ws/2").unwrap();
        let q = ReleaseGroupLookup::new(
            "1b022e01-4da6-387b-8658-8678046e4cef",
            &[ReleaseGroupInclude::Artists],
        )
        .unwrap();
        assert_eq!(
            q.request_data(&settings),
            "http://localhost:5000/ws/2/release-group/1b022e01-4da6-387b-8658-8678046e4cef?inc=artists&fmt=json"
        );
    }

    #[test]
    fn deserialize_reply_data_test() {
        let q = ArtistLookup::new(NIRVANA, &[]).unwrap();

        let answer = r#"{"id":"5b11f4ce-a62d-471e-81fc-a69a8278c7da","name":"Nirvana","area":null,"life-span":null}"#;
        let artist = q.deserialize_reply_data(answer).unwrap().unwrap();
        assert_eq!(artist.name, "Nirvana");
        assert!(artist.area.is_null_object());
        assert!(artist.life_span.is_null_object());

        let answer = r#"{"id":"NullObjectId","name":"NullObjectName"}"#;
        assert_eq!(q.deserialize_reply_data(answer).unwrap(), None);

        let answer = r#"{"id":"5b11f4ce"#;
        assert!(matches!(
            q.deserialize_reply_data(answer),
            Err(Error::DeserializeError(_))
        ));
    }
}
