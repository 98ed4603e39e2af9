use reqwest::header::InvalidHeaderValue as HeaderError;
use reqwest::Error as ReqwestError;
use serde::Deserialize;
use std::error::Error as StdError;
use std::fmt;

use crate::des::des_null_to_empty_string;

/// The failure description the MusicBrainz server sends as
/// `{"error": "...", "help": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrainzServerError {
    /// What went wrong, e.g. "Invalid mbid.".
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub error: String,

    /// Where to read about the request format. Often empty.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub help: String,
}

impl BrainzServerError {
    pub fn new(error: &str, help: &str) -> Self {
        BrainzServerError {
            error: error.trim().to_string(),
            help: help.trim().to_string(),
        }
    }
}

impl fmt::Display for BrainzServerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.help.is_empty() {
            write!(f, "{}", self.error)
        } else {
            write!(f, "{} ({})", self.error, self.help)
        }
    }
}

impl StdError for BrainzServerError {}

/// The Errors wrapper that may occur.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// No fallback value is registered for the type.
    FallbackNotConfigured(&'static str),
    /// Parsing of the MusicBrainz identifier failed.
    ParseMbidError(String),
    /// Parsing of the server url failed.
    ParseUrlError(String),
    /// The request finished with an error.
    ReqwestError(ReqwestError),
    /// The server returned a broken header.
    ReqwestHeaderError(HeaderError),
    /// Data deserialization failed.
    DeserializeError(String),
    /// The server keeps rejecting requests because of the rate limit.
    BrainzServerOverloaded,
    /// The server returned a bad reply.
    FailBrainzResponse,
    /// The server returned an error description.
    BrainzError(BrainzServerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::FallbackNotConfigured(type_name) => {
                write!(f, "fallback map not configured for {}", type_name)
            }
            Error::ParseMbidError(ref s) => {
                debug!("parsing mbid error: {}", s);
                write!(f, "invalid MusicBrainz identifier \"{}\"", s)
            }
            Error::ParseUrlError(ref s) => {
                debug!("parsing url error: {}", s);
                write!(f, "invalid server url \"{}\"", s)
            }
            Error::ReqwestError(ref e) => {
                error!("{}", e);
                write!(f, "failed to get data from the MusicBrainz server")
            }
            Error::ReqwestHeaderError(ref e) => {
                error!("{}", e);
                write!(f, "invalid request header")
            }
            Error::DeserializeError(ref e) => {
                error!("{}", e);
                write!(f, "failed to unpack data")
            }
            Error::BrainzServerOverloaded => {
                write!(f, "the MusicBrainz server is busy, try again later")
            }
            Error::FailBrainzResponse => {
                write!(f, "the MusicBrainz server returned a bad reply")
            }
            Error::BrainzError(ref e) => e.fmt(f),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::ReqwestError(ref e) => Some(e),
            Error::ReqwestHeaderError(ref e) => Some(e),
            Error::BrainzError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReqwestError> for Error {
    fn from(error: ReqwestError) -> Error {
        Error::ReqwestError(error)
    }
}

impl From<HeaderError> for Error {
    fn from(error: HeaderError) -> Error {
        Error::ReqwestHeaderError(error)
    }
}

impl From<BrainzServerError> for Error {
    fn from(error: BrainzServerError) -> Error {
        Error::BrainzError(error)
    }
}
