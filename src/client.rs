use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use std::marker::PhantomData;
use std::thread;
use std::time::Duration;
use url::Url;

use crate::error::{BrainzServerError, Error};
use crate::Result;

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const BRAINZ_API_URL: &str = "https://musicbrainz.org/ws/2";

const DEFAULT_RETRIES: u32 = 3;

const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Settings of the client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    base_url: String,
    user_agent: String,
    retries: u32,
    retry_delay: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        ClientSettings {
            base_url: BRAINZ_API_URL.to_string(),
            user_agent: APP_USER_AGENT.to_string(),
            retries: DEFAULT_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

impl ClientSettings {
    /// Sets the root of the web service, e.g. a mirror of MusicBrainz.
    ///
    /// # Errors
    ///
    /// The method fails if the url is not an absolute http(s) url.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = match Url::parse(base_url.trim()) {
            Ok(u) => u,
            Err(_) => return Err(Error::ParseUrlError(base_url.to_string())),
        };
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::ParseUrlError(base_url.to_string()));
        }

        self.base_url = url.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Sets the `User-Agent` sent with every request.
    ///
    /// MusicBrainz asks for "application/version ( contact )".
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Sets how many times a rejected request is repeated.
    pub fn with_retries(mut self, retries: u32, retry_delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = retry_delay;
        self
    }

    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[inline]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[inline]
    pub fn retries(&self) -> u32 {
        self.retries
    }

    #[inline]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

pub trait BrainzClientInterface<T> {
    fn request_data(&self, settings: &ClientSettings) -> String;

    fn deserialize_reply_data(&self, body: &str) -> Result<Option<T>>;
}

/// The client gets data from the MusicBrainz server.
pub struct BrainzClient<T> {
    _marker: PhantomData<T>,
}

impl<T> BrainzClient<T> {
    /// Takes a lookup and makes a request to the server with the default settings.
    ///
    /// # Errors
    ///
    /// The method fails if there was an error while processing request
    /// or received data couldn't be deserialized.
    pub fn get<U>(lookup: &U) -> Result<Option<T>>
    where
        U: BrainzClientInterface<T>,
    {
        BrainzClient::get_with(lookup, &ClientSettings::default())
    }

    /// Takes a lookup and makes a request to the server.
    ///
    /// Returns `None` if the entity is not found.
    pub fn get_with<U>(lookup: &U, settings: &ClientSettings) -> Result<Option<T>>
    where
        U: BrainzClientInterface<T>,
    {
        let request = lookup.request_data(settings);
        debug!("request: {}", request);

        let headers = request_headers(settings)?;

        for attempt in 0..=settings.retries {
            if attempt > 0 {
                // The server allows about one request per second.
                thread::sleep(settings.retry_delay);
            }

            let body = match send_blocking_request(&request, headers.clone())? {
                Reply::Body(b) => b,
                Reply::Empty | Reply::NotFound => return Ok(None),
                Reply::Busy => {
                    warn!("server is busy, attempt {}", attempt + 1);
                    continue;
                }
            };

            return lookup.deserialize_reply_data(&body);
        }

        Err(Error::BrainzServerOverloaded)
    }
}

enum Reply {
    Body(String),
    Empty,
    NotFound,
    Busy,
}

fn send_blocking_request(query: &str, headers: HeaderMap) -> Result<Reply> {
    let request = reqwest::blocking::Client::new().get(query).headers(headers);

    let result = request.send()?;
    let status = result.status();

    if status == StatusCode::SERVICE_UNAVAILABLE || status == StatusCode::TOO_MANY_REQUESTS {
        return Ok(Reply::Busy);
    }

    if status == StatusCode::NOT_FOUND {
        info!("nothing found at {}", query);
        return Ok(Reply::NotFound);
    }

    let body = result.text()?;

    if !status.is_success() {
        error!("server returned {}", status);
        return Err(parse_error_reply(&body));
    }

    if body.trim().is_empty() {
        warn!("response body is empty");
        return Ok(Reply::Empty);
    }

    Ok(Reply::Body(body))
}

fn request_headers(settings: &ClientSettings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(&settings.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn parse_error_reply(body: &str) -> Error {
    let reply: BrainzServerError = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            debug!("error reply is not recognized: {}", e);
            return Error::FailBrainzResponse;
        }
    };
    trace!("reply: {:?}", reply);

    if reply.error.trim().is_empty() {
        return Error::FailBrainzResponse;
    }

    Error::BrainzError(BrainzServerError::new(&reply.error, &reply.help))
}

#[cfg(test)]
mod tests {
    use super::{parse_error_reply, request_headers, BrainzClient, ClientSettings};
    use super::{APP_USER_AGENT, BRAINZ_API_URL};
    use crate::error::{BrainzServerError, Error};
    use crate::{Artist, ArtistLookup};
    use mockito::{mock, Matcher};
    use reqwest::header::{ACCEPT, USER_AGENT};
    use std::time::Duration;

    const NIRVANA: &str = "5b11f4ce-a62d-471e-81fc-a69a8278c7da";

    fn artist_path() -> Matcher {
        Matcher::Regex(format!("^/ws/2/artist/{}", NIRVANA))
    }

    fn local_settings(retries: u32) -> ClientSettings {
        ClientSettings::default()
            .with_base_url(&format!("{}/ws/2", mockito::server_url()))
            .unwrap()
            .with_user_agent("Brainz/1.0 ( me@example.com )")
            .with_retries(retries, Duration::from_millis(5))
    }

    fn get_artist(retries: u32) -> crate::Result<Option<Artist>> {
        let q = ArtistLookup::new(NIRVANA, &[]).unwrap();
        BrainzClient::<Artist>::get_with(&q, &local_settings(retries))
    }

    #[test]
    fn settings_test() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url(), BRAINZ_API_URL);
        assert_eq!(settings.user_agent(), APP_USER_AGENT);
        assert_eq!(settings.retries(), 3);

        let settings = ClientSettings::default()
            .with_base_url("http://localhost:5000/ws/2/")
            .unwrap()
            .with_user_agent("Brainz/1.0 ( me@example.com )")
            .with_retries(0, Duration::from_millis(10));
        assert_eq!(settings.base_url(), "http://localhost:5000/ws/2");
        assert_eq!(settings.user_agent(), "Brainz/1.0 ( me@example.com )");
        assert_eq!(settings.retries(), 0);
        assert_eq!(settings.retry_delay(), Duration::from_millis(10));

        assert!(ClientSettings::default().with_base_url("").is_err());
        assert!(ClientSettings::default().with_base_url("ftp://host").is_err());
    }

    #[test]
    fn headers_test() {
        let headers = request_headers(&ClientSettings::default()).unwrap();
        assert_eq!(headers[USER_AGENT], APP_USER_AGENT);
        assert_eq!(headers[ACCEPT], "application/json");

        let settings = ClientSettings::default().with_user_agent("bad\nagent");
        assert!(request_headers(&settings).is_err());
    }

    #[test]
    fn error_reply_test() {
        let answer = r#"{"error":"Invalid mbid.","help":"For usage, please see: https://musicbrainz.org/development/mmd"}"#;
        let data = BrainzServerError::new(
            "Invalid mbid.",
            "For usage, please see: https://musicbrainz.org/development/mmd",
        );
        match parse_error_reply(answer) {
            Error::BrainzError(e) => assert_eq!(e, data),
            e => panic!("unexpected error: {:?}", e),
        }

        let answer = r#"{"error":"Not Found","help":null}"#;
        assert_eq!(parse_error_reply(answer).to_string(), "Not Found");

        let answer = "<html>Bad Gateway</html>";
        let data = Error::FailBrainzResponse;
        assert_eq!(parse_error_reply(answer).to_string(), data.to_string());

        let answer = r#"{"help":"x"}"#;
        assert_eq!(parse_error_reply(answer).to_string(), data.to_string());
    }

    #[test]
    fn not_found_test() {
        let m = mock("GET", artist_path())
            .with_status(404)
            .with_body(r#"{"error":"Not Found"}"#)
            .expect(1)
            .create();

        assert_eq!(get_artist(2).unwrap(), None);
        m.assert();
    }

    #[test]
    fn rate_limited_then_ok_test() {
        let busy = mock("GET", artist_path())
            .with_status(429)
            .expect(1)
            .create();
        let ok = mock("GET", artist_path())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"5b11f4ce-a62d-471e-81fc-a69a8278c7da","name":"Nirvana"}"#)
            .expect(1)
            .create();

        let artist = get_artist(2).unwrap().unwrap();
        assert_eq!(artist.name, "Nirvana");
        busy.assert();
        ok.assert();
    }

    #[test]
    fn overloaded_test() {
        let m = mock("GET", artist_path())
            .with_status(503)
            .expect(3)
            .create();

        assert!(matches!(get_artist(2), Err(Error::BrainzServerOverloaded)));
        m.assert();
    }

    #[test]
    fn error_body_test() {
        let m = mock("GET", artist_path())
            .with_status(400)
            .with_body(r#"{"error":"Invalid mbid.","help":"h"}"#)
            .expect(1)
            .create();

        match get_artist(2) {
            Err(Error::BrainzError(e)) => {
                assert_eq!(e, BrainzServerError::new("Invalid mbid.", "h"))
            }
            r => panic!("unexpected reply: {:?}", r),
        }
        m.assert();
    }

    #[test]
    fn empty_body_test() {
        let m = mock("GET", artist_path())
            .with_status(200)
            .with_body("")
            .expect(1)
            .create();

        assert_eq!(get_artist(2).unwrap(), None);
        m.assert();
    }

    #[test]
    fn request_headers_sent_test() {
        let m = mock("GET", artist_path())
            .match_header("user-agent", "Brainz/1.0 ( me@example.com )")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(r#"{"id":"5b11f4ce-a62d-471e-81fc-a69a8278c7da","name":"Nirvana"}"#)
            .expect(1)
            .create();

        assert!(get_artist(0).unwrap().is_some());
        m.assert();
    }
}
