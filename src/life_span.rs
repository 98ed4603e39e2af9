use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::des::{des_null_to_default, des_null_to_empty_string};
use crate::null_object::impl_null_object;
use crate::ser::to_pretty_json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// The period an entity existed or was active.
pub struct LifeSpan {
    /// Date this lifespan started.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub begin: String,

    /// Date this lifespan ended. Empty if `ended` is false.
    #[serde(deserialize_with = "des_null_to_empty_string")]
    pub end: String,

    #[serde(deserialize_with = "des_null_to_default")]
    pub ended: bool,
}

impl_null_object!(LifeSpan, LifeSpan::default());

impl LifeSpan {
    /// Returns the start date, missing month or day are taken as the first one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use brainz_fallback::LifeSpan;
    /// # use chrono::NaiveDate;
    /// #
    /// let span = LifeSpan { begin: "1987-02".to_string(), ..Default::default() };
    ///
    /// assert_eq!(span.begin_date(), NaiveDate::from_ymd_opt(1987, 2, 1));
    /// ```
    pub fn begin_date(&self) -> Option<NaiveDate> {
        parse_partial_date(&self.begin)
    }

    /// Returns the end date, missing month or day are taken as the first one.
    pub fn end_date(&self) -> Option<NaiveDate> {
        parse_partial_date(&self.end)
    }
}

impl fmt::Display for LifeSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", to_pretty_json(self))
    }
}

// MusicBrainz dates are "YYYY", "YYYY-MM" or "YYYY-MM-DD".
pub(crate) fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    let v: Vec<u32> = s
        .trim()
        .split('-')
        .map(|p| p.parse().ok())
        .collect::<Option<Vec<u32>>>()?;

    let (year, month, day) = match &v[..] {
        &[y] => (y, 1, 1),
        &[y, m] => (y, m, 1),
        &[y, m, d] => (y, m, d),
        _ => return None,
    };

    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}
