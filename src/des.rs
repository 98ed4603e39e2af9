//! Deserializers for the fields of the data model.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use std::fmt;

/// Turns `null` into `T::default()`: zero, `false`, an empty list.
pub fn des_null_to_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let v = Option::<T>::deserialize(de)?;
    Ok(v.unwrap_or_default())
}

/// Turns `null` into an empty string.
///
/// Any other token which is not a string is skipped with a warning
/// and becomes an empty string too.
pub fn des_null_to_empty_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    de.deserialize_any(LenientStringVisitor)
}

struct LenientStringVisitor;

impl LenientStringVisitor {
    fn unexpected<E>(token: &str) -> Result<String, E> {
        warn!("unrecognized token {}, expecting null or string", token);
        Ok(String::new())
    }
}

impl<'de> Visitor<'de> for LenientStringVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("null or a string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, de: D) -> Result<String, D::Error> {
        des_null_to_empty_string(de)
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<String, E> {
        Self::unexpected("BOOLEAN")
    }

    fn visit_i64<E: de::Error>(self, _v: i64) -> Result<String, E> {
        Self::unexpected("NUMBER")
    }

    fn visit_u64<E: de::Error>(self, _v: u64) -> Result<String, E> {
        Self::unexpected("NUMBER")
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<String, E> {
        Self::unexpected("NUMBER")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<String, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Self::unexpected("BEGIN_ARRAY")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<String, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Self::unexpected("BEGIN_OBJECT")
    }
}

#[cfg(test)]
mod tests {
    use super::{des_null_to_default, des_null_to_empty_string};
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Default)]
    struct Primitives {
        #[serde(deserialize_with = "des_null_to_default")]
        int: i32,

        #[serde(deserialize_with = "des_null_to_default")]
        long: i64,

        #[serde(deserialize_with = "des_null_to_default")]
        flag: bool,

        #[serde(deserialize_with = "des_null_to_default")]
        double: f64,

        #[serde(deserialize_with = "des_null_to_default")]
        float: f32,

        #[serde(deserialize_with = "des_null_to_default")]
        list: Vec<String>,
    }

    #[derive(Deserialize, Debug, Default)]
    struct Texts {
        #[serde(default)]
        #[serde(deserialize_with = "des_null_to_empty_string")]
        first: String,

        #[serde(default)]
        #[serde(deserialize_with = "des_null_to_empty_string")]
        second: String,

        #[serde(default)]
        #[serde(deserialize_with = "des_null_to_empty_string")]
        third: String,

        #[serde(default)]
        last: u32,
    }

    #[test]
    fn null_to_default_test() {
        let answer = r#"{"int":null,"long":null,"flag":null,"double":null,"float":null,"list":null}"#;
        let answer: Primitives = serde_json::from_str(answer).unwrap();

        assert_eq!(answer.int, 0);
        assert_eq!(answer.long, 0);
        assert!(!answer.flag);
        assert_eq!(answer.double, 0.0);
        assert_eq!(answer.float, 0.0);
        assert!(answer.list.is_empty());

        let answer = r#"{"int":-3,"long":9000000000,"flag":true,"double":1.5,"float":2.5,"list":["a"]}"#;
        let answer: Primitives = serde_json::from_str(answer).unwrap();

        assert_eq!(answer.int, -3);
        assert_eq!(answer.long, 9000000000);
        assert!(answer.flag);
        assert_eq!(answer.double, 1.5);
        assert_eq!(answer.float, 2.5);
        assert_eq!(answer.list, vec!["a".to_string()]);
    }

    #[test]
    fn null_to_empty_string_test() {
        let answer = r#"{"first":null,"second":"Nirvana","third":"","last":7}"#;
        let answer: Texts = serde_json::from_str(answer).unwrap();

        assert_eq!(answer.first, "");
        assert_eq!(answer.second, "Nirvana");
        assert_eq!(answer.third, "");
        assert_eq!(answer.last, 7);

        let answer: Texts = serde_json::from_str("{}").unwrap();
        assert_eq!(answer.first, "");
    }

    #[test]
    fn unexpected_token_test() {
        let answer = r#"{"first":12,"second":{"a":[1,2,{"b":null}]},"third":[true,"x"],"last":7}"#;
        let answer: Texts = serde_json::from_str(answer).unwrap();

        assert_eq!(answer.first, "");
        assert_eq!(answer.second, "");
        assert_eq!(answer.third, "");
        assert_eq!(answer.last, 7);
    }
}
