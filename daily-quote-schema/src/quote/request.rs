use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /quotes`.
///
/// Both fields are required strings. Any other key in the payload (including a client
/// supplied `id`) is ignored. Only the object form is accepted; the positional array form
/// that derived impls allow (`["author", "text"]`) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateQuoteRequest {
    pub author: String,
    pub text: String,
}

impl<'de> Deserialize<'de> for CreateQuoteRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateQuoteRequestVisitor)
    }
}

struct CreateQuoteRequestVisitor;

impl<'de> Visitor<'de> for CreateQuoteRequestVisitor {
    type Value = CreateQuoteRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with string fields `author` and `text`")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut author: Option<String> = None;
        let mut text: Option<String> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "author" => {
                    if author.is_some() {
                        return Err(de::Error::duplicate_field("author"));
                    }
                    author = Some(map.next_value()?);
                }
                "text" => {
                    if text.is_some() {
                        return Err(de::Error::duplicate_field("text"));
                    }
                    text = Some(map.next_value()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(CreateQuoteRequest {
            author: author.ok_or_else(|| de::Error::missing_field("author"))?,
            text: text.ok_or_else(|| de::Error::missing_field("text"))?,
        })
    }
}
