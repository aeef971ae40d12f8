use std::fmt;
use std::str::FromStr;

use crate::error::MimeError;
use crate::mime;

/// Description of a single elementary stream as handed to a muxer.
///
/// Every key other than the MIME type is optional. Keys also accept the
/// hyphenated spellings used by platform media format dictionaries
/// (`"mime"`, `"bitrate"`, `"channel-count"`, `"sample-rate"`). A document
/// must use only one spelling per key: giving both `mime` and `mime_type`
/// is a duplicate field error.
///
/// Numeric keys are read leniently. A value that is not an integer in `i32`
/// range (a float, a string, an overflowing number) is treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct MediaFormat {
    #[serde(default, alias = "mime")]
    pub mime_type: Option<String>,
    #[serde(default, alias = "bitrate", deserialize_with = "lenient_i32")]
    pub bit_rate: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub profile: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub level: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub width: Option<i32>,
    #[serde(default, deserialize_with = "lenient_i32")]
    pub height: Option<i32>,
    #[serde(default, alias = "channel-count", deserialize_with = "lenient_i32")]
    pub channel_count: Option<i32>,
    #[serde(default, alias = "sample-rate", deserialize_with = "lenient_i32")]
    pub sample_rate: Option<i32>,
}

/// Accepts any value; only integers that fit in `i32` survive.
fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(LenientI32)
}

struct LenientI32;

impl<'de> serde::de::Visitor<'de> for LenientI32 {
    type Value = Option<i32>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).ok())
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i32::try_from(v).ok())
    }

    fn visit_f64<E: serde::de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_bool<E: serde::de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_str<E: serde::de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: serde::Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map
            .next_entry::<serde::de::IgnoredAny, serde::de::IgnoredAny>()?
            .is_some()
        {}
        Ok(None)
    }
}

impl MediaFormat {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: Some(mime_type.into()),
            ..Self::default()
        }
    }

    /// Ordered stream parameters for a muxer.
    ///
    /// Layout: codec id, bit rate, profile, level, then width and height for
    /// video or channel count and sample rate for audio. Missing numeric
    /// keys are written as `0`, a missing MIME type as an empty codec id.
    /// Streams that are neither audio nor video get only the first four.
    pub fn stream_values(&self) -> Vec<String> {
        let mime_type = self.mime_type.as_deref().unwrap_or("");
        let int = |v: Option<i32>| v.unwrap_or(0).to_string();

        let mut values = vec![
            mime::codec_id(mime_type).to_string(),
            int(self.bit_rate),
            int(self.profile),
            int(self.level),
        ];

        if mime::is_video(mime_type) {
            values.push(int(self.width));
            values.push(int(self.height));
        } else if mime::is_audio(mime_type) {
            values.push(int(self.channel_count));
            values.push(int(self.sample_rate));
        }

        values
    }
}

/// Output container understood by the native muxer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// MPEG-4 Part 14.
    Mpeg4,
    /// WebM, written through the Matroska muxer.
    Webm,
    /// Segmented stream output.
    Segment,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Mpeg4, OutputFormat::Webm, OutputFormat::Segment];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Mpeg4 => "mp4",
            OutputFormat::Webm => "mkv",
            OutputFormat::Segment => "stream_segment",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = MimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| MimeError::UnknownOutputFormat { name: s.to_string() })
    }
}
