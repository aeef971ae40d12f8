use crate::codec::{self, CodecInfo, MediaCategory};

const AUDIO_PREFIX: &str = "audio/";

/// AAC in LATM/LOAS framing.
pub const AUDIO_AAC: &str = "audio/mp4a-latm";
pub const AUDIO_RAW: &str = "audio/raw";
pub const AUDIO_OPUS: &str = "audio/opus";
pub const AUDIO_VORBIS: &str = "audio/vorbis";

const VIDEO_PREFIX: &str = "video/";

/// H.264 / AVC.
pub const VIDEO_AVC: &str = "video/avc";
/// H.265 / HEVC.
pub const VIDEO_HEVC: &str = "video/hevc";
pub const VIDEO_VP8: &str = "video/x-vnd.on2.vp8";
pub const VIDEO_VP9: &str = "video/x-vnd.on2.vp9";

/// Returns true if the MIME type is present and starts with `video/`.
///
/// Matching is exact and case-sensitive: `"VIDEO/avc"` is not video.
/// Accepts either a `&str` or an `Option<&str>`, so an absent MIME type
/// can be passed straight through as `None`.
pub fn is_video<'a>(mime_type: impl Into<Option<&'a str>>) -> bool {
    mime_type
        .into()
        .is_some_and(|m| m.starts_with(VIDEO_PREFIX))
}

/// Returns true if the MIME type is present and starts with `audio/`.
///
/// Same rules as [`is_video`].
pub fn is_audio<'a>(mime_type: impl Into<Option<&'a str>>) -> bool {
    mime_type
        .into()
        .is_some_and(|m| m.starts_with(AUDIO_PREFIX))
}

/// Broad category of a MIME type, or None if it is neither audio nor video.
pub fn category<'a>(mime_type: impl Into<Option<&'a str>>) -> Option<MediaCategory> {
    let mime_type = mime_type.into();
    if is_video(mime_type) {
        Some(MediaCategory::Video)
    } else if is_audio(mime_type) {
        Some(MediaCategory::Audio)
    } else {
        None
    }
}

/// Codec identifier handed to a muxer: the component after the last `/`.
///
/// `"video/avc"` gives `"avc"`. A string without `/` is returned whole.
pub fn codec_id(mime_type: &str) -> &str {
    mime_type
        .rsplit_once('/')
        .map_or(mime_type, |(_, id)| id)
}

/// Result of classifying a single MIME type string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Classification {
    /// The MIME type as given, unmodified.
    pub mime_type: String,
    /// Audio or video, None for anything else.
    pub category: Option<MediaCategory>,
    /// Subtype component (see [`codec_id`]).
    pub codec_id: String,
    /// Known codec entry if the MIME type exactly matches one of the constants.
    pub codec: Option<CodecInfo>,
}

impl Classification {
    /// Output type character: 'V' for video, 'A' for audio, '-' otherwise.
    pub fn type_char(&self) -> char {
        match self.category {
            Some(MediaCategory::Video) => 'V',
            Some(MediaCategory::Audio) => 'A',
            None => '-',
        }
    }
}

/// Classify a MIME type string.
pub fn classify(mime_type: &str) -> Classification {
    Classification {
        mime_type: mime_type.to_string(),
        category: category(mime_type),
        codec_id: codec_id(mime_type).to_string(),
        codec: codec::codec_info(mime_type).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AUDIO_CONSTANTS: &[&str] = &[AUDIO_AAC, AUDIO_RAW, AUDIO_OPUS, AUDIO_VORBIS];
    const VIDEO_CONSTANTS: &[&str] = &[VIDEO_AVC, VIDEO_HEVC, VIDEO_VP8, VIDEO_VP9];

    #[test]
    fn test_constant_values() {
        assert_eq!(AUDIO_AAC, "audio/mp4a-latm");
        assert_eq!(AUDIO_RAW, "audio/raw");
        assert_eq!(AUDIO_OPUS, "audio/opus");
        assert_eq!(AUDIO_VORBIS, "audio/vorbis");
        assert_eq!(VIDEO_AVC, "video/avc");
        assert_eq!(VIDEO_HEVC, "video/hevc");
        assert_eq!(VIDEO_VP8, "video/x-vnd.on2.vp8");
        assert_eq!(VIDEO_VP9, "video/x-vnd.on2.vp9");
    }

    #[test]
    fn test_audio_constants() {
        for mime in AUDIO_CONSTANTS {
            assert!(is_audio(*mime), "{mime} should be audio");
            assert!(!is_video(*mime), "{mime} should not be video");
        }
    }

    #[test]
    fn test_video_constants() {
        for mime in VIDEO_CONSTANTS {
            assert!(is_video(*mime), "{mime} should be video");
            assert!(!is_audio(*mime), "{mime} should not be audio");
        }
    }

    #[test]
    fn test_unlisted_types_classify_by_prefix() {
        assert!(is_video("video/av01"));
        assert!(is_video("video/"));
        assert!(is_audio("audio/flac"));
        assert!(is_audio("audio/"));
        assert!(!is_audio("video/mp4a-latm"));
    }

    #[test]
    fn test_absent_and_empty() {
        assert!(!is_video(None));
        assert!(!is_audio(None));
        assert!(!is_video(""));
        assert!(!is_audio(""));
        assert_eq!(category(None), None);
    }

    #[test]
    fn test_no_normalisation() {
        assert!(!is_video("VIDEO/avc"));
        assert!(!is_audio("Audio/opus"));
        assert!(!is_video(" video/avc"));
        assert!(!is_video("video"));
        assert!(!is_audio("text/plain"));
        assert!(!is_video("text/plain"));
        assert!(!is_video("image/jpeg"));
    }

    #[test]
    fn test_option_input() {
        let present: Option<String> = Some(VIDEO_VP9.to_string());
        assert!(is_video(present.as_deref()));

        let absent: Option<String> = None;
        assert!(!is_audio(absent.as_deref()));
    }

    #[test]
    fn test_repeated_calls_agree() {
        for _ in 0..3 {
            assert!(is_video(VIDEO_HEVC));
            assert!(!is_audio(VIDEO_HEVC));
            assert!(is_audio(AUDIO_OPUS));
        }
    }

    #[test]
    fn test_category() {
        assert_eq!(category(VIDEO_AVC), Some(MediaCategory::Video));
        assert_eq!(category(AUDIO_VORBIS), Some(MediaCategory::Audio));
        assert_eq!(category("application/octet-stream"), None);
    }

    #[test]
    fn test_codec_id() {
        assert_eq!(codec_id(VIDEO_AVC), "avc");
        assert_eq!(codec_id(AUDIO_AAC), "mp4a-latm");
        assert_eq!(codec_id(VIDEO_VP8), "x-vnd.on2.vp8");
        assert_eq!(codec_id("a/b/c"), "c");
        assert_eq!(codec_id("opus"), "opus");
        assert_eq!(codec_id("video/"), "");
        assert_eq!(codec_id(""), "");
    }

    #[test]
    fn test_classify_known_and_unknown() {
        let c = classify(VIDEO_HEVC);
        assert_eq!(c.category, Some(MediaCategory::Video));
        assert_eq!(c.codec_id, "hevc");
        assert_eq!(c.codec.unwrap().codec_name, "hevc");
        assert_eq!(c.type_char(), 'V');

        let c = classify("audio/flac");
        assert_eq!(c.category, Some(MediaCategory::Audio));
        assert!(c.codec.is_none());
        assert_eq!(c.type_char(), 'A');

        let c = classify("text/plain");
        assert_eq!(c.category, None);
        assert_eq!(c.type_char(), '-');
    }
}
