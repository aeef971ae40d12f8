use crate::error::{MimeError, Result};
use crate::mime;

/// Codec category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Video,
    Audio,
}

/// Information about a codec identified by its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct CodecInfo {
    /// Canonical MIME type (e.g. "video/avc", "audio/opus").
    pub mime_type: &'static str,
    /// Short codec name as used by muxers (e.g. "h264", "aac").
    pub codec_name: &'static str,
    /// Category of the codec.
    pub category: MediaCategory,
}

impl CodecInfo {
    pub fn is_video(&self) -> bool {
        self.category == MediaCategory::Video
    }

    pub fn is_audio(&self) -> bool {
        self.category == MediaCategory::Audio
    }
}

// Audio codecs
pub const AAC: CodecInfo = CodecInfo { mime_type: mime::AUDIO_AAC, codec_name: "aac", category: MediaCategory::Audio };
pub const RAW: CodecInfo = CodecInfo { mime_type: mime::AUDIO_RAW, codec_name: "pcm_s16le", category: MediaCategory::Audio };
pub const OPUS: CodecInfo = CodecInfo { mime_type: mime::AUDIO_OPUS, codec_name: "opus", category: MediaCategory::Audio };
pub const VORBIS: CodecInfo = CodecInfo { mime_type: mime::AUDIO_VORBIS, codec_name: "vorbis", category: MediaCategory::Audio };

// Video codecs
pub const AVC: CodecInfo = CodecInfo { mime_type: mime::VIDEO_AVC, codec_name: "h264", category: MediaCategory::Video };
pub const HEVC: CodecInfo = CodecInfo { mime_type: mime::VIDEO_HEVC, codec_name: "hevc", category: MediaCategory::Video };
pub const VP8: CodecInfo = CodecInfo { mime_type: mime::VIDEO_VP8, codec_name: "vp8", category: MediaCategory::Video };
pub const VP9: CodecInfo = CodecInfo { mime_type: mime::VIDEO_VP9, codec_name: "vp9", category: MediaCategory::Video };

/// All known codecs, audio first.
pub const ALL_CODECS: &[CodecInfo] = &[AAC, RAW, OPUS, VORBIS, AVC, HEVC, VP8, VP9];

/// Look up a known codec by exact MIME type match.
pub fn codec_info(mime_type: &str) -> Option<&'static CodecInfo> {
    ALL_CODECS.iter().find(|c| c.mime_type == mime_type)
}

/// Like [`codec_info`], but an unknown MIME type is an error.
pub fn require_codec(mime_type: &str) -> Result<&'static CodecInfo> {
    codec_info(mime_type).ok_or_else(|| MimeError::UnknownCodec {
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_constant_has_a_codec() {
        for mime in [
            mime::AUDIO_AAC,
            mime::AUDIO_RAW,
            mime::AUDIO_OPUS,
            mime::AUDIO_VORBIS,
            mime::VIDEO_AVC,
            mime::VIDEO_HEVC,
            mime::VIDEO_VP8,
            mime::VIDEO_VP9,
        ] {
            let info = codec_info(mime).unwrap();
            assert_eq!(info.mime_type, mime);
        }
    }

    #[test]
    fn test_category_matches_prefix() {
        for info in ALL_CODECS {
            assert_eq!(info.is_video(), mime::is_video(info.mime_type));
            assert_eq!(info.is_audio(), mime::is_audio(info.mime_type));
            assert_ne!(info.is_video(), info.is_audio());
        }
    }

    #[test]
    fn test_codec_names() {
        assert_eq!(codec_info(mime::VIDEO_AVC).unwrap().codec_name, "h264");
        assert_eq!(codec_info(mime::VIDEO_HEVC).unwrap().codec_name, "hevc");
        assert_eq!(codec_info(mime::AUDIO_AAC).unwrap().codec_name, "aac");
        assert_eq!(codec_info(mime::AUDIO_RAW).unwrap().codec_name, "pcm_s16le");
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(codec_info("video/AVC").is_none());
        assert!(codec_info("video/avc ").is_none());
        assert!(codec_info("video/av01").is_none());
        assert!(codec_info("").is_none());
    }

    #[test]
    fn test_require_codec() {
        assert_eq!(require_codec(mime::AUDIO_OPUS).unwrap(), &OPUS);

        let err = require_codec("audio/flac").unwrap_err();
        assert!(matches!(err, MimeError::UnknownCodec { ref mime_type } if mime_type == "audio/flac"));
        assert_eq!(err.to_string(), "unknown codec MIME type: audio/flac");
    }
}
