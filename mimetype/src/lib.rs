//! Classification of media MIME types into audio and video, plus canonical
//! identifiers for the codecs a transcoding pipeline knows how to handle.
//!
//! ```
//! use mimetype::mime::{self, VIDEO_HEVC};
//!
//! assert!(mime::is_video(VIDEO_HEVC));
//! assert!(!mime::is_audio(VIDEO_HEVC));
//! assert!(!mime::is_video(None));
//! ```

pub mod codec;
pub mod error;
pub mod format;
pub mod mime;
pub mod version;

pub use codec::{CodecInfo, MediaCategory};
pub use error::{MimeError, Result};
pub use mime::{is_audio, is_video};
