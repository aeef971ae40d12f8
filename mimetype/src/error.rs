use thiserror::Error;

#[derive(Error, Debug)]
pub enum MimeError {
    #[error("unknown codec MIME type: {mime_type}")]
    UnknownCodec { mime_type: String },

    #[error("unknown output format {name:?}: expected one of mp4, mkv, stream_segment")]
    UnknownOutputFormat { name: String },
}

pub type Result<T> = std::result::Result<T, MimeError>;
