use thiserror::Error;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("only image files can be uploaded, got {0:?}")]
    NotAnImage(String),
    #[error("image is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    /// Raised by the caller that performs the upload when the media host
    /// refuses the file; validation never produces it.
    #[error("upload rejected by media host: {0}")]
    Rejected(String),
}

/// Checks a pet photo before it is sent to the media host.
pub fn validate_image(content_type: &str, size: u64) -> Result<(), UploadError> {
    let is_image = content_type
        .split_once('/')
        .is_some_and(|(kind, subtype)| kind.eq_ignore_ascii_case("image") && !subtype.is_empty());
    if !is_image {
        return Err(UploadError::NotAnImage(content_type.to_string()));
    }

    if size > MAX_IMAGE_BYTES {
        return Err(UploadError::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}
