//! HTTP request handlers.

pub(crate) mod documents;
pub(crate) mod landing;
