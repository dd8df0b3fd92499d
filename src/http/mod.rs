//! HTTP protocol layer module
//!
//! Header sets, content types and response builders, independent of how a
//! request gets routed.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used types
pub use headers::BaseHeaders;
pub use mime::{ContentTypeResolver, MimeTable};
pub use response::{
    build_404_response, build_405_response, build_500_response, build_options_response,
    build_redirect_response,
};
