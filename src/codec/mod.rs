//! Codec Module
//!
//! Converts between the on-disk SiiNunit text container and a
//! [`ContainerDocument`](crate::document::ContainerDocument).
//!
//! ## Responsibilities
//! - Lenient line-oriented parsing of the stream table
//! - Carry the definition line through untouched
//! - Escape/unescape non-ASCII label characters
//! - Rebuild the container with contiguous indices
//!
//! ## File Format
//! ```text
//! SiiNunit
//! {
//! live_stream_def : _nameless.0662.fc50 {      <- definition line (verbatim)
//!  stream_data: 2                              <- entry count
//!  stream_data[0]: "http://a.example/x|Radio A"
//!  stream_data[1]: "http://b.example/y|Caf\xc3\xa9"
//! }
//! }
//! ```
//!
//! ## Escape Token
//! ```text
//! ┌────┬──────┬────┬──────┐
//! │ \x │ high │ \x │ low  │   8 ASCII characters, one 2-byte UTF-8 char
//! └────┴──────┴────┴──────┘
//! ```

mod escape;
mod parser;
mod writer;

pub use escape::{decode_pair, escape_label, is_representable, unescape_label, ESCAPE_TOKEN_LEN};
pub use parser::{parse, parse_bytes, read_document, ParsedContainer};
pub use writer::{serialize, write_document};

/// First line of every text container
pub const SII_MAGIC: &str = "SiiNunit";
