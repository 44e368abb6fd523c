//! # siistreams
//!
//! Reads, edits and writes the radio stream list kept in the games'
//! `live_streams.sii` text container:
//! - Lenient line-oriented parsing of the stream table
//! - `\xHH\xHH` escaping of non-ASCII labels
//! - Index-based insert/delete/swap/update with a dirty flag
//! - Byte-stable write-back of untouched entries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Driver (CLI, editor UI)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Edit / load / save
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     EntryStore                               │
//! │          (ContainerDocument + dirty flag)                    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   parser    │          │   writer    │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                         │
//!          └──────────┬──────────────┘
//!                     ▼
//!             ┌─────────────┐
//!             │   escape    │
//!             └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use siistreams::{codec, Config, Entry};
//!
//! let text = "SiiNunit\n{\n stream_data: 1\n stream_data[0]: \"http://a.example|Caf\\xc3\\xa9\"\n}\n}\n";
//! let parsed = codec::parse(text, &Config::default());
//!
//! assert_eq!(parsed.entries, vec![Entry::new("http://a.example", "Café")]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod document;
pub mod edit;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SiiError, Result};
pub use config::{Config, LineEnding};
pub use document::{ContainerDocument, Entry};
pub use edit::Edit;
pub use store::EntryStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of siistreams
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
