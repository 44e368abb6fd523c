//! Container parser
//!
//! Reads the stream table out of a text container, one line at a time.
//!
//! ## Line Rules
//! 1. A line containing the definition marker is kept verbatim (last wins)
//! 2. A line with two distinct `"` is an entry: `"<url>|<label>"`
//! 3. Everything else (braces, header, count line, comments) is ignored
//!
//! Only the first `|` splits the quoted value. Newer game versions append
//! extra `|`-separated fields (genre, language, bitrate); these stay part
//! of the label and are written back unchanged.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::document::{ContainerDocument, Entry};
use crate::error::{Result, SiiError};

use super::escape::unescape_label;

/// Signature of the games' binary container
const BINARY_SIGNATURE: &[u8] = b"BSII";

/// Signature of the games' encrypted container
const ENCRYPTED_SIGNATURE: &[u8] = b"ScsC";

const UTF8_BOM: char = '\u{feff}';

/// Result of parsing: the definition line and the entries, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedContainer {
    pub definition: Option<String>,
    pub entries: Vec<Entry>,
}

impl ParsedContainer {
    /// Attach a path to make a full document
    pub fn into_document(self, path: Option<&Path>) -> ContainerDocument {
        ContainerDocument {
            definition: self.definition,
            entries: self.entries,
            path: path.map(Path::to_path_buf),
        }
    }
}

/// Parse container text
///
/// Never fails: lines that are not understood are skipped.
pub fn parse(text: &str, config: &Config) -> ParsedContainer {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    let marker = config.definition_marker.to_lowercase();

    let mut parsed = ParsedContainer::default();

    // `lines` also drops the `\r` of CRLF files
    for (line_no, line) in text.lines().enumerate() {
        if line.to_lowercase().contains(&marker) {
            if parsed.definition.is_some() {
                debug!(line = line_no + 1, "Replacing earlier definition line");
            }
            parsed.definition = Some(line.to_string());
            continue;
        }

        if let Some(entry) = parse_entry_line(line, line_no + 1) {
            parsed.entries.push(entry);
        }
    }

    parsed
}

/// Parse raw file contents
///
/// Fails only when the bytes are not a text container at all.
pub fn parse_bytes(bytes: &[u8], config: &Config) -> Result<ParsedContainer> {
    if bytes.starts_with(BINARY_SIGNATURE) {
        return Err(SiiError::Parse("binary SII container is not supported".to_string()));
    }
    if bytes.starts_with(ENCRYPTED_SIGNATURE) {
        return Err(SiiError::Parse("encrypted SII container is not supported".to_string()));
    }

    let text = std::str::from_utf8(bytes).map_err(|e| {
        SiiError::Parse(format!(
            "container is not valid UTF-8 (at byte {})",
            e.valid_up_to()
        ))
    })?;

    Ok(parse(text, config))
}

/// Read and parse a container file
///
/// The whole file is read before parsing, so a failure never produces a
/// partial document.
pub fn read_document(path: &Path, config: &Config) -> Result<ContainerDocument> {
    let bytes = fs::read(path)?;
    let parsed = parse_bytes(&bytes, config)?;

    info!(
        path = %path.display(),
        entries = parsed.entries.len(),
        has_definition = parsed.definition.is_some(),
        "Loaded stream list"
    );

    Ok(parsed.into_document(Some(path)))
}

/// Extract `url|label` from between the first and last quote of a line
fn parse_entry_line(line: &str, line_no: usize) -> Option<Entry> {
    let first_quote = line.find('"')?;
    let last_quote = line.rfind('"')?;
    if first_quote == last_quote {
        debug!(line = line_no, "Skipping line with a single quote");
        return None;
    }

    let quoted = &line[first_quote + 1..last_quote];
    let Some((url, raw_label)) = quoted.split_once('|') else {
        debug!(line = line_no, "Skipping quoted value without separator");
        return None;
    };

    Some(Entry {
        url: url.to_string(),
        label: unescape_label(raw_label),
    })
}
