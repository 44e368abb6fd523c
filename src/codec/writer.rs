//! Container writer
//!
//! Rebuilds the text container from a document. Indices are renumbered
//! from zero on every write; whatever numbering the file had before is
//! not kept.

use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::ContainerDocument;
use crate::error::Result;

use super::escape::{escape_label, is_representable};
use super::SII_MAGIC;

/// Serialize a document to container text
///
/// Labels are escaped; URLs are not. Apart from the verbatim definition
/// line the output is pure ASCII.
pub fn serialize(document: &ContainerDocument, config: &Config) -> String {
    let eol = config.line_ending.as_str();
    let key = &config.list_key;
    let mut out = String::new();

    // Header
    push_line(&mut out, SII_MAGIC, eol);
    push_line(&mut out, "{", eol);
    if let Some(definition) = &document.definition {
        push_line(&mut out, definition, eol);
    }
    push_line(&mut out, &format!(" {}: {}", key, document.entries.len()), eol);

    // Entries
    for (index, entry) in document.entries.iter().enumerate() {
        if !is_representable(&entry.label) {
            warn!(
                index,
                label = %entry.label,
                "Label has characters wider than two UTF-8 bytes; they will not load back intact"
            );
        }

        let line = format!(
            " {}[{}]: \"{}|{}\"",
            key,
            index,
            ascii_url(&entry.url, index),
            escape_label(&entry.label)
        );
        push_line(&mut out, &line, eol);
    }

    // Close the definition block and the container
    push_line(&mut out, "}", eol);
    push_line(&mut out, "}", eol);

    out
}

/// Serialize and write a document, replacing whatever `path` held
///
/// The text goes to a temporary file next to `path` which is then renamed
/// over it, so a failed write leaves the old file untouched.
pub fn write_document(document: &ContainerDocument, path: &Path, config: &Config) -> Result<()> {
    let text = serialize(document, config);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(text.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    info!(
        path = %path.display(),
        entries = document.entries.len(),
        bytes = text.len(),
        "Saved stream list"
    );

    Ok(())
}

fn push_line(out: &mut String, line: &str, eol: &str) {
    out.push_str(line);
    out.push_str(eol);
}

/// URLs go out unescaped; non-ASCII becomes `?`
fn ascii_url(url: &str, index: usize) -> Cow<'_, str> {
    if url.is_ascii() {
        return Cow::Borrowed(url);
    }

    warn!(index, url, "URL has non-ASCII characters; writing them as '?'");
    Cow::Owned(
        url.chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .collect(),
    )
}
