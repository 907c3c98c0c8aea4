// src/core/html.rs
// DOM helpers over `scraper`. Tag/class matching works on the parsed tree,
// so attribute order, quoting and casing in the export don't matter.

use std::borrow::Cow;

use scraper::{ElementRef, Html};

use crate::error::TranscriptError;

/// Bytes inspected for a NUL when sniffing binary input.
const SNIFF_LEN: usize = 8000;
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes → text. UTF-8 first, lossy fallback for legacy exports.
/// NUL within the sniff window means it isn't a text document at all.
pub fn decode_bytes(bytes: &[u8]) -> Result<Cow<'_, str>, TranscriptError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if looks_binary(bytes) {
        return Err(TranscriptError::parse_fatal("binary content (NUL byte)"));
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(Cow::Borrowed(s)),
        Err(e) => {
            logd!("Document is not valid UTF-8 ({e}); decoding lossily");
            Ok(String::from_utf8_lossy(bytes))
        }
    }
}

pub fn looks_binary(bytes: &[u8]) -> bool {
    bytes[..bytes.len().min(SNIFF_LEN)].contains(&0)
}

/// Parse a whole document. html5ever recovers from any malformed markup,
/// so the only fatal case is text that is really binary.
pub fn parse_document(doc: &str) -> Result<Html, TranscriptError> {
    if looks_binary(doc.as_bytes()) {
        return Err(TranscriptError::parse_fatal("binary content (NUL byte)"));
    }
    Ok(Html::parse_document(doc))
}

/// Descendant elements named `tag` (lowercase), in document order.
/// `root` itself is not included.
pub fn descendants_named<'a>(
    root: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    root.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

/// Every `<table>` in `doc` whose class list contains `class`.
pub fn tables_with_class<'a>(
    doc: &'a Html,
    class: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    descendants_named(doc.root_element(), "table").filter(move |t| has_class(*t, class))
}

/// Whole-token class match (`class="list striped"` has `list`).
pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Visible text of an element, trimmed at both ends (`&nbsp;` included).
/// Inner spacing is kept as exported.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    s!(raw.trim())
}
