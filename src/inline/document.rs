//! Owned SVG event buffer with in-place image reference rewriting.
//!
//! The document is held as a flat vector of XML events, indexable by
//! position. Image elements are rewritten in place; nothing is inserted or
//! removed, so positions stay stable while the caller iterates. Events that
//! are never touched serialize back to their original bytes, which keeps the
//! rest of the markup byte-identical across a parse/serialize round trip.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use super::InlineError;

/// Href attribute names in lookup order. The namespaced form wins when both
/// are present.
const HREF_ATTRIBUTES: [&str; 2] = ["xlink:href", "href"];

/// A parsed SVG document.
pub struct SvgDocument {
    events: Vec<Event<'static>>,
}

impl SvgDocument {
    /// Parse SVG markup into an owned event buffer.
    ///
    /// # Errors
    ///
    /// Returns `InlineError::Parse` if the markup is not well-formed XML,
    /// including truncated documents with elements left unclosed at end of
    /// input.
    pub fn parse(markup: &str) -> Result<Self, InlineError> {
        let mut reader = Reader::from_str(markup);
        let mut events = Vec::new();
        let mut depth = 0_usize;
        loop {
            match reader.read_event() {
                Ok(Event::Eof) => {
                    if depth > 0 {
                        return Err(InlineError::Parse(format!(
                            "{depth} element(s) left unclosed at end of input"
                        )));
                    }
                    break;
                }
                Ok(event) => {
                    match &event {
                        Event::Start(_) => depth += 1,
                        Event::End(_) => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                    events.push(event.into_owned());
                }
                Err(e) => return Err(InlineError::Parse(e.to_string())),
            }
        }
        Ok(Self { events })
    }

    /// Positions of all `image` elements, in document order. Matches on the
    /// XML local name, so `svg:image` qualifies too.
    #[must_use]
    pub fn image_positions(&self) -> Vec<usize> {
        self.events
            .iter()
            .enumerate()
            .filter(|(_, event)| {
                matches!(event, Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"image")
            })
            .map(|(position, _)| position)
            .collect()
    }

    /// The href of the image element at `position`: `xlink:href` preferred,
    /// plain `href` as fallback. `None` when neither is present, when the
    /// position is not an element, or when the value fails to unescape.
    #[must_use]
    pub fn image_href(&self, position: usize) -> Option<String> {
        let element = self.element_at(position)?;
        for key in HREF_ATTRIBUTES {
            for attribute in element.attributes().flatten() {
                if attribute.key.as_ref() == key.as_bytes() {
                    let Ok(value) = attribute.unescape_value() else {
                        return None;
                    };
                    return Some(value.into_owned());
                }
            }
        }
        None
    }

    /// Rewrite the element at `position`: drop `xlink:href` and set `href`
    /// to the given value. Other attributes keep their relative order, an
    /// existing plain `href` is replaced where it stands, and the element
    /// form (self-closing or not) is preserved. Positions that are not
    /// elements are left alone.
    pub fn set_image_href(&mut self, position: usize, href: &str) {
        let Some(element) = self.element_at(position) else {
            return;
        };

        let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
        let mut rewritten = BytesStart::new(name);
        let mut replaced = false;
        for attribute in element.attributes().flatten() {
            if attribute.key.as_ref() == b"xlink:href" {
                continue;
            }
            if attribute.key.as_ref() == b"href" {
                rewritten.push_attribute(("href", href));
                replaced = true;
                continue;
            }
            rewritten.push_attribute(attribute);
        }
        if !replaced {
            rewritten.push_attribute(("href", href));
        }

        let was_empty = matches!(self.events.get(position), Some(Event::Empty(_)));
        self.events[position] = if was_empty {
            Event::Empty(rewritten)
        } else {
            Event::Start(rewritten)
        };
    }

    /// Serialize the buffer back to markup.
    ///
    /// # Errors
    ///
    /// Returns `InlineError::Serialize` if an event cannot be written.
    pub fn to_markup(&self) -> Result<String, InlineError> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        for event in &self.events {
            writer
                .write_event(event.clone())
                .map_err(|e| InlineError::Serialize(e.to_string()))?;
        }
        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| InlineError::Serialize(e.to_string()))
    }

    fn element_at(&self, position: usize) -> Option<&BytesStart<'static>> {
        match self.events.get(position) {
            Some(Event::Start(element) | Event::Empty(element)) => Some(element),
            _ => None,
        }
    }
}
