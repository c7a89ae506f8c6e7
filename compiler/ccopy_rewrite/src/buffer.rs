//! In-memory insertion buffer.

use std::convert::Infallible;

use ccopy_ir::TextEmitter;

/// Original source text plus pending insertions.
///
/// Insertions are keyed by byte offset into the original text. Several
/// insertions at one offset render in the order they were made.
#[derive(Clone, Debug, Default)]
pub struct RewriteBuffer {
    source: String,
    insertions: Vec<(usize, String)>,
    rendered: Option<String>,
}

impl RewriteBuffer {
    pub fn new(source: impl Into<String>) -> Self {
        RewriteBuffer {
            source: source.into(),
            insertions: Vec::new(),
            rendered: None,
        }
    }

    /// Queue `text` for insertion at byte `offset` of the original source.
    ///
    /// Offsets past the end clamp to the end; an offset inside a multi-byte
    /// character moves back to that character's start.
    pub fn insert(&mut self, offset: u32, text: &str) {
        let offset = self.clamp(offset as usize);
        self.insertions.push((offset, text.to_owned()));
        self.rendered = None;
    }

    pub fn insertion_count(&self) -> usize {
        self.insertions.len()
    }

    /// The original text with every insertion applied.
    pub fn render(&self) -> String {
        let mut order: Vec<&(usize, String)> = self.insertions.iter().collect();
        order.sort_by_key(|(offset, _)| *offset);

        let extra: usize = order.iter().map(|(_, text)| text.len()).sum();
        let mut out = String::with_capacity(self.source.len() + extra);
        let mut cursor = 0;
        for (offset, text) in order {
            out.push_str(&self.source[cursor..*offset]);
            out.push_str(text);
            cursor = *offset;
        }
        out.push_str(&self.source[cursor..]);
        out
    }

    /// Result of the last `finalize`, if nothing was inserted since.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    fn clamp(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl TextEmitter for RewriteBuffer {
    type Error = Infallible;

    fn insert_text_after(&mut self, offset: u32, text: &str) {
        self.insert(offset, text);
    }

    fn finalize(&mut self) -> Result<(), Self::Error> {
        self.rendered = Some(self.render());
        Ok(())
    }
}
