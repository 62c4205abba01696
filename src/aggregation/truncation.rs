use std::borrow::Cow;

use thiserror::Error;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_MIN_LENGTH: usize = 300;
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("No sentence boundary after offset {0}")]
    NoBoundary(usize),
    #[error("Boundary {end} lies outside text of length {len}")]
    OutOfRange { end: usize, len: usize },
}

pub trait SentenceBoundaries {
    /// Byte offset of the first sentence boundary strictly after `offset`.
    fn following(&self, text: &str, offset: usize) -> Result<usize, SegmentationError>;
}

/// UAX #29 sentence boundaries. A sentence owns its trailing whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSentences;

impl SentenceBoundaries for UnicodeSentences {
    fn following(&self, text: &str, offset: usize) -> Result<usize, SegmentationError> {
        if !text.is_char_boundary(offset) {
            return Err(SegmentationError::NotCharBoundary(offset));
        }

        text.split_sentence_bound_indices()
            .map(|(start, sentence)| start + sentence.len())
            .find(|&end| end > offset)
            .ok_or(SegmentationError::NoBoundary(offset))
    }
}

/// Shortens long text at the end of the sentence running past `min_length` characters.
#[derive(Debug, Clone)]
pub struct Truncator<B = UnicodeSentences> {
    min_length: usize,
    boundaries: B,
}

impl Default for Truncator<UnicodeSentences> {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            boundaries: UnicodeSentences,
        }
    }
}

impl<B: SentenceBoundaries> Truncator<B> {
    pub fn new(min_length: usize, boundaries: B) -> Self {
        Self {
            min_length,
            boundaries,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Never fails: when no usable boundary is found the text comes back untouched.
    pub fn truncate<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // Byte offset of the first character past the minimum; None means short enough.
        let Some((offset, _)) = text.char_indices().nth(self.min_length) else {
            return Cow::Borrowed(text);
        };

        match self.cut_point(text, offset) {
            Ok(end) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..end])),
            Err(e) => {
                let preview: String = text.chars().take(40).collect();
                debug!(
                    min_length = self.min_length,
                    text_len = text.len(),
                    preview = preview.as_str(),
                    error = %e,
                    "Unable to truncate text"
                );
                Cow::Borrowed(text)
            }
        }
    }

    fn cut_point(&self, text: &str, offset: usize) -> Result<usize, SegmentationError> {
        let end = self.boundaries.following(text, offset)?;
        if end > text.len() || !text.is_char_boundary(end) {
            return Err(SegmentationError::OutOfRange {
                end,
                len: text.len(),
            });
        }
        Ok(end)
    }
}
