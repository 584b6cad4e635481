use crate::model::TITLE_MAX;
use crate::util::unicode;

/// Append a typed character to an input buffer, refusing growth past
/// TITLE_MAX grapheme clusters.
pub(super) fn buffer_push(buffer: &mut String, c: char) {
    if unicode::grapheme_count(buffer) < TITLE_MAX {
        buffer.push(c);
    }
}

/// Remove the last grapheme cluster (not byte) from an input buffer.
pub(super) fn buffer_backspace(buffer: &mut String) {
    if let Some(boundary) = unicode::prev_grapheme_boundary(buffer, buffer.len()) {
        buffer.truncate(boundary);
    }
}
