//! Field splitting for space-separated matrix rows.
//!
//! Two entry points: [`split_all`] splits a whole line during the sequential
//! first pass, where the field count is discovered or validated, and
//! [`split_n`] peels exactly `n` fields off the front of a raw byte span
//! during windowed passes, where the span was read from a stored row offset
//! and may run on into the following rows.

/// Field separator byte (single ASCII space).
pub const SEPARATOR: u8 = b' ';

/// A span ended before the requested number of fields was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortSplit {
    /// Fields successfully produced before the span ran out.
    pub produced: usize,
}

/// Split an entire row into fields.
///
/// The trailing line feed (if any) is stripped from the last field, and runs
/// of separator bytes are skipped. An empty row yields a single empty field.
pub fn split_all(span: &[u8]) -> Vec<&[u8]> {
    let span = match span.last() {
        Some(b'\n') => &span[..span.len() - 1],
        _ => span,
    };
    let mut fields = Vec::new();
    let mut pos = 0;
    while pos < span.len() {
        while pos < span.len() && span[pos] == SEPARATOR {
            pos += 1;
        }
        if pos == span.len() {
            break;
        }
        let start = pos;
        while pos < span.len() && span[pos] != SEPARATOR {
            pos += 1;
        }
        fields.push(&span[start..pos]);
    }
    if fields.is_empty() {
        fields.push(&span[..0]);
    }
    fields
}

/// Split exactly `n` fields off the front of `span`.
///
/// Each field has leading separator bytes stripped; a field ends at a
/// separator, a line feed, or the end of the span. Hitting a line feed or
/// the end of the span while fields are still expected is a [`ShortSplit`].
pub fn split_n(span: &[u8], n: usize) -> Result<Vec<&[u8]>, ShortSplit> {
    let mut fields = Vec::with_capacity(n);
    let mut remaining = n;
    let mut pos = 0;
    while remaining > 0 {
        while pos < span.len() && span[pos] == SEPARATOR {
            pos += 1;
        }
        let start = pos;
        while pos < span.len() && span[pos] != SEPARATOR && span[pos] != b'\n' {
            pos += 1;
        }
        fields.push(&span[start..pos]);
        remaining -= 1;
        if remaining > 0 && (pos >= span.len() || span[pos] == b'\n') {
            return Err(ShortSplit {
                produced: fields.len(),
            });
        }
    }
    Ok(fields)
}
