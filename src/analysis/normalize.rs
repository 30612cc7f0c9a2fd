// Text normalization for question comparison.
//
// The normalized form is the comparison key, never the reported value. Two
// different raw strings may normalize to the same value; that is the point.

/// Canonicalize a raw question string: lowercase, keep only `[a-z0-9]` and
/// single separating spaces, drop everything else, trim.
///
/// Pure and total. Idempotent: whitespace freed up by stripped punctuation is
/// collapsed in the same pass, so normalizing twice changes nothing.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut space_pending = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if space_pending && !out.is_empty() {
                out.push(' ');
            }
            space_pending = false;
            out.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() {
            space_pending = true;
        }
        // anything else (punctuation, non-ASCII) is dropped
    }

    out
}
