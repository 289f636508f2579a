//! Copy-on-extend concatenation.
//!
//! Every composite key is assembled here. The inputs are borrowed and never
//! grown in place, so one prefix can feed any number of sibling keys and a
//! key handed out earlier never changes afterwards.

/// `base ++ suffix` in a freshly allocated buffer.
#[must_use]
pub fn concat(base: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(base.len() + suffix.len());
    out.extend_from_slice(base);
    out.extend_from_slice(suffix);
    out
}

/// All `parts` joined, in order, in a freshly allocated buffer.
#[must_use]
pub fn concat_all(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}
