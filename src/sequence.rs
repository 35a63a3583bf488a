//! Plain-sequence transformations.
//!
//! Every function here takes raw user text, normalizes it, and returns a new
//! sequence string:
//! - `normalize`: uppercase, trimmed, interior spaces removed
//! - `complement`: positional A<->T, G<->C substitution
//! - `reverse`: reversed character order
//! - `to_mrna` / `to_dna`: T<->U substitution
//!
//! Characters outside the nucleotide alphabet are never rejected; they pass
//! through each transformation unchanged.

/// Returns the plain-sequence form of `text`.
///
/// The text is uppercased, leading and trailing whitespace is trimmed, and
/// every remaining space character is removed. Nothing else is filtered.
pub fn normalize(text: &str) -> String {
    text.to_uppercase().trim().replace(' ', "")
}

/// Returns true if the sequence contains at least one thymine (`T`).
///
/// A sequence with a `T` is treated as DNA and cannot be read as codons.
pub fn is_dna(sequence: &str) -> bool {
    sequence.contains('T')
}

/// Complements a single base. Non-DNA characters are returned unchanged.
#[inline]
pub fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        'C' => 'G',
        _ => base,
    }
}

/// Returns the base-pair complement of the normalized sequence.
///
/// The order of the bases is kept: this is a positional complement, not the
/// reverse complement of the antiparallel strand.
pub fn complement(sequence: &str) -> String {
    normalize(sequence).chars().map(complement_base).collect()
}

/// Returns the normalized sequence in reverse order.
pub fn reverse(sequence: &str) -> String {
    normalize(sequence).chars().rev().collect()
}

/// Converts a DNA sequence to messenger RNA by replacing `T` with `U`.
pub fn to_mrna(sequence: &str) -> String {
    normalize(sequence).replace('T', "U")
}

/// Converts an RNA sequence back to DNA by replacing `U` with `T`.
pub fn to_dna(sequence: &str) -> String {
    normalize(sequence).replace('U', "T")
}
