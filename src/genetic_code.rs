//! Codon table and translation logic.
//!
//! This module provides:
//! - The standard codon table (64 RNA codons to three-letter amino acid labels)
//! - Start/stop codon queries
//! - Translation of an mRNA sequence into a dash-separated amino acid chain

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::sequence::{is_dna, normalize};

/// The conventional start codon (methionine).
pub const START_CODON: &str = "AUG";

/// Label produced for the three stop codons.
pub const STOP_LABEL: &str = "stop";

/// Separator placed between amino acid labels in a translated chain.
pub const SEPARATOR: char = '-';

/// A single row of the codon table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonEntry {
    /// RNA codon, three bases over {A, C, G, U}
    pub codon: &'static str,
    /// Lowercase three-letter amino acid label, or `"stop"`
    pub amino_acid: &'static str,
}

const fn entry(codon: &'static str, amino_acid: &'static str) -> CodonEntry {
    CodonEntry { codon, amino_acid }
}

/// The standard genetic code, grouped by first and second base.
static CODON_TABLE: [CodonEntry; 64] = [
    entry("UUU", "phe"),
    entry("UUC", "phe"),
    entry("UUA", "leu"),
    entry("UUG", "leu"),
    entry("CUU", "leu"),
    entry("CUC", "leu"),
    entry("CUA", "leu"),
    entry("CUG", "leu"),
    entry("AUU", "ile"),
    entry("AUC", "ile"),
    entry("AUA", "ile"),
    entry("AUG", "met"),
    entry("GUU", "val"),
    entry("GUC", "val"),
    entry("GUA", "val"),
    entry("GUG", "val"),
    entry("UCU", "ser"),
    entry("UCC", "ser"),
    entry("UCA", "ser"),
    entry("UCG", "ser"),
    entry("CCU", "pro"),
    entry("CCC", "pro"),
    entry("CCA", "pro"),
    entry("CCG", "pro"),
    entry("ACU", "thr"),
    entry("ACC", "thr"),
    entry("ACA", "thr"),
    entry("ACG", "thr"),
    entry("GCU", "ala"),
    entry("GCC", "ala"),
    entry("GCA", "ala"),
    entry("GCG", "ala"),
    entry("UAU", "tyr"),
    entry("UAC", "tyr"),
    entry("UAA", STOP_LABEL),
    entry("UAG", STOP_LABEL),
    entry("CAU", "his"),
    entry("CAC", "his"),
    entry("CAA", "gln"),
    entry("CAG", "gln"),
    entry("AAU", "asn"),
    entry("AAC", "asn"),
    entry("AAA", "lys"),
    entry("AAG", "lys"),
    entry("GAU", "asp"),
    entry("GAC", "asp"),
    entry("GAA", "glu"),
    entry("GAG", "glu"),
    entry("UGU", "cys"),
    entry("UGC", "cys"),
    entry("UGA", STOP_LABEL),
    entry("UGG", "trp"),
    entry("CGU", "arg"),
    entry("CGC", "arg"),
    entry("CGA", "arg"),
    entry("CGG", "arg"),
    entry("AGU", "ser"),
    entry("AGC", "ser"),
    entry("AGA", "arg"),
    entry("AGG", "arg"),
    entry("GGU", "gly"),
    entry("GGC", "gly"),
    entry("GGA", "gly"),
    entry("GGG", "gly"),
];

static CODON_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    CODON_TABLE
        .iter()
        .map(|e| (e.codon, e.amino_acid))
        .collect()
});

/// Errors that can occur while translating a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("You cannot transcribe DNA into Amino Acids. Convert to mRNA First.")]
    DnaGiven,

    #[error("Sanitized message must be perfectly divisible by three (codons are three nucleotides long).")]
    NotCodonAligned { length: usize },

    #[error("Unknown codon '{codon}' at position {position}.")]
    UnknownCodon { codon: String, position: usize },
}

/// Result type for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Returns all 64 codon table rows in table order.
pub fn entries() -> &'static [CodonEntry] {
    &CODON_TABLE
}

/// Looks up the amino acid label of an uppercase RNA codon.
pub fn lookup(codon: &str) -> Option<&'static str> {
    CODON_INDEX.get(codon).copied()
}

/// Returns true if `codon` is the start codon (`AUG`).
pub fn is_start_codon(codon: &str) -> bool {
    codon == START_CODON
}

/// Returns true if `codon` is one of the stop codons (`UAA`, `UAG`, `UGA`).
pub fn is_stop_codon(codon: &str) -> bool {
    lookup(codon) == Some(STOP_LABEL)
}

/// Interprets an mRNA sequence as codons and translates it to amino acids.
///
/// The input is normalized first. Labels are joined with `-`; stop codons
/// produce a `stop` token and translation carries on to the end of the
/// sequence.
///
/// # Errors
/// - [`TranslateError::DnaGiven`] if the sequence contains a `T`
/// - [`TranslateError::NotCodonAligned`] if its length is not a multiple of 3
/// - [`TranslateError::UnknownCodon`] for a triplet missing from the table
pub fn translate(sequence: &str) -> TranslateResult<String> {
    let rna = normalize(sequence);

    if is_dna(&rna) {
        return Err(TranslateError::DnaGiven);
    }

    let chars: Vec<char> = rna.chars().collect();
    if chars.len() % 3 != 0 {
        return Err(TranslateError::NotCodonAligned {
            length: chars.len(),
        });
    }

    let mut result = String::with_capacity(chars.len() / 3 * 4);
    for (i, triplet) in chars.chunks(3).enumerate() {
        let codon: String = triplet.iter().collect();
        let amino_acid = lookup(&codon).ok_or_else(|| TranslateError::UnknownCodon {
            codon: codon.clone(),
            position: i * 3,
        })?;

        if i > 0 {
            result.push(SEPARATOR);
        }
        result.push_str(amino_acid);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_translation() {
        assert_eq!(translate("AUGGUAUAA").unwrap(), "met-val-stop");
        assert_eq!(translate("UUUGGG").unwrap(), "phe-gly");
        assert_eq!(translate("AUG").unwrap(), "met");
    }

    #[test]
    fn test_translation_normalizes_input() {
        assert_eq!(translate("  aug gua uaa ").unwrap(), "met-val-stop");
    }

    #[test]
    fn test_translation_continues_past_stop() {
        assert_eq!(translate("UAAAUGUGAUGG").unwrap(), "stop-met-stop-trp");
    }

    #[test]
    fn test_empty_translation() {
        assert_eq!(translate("").unwrap(), "");
        assert_eq!(translate("   ").unwrap(), "");
    }

    #[test]
    fn test_dna_rejected() {
        assert_eq!(translate("ATGGTATAA"), Err(TranslateError::DnaGiven));
        // DNA check comes before the length check
        assert_eq!(translate("AT"), Err(TranslateError::DnaGiven));
    }

    #[test]
    fn test_not_codon_aligned() {
        assert_eq!(
            translate("AUGGUAUA"),
            Err(TranslateError::NotCodonAligned { length: 8 })
        );
        assert_eq!(
            translate("aug g"),
            Err(TranslateError::NotCodonAligned { length: 4 })
        );
    }

    #[test]
    fn test_unknown_codon() {
        assert_eq!(
            translate("AUGNNNUAA"),
            Err(TranslateError::UnknownCodon {
                codon: "NNN".to_string(),
                position: 3,
            })
        );
        assert_eq!(
            translate("AU-"),
            Err(TranslateError::UnknownCodon {
                codon: "AU-".to_string(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TranslateError::DnaGiven.to_string(),
            "You cannot transcribe DNA into Amino Acids. Convert to mRNA First."
        );
        assert_eq!(
            TranslateError::NotCodonAligned { length: 4 }.to_string(),
            "Sanitized message must be perfectly divisible by three (codons are three nucleotides long)."
        );
        assert_eq!(
            TranslateError::UnknownCodon {
                codon: "NNN".to_string(),
                position: 6
            }
            .to_string(),
            "Unknown codon 'NNN' at position 6."
        );
    }

    #[test]
    fn test_table_has_all_codons() {
        let table = entries();
        assert_eq!(table.len(), 64);

        let codons: HashSet<&str> = table.iter().map(|e| e.codon).collect();
        assert_eq!(codons.len(), 64);

        for e in table {
            assert_eq!(e.codon.len(), 3);
            assert!(e.codon.chars().all(|c| matches!(c, 'A' | 'C' | 'G' | 'U')));
        }
    }

    #[test]
    fn test_table_amino_acids() {
        let labels: HashSet<&str> = entries()
            .iter()
            .map(|e| e.amino_acid)
            .filter(|&aa| aa != STOP_LABEL)
            .collect();
        assert_eq!(labels.len(), 20);
        assert!(labels.iter().all(|aa| aa.len() == 3));
    }

    #[test]
    fn test_start_and_stop_codons() {
        let stops: Vec<&str> = entries()
            .iter()
            .filter(|e| e.amino_acid == STOP_LABEL)
            .map(|e| e.codon)
            .collect();
        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);

        let met: Vec<&str> = entries()
            .iter()
            .filter(|e| e.amino_acid == "met")
            .map(|e| e.codon)
            .collect();
        assert_eq!(met, vec![START_CODON]);

        assert!(is_start_codon("AUG"));
        assert!(!is_start_codon("AUA"));
        assert!(is_stop_codon("UGA"));
        assert!(!is_stop_codon("UGG"));
        assert!(!is_stop_codon("TAA"));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("AUG"), Some("met"));
        assert_eq!(lookup("UAU"), Some("tyr"));
        assert_eq!(lookup("ATG"), None);
        assert_eq!(lookup("aug"), None);
        assert_eq!(lookup("AU"), None);
    }
}
