//! User actions on a sequence.
//!
//! Each [`Operation`] is one thing a user can ask for: sanitize the input,
//! complement it, reverse it, transcribe it, or translate it. Applying an
//! operation runs exactly one transformation on the raw input text.

use std::fmt;

use tracing::debug;

use crate::genetic_code::{translate, TranslateResult};
use crate::sequence::{complement, is_dna, normalize, reverse, to_dna, to_mrna};

/// Actions that can be applied to an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Rewrite the input in plain sequence format
    Format,
    /// Positional A<->T, G<->C complement
    Complement,
    /// Reverse the prime direction
    Reverse,
    /// DNA to messenger RNA (T -> U)
    ToMrna,
    /// RNA to DNA (U -> T)
    ToDna,
    /// Read the input as codons and translate to amino acids
    Translate,
    /// Report whether the input is DNA or RNA
    Detect,
}

impl Operation {
    /// All operations, in menu order.
    pub const ALL: [Operation; 7] = [
        Operation::Format,
        Operation::Reverse,
        Operation::ToMrna,
        Operation::Translate,
        Operation::ToDna,
        Operation::Complement,
        Operation::Detect,
    ];

    /// Human-readable name of the action.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Format => "Format input to plain sequence format",
            Operation::Complement => "Complement DNA",
            Operation::Reverse => "Reverse Prime Direction",
            Operation::ToMrna => "Convert to Messenger RNA",
            Operation::ToDna => "Convert to DNA",
            Operation::Translate => "Interpret as Codons and Convert to Amino Acids",
            Operation::Detect => "Detect Nucleic Acid Type",
        }
    }

    /// Applies the operation to raw input text.
    ///
    /// Only [`Operation::Translate`] can fail; every other operation always
    /// produces output.
    pub fn apply(self, text: &str) -> TranslateResult<String> {
        let output = match self {
            Operation::Format => normalize(text),
            Operation::Complement => complement(text),
            Operation::Reverse => reverse(text),
            Operation::ToMrna => to_mrna(text),
            Operation::ToDna => to_dna(text),
            Operation::Translate => translate(text)?,
            Operation::Detect => {
                if is_dna(&normalize(text)) {
                    "DNA".to_string()
                } else {
                    "RNA".to_string()
                }
            }
        };

        debug!(
            operation = %self,
            input_len = text.len(),
            output_len = output.len(),
            "applied operation"
        );
        Ok(output)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
