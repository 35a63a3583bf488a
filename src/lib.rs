//! # genetools - Plain Sequence Toolkit
//!
//! Textual transformations on nucleotide sequences typed or pasted by a user.
//!
//! ## Architecture
//!
//! - `sequence`: normalization, DNA detection, complement, reversal, T/U conversion
//! - `genetic_code`: the codon table and codon-to-amino-acid translation
//! - `operation`: one enum value per user action, dispatching to the above
//! - `input`: gathering raw text from arguments, a file, or stdin
//! - `output`: writing (and optionally wrapping) the result
//!
//! All transformations are pure functions over strings; the codon table is an
//! immutable static shared by every caller.
//!
//! ```
//! use genetools::genetic_code::translate;
//! use genetools::sequence::{complement, to_mrna};
//!
//! assert_eq!(complement("aattggcc"), "TTAACCGG");
//! let rna = to_mrna("ATG GTA TAA");
//! assert_eq!(translate(&rna).unwrap(), "met-val-stop");
//! ```

pub mod genetic_code;
pub mod input;
pub mod operation;
pub mod output;
pub mod sequence;
