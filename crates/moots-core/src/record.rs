//! The record handed from the export parser to the fetch engine.

/// One mutual account found in a followers export: the account's handle and
/// the full-resolution profile picture URL. Duplicates across input files are
/// preserved, not merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutualRecord {
    pub handle: String,
    /// Full-size image URL (thumbnail size suffix already stripped).
    pub image_url: String,
}
