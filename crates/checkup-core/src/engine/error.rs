use thiserror::Error;

/// Why a raw age could not be turned into an [`Age`](super::age::Age).
///
/// Both variants are user-facing: `Empty` means "nothing entered yet" and is a
/// prompt, `OutOfRange` means the entry is not a usable age.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("No age was entered")]
    Empty,

    #[error("Invalid age '{raw}'. Use a value between 0 and 120.")]
    OutOfRange { raw: String },
}
