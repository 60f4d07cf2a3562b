// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Raised when user text cannot be read as a `#RRGGBB` color.
///
/// The message is meant to be shown to the user as-is, so the offending
/// input is carried along verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input does not hold exactly six digits after the optional `#`.
    #[error("expected a #RRGGBB color, got {digits} digit(s) in {input:?}")]
    Length { input: String, digits: usize },

    /// The input has six characters but one of them is not hexadecimal.
    #[error("invalid hex digit {found:?} in {input:?}")]
    InvalidDigit { input: String, found: char },
}
