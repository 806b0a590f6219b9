//! Governance statement identifiers.
//!
//! A statement is a syntactically valid but semantically fake protocol
//! hash whose base58check text spells out a short message: a 34-byte
//! payload (2-byte tag + 32-byte digest-sized body) encoding to 51
//! symbols that begin with `Pt1` followed by the sanitized message. A
//! governance tool can submit the payload as an on-chain vote to
//! covertly publish the text.
//!
//! ```
//! let statement = proto_vanity::statement::build("Join Ascent!").unwrap();
//! assert!(statement.text.starts_with("Pt1JoinAscent"));
//! assert_eq!(statement.text.len(), 51);
//! ```

use thiserror::Error;

use crate::alphabet;
use crate::solver::{self, PayloadLayout};

/// Statement payload sizing: 2-byte tag + 32-byte digest-sized body,
/// always 51 symbols once checksummed and encoded.
pub const STATEMENT_LAYOUT: PayloadLayout = PayloadLayout {
    payload_len: 34,
    encoded_len: 51,
};

/// Every statement identifier starts with this tag, mimicking a real
/// protocol-hash prefix.
pub const STATEMENT_TAG: &str = "Pt1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatementError {
    /// The message pins too many symbols for the payload width. Normal
    /// negative outcome; shorten the message.
    #[error("cannot generate identifier from provided message")]
    Infeasible,

    /// Identifier text whose checksum suffix does not match its payload.
    #[error("identifier failed its checksum")]
    BadChecksum,

    /// Checksum valid but the payload is not statement-sized.
    #[error("payload is {0} bytes, expected 34")]
    BadLength(usize),
}

/// A minted vanity identifier and the raw bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// 34-byte payload, ready for submission as a vote payload.
    pub payload: Vec<u8>,
    /// Full 51-symbol identifier: tag, message, filler.
    pub text: String,
}

/// Restrict free-form text to the Base58 alphabet.
///
/// Keeps alphabet symbols as-is, folds other characters to lowercase
/// when the lowercase form is in the alphabet, and drops the rest.
/// Lossy by design: the caller supplies free-form text and accepts
/// degradation (`O` survives as `o`, `0` does not survive at all).
pub fn sanitize(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    for c in message.chars() {
        if alphabet::contains(c) {
            out.push(c);
            continue;
        }
        // Multi-character lowerings can never land in the alphabet.
        let mut lowered = c.to_lowercase();
        if let (Some(l), None) = (lowered.next(), lowered.next()) {
            if alphabet::contains(l) {
                out.push(l);
            }
        }
    }
    out
}

/// Mint a statement identifier for a free-form message.
///
/// Sanitizes the message, prepends [`STATEMENT_TAG`], and proves the
/// prefix feasible at the statement layout. Success carries the
/// low-boundary payload and its encoding.
pub fn build(message: &str) -> Result<Statement, StatementError> {
    let mut prefix = String::from(STATEMENT_TAG);
    prefix.push_str(&sanitize(message));

    let range =
        solver::solve(&STATEMENT_LAYOUT, &prefix).ok_or(StatementError::Infeasible)?;

    Ok(Statement {
        payload: range.lo,
        text: range.lo_text,
    })
}

/// Recover and checksum-verify the raw payload behind an identifier.
pub fn decode_identifier(text: &str) -> Result<Vec<u8>, StatementError> {
    let payload = bs58::decode(text)
        .with_check(None)
        .into_vec()
        .map_err(|_| StatementError::BadChecksum)?;

    if payload.len() != STATEMENT_LAYOUT.payload_len {
        return Err(StatementError::BadLength(payload.len()));
    }
    Ok(payload)
}

// ============================================================================
// TESTS
// ============================================================================
