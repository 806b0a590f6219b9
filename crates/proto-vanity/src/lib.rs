//! # proto-vanity
//!
//! Mints syntactically valid, semantically fake protocol-hash
//! identifiers whose base58check text begins with a human-chosen
//! message.
//!
//! ## Pipeline
//!
//! ```text
//! free-form text → sanitize → prefix integer (base 58)
//!                → feasible payload range [lo, hi] (base 256)
//!                → boundary verification via base58check
//!                → 51-symbol identifier
//! ```
//!
//! The hard part is the middle step: base-58 text constraints against
//! base-256 byte storage never align on digit boundaries, so the solver
//! brackets the range with exact big-integer arithmetic and then proves
//! both boundaries by round-tripping them through the real encoder. See
//! [`solver`] for the details.
//!
//! | Quantity | Value |
//! |----------|-------|
//! | Raw payload | 34 bytes (2-byte tag + 32-byte body) |
//! | Checksum suffix | 4 bytes (double SHA-256) |
//! | Encoded text | 51 symbols |
//! | Identifier tag | `Pt1` |
//!
//! ## Example
//!
//! ```
//! let statement = proto_vanity::build("JoinAscent").unwrap();
//!
//! assert!(statement.text.starts_with("Pt1JoinAscent"));
//! assert_eq!(statement.text.len(), 51);
//! assert_eq!(statement.payload.len(), 34);
//! ```
//!
//! Infeasibility is a normal outcome, not an error path gone wrong: a
//! message can simply pin more symbols than a 34-byte payload has bits
//! to spare, and the caller is expected to shorten it.

pub mod alphabet;
pub mod solver;
pub mod statement;

pub use solver::{solve, FeasibleRange, PayloadLayout, CHECKSUM_LEN};
pub use statement::{
    build, decode_identifier, sanitize, Statement, StatementError, STATEMENT_LAYOUT,
    STATEMENT_TAG,
};
