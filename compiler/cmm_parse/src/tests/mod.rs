//! Parser tests.
//!
//! - `parser`: expressions, statements and precedence
//! - `blocks`: brace nesting and `else` pairing
//! - `errors`: recorded diagnostics and recovery
