//! Source positions and positioned syntax errors.
//!
//! - `position`     : `LineMap`, offset to row/column conversion.
//! - `syntax_error` : `SyntaxError`, the error every core stage returns,
//!   with a context window rendered once at construction.

crate::reexport!(position);
crate::reexport!(syntax_error);
