//! gdx IR - token and expression-tree types.
//!
//! - [`Token`], [`TokenKind`], [`Literal`]: the scanner's output contract
//! - [`Expr`], [`Value`]: the closed expression tree
//! - [`print`]: Lisp-style rendering of an [`Expr`]
//!
//! Float payloads are kept as `f64`, so these types are `PartialEq` but not
//! `Eq`/`Hash`. Compare `f64::to_bits` when bit-identity matters.

pub mod ast;
mod token;

pub use ast::{print, Expr, Value};
pub use token::{Literal, Token, TokenKind};
