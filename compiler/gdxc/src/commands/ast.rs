use std::io::Write;

use gdx_ir::{Expr, Token, TokenKind};

use crate::Error;

/// `-123 * (45.67)`, built by hand.
pub fn demo_expr() -> Expr {
    Expr::binary(
        Expr::unary(Token::operator(TokenKind::Minus, "-"), Expr::literal(123.0)),
        Token::operator(TokenKind::Star, "*"),
        Expr::grouping(Expr::literal(45.67)),
    )
}

/// Print the demo expression tree, `(* (- 123) (group 45.67))`.
pub fn print_ast<W: Write>(out: &mut W) -> Result<(), Error> {
    writeln!(out, "{}", gdx_ir::print(&demo_expr()))?;
    Ok(())
}
