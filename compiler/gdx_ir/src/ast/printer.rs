//! Lisp-style printer for [`Expr`].
//!
//! Every compound node becomes `(name operand...)`, with the operator's
//! lexeme as the name and `group` for parentheses. Literals print as their
//! value.

use std::fmt::Write;

use super::Expr;

/// Render `expr` as a fully parenthesized string.
///
/// ```text
/// -123 * (45.67)  =>  (* (- 123) (group 45.67))
/// ```
pub fn print(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr);
    out
}

fn write_expr(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(out, &operator.lexeme, &[&**left, &**right]),
        Expr::Grouping { expression } => parenthesize(out, "group", &[&**expression]),
        Expr::Literal { value } => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value}");
        }
        Expr::Unary { operator, right } => parenthesize(out, &operator.lexeme, &[&**right]),
    }
}

fn parenthesize(out: &mut String, name: &str, exprs: &[&Expr]) {
    out.push('(');
    out.push_str(name);
    for expr in exprs {
        out.push(' ');
        write_expr(out, expr);
    }
    out.push(')');
}
