//! Parsing support for boolean expressions

use super::Expr;
use crate::error::ExprParseError;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/expr.rs"));
}

impl Expr {
    /// Parse a boolean expression from a string
    ///
    /// Supported syntax:
    /// - `v<N>` for the positive literal of variable `N`
    /// - `0` and `1` for the constants
    /// - `+` or `|` for OR, `*` or `&` for AND, `^` for XOR
    /// - `~` or `!` for negation
    /// - parentheses for grouping
    ///
    /// # Examples
    ///
    /// ```
    /// use sop_algebra::Expr;
    ///
    /// let expr = Expr::parse("v0 * v1 + ~v2").unwrap();
    /// assert_eq!(expr.to_string(), "( ( 0 & 1 ) | ~2 )");
    /// assert!(Expr::parse("v0 +").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExprParseError> {
        parser_impl::ExprParser::new()
            .parse(input)
            .map_err(|e| ExprParseError {
                message: e.to_string(),
            })
    }
}
