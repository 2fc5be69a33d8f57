//! Routine signature extraction.
//!
//! `SHOW CREATE PROCEDURE` hands back the full routine header and body.
//! The parameter list is all the console needs (to decide between
//! one-click execution and a parameter dialog), and MySQL routine bodies
//! are outside what a general SQL parser accepts, so this module reads
//! the token stream of the `CREATE` header instead of a parsed
//! statement: find the `PROCEDURE`/`FUNCTION` keyword, skip the routine
//! name, and split the parenthesized parameter list at top-level commas.

use crate::error::SqlError;
use marlin_core::RoutineKind;
use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer};

/// Direction of a routine parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    In,
    Out,
    InOut,
}

impl ParamMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamMode::In => "IN",
            ParamMode::Out => "OUT",
            ParamMode::InOut => "INOUT",
        }
    }
}

/// One parameter of a stored routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineParam {
    /// Parameter direction. Defaults to `IN` when the header omits it.
    pub mode: ParamMode,
    /// Parameter name, unquoted.
    pub name: String,
    /// Declared type text, e.g. `VARCHAR(20)` or `ENUM('a','b')`.
    pub data_type: String,
}

/// Extract the parameter list from a routine's `CREATE` definition.
pub fn parse_parameters(definition: &str) -> Result<Vec<RoutineParam>, SqlError> {
    let dialect = MySqlDialect {};
    let tokens = Tokenizer::new(&dialect, definition)
        .tokenize()
        .map_err(|e| SqlError::Tokenize(e.to_string()))?;

    let significant: Vec<Token> = tokens
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect();

    // Locate the PROCEDURE/FUNCTION keyword. A DEFINER clause may sit
    // between CREATE and the keyword.
    let mut i = 0;
    while i < significant.len() {
        if let Token::Word(w) = &significant[i]
            && w.quote_style.is_none()
        {
            let kw = w.value.to_ascii_uppercase();
            if kw == "PROCEDURE" || kw == "FUNCTION" {
                break;
            }
        }
        i += 1;
    }
    if i == significant.len() {
        return Err(SqlError::NotARoutine);
    }

    // Skip the (possibly qualified) routine name up to the opening
    // parenthesis of the parameter list.
    i += 1;
    while i < significant.len() && !matches!(significant[i], Token::LParen) {
        i += 1;
    }
    if i == significant.len() {
        return Err(SqlError::MissingParameterList);
    }

    // Collect everything up to the matching close paren.
    let mut depth = 1usize;
    let mut body: Vec<&Token> = Vec::new();
    i += 1;
    while i < significant.len() {
        match significant[i] {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        body.push(&significant[i]);
        i += 1;
    }
    if depth != 0 {
        return Err(SqlError::MissingParameterList);
    }

    // Split at top-level commas; nested parens (VARCHAR(20),
    // DECIMAL(10,2), ENUM('a','b')) keep their commas.
    let mut params = Vec::new();
    let mut group: Vec<&Token> = Vec::new();
    let mut nesting = 0usize;
    for tok in body {
        match tok {
            Token::Comma if nesting == 0 => {
                params.push(parse_one(&group)?);
                group.clear();
            }
            Token::LParen => {
                nesting += 1;
                group.push(tok);
            }
            Token::RParen => {
                nesting = nesting.saturating_sub(1);
                group.push(tok);
            }
            _ => group.push(tok),
        }
    }
    if !group.is_empty() {
        params.push(parse_one(&group)?);
    }

    Ok(params)
}

/// Whether executing the routine needs values from the user.
///
/// A procedure whose parameters are all `OUT` can run directly; every
/// function parameter is an input.
pub fn has_input_parameters(kind: RoutineKind, params: &[RoutineParam]) -> bool {
    params
        .iter()
        .any(|p| kind == RoutineKind::Function || p.mode != ParamMode::Out)
}

fn parse_one(tokens: &[&Token]) -> Result<RoutineParam, SqlError> {
    let mut rest = tokens;

    let mode = match rest.first() {
        Some(Token::Word(w)) if w.quote_style.is_none() => {
            match w.value.to_ascii_uppercase().as_str() {
                "IN" => {
                    rest = &rest[1..];
                    ParamMode::In
                }
                "OUT" => {
                    rest = &rest[1..];
                    ParamMode::Out
                }
                "INOUT" => {
                    rest = &rest[1..];
                    ParamMode::InOut
                }
                _ => ParamMode::In,
            }
        }
        _ => ParamMode::In,
    };

    let (name, type_tokens) = match rest.split_first() {
        Some((Token::Word(w), tail)) if !tail.is_empty() => (w.value.clone(), tail),
        _ => return Err(SqlError::MalformedParameter),
    };

    Ok(RoutineParam {
        mode,
        name,
        data_type: render_type(type_tokens),
    })
}

/// Rebuild the declared type text from its tokens.
fn render_type(tokens: &[&Token]) -> String {
    let mut out = String::new();
    for tok in tokens {
        let text = tok.to_string();
        let tight = matches!(tok, Token::LParen | Token::RParen | Token::Comma)
            || out.ends_with('(')
            || out.ends_with(',');
        if !out.is_empty() && !tight {
            out.push(' ');
        }
        out.push_str(&text);
    }
    out
}
