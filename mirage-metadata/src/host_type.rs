//! Host type expressions.
//!
//! Types are written in the metadata file as compact expressions:
//!
//! ```text
//! string                       named type
//! Contoso.Models.Person        qualified named type
//! Dictionary<string, Item>     generic instantiation
//! Item[]                       array
//! int?                         nullable value
//! int&  /  ref int  /  out int by-reference
//! string | number              union
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A parsed host type expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum HostType {
    /// A (possibly generic) named type.
    Named { name: String, args: Vec<HostType> },
    /// An array of the element type.
    Array(Box<HostType>),
    /// A by-reference (`ref`/`out`) type.
    ByRef(Box<HostType>),
    /// A nullable value type.
    Nullable(Box<HostType>),
    /// A union of cases.
    Union(Vec<HostType>),
}

impl HostType {
    /// Create a non-generic named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a generic instantiation.
    pub fn generic(name: impl Into<String>, args: Vec<HostType>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    /// The type name when this is a named type.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Check if this expression is the `void` type.
    pub fn is_void(&self) -> bool {
        matches!(self.name(), Some("void" | "System.Void"))
    }

    /// Strip a by-reference wrapper, reporting whether one was present.
    pub fn unwrap_by_ref(&self) -> (&HostType, bool) {
        match self {
            Self::ByRef(inner) => (inner, true),
            other => (other, false),
        }
    }

    /// Strip a nullable wrapper (`T?` or `Nullable<T>`), reporting whether one was present.
    pub fn unwrap_nullable(&self) -> (&HostType, bool) {
        match self {
            Self::Nullable(inner) => (inner, true),
            Self::Named { name, args } if args.len() == 1 && is_nullable_name(name) => {
                (&args[0], true)
            }
            other => (other, false),
        }
    }
}

fn is_nullable_name(name: &str) -> bool {
    matches!(name, "Nullable" | "System.Nullable")
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", arg)?;
                    }
                    write!(f, ">")?;
                }
                Ok(())
            }
            Self::Array(elem) => write!(f, "{}[]", elem),
            Self::ByRef(inner) => write!(f, "{}&", inner),
            Self::Nullable(inner) => write!(f, "{}?", inner),
            Self::Union(cases) => {
                for (i, case) in cases.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", case)?;
                }
                Ok(())
            }
        }
    }
}

/// Error raised for a malformed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid type expression '{expr}': {reason}")]
pub struct TypeExprError {
    pub expr: String,
    pub reason: String,
}

impl FromStr for HostType {
    type Err = TypeExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: String| TypeExprError {
            expr: s.to_string(),
            reason,
        };

        let tokens = tokenize(s).map_err(fail)?;
        let mut parser = Parser { tokens, pos: 0 };
        let ty = parser.parse_union().map_err(fail)?;
        match parser.peek() {
            None => Ok(ty),
            Some(tok) => Err(fail(format!("unexpected '{}'", tok))),
        }
    }
}

impl TryFrom<String> for HostType {
    type Error = TypeExprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Ident(String),
    Lt,
    Gt,
    Comma,
    LBracket,
    RBracket,
    Question,
    Amp,
    Pipe,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "{}", s),
            Token::Lt => write!(f, "<"),
            Token::Gt => write!(f, ">"),
            Token::Comma => write!(f, ","),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Question => write!(f, "?"),
            Token::Amp => write!(f, "&"),
            Token::Pipe => write!(f, "|"),
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '`')
}

fn tokenize(s: &str) -> Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = s.chars().peekable();

    while let Some(&c) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '<' => Token::Lt,
            '>' => Token::Gt,
            ',' => Token::Comma,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '?' => Token::Question,
            '&' => Token::Amp,
            '|' => Token::Pipe,
            c if is_ident_char(c) => {
                let mut ident = String::new();
                while let Some(&c) = chars.peek() {
                    if !is_ident_char(c) {
                        break;
                    }
                    ident.push(c);
                    chars.next();
                }
                if ident.starts_with('.') || ident.ends_with('.') || ident.contains("..") {
                    return Err(format!("malformed name '{}'", ident));
                }
                tokens.push(Token::Ident(ident));
                continue;
            }
            other => return Err(format!("unexpected character '{}'", other)),
        };
        chars.next();
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err("empty type".to_string());
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Result<(), String> {
        if self.eat(token) {
            Ok(())
        } else {
            match self.peek() {
                Some(found) => Err(format!("expected '{}', found '{}'", token, found)),
                None => Err(format!("expected '{}'", token)),
            }
        }
    }

    fn parse_union(&mut self) -> Result<HostType, String> {
        let mut cases = vec![self.parse_postfix()?];
        while self.eat(&Token::Pipe) {
            cases.push(self.parse_postfix()?);
        }
        if cases.len() == 1 {
            Ok(cases.remove(0))
        } else {
            Ok(HostType::Union(cases))
        }
    }

    fn parse_postfix(&mut self) -> Result<HostType, String> {
        let by_ref = matches!(
            (self.tokens.get(self.pos), self.tokens.get(self.pos + 1)),
            (Some(Token::Ident(kw)), Some(Token::Ident(_))) if kw == "ref" || kw == "out"
        );
        if by_ref {
            self.pos += 1;
        }

        let mut ty = self.parse_primary()?;
        loop {
            if self.eat(&Token::LBracket) {
                self.expect(&Token::RBracket)?;
                ty = HostType::Array(Box::new(ty));
            } else if self.eat(&Token::Question) {
                ty = HostType::Nullable(Box::new(ty));
            } else if self.eat(&Token::Amp) {
                ty = HostType::ByRef(Box::new(ty));
            } else {
                break;
            }
        }

        if by_ref {
            ty = HostType::ByRef(Box::new(ty));
        }
        Ok(ty)
    }

    fn parse_primary(&mut self) -> Result<HostType, String> {
        let name = match self.peek() {
            Some(Token::Ident(name)) => name.clone(),
            Some(other) => return Err(format!("expected a type name, found '{}'", other)),
            None => return Err("expected a type name".to_string()),
        };
        self.pos += 1;

        let mut args = Vec::new();
        if self.eat(&Token::Lt) {
            args.push(self.parse_union()?);
            while self.eat(&Token::Comma) {
                args.push(self.parse_union()?);
            }
            self.expect(&Token::Gt)?;
        }
        Ok(HostType::Named { name, args })
    }
}
