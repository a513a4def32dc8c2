//! Recursive-descent parser from lexer tokens to a [`Value`] tree.
//!
//! Payloads are checked against their tag while parsing, so a tree that
//! comes out of here satisfies every value-model bound.

use crate::error::ParseError;
use crate::lexer::{self, Spanned, Token};
use crate::value::{Object, TypeTag, Value};

/// Containers nested deeper than this are rejected instead of recursing.
pub const MAX_DEPTH: usize = 512;

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn cur(&self) -> &Spanned {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self) -> &Token {
        &self.cur().token
    }

    fn advance(&mut self) -> &Spanned {
        let t = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let s = self.cur();
        ParseError::new(s.line, s.column, msg)
    }

    fn parse_document(&mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        if self.peek() != &Token::Eof {
            return Err(self.err(format!(
                "unexpected {} after the end of the value",
                describe(self.peek())
            )));
        }
        Ok(value)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        if depth > MAX_DEPTH {
            return Err(self.err(format!("nesting deeper than {} levels", MAX_DEPTH)));
        }
        match self.peek().clone() {
            Token::Tag(tag) => {
                self.advance();
                self.parse_leaf(tag)
            }
            Token::LBrace => {
                self.advance();
                self.parse_object(depth)
            }
            Token::LBracket => {
                self.advance();
                self.parse_array(depth)
            }
            other => Err(self.err(format!("expected a value, got {}", describe(&other)))),
        }
    }

    fn parse_leaf(&mut self, tag: TypeTag) -> Result<Value, ParseError> {
        let payload = match self.peek() {
            Token::Payload(p) => p.clone(),
            other => {
                return Err(self.err(format!(
                    "expected '(' after <{}>, got {}",
                    tag,
                    describe(other)
                )))
            }
        };
        let leaf = leaf_from_payload(tag, &payload).map_err(|msg| self.err(msg))?;
        self.advance();
        Ok(leaf)
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        let mut obj = Object::new();
        loop {
            match self.peek().clone() {
                Token::RBrace => {
                    self.advance();
                    return Ok(Value::Object(obj));
                }
                Token::Key(key) => {
                    let key_err = self.err(format!("duplicate key '{}'", key));
                    self.advance();
                    let value = self.parse_value(depth + 1)?;
                    obj.insert(key, value).map_err(|_| key_err)?;
                }
                other => {
                    return Err(self.err(format!(
                        "expected a key or '}}', got {}",
                        describe(&other)
                    )))
                }
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        loop {
            if self.peek() == &Token::RBracket {
                self.advance();
                return Ok(Value::Array(items));
            }
            if self.peek() == &Token::Eof {
                return Err(self.err("unterminated array"));
            }
            items.push(self.parse_value(depth + 1)?);
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Key(k) => format!("key '{}'", k),
        Token::Tag(t) => format!("<{}>", t),
        Token::Payload(_) => "'('".to_string(),
        Token::LBrace => "'{'".to_string(),
        Token::RBrace => "'}'".to_string(),
        Token::LBracket => "'['".to_string(),
        Token::RBracket => "']'".to_string(),
        Token::Eof => "end of input".to_string(),
    }
}

fn leaf_from_payload(tag: TypeTag, payload: &str) -> Result<Value, String> {
    if tag.is_integer() {
        let n: i128 = payload
            .parse()
            .map_err(|_| format!("invalid integer '{}' for <{}>", payload, tag))?;
        return Value::integer(tag, n).map_err(|e| e.to_string());
    }
    if let Some(tier) = tag.str_tier() {
        return Value::string(tier, payload).map_err(|e| e.to_string());
    }
    match tag {
        TypeTag::F32 => payload
            .parse::<f32>()
            .map(Value::F32)
            .map_err(|_| format!("invalid float '{}' for <f32>", payload)),
        TypeTag::F64 => payload
            .parse::<f64>()
            .map(Value::F64)
            .map_err(|_| format!("invalid float '{}' for <f64>", payload)),
        TypeTag::Bool => match payload {
            "t" | "true" => Ok(Value::Bool(true)),
            "f" | "false" => Ok(Value::Bool(false)),
            other => Err(format!("invalid boolean '{}'", other)),
        },
        TypeTag::Null if payload.is_empty() => Ok(Value::Null),
        TypeTag::Null => Err(format!("null takes no payload, got '{}'", payload)),
        other => Err(format!("<{}> is not a leaf type", other)),
    }
}

pub fn parse(src: &str) -> Result<Value, ParseError> {
    let tokens = lexer::lex(src)?;
    Parser::new(&tokens).parse_document()
}
