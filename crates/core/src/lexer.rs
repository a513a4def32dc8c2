use crate::error::ParseError;
use crate::value::TypeTag;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Object key, bare or quoted (quotes removed, escapes resolved)
    Key(String),
    /// Leaf type tag written as `<tag>`
    Tag(TypeTag),
    /// Leaf payload written as `(...)`, escapes resolved
    Payload(String),
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Spanned {
    pub token: Token,
    pub line: u32,
    pub column: u32,
}

/// Characters allowed in an unquoted key.
pub fn is_bare_key_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn err(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.line, self.column, message)
    }
}

pub fn lex(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut cur = Cursor {
        chars: src.chars().collect(),
        pos: 0,
        line: 1,
        column: 1,
    };

    while let Some(c) = cur.peek() {
        // Line comment
        if c == ':' && cur.peek_at(1) == Some('|') {
            while cur.peek().is_some_and(|c| c != '\n') {
                cur.bump();
            }
            continue;
        }

        if c.is_whitespace() {
            cur.bump();
            continue;
        }

        let (line, column) = (cur.line, cur.column);
        let token = match c {
            '{' => {
                cur.bump();
                Token::LBrace
            }
            '}' => {
                cur.bump();
                Token::RBrace
            }
            '[' => {
                cur.bump();
                Token::LBracket
            }
            ']' => {
                cur.bump();
                Token::RBracket
            }
            '<' => lex_tag(&mut cur)?,
            '(' => lex_payload(&mut cur)?,
            '"' => lex_quoted_key(&mut cur)?,
            c if is_bare_key_char(c) => {
                let mut key = String::new();
                while let Some(k) = cur.peek().filter(|k| is_bare_key_char(*k)) {
                    key.push(k);
                    cur.bump();
                }
                Token::Key(key)
            }
            other => return Err(cur.err(format!("unexpected character '{}'", other))),
        };
        tokens.push(Spanned {
            token,
            line,
            column,
        });
    }

    tokens.push(Spanned {
        token: Token::Eof,
        line: cur.line,
        column: cur.column,
    });
    Ok(tokens)
}

fn lex_tag(cur: &mut Cursor) -> Result<Token, ParseError> {
    let (line, column) = (cur.line, cur.column);
    cur.bump(); // '<'
    let mut name = String::new();
    loop {
        match cur.bump() {
            Some('>') => break,
            Some(c) if c.is_ascii_alphanumeric() => name.push(c),
            Some(c) => return Err(cur.err(format!("unexpected character '{}' in type tag", c))),
            None => return Err(ParseError::new(line, column, "unterminated type tag")),
        }
    }
    name.parse::<TypeTag>()
        .map(Token::Tag)
        .map_err(|msg| ParseError::new(line, column, msg))
}

fn lex_payload(cur: &mut Cursor) -> Result<Token, ParseError> {
    let (line, column) = (cur.line, cur.column);
    cur.bump(); // '('
    let mut s = String::new();
    loop {
        match cur.bump() {
            Some(')') => break,
            Some('\\') => s.push(lex_escape(cur, ')')?),
            Some(c) => s.push(c),
            None => return Err(ParseError::new(line, column, "unterminated value payload")),
        }
    }
    Ok(Token::Payload(s))
}

fn lex_quoted_key(cur: &mut Cursor) -> Result<Token, ParseError> {
    let (line, column) = (cur.line, cur.column);
    cur.bump(); // '"'
    let mut s = String::new();
    loop {
        match cur.bump() {
            Some('"') => break,
            Some('\\') => s.push(lex_escape(cur, '"')?),
            Some('\n') | None => return Err(ParseError::new(line, column, "unterminated quoted key")),
            Some(c) => s.push(c),
        }
    }
    Ok(Token::Key(s))
}

/// Resolve the escape after a backslash. `closer` is the delimiter that
/// may be escaped in the current context.
fn lex_escape(cur: &mut Cursor, closer: char) -> Result<char, ParseError> {
    match cur.bump() {
        Some('\\') => Ok('\\'),
        Some('n') => Ok('\n'),
        Some('r') => Ok('\r'),
        Some('t') => Ok('\t'),
        Some('u') => {
            if cur.bump() != Some('{') {
                return Err(cur.err("expected '{' after \\u"));
            }
            let mut hex = String::new();
            loop {
                match cur.bump() {
                    Some('}') => break,
                    Some(h) if h.is_ascii_hexdigit() && hex.len() < 6 => hex.push(h),
                    _ => return Err(cur.err("malformed \\u{...} escape")),
                }
            }
            u32::from_str_radix(&hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| cur.err(format!("invalid code point \\u{{{}}}", hex)))
        }
        Some(c) if c == closer => Ok(c),
        Some(c) => Err(cur.err(format!("unknown escape '\\{}'", c))),
        None => Err(cur.err("unterminated escape")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        lex(src)
            .expect("lex should succeed")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn lexes_member_with_leaf() {
        assert_eq!(
            tokens("{name<s64>(Alice)}"),
            vec![
                Token::LBrace,
                Token::Key("name".into()),
                Token::Tag(TypeTag::S64),
                Token::Payload("Alice".into()),
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn payload_escapes() {
        assert_eq!(
            tokens(r"<s64>(a\)b\\c\nd\u{1}e)"),
            vec![
                Token::Tag(TypeTag::S64),
                Token::Payload("a)b\\c\nd\u{1}e".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn quoted_keys_and_comments() {
        let src = ":| header comment\n{\"two words\"<n>() :| trailing\n}";
        assert_eq!(
            tokens(src),
            vec![
                Token::LBrace,
                Token::Key("two words".into()),
                Token::Tag(TypeTag::Null),
                Token::Payload(String::new()),
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn positions_are_one_based() {
        let spanned = lex("{\n  a<u8>(1)\n}").unwrap();
        assert_eq!((spanned[1].line, spanned[1].column), (2, 3));
        assert_eq!((spanned[2].line, spanned[2].column), (2, 4));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(lex("<s64>(open").is_err());
        assert!(lex("<x9>()").is_err());
        assert!(lex("<s64>(bad\\q)").is_err());
        let err = lex("{a<u8>(1) ; }").unwrap_err();
        assert_eq!((err.line, err.column), (1, 11));
    }
}
