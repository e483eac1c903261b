//! A tiny, ad hoc textual type-decl format — *not* LLVM syntax, since
//! parsing LLVM text/bitcode is explicitly out of scope (spec §1). This
//! exists purely so the `lift` CLI subcommand and integration tests can
//! write declarations as plain text instead of constructing
//! [`ltl::RawType`] trees by hand.
//!
//! Grammar, one declaration per line (blank lines and `#`-comments
//! ignored):
//!
//! ```text
//! decls    := decl*
//! decl     := NAME '=' ty
//! ty       := 'i' NUM                  -- Int(NUM)
//!           | 'float' | 'double' | 'void' | 'metadata' | 'opaque'
//!           | 'other' '(' STRING ')'   -- OtherPrimitive
//!           | 'ptr' '(' ty ')'
//!           | 'array' '(' NUM ',' ty ')'
//!           | 'vector' '(' NUM ',' ty ')'
//!           | 'struct' '(' ty,* ')'
//!           | 'packed_struct' '(' ty,* ')'
//!           | 'fun' '(' ty ';' ty,* [',' '...'] ')'
//!           | NAME                     -- Alias(NAME)
//! ```

use ltl::{Ident, IdentTable, RawType};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclError {
    #[error("line {line}: expected `=` separating a name from its type")]
    MissingEquals { line: usize },
    #[error("line {line}: unexpected end of type expression")]
    UnexpectedEof { line: usize },
    #[error("line {line}: unexpected token `{found}`")]
    UnexpectedToken { line: usize, found: String },
    #[error("line {line}: invalid number `{text}`")]
    InvalidNumber { line: usize, text: String },
}

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Ident(String),
    Str(String),
    Num(u64),
    LParen,
    RParen,
    Comma,
    Semi,
    Ellipsis,
}

fn tokenize(line: usize, text: &str) -> Result<Vec<Token>, DeclError> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if c == '(' {
            tokens.push(Token::LParen);
            i += 1;
        } else if c == ')' {
            tokens.push(Token::RParen);
            i += 1;
        } else if c == ',' {
            tokens.push(Token::Comma);
            i += 1;
        } else if c == ';' {
            tokens.push(Token::Semi);
            i += 1;
        } else if c == '.' {
            if chars[i..].starts_with(&['.', '.', '.']) {
                tokens.push(Token::Ellipsis);
                i += 3;
            } else {
                return Err(DeclError::UnexpectedToken { line, found: ".".to_string() });
            }
        } else if c == '"' {
            let mut s = String::new();
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                s.push(chars[i]);
                i += 1;
            }
            if i >= chars.len() {
                return Err(DeclError::UnexpectedEof { line });
            }
            i += 1; // closing quote
            tokens.push(Token::Str(s));
        } else if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let n = text.parse::<u64>().map_err(|_| DeclError::InvalidNumber { line, text: text.clone() })?;
            tokens.push(Token::Num(n));
        } else if c.is_alphanumeric() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            if let Some(rest) = text.strip_prefix('i') {
                if !rest.is_empty() && rest.chars().all(|d| d.is_ascii_digit()) {
                    let w = rest.parse::<u32>().map_err(|_| DeclError::InvalidNumber { line, text: text.clone() })?;
                    tokens.push(Token::Num(w as u64));
                    tokens.push(Token::Ident("i".to_string()));
                    // Normalize to the same two-token shape `array`/`vector`
                    // use (`Ident("i")`, `Num(w)`) by swapping order below.
                    let last = tokens.len() - 1;
                    tokens.swap(last, last - 1);
                    continue;
                }
            }
            tokens.push(Token::Ident(text));
        } else {
            return Err(DeclError::UnexpectedToken { line, found: c.to_string() });
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    line: usize,
    tokens: &'a [Token],
    pos: usize,
    idents: &'a mut IdentTable,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Result<Token, DeclError> {
        let t = self.tokens.get(self.pos).cloned().ok_or(DeclError::UnexpectedEof { line: self.line })?;
        self.pos += 1;
        Ok(t)
    }

    fn expect(&mut self, want: &Token) -> Result<(), DeclError> {
        let got = self.bump()?;
        if &got == want {
            Ok(())
        } else {
            Err(DeclError::UnexpectedToken { line: self.line, found: format!("{:?}", got) })
        }
    }

    fn expect_num(&mut self) -> Result<u64, DeclError> {
        match self.bump()? {
            Token::Num(n) => Ok(n),
            other => Err(DeclError::UnexpectedToken { line: self.line, found: format!("{:?}", other) }),
        }
    }

    fn parse_type(&mut self) -> Result<RawType, DeclError> {
        match self.bump()? {
            Token::Ident(name) => match name.as_str() {
                "i" => Ok(RawType::Int(self.expect_num()? as u32)),
                "float" => Ok(RawType::Float),
                "double" => Ok(RawType::Double),
                "void" => Ok(RawType::Void),
                "metadata" => Ok(RawType::Metadata),
                "opaque" => Ok(RawType::Opaque),
                "other" => {
                    self.expect(&Token::LParen)?;
                    let text = match self.bump()? {
                        Token::Str(s) => s,
                        other => return Err(DeclError::UnexpectedToken { line: self.line, found: format!("{:?}", other) }),
                    };
                    self.expect(&Token::RParen)?;
                    Ok(RawType::OtherPrimitive(text))
                }
                "ptr" => {
                    self.expect(&Token::LParen)?;
                    let elem = self.parse_type()?;
                    self.expect(&Token::RParen)?;
                    Ok(RawType::ptr(elem))
                }
                "array" => {
                    self.expect(&Token::LParen)?;
                    let n = self.expect_num()?;
                    self.expect(&Token::Comma)?;
                    let elem = self.parse_type()?;
                    self.expect(&Token::RParen)?;
                    Ok(RawType::array(n, elem))
                }
                "vector" => {
                    self.expect(&Token::LParen)?;
                    let n = self.expect_num()?;
                    self.expect(&Token::Comma)?;
                    let elem = self.parse_type()?;
                    self.expect(&Token::RParen)?;
                    Ok(RawType::vector(n, elem))
                }
                "struct" => Ok(RawType::Struct(self.parse_type_list()?)),
                "packed_struct" => Ok(RawType::PackedStruct(self.parse_type_list()?)),
                "fun" => {
                    self.expect(&Token::LParen)?;
                    let ret = self.parse_type()?;
                    self.expect(&Token::Semi)?;
                    let mut args = Vec::new();
                    let mut vararg = false;
                    if self.peek() != Some(&Token::RParen) {
                        loop {
                            if self.peek() == Some(&Token::Ellipsis) {
                                self.bump()?;
                                vararg = true;
                                break;
                            }
                            args.push(self.parse_type()?);
                            if self.peek() == Some(&Token::Comma) {
                                self.bump()?;
                            } else {
                                break;
                            }
                        }
                    }
                    self.expect(&Token::RParen)?;
                    Ok(RawType::fun_ty(ret, args, vararg))
                }
                other_name => Ok(RawType::Alias(self.idents.intern(other_name))),
            },
            other => Err(DeclError::UnexpectedToken { line: self.line, found: format!("{:?}", other) }),
        }
    }

    fn parse_type_list(&mut self) -> Result<Vec<RawType>, DeclError> {
        self.expect(&Token::LParen)?;
        let mut out = Vec::new();
        if self.peek() != Some(&Token::RParen) {
            loop {
                out.push(self.parse_type()?);
                if self.peek() == Some(&Token::Comma) {
                    self.bump()?;
                } else {
                    break;
                }
            }
        }
        self.expect(&Token::RParen)?;
        Ok(out)
    }
}

/// Parses a whole declaration block into `(name -> Ident)` bindings plus
/// the declaration list `mk_context` expects, in input order.
pub fn parse_decls(source: &str) -> Result<(IdentTable, Vec<(Ident, RawType)>), DeclError> {
    let mut idents = IdentTable::new();
    let mut out = Vec::new();
    for (zero_based, raw_line) in source.lines().enumerate() {
        let line = zero_based + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (name, rhs) = trimmed.split_once('=').ok_or(DeclError::MissingEquals { line })?;
        let name = name.trim();
        let tokens = tokenize(line, rhs)?;
        let mut parser = Parser { line, tokens: &tokens, pos: 0, idents: &mut idents };
        let ty = parser.parse_type()?;
        if parser.pos != tokens.len() {
            return Err(DeclError::UnexpectedToken { line, found: format!("{:?}", tokens[parser.pos]) });
        }
        out.push((idents.intern(name), ty));
    }
    Ok((idents, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_linear_aliases() {
        let (idents, decls) = parse_decls("A = i32\nB = A\n").unwrap();
        assert_eq!(decls.len(), 2);
        let a = idents.intern("A");
        let b = idents.intern("B");
        assert_eq!(decls[0], (a, RawType::Int(32)));
        assert_eq!(decls[1], (b, RawType::Alias(a)));
    }

    #[test]
    fn parses_self_referential_struct_through_pointer() {
        let (idents, decls) = parse_decls("Node = struct(i32, ptr(Node))\n").unwrap();
        let node = idents.intern("Node");
        assert_eq!(decls[0], (node, RawType::Struct(vec![RawType::Int(32), RawType::ptr(RawType::Alias(node))])));
    }

    #[test]
    fn parses_vararg_function_type() {
        let (_, decls) = parse_decls("F = fun(void; i32, ...)\n").unwrap();
        assert_eq!(decls[0].1, RawType::fun_ty(RawType::Void, vec![RawType::Int(32)], true));
    }

    #[test]
    fn parses_other_primitive() {
        let (_, decls) = parse_decls(r#"A = other("x86_fp80")"#).unwrap();
        assert_eq!(decls[0].1, RawType::OtherPrimitive("x86_fp80".to_string()));
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let (_, decls) = parse_decls("# a comment\n\nA = i8\n").unwrap();
        assert_eq!(decls.len(), 1);
    }

    #[test]
    fn missing_equals_is_an_error() {
        let err = parse_decls("A i32").unwrap_err();
        assert_eq!(err, DeclError::MissingEquals { line: 1 });
    }
}
