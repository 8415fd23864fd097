//! Recursive-descent parser for member type expressions.
//!
//! Accepts the subset of TypeScript type syntax a manifest can describe:
//!
//! ```text
//! type     := ['|'] operand ('|' operand)*
//! operand  := postfix ('&' postfix)*
//! postfix  := primary ('[' ']')*
//! primary  := '(' type ')' | '(' ... ')' '=>' type | '{' member* '}' | '[' ... ']'
//!           | literal | name ['<' type (',' type)* '>']
//! member   := key ['?'] ':' type | key ['?'] '(' ... ')' [':' type] | '[' key ':' type ']' ':' type
//! ```

use std::{fmt, path::Path};

use logos::Logos;
use shapegen_ir::{LiteralValue, Member, MemberKind, NamedRef, PrimitiveKind, TypeRef};

/// Keywords that parse but have no mapping in the generator.
const UNSUPPORTED_KEYWORDS: &[&str] = &[
    "any",
    "unknown",
    "undefined",
    "void",
    "never",
    "object",
    "symbol",
];

/// A malformed type expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct TypeExprError {
    pub message: String,
    /// Byte offset into the expression.
    pub offset: usize,
}

/// Names in scope while parsing one declaration's members.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScope<'a> {
    /// Type parameters of the enclosing declaration.
    pub type_params: &'a [String],
    /// Unit the expression was written in.
    pub origin: Option<&'a Path>,
}

/// Parse a type expression into a [`TypeRef`].
pub fn parse_type(src: &str, scope: TypeScope<'_>) -> Result<TypeRef, TypeExprError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        end: src.len(),
        scope,
    };
    let ty = parser.union()?;
    if let Some(token) = parser.peek() {
        return Err(parser.error(format!("unexpected {}", token)));
    }
    Ok(ty)
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum Token {
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_owned())]
    Ident(String),

    #[regex(r#""(?:[^"\\]|\\.)*""#, |lex| unquote(lex.slice()))]
    #[regex(r"'(?:[^'\\]|\\.)*'", |lex| unquote(lex.slice()))]
    Str(String),

    #[regex(r"[0-9]+(?:\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r"[|&(){}\[\]<>,;:?\-]", |lex| lex.slice().chars().next())]
    Punct(char),

    #[token("=>")]
    Arrow,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(name) => write!(f, "`{}`", name),
            Self::Str(value) => write!(f, "string '{}'", value),
            Self::Number(value) => write!(f, "number {}", value),
            Self::Punct(c) => write!(f, "`{}`", c),
            Self::Arrow => f.write_str("`=>`"),
        }
    }
}

/// Strip the quotes from a string literal and resolve backslash escapes.
fn unquote(literal: &str) -> String {
    let inner = &literal[1..literal.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => value.extend(chars.next()),
            other => value.push(other),
        }
    }
    value
}

fn tokenize(src: &str) -> Result<Vec<(Token, usize)>, TypeExprError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(src).spanned() {
        match result {
            Ok(token) => tokens.push((token, span.start)),
            Err(()) => {
                let offset = span.start;
                let rest = &src[offset..];
                let message = if rest.starts_with(['\'', '"']) {
                    "unterminated string literal".to_string()
                } else {
                    format!("unexpected character `{}`", &src[span])
                };
                return Err(TypeExprError {
                    message,
                    offset,
                });
            }
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    end: usize,
    scope: TypeScope<'a>,
}

type ParseResult<T> = Result<T, TypeExprError>;

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn peek_at(&self, pos: usize) -> Option<&Token> {
        self.tokens.get(pos).map(|(token, _)| token)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.pos).map_or(self.end, |(_, offset)| *offset)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).map(|(token, _)| token.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn error(&self, message: impl Into<String>) -> TypeExprError {
        TypeExprError {
            message: message.into(),
            offset: self.offset(),
        }
    }

    fn at_punct(&self, c: char) -> bool {
        self.peek() == Some(&Token::Punct(c))
    }

    fn eat_punct(&mut self, c: char) -> bool {
        if self.at_punct(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect_punct(&mut self, c: char) -> ParseResult<()> {
        if self.eat_punct(c) {
            return Ok(());
        }
        Err(match self.peek() {
            Some(token) => self.error(format!("expected `{}`, found {}", c, token)),
            None => self.error(format!("expected `{}`, found end of input", c)),
        })
    }

    /// Index of the token closing the group opened at `start`.
    fn matching_close(&self, start: usize, open: char, close: char) -> Option<usize> {
        let mut depth = 0usize;
        for (i, (token, _)) in self.tokens.iter().enumerate().skip(start) {
            match token {
                Token::Punct(c) if *c == open => depth += 1,
                Token::Punct(c) if *c == close => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Consume a balanced group starting at the current token.
    fn skip_group(&mut self, open: char, close: char) -> ParseResult<()> {
        match self.matching_close(self.pos, open, close) {
            Some(end) => {
                self.pos = end + 1;
                Ok(())
            }
            None => Err(self.error(format!("unclosed `{}`", open))),
        }
    }

    fn union(&mut self) -> ParseResult<TypeRef> {
        self.eat_punct('|');
        let mut alternatives = vec![self.operand()?];
        while self.eat_punct('|') {
            alternatives.push(self.operand()?);
        }
        Ok(if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            TypeRef::Union(alternatives)
        })
    }

    fn operand(&mut self) -> ParseResult<TypeRef> {
        let first = self.postfix()?;
        if !self.at_punct('&') {
            return Ok(first);
        }
        while self.eat_punct('&') {
            self.postfix()?;
        }
        Ok(TypeRef::Unsupported("intersection".into()))
    }

    fn postfix(&mut self) -> ParseResult<TypeRef> {
        let mut ty = self.primary()?;
        while self.at_punct('[') && self.peek_at(self.pos + 1) == Some(&Token::Punct(']')) {
            self.pos += 2;
            ty = TypeRef::array(ty);
        }
        Ok(ty)
    }

    fn primary(&mut self) -> ParseResult<TypeRef> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error("expected a type, found end of input"));
        };

        match token {
            Token::Punct('(') => {
                let arrow = self
                    .matching_close(self.pos, '(', ')')
                    .is_some_and(|close| self.peek_at(close + 1) == Some(&Token::Arrow));
                if arrow {
                    self.function()
                } else {
                    self.pos += 1;
                    let inner = self.union()?;
                    self.expect_punct(')')?;
                    Ok(inner)
                }
            }
            Token::Punct('{') => self.object(),
            Token::Punct('[') => {
                self.skip_group('[', ']')?;
                Ok(TypeRef::Unsupported("tuple".into()))
            }
            Token::Punct('-') => {
                self.pos += 1;
                match self.next() {
                    Some(Token::Number(value)) => Ok(TypeRef::Literal(LiteralValue::Number(-value))),
                    _ => Err(self.error("expected a number after `-`")),
                }
            }
            Token::Str(value) => {
                self.pos += 1;
                Ok(TypeRef::Literal(LiteralValue::String(value)))
            }
            Token::Number(value) => {
                self.pos += 1;
                Ok(TypeRef::Literal(LiteralValue::Number(value)))
            }
            Token::Ident(name) => {
                self.pos += 1;
                self.named(name)
            }
            other => Err(self.error(format!("expected a type, found {}", other))),
        }
    }

    fn function(&mut self) -> ParseResult<TypeRef> {
        self.skip_group('(', ')')?;
        match self.next() {
            Some(Token::Arrow) => {}
            _ => return Err(self.error("expected `=>`")),
        }
        self.union()?;
        Ok(TypeRef::Function)
    }

    fn named(&mut self, name: String) -> ParseResult<TypeRef> {
        if let Some(kind) = PrimitiveKind::from_keyword(&name) {
            return Ok(TypeRef::Keyword(kind));
        }
        match name.as_str() {
            "true" => return Ok(TypeRef::Literal(LiteralValue::Boolean(true))),
            "false" => return Ok(TypeRef::Literal(LiteralValue::Boolean(false))),
            keyword if UNSUPPORTED_KEYWORDS.contains(&keyword) => {
                return Ok(TypeRef::Unsupported(name));
            }
            _ => {}
        }

        if self.scope.type_params.contains(&name) {
            if self.at_punct('<') {
                return Err(self.error(format!("type parameter `{}` takes no arguments", name)));
            }
            return Ok(TypeRef::Param(name));
        }

        let args = if self.eat_punct('<') {
            let mut args = vec![self.union()?];
            while self.eat_punct(',') {
                args.push(self.union()?);
            }
            self.expect_punct('>')?;
            args
        } else {
            Vec::new()
        };

        if name == "Array" {
            let mut args = args;
            if args.len() != 1 {
                return Err(self.error("`Array` takes exactly one type argument"));
            }
            return Ok(TypeRef::array(args.remove(0)));
        }

        let mut named = NamedRef::new(name).with_args(args);
        if let Some(origin) = self.scope.origin {
            named = named.from_unit(origin);
        }
        Ok(TypeRef::Named(named))
    }

    fn object(&mut self) -> ParseResult<TypeRef> {
        self.expect_punct('{')?;
        let mut members = Vec::new();
        loop {
            if self.eat_punct('}') {
                break;
            }
            members.push(self.member()?);
            if !(self.eat_punct(';') || self.eat_punct(',') || self.at_punct('}')) {
                return Err(match self.peek() {
                    Some(token) => self.error(format!("expected `;` or `}}`, found {}", token)),
                    None => self.error("unclosed `{`"),
                });
            }
        }
        Ok(TypeRef::Object(members))
    }

    fn member(&mut self) -> ParseResult<Member> {
        if self.eat_punct('[') {
            match self.next() {
                Some(Token::Ident(_)) => {}
                _ => return Err(self.error("expected an index key name")),
            }
            self.expect_punct(':')?;
            self.union()?;
            self.expect_punct(']')?;
            self.expect_punct(':')?;
            let ty = self.union()?;
            return Ok(Member {
                name: None,
                ty: Some(ty),
                optional: false,
                kind: MemberKind::Index,
            });
        }

        let name = match self.next() {
            Some(Token::Ident(name)) | Some(Token::Str(name)) => name,
            Some(Token::Number(value)) => value.to_string(),
            Some(other) => {
                self.pos -= 1;
                return Err(self.error(format!("expected a member name, found {}", other)));
            }
            None => return Err(self.error("expected a member name, found end of input")),
        };
        let optional = self.eat_punct('?');

        if self.at_punct('(') {
            self.skip_group('(', ')')?;
            if self.eat_punct(':') {
                self.union()?;
            }
            let mut member = Member::method(name);
            member.optional = optional;
            return Ok(member);
        }

        self.expect_punct(':')?;
        let ty = self.union()?;
        Ok(Member {
            name: Some(name),
            ty: Some(ty),
            optional,
            kind: MemberKind::Property,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn parse(src: &str) -> TypeRef {
        parse_type(src, TypeScope::default()).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(parse("number"), TypeRef::number());
        assert_eq!(parse("  string "), TypeRef::string());
        assert_eq!(parse("bigint"), TypeRef::Keyword(PrimitiveKind::Bigint));
        assert_eq!(parse("Function"), TypeRef::Keyword(PrimitiveKind::Function));
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("'ok'"), TypeRef::literal("ok"));
        assert_eq!(parse("\"it's\""), TypeRef::literal("it's"));
        assert_eq!(parse("'a\\'b'"), TypeRef::literal("a'b"));
        assert_eq!(parse("42"), TypeRef::Literal(LiteralValue::Number(42.0)));
        assert_eq!(parse("-1.5"), TypeRef::Literal(LiteralValue::Number(-1.5)));
        assert_eq!(parse("true"), TypeRef::Literal(LiteralValue::Boolean(true)));
    }

    #[test]
    fn test_arrays() {
        assert_eq!(parse("string[]"), TypeRef::array(TypeRef::string()));
        assert_eq!(parse("Array<number>"), TypeRef::array(TypeRef::number()));
        assert_eq!(
            parse("Array<Array<number>>"),
            TypeRef::array(TypeRef::array(TypeRef::number()))
        );
        assert_eq!(
            parse("(string | null)[]"),
            TypeRef::array(TypeRef::Union(vec![TypeRef::string(), TypeRef::null()]))
        );
    }

    #[test]
    fn test_unions() {
        assert_eq!(
            parse("| 'a' | 'b'"),
            TypeRef::Union(vec![TypeRef::literal("a"), TypeRef::literal("b")])
        );
        assert_eq!(
            parse("string[] | null"),
            TypeRef::Union(vec![TypeRef::array(TypeRef::string()), TypeRef::null()])
        );
    }

    #[test]
    fn test_functions() {
        assert_eq!(parse("() => void"), TypeRef::Function);
        assert_eq!(parse("(a: string, b?: number) => Promise<void>"), TypeRef::Function);
        assert_eq!(parse("(() => void)[]"), TypeRef::array(TypeRef::Function));
    }

    #[test]
    fn test_object_types() {
        let ty = parse("{ id: number; label?: string, save(): void; [key: string]: number }");
        let TypeRef::Object(members) = ty else {
            panic!("expected object");
        };
        assert_eq!(members.len(), 4);
        assert_eq!(members[0], Member::property("id", TypeRef::number()));
        assert!(members[1].optional);
        assert_eq!(members[2].kind, MemberKind::Method);
        assert_eq!(members[3].kind, MemberKind::Index);
        assert!(members[3].name.is_none());

        assert_eq!(parse("{}"), TypeRef::Object(vec![]));
        assert_eq!(
            parse("{ 'odd-key': string }"),
            TypeRef::Object(vec![Member::property("odd-key", TypeRef::string())])
        );
    }

    #[test]
    fn test_named_references() {
        let origin = PathBuf::from("test/User.ts");
        let params = vec!["T".to_string()];
        let scope = TypeScope {
            type_params: &params,
            origin: Some(&origin),
        };

        let ty = parse_type("IRequest<IVoid>", scope).unwrap();
        let TypeRef::Named(named) = ty else {
            panic!("expected named reference");
        };
        assert_eq!(named.name, "IRequest");
        assert_eq!(named.origin.as_deref(), Some(origin.as_path()));
        assert_eq!(named.args.len(), 1);

        assert_eq!(parse_type("T[]", scope).unwrap(), TypeRef::array(TypeRef::Param("T".into())));
        assert_eq!(parse("Date"), TypeRef::named("Date"));
    }

    #[test]
    fn test_unsupported_shapes() {
        assert_eq!(parse("any"), TypeRef::Unsupported("any".into()));
        assert_eq!(parse("undefined"), TypeRef::Unsupported("undefined".into()));
        assert_eq!(parse("[string, number]"), TypeRef::Unsupported("tuple".into()));
        assert_eq!(parse("A & B"), TypeRef::Unsupported("intersection".into()));
        assert_eq!(
            parse("string | A & B"),
            TypeRef::Union(vec![
                TypeRef::string(),
                TypeRef::Unsupported("intersection".into())
            ])
        );
    }

    #[test]
    fn test_errors_carry_offsets() {
        let err = parse_type("string |", TypeScope::default()).unwrap_err();
        assert_eq!(err.offset, 8);
        assert!(err.message.contains("end of input"));

        let err = parse_type("number number", TypeScope::default()).unwrap_err();
        assert_eq!(err.offset, 7);

        let err = parse_type("'open", TypeScope::default()).unwrap_err();
        assert_eq!(err.message, "unterminated string literal");
        assert_eq!(err.offset, 0);

        let err = parse_type("string = number", TypeScope::default()).unwrap_err();
        assert_eq!(err.offset, 7);

        let err = parse_type("Array<string, number>", TypeScope::default()).unwrap_err();
        assert!(err.message.contains("exactly one"));

        assert!(parse_type("{ a: string b: number }", TypeScope::default()).is_err());
        assert!(parse_type("string @", TypeScope::default()).is_err());
        assert!(parse_type("", TypeScope::default()).is_err());
    }
}
