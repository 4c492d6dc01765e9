use crate::TagError;
use std::{fmt, iter::Peekable};

///
/// Combinator
///
/// Textual join between two atoms of a field expression.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '&' => Some(Self::And),
            '|' => Some(Self::Or),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::And => '&',
            Self::Or => '|',
        }
    }

    /// SQL text inserted between two rendered predicates.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

///
/// Atom
///
/// One column name of a field expression together with the parentheses
/// written immediately around it and the combinator that precedes it.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Atom {
    pub joiner: Option<Combinator>,
    pub open: usize,
    pub name: String,
    pub close: usize,
}

impl Atom {
    /// Append `predicate` to `out`, preceded by the joiner and wrapped in the
    /// atom's parentheses.
    pub fn render_into(&self, predicate: &str, out: &mut String) {
        if let Some(joiner) = self.joiner {
            out.push_str(joiner.keyword());
        }
        for _ in 0..self.open {
            out.push('(');
        }
        out.push_str(predicate);
        for _ in 0..self.close {
            out.push(')');
        }
    }
}

///
/// FieldExpr
///
/// Parsed form of `Expr := Atom (('&' | '|') Atom)*`.
///
/// The expression is linear: combinators are kept as text joins and the
/// parentheses are opaque decoration around each atom. Balance is not
/// enforced by `parse`; callers that want it use `check_balanced`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldExpr {
    source: String,
    atoms: Vec<Atom>,
}

impl FieldExpr {
    pub fn parse(input: &str) -> Result<Self, TagError> {
        if input.trim().is_empty() {
            return Err(TagError::EmptyExpression);
        }

        let mut parser = Parser {
            tokens: Lexer::new(input).peekable(),
            atoms: Vec::new(),
        };
        parser.parse_expr()?;

        Ok(Self {
            source: input.to_string(),
            atoms: parser.atoms,
        })
    }

    #[must_use]
    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.atoms.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// True when every `)` closes an earlier `(` and nothing is left open.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;

        for atom in &self.atoms {
            depth += atom.open;
            match depth.checked_sub(atom.close) {
                Some(rest) => depth = rest,
                None => return false,
            }
        }

        depth == 0
    }

    pub fn check_balanced(&self) -> Result<(), TagError> {
        if self.is_balanced() {
            Ok(())
        } else {
            Err(TagError::UnbalancedParens {
                expr: self.source.clone(),
            })
        }
    }
}

impl fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            if let Some(joiner) = atom.joiner {
                write!(f, "{}", joiner.symbol())?;
            }
            write!(
                f,
                "{}{}{}",
                "(".repeat(atom.open),
                atom.name,
                ")".repeat(atom.close)
            )?;
        }

        Ok(())
    }
}

///
/// Token
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Join(Combinator),
    Name(&'a str),
}

const fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | '&' | '|')
}

///
/// Lexer
/// Yields tokens paired with their byte offset in the input.
///

struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.offset..];
        let skipped = rest.len() - rest.trim_start().len();
        self.offset += skipped;

        let rest = &self.input[self.offset..];
        let c = rest.chars().next()?;
        let start = self.offset;

        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            '&' | '|' => Token::Join(Combinator::from_symbol(c)?),
            _ => {
                let len = rest.find(is_delimiter).unwrap_or(rest.len());
                self.offset += len;

                return Some((start, Token::Name(rest[..len].trim_end())));
            }
        };
        self.offset += c.len_utf8();

        Some((start, token))
    }
}

///
/// Parser
///

struct Parser<'a> {
    tokens: Peekable<Lexer<'a>>,
    atoms: Vec<Atom>,
}

impl Parser<'_> {
    fn parse_expr(&mut self) -> Result<(), TagError> {
        let mut joiner = None;

        loop {
            self.parse_atom(joiner)?;

            match self.tokens.next() {
                None => return Ok(()),
                Some((_, Token::Join(combinator))) => joiner = Some(combinator),
                Some((offset, _)) => return Err(TagError::MisplacedParen { offset }),
            }
        }
    }

    fn parse_atom(&mut self, joiner: Option<Combinator>) -> Result<(), TagError> {
        let index = self.atoms.len();

        let mut open = 0;
        while let Some((_, Token::Open)) = self.tokens.peek() {
            self.tokens.next();
            open += 1;
        }

        let Some((_, Token::Name(name))) = self.tokens.next() else {
            return Err(TagError::EmptyAtom { index });
        };

        let mut close = 0;
        while let Some((_, Token::Close)) = self.tokens.peek() {
            self.tokens.next();
            close += 1;
        }

        self.atoms.push(Atom {
            joiner,
            open,
            name: name.to_string(),
            close,
        });

        Ok(())
    }
}
