//! Expression parsing by precedence climbing
//!
//! The grammar, loosest binding first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary | implicit unary)*
//! unary   := ('-' | '+') unary | power
//! power   := atom ('^' unary)?
//! atom    := number | identifier | call | '(' sum ')' | '|' sum '|'
//! call    := (identifier | function) '(' sum (',' sum)* ')'
//! ```
//!
//! Implicit multiplication fires when a parsed factor is directly followed
//! by a token that can begin a factor: an identifier, a known function, an
//! opening parenthesis, or a top-level absolute value bar. `2x`, `3(x+1)`,
//! `(a)(b)` and `2|x|` are all products; `2 3` is not and fails.
//!
//! Sign folding happens at parse time. `a - b` becomes `Sum{a, negate(b)}`
//! and `a / b` becomes `Product{a, Power{b, -1}}`, so the finished tree has
//! no subtraction or division nodes. `^` is right associative and its
//! exponent parses as a unary, which is how `x^-2` works without
//! parenthesization.

use std::ops::Range;

use super::ParseError;
use crate::eqtree::ast::Expr;
use crate::eqtree::lexing::Token;

/// Parse a full token span as one expression.
///
/// `fallback_position` is reported when the span is empty; callers pass the
/// byte offset where the expression should have started (0 for a left side,
/// the relation's end for a right side). Leftover tokens after the
/// expression are an error: a stray closer reports as unbalanced, anything
/// else as unexpected. A span holding an odd number of bars can never pair
/// them all and fails as [`ParseError::UnbalancedBars`] at the final bar.
pub fn parse_expression(
    tokens: &[(Token, Range<usize>)],
    fallback_position: usize,
) -> Result<Expr, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression {
            position: fallback_position,
        });
    }

    // Bars self-pair, so a span with an odd bar count cannot parse; greedy
    // pairing leaves the final bar as the one without a partner.
    let mut bar_count = 0;
    let mut last_bar = 0;
    for (token, span) in tokens {
        if matches!(token, Token::Pipe) {
            bar_count += 1;
            last_bar = span.start;
        }
    }
    if bar_count % 2 == 1 {
        return Err(ParseError::UnbalancedBars { position: last_bar });
    }

    let mut parser = ExprParser {
        tokens,
        pos: 0,
        bar_depth: 0,
    };
    let expr = parser.parse_sum()?;

    if let Some((token, span)) = parser.tokens.get(parser.pos) {
        return Err(match token {
            Token::RParen | Token::RBrace | Token::RBracket => ParseError::UnbalancedBrackets {
                position: span.start,
            },
            Token::Pipe => ParseError::UnbalancedBars {
                position: span.start,
            },
            _ => ParseError::UnexpectedToken {
                position: span.start,
                token: token.clone(),
            },
        });
    }

    Ok(expr)
}

struct ExprParser<'a> {
    tokens: &'a [(Token, Range<usize>)],
    pos: usize,
    /// How many absolute value bars are currently open. While nonzero a
    /// pipe closes the innermost bar instead of starting an implicit
    /// product, which is what makes `|x y|` and `|x|y|z|` both parse.
    bar_depth: usize,
}

impl<'a> ExprParser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn next(&mut self) -> Option<(Token, Range<usize>)> {
        let pair = self.tokens.get(self.pos).cloned();
        if pair.is_some() {
            self.pos += 1;
        }
        pair
    }

    fn end_position(&self) -> usize {
        self.tokens.last().map(|(_, span)| span.end).unwrap_or(0)
    }

    fn parse_sum(&mut self) -> Result<Expr, ParseError> {
        let mut terms = vec![self.parse_product()?];
        loop {
            match self.peek() {
                Some(Token::Operator('+')) => {
                    self.pos += 1;
                    terms.push(self.parse_product()?);
                }
                Some(Token::Operator('-')) => {
                    self.pos += 1;
                    terms.push(self.parse_product()?.negated());
                }
                _ => break,
            }
        }
        Ok(Expr::sum(terms))
    }

    fn parse_product(&mut self) -> Result<Expr, ParseError> {
        let mut factors = vec![self.parse_unary()?];
        loop {
            match self.peek() {
                Some(Token::Operator('*')) => {
                    self.pos += 1;
                    factors.push(self.parse_unary()?);
                }
                Some(Token::Operator('/')) => {
                    self.pos += 1;
                    let divisor = self.parse_unary()?;
                    factors.push(Expr::power(divisor, Expr::constant(-1.0)));
                }
                Some(token) if token.begins_implicit_factor() => {
                    factors.push(self.parse_unary()?);
                }
                Some(Token::Pipe) if self.bar_depth == 0 => {
                    factors.push(self.parse_unary()?);
                }
                _ => break,
            }
        }
        Ok(Expr::product(factors))
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Token::Operator('-')) => {
                self.pos += 1;
                Ok(self.parse_unary()?.negated())
            }
            Some(Token::Operator('+')) => {
                self.pos += 1;
                self.parse_unary()
            }
            _ => self.parse_power(),
        }
    }

    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_atom()?;
        if matches!(self.peek(), Some(Token::Operator('^'))) {
            self.pos += 1;
            let exponent = self.parse_unary()?;
            return Ok(Expr::power(base, exponent));
        }
        Ok(base)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        let (token, span) = match self.next() {
            Some(pair) => pair,
            None => {
                return Err(ParseError::EmptyExpression {
                    position: self.end_position(),
                })
            }
        };

        match token {
            Token::Number(value) => Ok(Expr::constant(value)),
            Token::Identifier(name) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    // A parenthesis directly after a variable is a call:
                    // x(x+1) names a function x, it is not a product.
                    self.pos += 1;
                    let arguments = self.parse_arguments(span.start)?;
                    Ok(Expr::call(name, arguments))
                } else {
                    Ok(Expr::variable(name))
                }
            }
            Token::Function(name) => match self.next() {
                Some((Token::LParen, _)) => {
                    let arguments = self.parse_arguments(span.start)?;
                    Ok(Expr::call(name, arguments))
                }
                Some((other, other_span)) => Err(ParseError::UnexpectedToken {
                    position: other_span.start,
                    token: other,
                }),
                None => Err(ParseError::EmptyExpression {
                    position: self.end_position(),
                }),
            },
            Token::LParen => {
                let inner = self.parse_sum()?;
                self.expect_rparen(span.start)?;
                Ok(inner)
            }
            Token::Pipe => {
                self.bar_depth += 1;
                let operand = self.parse_sum()?;
                self.bar_depth -= 1;
                self.expect_closing_pipe(span.start)?;
                Ok(Expr::absolute(operand))
            }
            other => Err(ParseError::UnexpectedToken {
                position: span.start,
                token: other,
            }),
        }
    }

    /// Parse a comma-separated argument list; the opening parenthesis is
    /// already consumed and the closer is consumed here.
    fn parse_arguments(&mut self, open_position: usize) -> Result<Vec<Expr>, ParseError> {
        let mut arguments = vec![self.parse_sum()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.pos += 1;
            arguments.push(self.parse_sum()?);
        }
        self.expect_rparen(open_position)?;
        Ok(arguments)
    }

    fn expect_rparen(&mut self, open_position: usize) -> Result<(), ParseError> {
        match self.next() {
            Some((Token::RParen, _)) => Ok(()),
            Some((_, span)) => Err(ParseError::UnbalancedBrackets {
                position: span.start,
            }),
            None => Err(ParseError::UnbalancedBrackets {
                position: open_position,
            }),
        }
    }

    fn expect_closing_pipe(&mut self, open_position: usize) -> Result<(), ParseError> {
        match self.next() {
            Some((Token::Pipe, _)) => Ok(()),
            Some((_, span)) => Err(ParseError::UnbalancedBars {
                position: span.start,
            }),
            None => Err(ParseError::UnbalancedBars {
                position: open_position,
            }),
        }
    }
}
