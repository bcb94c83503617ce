//! Prefix and infix handlers.

use numu_ir::{NodeId, NodeKind, UnaryOp};
use numu_lexer::{Token, TokenKind};
use numu_stack::ensure_sufficient_stack;
use smallvec::SmallVec;

use crate::rules::{rule, Infix, ParseRule, Prefix};
use crate::{ParseError, ParseErrorKind, Parser, Precedence, SyntaxError};

type ParseResult = Result<NodeId, SyntaxError>;

impl<'src> Parser<'src, '_> {
    /// Parse an expression whose operators all bind at least as tightly as
    /// `min`.
    pub(crate) fn parse_expression(&mut self, min: Precedence) -> ParseResult {
        ensure_sufficient_stack(|| {
            let Some(prefix) = rule(self.cursor.current_kind()).prefix else {
                return Err(self.error(ParseErrorKind::ExpectedExpression {
                    found: self.cursor.current_kind(),
                }));
            };
            let mut left = self.prefix(prefix)?;

            loop {
                let rule = rule(self.cursor.current_kind());
                match rule.infix {
                    Some(infix) if rule.precedence >= min => {
                        left = self.infix(infix, rule, left)?;
                    }
                    _ => return Ok(left),
                }
            }
        })
    }

    fn prefix(&mut self, prefix: Prefix) -> ParseResult {
        match prefix {
            Prefix::Number => {
                let token = self.cursor.advance()?;
                Ok(self.arena.number(token.value, token.span))
            }
            Prefix::String => {
                let token = self.cursor.advance()?;
                Ok(self.arena.string(token.text, token.span))
            }
            Prefix::Boolean => {
                let token = self.cursor.advance()?;
                Ok(self
                    .arena
                    .boolean(token.kind == TokenKind::True, token.span))
            }
            Prefix::Constant => {
                let token = self.cursor.advance()?;
                Ok(self.arena.number(constant_value(token.kind), token.span))
            }
            Prefix::Variable => {
                let token = self.cursor.advance()?;
                Ok(self.arena.variable(token.text, token.span))
            }
            Prefix::Grouping => self.grouping(),
            Prefix::Matrix => self.matrix(),
            Prefix::Unary => self.unary(),
        }
    }

    fn infix(&mut self, infix: Infix, rule: ParseRule, left: NodeId) -> ParseResult {
        match infix {
            Infix::Binary(op) => {
                self.cursor.advance()?;
                let right =
                    self.parse_expression(rule.associativity.operand_precedence(rule.precedence))?;
                let span = self.arena.span(left).merge(self.arena.span(right));
                Ok(self.arena.binary(op, left, right, span))
            }
            Infix::Assignment => self.assignment(left),
            Infix::Call => self.call(left),
        }
    }

    // ===== Prefix handlers =====

    /// `( expr )`; the parentheses leave no node behind.
    fn grouping(&mut self) -> ParseResult {
        self.cursor.advance()?;
        let inner = self.parse_expression(Precedence::Assignment)?;
        self.expect(TokenKind::RParen, "after expression")?;
        Ok(inner)
    }

    /// `-x` or `!x`, binding tighter than every binary operator except `^`.
    fn unary(&mut self) -> ParseResult {
        let op_token = self.cursor.advance()?;
        let op = match op_token.kind {
            TokenKind::Bang => UnaryOp::Not,
            _ => UnaryOp::Negate,
        };
        let operand = self.parse_expression(Precedence::Unary)?;
        let span = op_token.span.merge(self.arena.span(operand));
        Ok(self.arena.unary(op, operand, span))
    }

    /// Matrix literal.
    ///
    /// Each item decides its own row form:
    /// - `[ ... ]` is an explicit row
    /// - a run of bare expressions between explicit rows is one row
    ///
    /// So `[]` has no rows, `[a, b, c]` is one row, `[[a, b], [c, d]]` is two,
    /// and `[[a, b], c]` and `[a, [b, c]]` are both two.
    fn matrix(&mut self) -> ParseResult {
        let open = self.cursor.advance()?;
        let mut rows: SmallVec<[SmallVec<[NodeId; 4]>; 4]> = SmallVec::new();
        let mut bare: SmallVec<[NodeId; 4]> = SmallVec::new();

        if !self.cursor.check(TokenKind::RBracket) {
            loop {
                if self.cursor.eat(TokenKind::LBracket)? {
                    if !bare.is_empty() {
                        rows.push(std::mem::take(&mut bare));
                    }
                    let (row, _) = self.elements(TokenKind::RBracket, "after row elements")?;
                    rows.push(row);
                } else {
                    bare.push(self.parse_expression(Precedence::Assignment)?);
                }
                if !self.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        if !bare.is_empty() {
            rows.push(bare);
        }

        let close = self.expect(TokenKind::RBracket, "after matrix rows")?;
        Ok(self.arena.matrix(rows, open.span.merge(close.span)))
    }

    // ===== Infix handlers =====

    /// `name = value`, grouping to the right: `a = b = 1` assigns both.
    fn assignment(&mut self, target: NodeId) -> ParseResult {
        let NodeKind::Variable(name) = self.arena.kind(target) else {
            return Err(self.error(ParseErrorKind::InvalidAssignmentTarget));
        };
        let name = name.clone();
        self.cursor.advance()?;
        let value = self.parse_expression(Precedence::Assignment)?;
        let span = self.arena.span(target).merge(self.arena.span(value));
        Ok(self.arena.assignment(name, value, span))
    }

    /// `name(args...)`.
    fn call(&mut self, callee: NodeId) -> ParseResult {
        let NodeKind::Variable(name) = self.arena.kind(callee) else {
            return Err(self.error(ParseErrorKind::InvalidCallTarget));
        };
        let name = name.clone();
        self.cursor.advance()?;
        let (args, close) = self.elements(TokenKind::RParen, "after arguments")?;
        let span = self.arena.span(callee).merge(close.span);
        Ok(self.arena.function(name, args, span))
    }

    // ===== Helpers =====

    /// Comma-separated, possibly empty expressions closed by `close`.
    ///
    /// Returns the items and the consumed closing token.
    fn elements(
        &mut self,
        close: TokenKind,
        context: &'static str,
    ) -> Result<(SmallVec<[NodeId; 4]>, Token<'src>), SyntaxError> {
        let mut items = SmallVec::new();
        if !self.cursor.check(close) {
            loop {
                items.push(self.parse_expression(Precedence::Assignment)?);
                if !self.cursor.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        let close = self.expect(close, context)?;
        Ok((items, close))
    }

    /// Consume `kind` or fail with "expected `kind` `context`".
    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        context: &'static str,
    ) -> Result<Token<'src>, SyntaxError> {
        if self.cursor.check(kind) {
            return Ok(self.cursor.advance()?);
        }
        Err(self.error(ParseErrorKind::ExpectedToken {
            expected: kind,
            context,
            found: self.cursor.current_kind(),
        }))
    }

    #[cold]
    fn error(&self, kind: ParseErrorKind) -> SyntaxError {
        ParseError::at(kind, self.cursor.current()).into()
    }
}

fn constant_value(kind: TokenKind) -> f64 {
    match kind {
        TokenKind::Pi => std::f64::consts::PI,
        TokenKind::E => std::f64::consts::E,
        TokenKind::Inf => f64::INFINITY,
        _ => f64::NAN,
    }
}
