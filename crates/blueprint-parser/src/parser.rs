//! Recursive descent parser over a lexed token sequence.
//!
//! Most grammar rules have a corresponding `parse_*` method returning
//! `Result<AstNode, ParseError>`. The parser fails fast at the first grammar
//! violation; it performs no error recovery.
//!
//! The parser is deterministic: identical token sequences always yield
//! identical trees or identical errors. It never reads anything other than
//! the token slice it was given.

use crate::ast;
use crate::token::Token;
use crate::token::TokenKind;
use crate::ErrorPosition;
use crate::ParseError;
use crate::SourcePosition;
use crate::SourceSpan;

/// Parses a token sequence into a [`Document`](ast::Document).
///
/// An empty token sequence is valid input and yields an empty document; an
/// empty query is not a syntax failure.
pub fn parse(tokens: &[Token<'_>]) -> Result<ast::Document, ParseError> {
    Parser::new(tokens).parse_document()
}

struct Parser<'a, 'src> {
    tokens: &'a [Token<'src>],
    pos: usize,
}

impl<'a, 'src> Parser<'a, 'src> {
    fn new(tokens: &'a [Token<'src>]) -> Self {
        Self { tokens, pos: 0 }
    }

    // =========================================================================
    // Cursor helpers
    // =========================================================================

    fn peek(&self) -> Option<&'a Token<'src>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token<'src>> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// End position of the most recently consumed token, or `fallback` if
    /// nothing has been consumed yet.
    fn prev_end(&self, fallback: SourcePosition) -> SourcePosition {
        if self.pos == 0 {
            fallback
        } else {
            self.tokens[self.pos - 1].span.end_exclusive
        }
    }

    /// Builds a node span from `start` to the end of the last consumed token.
    fn span_from(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(start, self.prev_end(start))
    }

    /// Start position of the next token; used to anchor node spans.
    ///
    /// Only meaningful when a next token is known to exist.
    fn next_start(&self) -> SourcePosition {
        match self.peek() {
            Some(token) => token.span.start_inclusive,
            None => self.prev_end(SourcePosition::new(0, 0, 0)),
        }
    }

    // =========================================================================
    // Error helpers
    // =========================================================================

    /// "expected X but found Y" at the offending token's position.
    fn unexpected(&self, token: &Token<'_>, expected: &str) -> ParseError {
        ParseError::from_fragments(
            [
                "expected ",
                expected,
                " but found ",
                token.kind.description().as_ref(),
            ],
            ErrorPosition::from_source_position(token.span.start_inclusive),
        )
    }

    /// "expected X but the document ended": only a line is known here, since
    /// there is no offending token to point at.
    fn unexpected_end(&self, expected: &str) -> ParseError {
        let line = self
            .tokens
            .last()
            .map(|t| t.span.end_exclusive.line() + 1)
            .unwrap_or(1);
        ParseError::from_fragments(
            ["expected ", expected, " but the document ended"],
            ErrorPosition::LineOnly(line),
        )
    }

    /// Advances past the next token, requiring `pred` to accept its kind.
    fn expect(
        &mut self,
        expected: &str,
        pred: impl Fn(&TokenKind<'src>) -> bool,
    ) -> Result<&'a Token<'src>, ParseError> {
        match self.peek() {
            None => Err(self.unexpected_end(expected)),
            Some(token) if pred(&token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, expected)),
        }
    }

    /// Advances past a `Name` token, returning its owned text.
    fn expect_name(&mut self, expected: &str) -> Result<String, ParseError> {
        let token = self.expect(expected, |kind| matches!(kind, TokenKind::Name(_)))?;
        match &token.kind {
            TokenKind::Name(name) => Ok(name.clone().into_owned()),
            _ => unreachable!("expect() accepted a non-Name token"),
        }
    }

    /// Advances past a specific keyword (a `Name` with exact text).
    fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        let expected = format!("`{keyword}`");
        self.expect(&expected, |kind| kind.as_name() == Some(keyword))?;
        Ok(())
    }

    /// Consumes the next token if its kind equals `kind` (unit kinds only).
    fn eat(&mut self, kind: &TokenKind<'static>) -> bool {
        if self.peek().is_some_and(|t| t.kind == *kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek_is(&self, kind: &TokenKind<'static>) -> bool {
        self.peek().is_some_and(|t| t.kind == *kind)
    }

    // =========================================================================
    // Document & definitions
    // =========================================================================

    fn parse_document(&mut self) -> Result<ast::Document, ParseError> {
        let mut definitions = vec![];
        while self.peek().is_some() {
            definitions.push(self.parse_definition()?);
        }
        Ok(ast::Document { definitions })
    }

    fn parse_definition(&mut self) -> Result<ast::Definition, ParseError> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected_end("a definition")),
        };
        match &token.kind {
            TokenKind::CurlyBraceOpen => {
                Ok(ast::Definition::Operation(self.parse_operation_shorthand()?))
            }
            TokenKind::Name(name) => match name.as_ref() {
                "query" | "mutation" | "subscription" => {
                    Ok(ast::Definition::Operation(self.parse_operation()?))
                }
                "fragment" => Ok(ast::Definition::Fragment(self.parse_fragment()?)),
                "schema" => Ok(ast::Definition::Schema(self.parse_schema_definition()?)),
                "directive" => Ok(ast::Definition::Directive(
                    self.parse_directive_definition()?,
                )),
                _ => Err(self.unexpected(token, "a definition")),
            },
            _ => Err(self.unexpected(token, "a definition")),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Shorthand form: a bare selection set is an anonymous query.
    fn parse_operation_shorthand(&mut self) -> Result<ast::OperationDefinition, ParseError> {
        let start = self.next_start();
        let selection_set = self.parse_selection_set()?;
        Ok(ast::OperationDefinition {
            kind: ast::OperationKind::Query,
            name: None,
            variable_definitions: vec![],
            directives: vec![],
            selection_set,
            span: self.span_from(start),
        })
    }

    fn parse_operation(&mut self) -> Result<ast::OperationDefinition, ParseError> {
        let start = self.next_start();
        let keyword = self.expect_name("an operation keyword")?;
        let kind = match ast::OperationKind::from_keyword(&keyword) {
            Some(kind) => kind,
            None => unreachable!("parse_definition dispatched on the keyword"),
        };

        let name = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Name(_)) => Some(self.expect_name("an operation name")?),
            _ => None,
        };

        let variable_definitions = if self.eat(&TokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            vec![]
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    /// Parses `$name: Type = default` entries. The `(` has been consumed;
    /// at least one definition is required.
    fn parse_variable_definitions(&mut self) -> Result<Vec<ast::VariableDefinition>, ParseError> {
        let mut defs = vec![];
        loop {
            if self.eat(&TokenKind::ParenClose) {
                if defs.is_empty() {
                    return Err(self.unexpected(
                        &self.tokens[self.pos - 1],
                        "a variable definition",
                    ));
                }
                return Ok(defs);
            }
            let start = self.next_start();
            self.expect("`$`", |kind| matches!(kind, TokenKind::Dollar))?;
            let name = self.expect_name("a variable name")?;
            self.expect("`:`", |kind| matches!(kind, TokenKind::Colon))?;
            let type_annotation = self.parse_type_annotation()?;
            let default_value = if self.eat(&TokenKind::Equals) {
                Some(self.parse_value(false)?)
            } else {
                None
            };
            defs.push(ast::VariableDefinition {
                name,
                type_annotation,
                default_value,
                span: self.span_from(start),
            });
        }
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    fn parse_fragment(&mut self) -> Result<ast::FragmentDefinition, ParseError> {
        let start = self.next_start();
        self.expect_keyword("fragment")?;
        let name = self.expect_name("a fragment name")?;
        if name == "on" {
            // `fragment on on Type` is how the reserved word would read; the
            // grammar forbids naming a fragment `on`.
            return Err(self.unexpected(&self.tokens[self.pos - 1], "a fragment name"));
        }
        self.expect_keyword("on")?;
        let type_condition = self.expect_name("a type condition")?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> Result<ast::SelectionSet, ParseError> {
        let start = self.next_start();
        self.expect("`{`", |kind| matches!(kind, TokenKind::CurlyBraceOpen))?;
        let mut selections = vec![];
        loop {
            if self.peek_is(&TokenKind::CurlyBraceClose) {
                if selections.is_empty() {
                    return Err(self.unexpected(&self.tokens[self.pos], "a selection"));
                }
                self.pos += 1;
                return Ok(ast::SelectionSet {
                    selections,
                    span: self.span_from(start),
                });
            }
            if self.peek().is_none() {
                return Err(self.unexpected_end("`}`"));
            }
            selections.push(self.parse_selection()?);
        }
    }

    fn parse_selection(&mut self) -> Result<ast::Selection, ParseError> {
        if self.peek_is(&TokenKind::Ellipsis) {
            return self.parse_fragment_spread_or_inline();
        }
        Ok(ast::Selection::Field(self.parse_field()?))
    }

    /// Parses the selection forms beginning with `...`.
    fn parse_fragment_spread_or_inline(&mut self) -> Result<ast::Selection, ParseError> {
        let start = self.next_start();
        self.expect("`...`", |kind| matches!(kind, TokenKind::Ellipsis))?;

        // `... on Type { ... }` or `... { ... }` → inline fragment;
        // `...Name` → fragment spread.
        let type_condition = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Name(name)) if name.as_ref() == "on" => {
                self.pos += 1;
                Some(self.expect_name("a type condition")?)
            }
            Some(TokenKind::Name(_)) => {
                let fragment_name = self.expect_name("a fragment name")?;
                let directives = self.parse_directives()?;
                return Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    fragment_name,
                    directives,
                    span: self.span_from(start),
                }));
            }
            _ => None,
        };

        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: self.span_from(start),
        }))
    }

    fn parse_field(&mut self) -> Result<ast::Field, ParseError> {
        let start = self.next_start();
        let name_or_alias = self.expect_name("a field name")?;

        let (alias, name) = if self.eat(&TokenKind::Colon) {
            (Some(name_or_alias), self.expect_name("a field name")?)
        } else {
            (None, name_or_alias)
        };

        let arguments = if self.eat(&TokenKind::ParenOpen) {
            self.parse_arguments()?
        } else {
            vec![]
        };
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(&TokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Directives & arguments
    // =========================================================================

    fn parse_directives(&mut self) -> Result<Vec<ast::DirectiveAnnotation>, ParseError> {
        let mut directives = vec![];
        while self.peek_is(&TokenKind::At) {
            let start = self.next_start();
            self.pos += 1;
            let name = self.expect_name("a directive name")?;
            let arguments = if self.eat(&TokenKind::ParenOpen) {
                self.parse_arguments()?
            } else {
                vec![]
            };
            directives.push(ast::DirectiveAnnotation {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    /// Parses `name: value` entries. The `(` has been consumed; at least one
    /// argument is required.
    fn parse_arguments(&mut self) -> Result<Vec<ast::Argument>, ParseError> {
        let mut arguments = vec![];
        loop {
            if self.eat(&TokenKind::ParenClose) {
                if arguments.is_empty() {
                    return Err(self.unexpected(&self.tokens[self.pos - 1], "an argument"));
                }
                return Ok(arguments);
            }
            let start = self.next_start();
            let name = self.expect_name("an argument name")?;
            self.expect("`:`", |kind| matches!(kind, TokenKind::Colon))?;
            let value = self.parse_value(true)?;
            arguments.push(ast::Argument {
                name,
                value,
                span: self.span_from(start),
            });
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn parse_value(&mut self, allow_variables: bool) -> Result<ast::Value, ParseError> {
        let token = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected_end("a value")),
        };
        let value = match &token.kind {
            TokenKind::Dollar => {
                if !allow_variables {
                    return Err(self.unexpected(token, "a constant value"));
                }
                self.pos += 1;
                ast::Value::Variable(self.expect_name("a variable name")?)
            }
            TokenKind::IntValue(raw) => {
                self.pos += 1;
                ast::Value::Int(raw.clone().into_owned())
            }
            TokenKind::FloatValue(raw) => {
                self.pos += 1;
                ast::Value::Float(raw.clone().into_owned())
            }
            TokenKind::StringValue(cooked) => {
                self.pos += 1;
                ast::Value::String(cooked.clone().into_owned())
            }
            TokenKind::True => {
                self.pos += 1;
                ast::Value::Boolean(true)
            }
            TokenKind::False => {
                self.pos += 1;
                ast::Value::Boolean(false)
            }
            TokenKind::Null => {
                self.pos += 1;
                ast::Value::Null
            }
            TokenKind::Name(name) => {
                let name = name.clone().into_owned();
                self.pos += 1;
                ast::Value::Enum(name)
            }
            TokenKind::SquareBracketOpen => {
                self.pos += 1;
                let mut items = vec![];
                while !self.eat(&TokenKind::SquareBracketClose) {
                    if self.peek().is_none() {
                        return Err(self.unexpected_end("`]`"));
                    }
                    items.push(self.parse_value(allow_variables)?);
                }
                ast::Value::List(items)
            }
            TokenKind::CurlyBraceOpen => {
                self.pos += 1;
                let mut fields = vec![];
                while !self.eat(&TokenKind::CurlyBraceClose) {
                    if self.peek().is_none() {
                        return Err(self.unexpected_end("`}`"));
                    }
                    let name = self.expect_name("an object field name")?;
                    self.expect("`:`", |kind| matches!(kind, TokenKind::Colon))?;
                    fields.push((name, self.parse_value(allow_variables)?));
                }
                ast::Value::Object(fields)
            }
            _ => return Err(self.unexpected(token, "a value")),
        };
        Ok(value)
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    fn parse_type_annotation(&mut self) -> Result<ast::TypeAnnotation, ParseError> {
        let inner = if self.eat(&TokenKind::SquareBracketOpen) {
            let element = self.parse_type_annotation()?;
            self.expect("`]`", |kind| matches!(kind, TokenKind::SquareBracketClose))?;
            ast::TypeAnnotation::List(Box::new(element))
        } else {
            ast::TypeAnnotation::Named(self.expect_name("a type name")?)
        };
        if self.eat(&TokenKind::Bang) {
            Ok(ast::TypeAnnotation::NonNull(Box::new(inner)))
        } else {
            Ok(inner)
        }
    }

    // =========================================================================
    // Schema definitions
    // =========================================================================

    fn parse_schema_definition(&mut self) -> Result<ast::SchemaDefinition, ParseError> {
        let start = self.next_start();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        self.expect("`{`", |kind| matches!(kind, TokenKind::CurlyBraceOpen))?;

        let mut root_operation_types = vec![];
        loop {
            if self.peek_is(&TokenKind::CurlyBraceClose) {
                if root_operation_types.is_empty() {
                    return Err(self.unexpected(&self.tokens[self.pos], "a root operation type"));
                }
                self.pos += 1;
                break;
            }
            if self.peek().is_none() {
                return Err(self.unexpected_end("`}`"));
            }
            let binding_start = self.next_start();
            let keyword = self.expect_name("an operation kind")?;
            let Some(operation_kind) = ast::OperationKind::from_keyword(&keyword) else {
                return Err(self.unexpected(
                    &self.tokens[self.pos - 1],
                    "`query`, `mutation`, or `subscription`",
                ));
            };
            self.expect("`:`", |kind| matches!(kind, TokenKind::Colon))?;
            let type_name = self.expect_name("a type name")?;
            root_operation_types.push(ast::RootOperationTypeBinding {
                operation_kind,
                type_name,
                span: self.span_from(binding_start),
            });
        }

        Ok(ast::SchemaDefinition {
            directives,
            root_operation_types,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    fn parse_directive_definition(&mut self) -> Result<ast::DirectiveDefinition, ParseError> {
        let start = self.next_start();
        self.expect_keyword("directive")?;
        self.expect("`@`", |kind| matches!(kind, TokenKind::At))?;
        let name = self.expect_name("a directive name")?;

        let arguments = if self.eat(&TokenKind::ParenOpen) {
            self.parse_input_value_definitions()?
        } else {
            vec![]
        };

        let repeatable = match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Name(keyword)) if keyword.as_ref() == "repeatable" => {
                self.pos += 1;
                true
            }
            _ => false,
        };

        self.expect_keyword("on")?;

        // An optional leading `|` is allowed before the first location.
        self.eat(&TokenKind::Pipe);
        let mut locations = vec![];
        loop {
            let location_start = self.next_start();
            let location_name = self.expect_name("a directive location")?;
            locations.push(ast::DirectiveLocation {
                name: location_name,
                span: self.span_from(location_start),
            });
            if !self.eat(&TokenKind::Pipe) {
                break;
            }
        }

        Ok(ast::DirectiveDefinition {
            name,
            arguments,
            repeatable,
            locations,
            span: self.span_from(start),
        })
    }

    /// Parses `name: Type = default` entries. The `(` has been consumed; at
    /// least one definition is required.
    fn parse_input_value_definitions(
        &mut self,
    ) -> Result<Vec<ast::InputValueDefinition>, ParseError> {
        let mut defs = vec![];
        loop {
            if self.eat(&TokenKind::ParenClose) {
                if defs.is_empty() {
                    return Err(
                        self.unexpected(&self.tokens[self.pos - 1], "an argument definition")
                    );
                }
                return Ok(defs);
            }
            if self.peek().is_none() {
                return Err(self.unexpected_end("`)`"));
            }
            let start = self.next_start();
            let name = self.expect_name("an argument name")?;
            self.expect("`:`", |kind| matches!(kind, TokenKind::Colon))?;
            let type_annotation = self.parse_type_annotation()?;
            let default_value = if self.eat(&TokenKind::Equals) {
                Some(self.parse_value(false)?)
            } else {
                None
            };
            defs.push(ast::InputValueDefinition {
                name,
                type_annotation,
                default_value,
                span: self.span_from(start),
            });
        }
    }
}
