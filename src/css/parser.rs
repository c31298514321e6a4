//! Recursive descent CSS parser.
//!
//! Parses CSS text into a [`StyleSheet`] (a vector of [`RuleSet`]s). Uses the
//! logos-based tokenizer from [`crate::css::tokenizer`]. Declaration values
//! are sliced verbatim from the source, so `fill(2)` or `1 2` reach the
//! property converters exactly as written.

use logos::Logos;

use crate::css::model::*;
use crate::css::tokenizer::Token;

/// Errors from CSS parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
}

/// A token with its byte span in the (comment-free) source.
#[derive(Debug, Clone)]
struct PToken {
    token: Token,
    text: String,
    /// Index in the token stream (for error reporting).
    pos: usize,
    byte_start: usize,
    byte_end: usize,
}

/// Replace each `/* ... */` comment with a single space.
fn strip_comments(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        result.push_str(&rest[..start]);
        result.push(' ');
        rest = match rest[start + 2..].find("*/") {
            Some(end) => &rest[start + 2 + end + 2..],
            // Unterminated comment swallows the rest.
            None => "",
        };
    }
    result.push_str(rest);
    result
}

fn tokenize_with_spans(input: &str) -> Vec<PToken> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, span)))
        .enumerate()
        .map(|(pos, (token, span))| PToken {
            token,
            text: input[span.clone()].to_string(),
            pos,
            byte_start: span.start,
            byte_end: span.end,
        })
        .collect()
}

/// Parse a CSS string into a [`StyleSheet`].
pub fn parse_css(input: &str) -> Result<StyleSheet, ParseError> {
    let source = strip_comments(input);
    let tokens = tokenize_with_spans(&source);
    let mut parser = Parser {
        source: &source,
        tokens,
        cursor: 0,
    };

    let mut rules = Vec::new();
    while !parser.is_eof() {
        rules.push(parser.parse_rule()?);
    }
    Ok(StyleSheet { rules })
}

struct Parser<'s> {
    source: &'s str,
    tokens: Vec<PToken>,
    cursor: usize,
}

impl Parser<'_> {
    fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    fn peek(&self) -> Option<&PToken> {
        self.tokens.get(self.cursor)
    }

    fn peek_is(&self, token: Token) -> bool {
        self.peek().is_some_and(|t| t.token == token)
    }

    fn advance(&mut self) -> Option<PToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<PToken, ParseError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected {what}, got {:?} '{}'", tok.token, tok.text),
            }),
            None => Err(ParseError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    fn current_pos(&self) -> usize {
        self.peek().map(|t| t.pos).unwrap_or(self.tokens.len())
    }

    /// Whether the next token touches the previous one (no whitespace).
    fn is_adjacent(&self) -> bool {
        let Some(prev) = self.cursor.checked_sub(1).and_then(|i| self.tokens.get(i)) else {
            return false;
        };
        self.peek().is_some_and(|curr| curr.byte_start == prev.byte_end)
    }

    // ── Rules and selectors ──────────────────────────────────────────

    fn parse_rule(&mut self) -> Result<RuleSet, ParseError> {
        let selectors = self.parse_selector_list()?;
        self.expect(Token::BraceOpen, "'{'")?;
        let declarations = self.parse_declarations()?;
        self.expect(Token::BraceClose, "'}'")?;
        Ok(RuleSet {
            selectors,
            declarations,
        })
    }

    fn parse_selector_list(&mut self) -> Result<Vec<Selector>, ParseError> {
        let mut selectors = vec![self.parse_selector()?];
        while self.peek_is(Token::Comma) {
            self.advance();
            selectors.push(self.parse_selector()?);
        }
        Ok(selectors)
    }

    /// Compound selectors joined by `>` or whitespace.
    fn parse_selector(&mut self) -> Result<Selector, ParseError> {
        let mut parts = vec![SelectorPart::Compound(self.parse_compound_selector()?)];
        loop {
            match self.peek() {
                Some(t) if t.token == Token::GreaterThan => {
                    self.advance();
                    parts.push(SelectorPart::Combinator(Combinator::Child));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                // A selector start that was not glued onto the previous
                // compound means there was whitespace: descendant.
                Some(t) if t.token.starts_selector() => {
                    parts.push(SelectorPart::Combinator(Combinator::Descendant));
                    parts.push(SelectorPart::Compound(self.parse_compound_selector()?));
                }
                _ => break,
            }
        }
        Ok(Selector { parts })
    }

    /// A run of components with no whitespace, e.g. `Panel[title=Main]:focus`.
    fn parse_compound_selector(&mut self) -> Result<CompoundSelector, ParseError> {
        let mut compound = CompoundSelector::new();

        match self.peek().map(|t| t.token) {
            Some(Token::Ident) => {
                if let Some(tok) = self.advance() {
                    compound.push(SelectorComponent::Type(tok.text));
                }
            }
            Some(Token::Star) => {
                self.advance();
                compound.push(SelectorComponent::Universal);
            }
            Some(_) if self.peek().is_some_and(|t| t.token.starts_selector()) => {
                compound.push(self.parse_simple_selector()?);
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    position: self.current_pos(),
                    message: "expected selector".into(),
                });
            }
        }

        while self.is_adjacent()
            && self.peek().is_some_and(|t| {
                t.token.starts_selector() && !matches!(t.token, Token::Ident | Token::Star)
            })
        {
            compound.push(self.parse_simple_selector()?);
        }

        Ok(compound)
    }

    /// One of `.class`, `#id`, `[attr]`, `[attr=value]`, `:pseudo`, `::part`.
    fn parse_simple_selector(&mut self) -> Result<SelectorComponent, ParseError> {
        let tok = self
            .advance()
            .ok_or_else(|| ParseError::UnexpectedEof("expected selector".into()))?;
        match tok.token {
            Token::Dot => {
                let name = self.expect(Token::Ident, "class name")?;
                Ok(SelectorComponent::Class(name.text))
            }
            Token::Hash => {
                let name = self.expect(Token::Ident, "id name")?;
                Ok(SelectorComponent::Id(name.text))
            }
            // `#add` lexes as a color.
            Token::HexColor => Ok(SelectorComponent::Id(tok.text[1..].to_string())),
            Token::PseudoClass => Ok(SelectorComponent::PseudoClass(tok.text[1..].to_string())),
            Token::PseudoElement => Ok(SelectorComponent::PseudoElement(tok.text[2..].to_string())),
            Token::BracketOpen => self.parse_attribute_selector(),
            other => Err(ParseError::UnexpectedToken {
                position: tok.pos,
                message: format!("expected selector, got {other:?} '{}'", tok.text),
            }),
        }
    }

    /// After `[`: `name]` or `name=value]`.
    fn parse_attribute_selector(&mut self) -> Result<SelectorComponent, ParseError> {
        let name = self.expect(Token::Ident, "attribute name")?.text;
        let value = if self.peek_is(Token::Equals) {
            self.advance();
            let tok = self
                .advance()
                .ok_or_else(|| ParseError::UnexpectedEof("expected attribute value".into()))?;
            match tok.token {
                Token::Ident | Token::Number => Some(tok.text),
                Token::StringLiteral | Token::StringLiteralSingle => Some(unquote(&tok.text).to_string()),
                other => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.pos,
                        message: format!("expected attribute value, got {other:?} '{}'", tok.text),
                    })
                }
            }
        } else {
            None
        };
        self.expect(Token::BracketClose, "']'")?;
        Ok(SelectorComponent::Attribute { name, value })
    }

    // ── Declarations ─────────────────────────────────────────────────

    fn parse_declarations(&mut self) -> Result<Vec<Declaration>, ParseError> {
        let mut declarations = Vec::new();
        while self.peek().is_some_and(|t| t.token != Token::BraceClose) {
            if self.peek_is(Token::Semicolon) {
                self.advance();
                continue;
            }
            declarations.push(self.parse_declaration()?);
        }
        Ok(declarations)
    }

    /// `property: raw value text [!important];`
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let property = self.expect(Token::Ident, "property name")?;

        // `color:red` lexes the value onto the colon as a pseudo-class.
        let value_start = match self.advance() {
            Some(tok) if tok.token == Token::Colon => None,
            Some(tok) if tok.token == Token::PseudoClass && tok.byte_start == property.byte_end => {
                Some(tok.byte_start + 1)
            }
            Some(tok) => {
                return Err(ParseError::UnexpectedToken {
                    position: tok.pos,
                    message: format!("expected ':', got {:?} '{}'", tok.token, tok.text),
                })
            }
            None => return Err(ParseError::UnexpectedEof("expected ':'".into())),
        };

        let mut span: Option<(usize, usize)> = value_start.map(|s| (s, self.tokens[self.cursor - 1].byte_end));
        let mut important = false;
        loop {
            match self.peek().map(|t| t.token) {
                None | Some(Token::Semicolon) | Some(Token::BraceClose) => break,
                Some(Token::Important) => {
                    self.advance();
                    important = true;
                    break;
                }
                Some(_) => {
                    if let Some(tok) = self.advance() {
                        span = Some(match span {
                            Some((start, _)) => (start, tok.byte_end),
                            None => (tok.byte_start, tok.byte_end),
                        });
                    }
                }
            }
        }

        let Some((start, end)) = span else {
            return Err(ParseError::UnexpectedToken {
                position: self.current_pos(),
                message: format!("missing value for '{}'", property.text),
            });
        };

        if self.peek_is(Token::Semicolon) {
            self.advance();
        }

        let raw = self.source[start..end].trim();
        Ok(Declaration::new(property.text, unquote(raw), important))
    }
}

/// Strip one pair of matching surrounding quotes.
fn unquote(text: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = text.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return inner;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Helpers ──────────────────────────────────────────────────────

    fn first_rule(input: &str) -> RuleSet {
        let sheet = parse_css(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
        sheet.rules.into_iter().next().expect("at least one rule")
    }

    fn first_compound(sel: &Selector) -> &[SelectorComponent] {
        match &sel.parts[0] {
            SelectorPart::Compound(c) => &c.components,
            _ => panic!("expected compound selector at index 0"),
        }
    }

    // ── Selectors ────────────────────────────────────────────────────

    #[test]
    fn parse_simple_rule() {
        let rule = first_rule("Text { color: red; }");
        assert_eq!(first_compound(&rule.selectors[0]), &[SelectorComponent::Type("Text".into())]);
        assert_eq!(rule.declarations, vec![Declaration::new("color", "red", false)]);
    }

    #[test]
    fn parse_compound_selector() {
        let rule = first_rule("Panel.main#p:focus { color: blue; }");
        assert_eq!(
            first_compound(&rule.selectors[0]),
            &[
                SelectorComponent::Type("Panel".into()),
                SelectorComponent::Class("main".into()),
                SelectorComponent::Id("p".into()),
                SelectorComponent::PseudoClass("focus".into()),
            ]
        );
    }

    #[test]
    fn parse_attribute_selectors() {
        let rule = first_rule(r#"Panel[title=Main], [label], Panel[title="Two words"] { color: red; }"#);
        assert_eq!(
            first_compound(&rule.selectors[0])[1],
            SelectorComponent::Attribute { name: "title".into(), value: Some("Main".into()) }
        );
        assert_eq!(
            first_compound(&rule.selectors[1]),
            &[SelectorComponent::Attribute { name: "label".into(), value: None }]
        );
        assert_eq!(
            first_compound(&rule.selectors[2])[1],
            SelectorComponent::Attribute { name: "title".into(), value: Some("Two words".into()) }
        );
    }

    #[test]
    fn parse_pseudo_element() {
        let rule = first_rule("Gauge::filled { background: green; }");
        assert_eq!(
            first_compound(&rule.selectors[0]),
            &[
                SelectorComponent::Type("Gauge".into()),
                SelectorComponent::PseudoElement("filled".into()),
            ]
        );
    }

    #[test]
    fn parse_combinators() {
        let rule = first_rule("Column > Text, Row .item { color: red; }");
        assert_eq!(rule.selectors[0].parts[1], SelectorPart::Combinator(Combinator::Child));
        assert_eq!(rule.selectors[1].parts[1], SelectorPart::Combinator(Combinator::Descendant));
        assert_eq!(rule.selectors[1].parts.len(), 3);
    }

    #[test]
    fn hex_like_id_is_still_an_id() {
        let rule = first_rule("Text#add { color: red; }");
        assert_eq!(first_compound(&rule.selectors[0])[1], SelectorComponent::Id("add".into()));
    }

    #[test]
    fn whitespace_splits_compound() {
        let rule = first_rule("Panel .inner { color: red; }");
        assert_eq!(rule.selectors[0].parts.len(), 3);
    }

    // ── Declarations ─────────────────────────────────────────────────

    #[test]
    fn declaration_values_are_raw_text() {
        let rule = first_rule("Column { spacing: 2; padding: 1  2; height: fill(2); width: 1/3; min: 40%; }");
        let values: Vec<&str> = rule.declarations.iter().map(|d| d.value.as_str()).collect();
        assert_eq!(values, vec!["2", "1  2", "fill(2)", "1/3", "40%"]);
    }

    #[test]
    fn parse_important() {
        let rule = first_rule("Text { color: red !important; background: blue }");
        assert!(rule.declarations[0].important);
        assert_eq!(rule.declarations[0].value, "red");
        assert!(!rule.declarations[1].important);
    }

    #[test]
    fn parse_value_glued_to_colon() {
        let rule = first_rule("Text{color:red;text-style:bold}");
        assert_eq!(rule.declarations[0], Declaration::new("color", "red", false));
        assert_eq!(rule.declarations[1], Declaration::new("text-style", "bold", false));
    }

    #[test]
    fn quoted_values_are_unquoted() {
        let rule = first_rule(r#"Panel { title: "Hello"; }"#);
        assert_eq!(rule.declarations[0].value, "Hello");
    }

    #[test]
    fn comments_are_ignored() {
        let sheet = parse_css("/* top */ Text { /* inner */ color: red; } /* tail").unwrap();
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].declarations.len(), 1);
    }

    #[test]
    fn empty_input_is_empty_sheet() {
        assert!(parse_css("   ").unwrap().rules.is_empty());
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn missing_brace_is_error() {
        assert!(matches!(parse_css("Text { color: red;"), Err(ParseError::UnexpectedEof(_))));
    }

    #[test]
    fn missing_value_is_error() {
        assert!(parse_css("Text { color: ; }").is_err());
    }

    #[test]
    fn bad_selector_is_error() {
        assert!(parse_css("{ color: red; }").is_err());
        assert!(parse_css("Text. { color: red; }").is_err());
    }
}
