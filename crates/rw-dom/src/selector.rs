//! Compound selectors for element lookup.
//!
//! Supports the subset of CSS selector syntax needed to locate widget
//! structure: an optional tag (or `*`), any number of `.class` filters and
//! attribute matchers in the forms `[name]`, `[name="value"]`,
//! `[name='value']` and `[name=value]`. Combinators are not supported.

use std::fmt;
use std::str::FromStr;

use crate::document::Element;
use crate::error::SelectorError;

/// Attribute condition inside a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatcher {
    name: String,
    value: Option<String>,
}

/// A compiled compound selector.
///
/// # Example
///
/// ```
/// use rw_dom::Selector;
///
/// let selector: Selector = r#"button[role="tab"].active"#.parse().unwrap();
/// assert_eq!(selector.to_string(), r#"button.active[role="tab"]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatcher>,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError`] if the input is empty or malformed.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser::new(input).parse()
    }

    /// Check whether an element satisfies every condition of this selector.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && !tag.eq_ignore_ascii_case(element.tag())
        {
            return false;
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attrs
            .iter()
            .all(|matcher| match (element.attribute(&matcher.name), &matcher.value) {
                (None, _) => false,
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == expected,
            })
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if self.classes.is_empty() && self.attrs.is_empty() => f.write_str("*")?,
            None => {}
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for matcher in &self.attrs {
            match &matcher.value {
                Some(value) => write!(f, r#"[{}="{value}"]"#, matcher.name)?,
                None => write!(f, "[{}]", matcher.name)?,
            }
        }
        Ok(())
    }
}

/// Character-level selector parser.
struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse(mut self) -> Result<Selector, SelectorError> {
        if self.input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        // Surrounding whitespace is tolerated, inner whitespace is not
        self.skip_whitespace();

        let mut selector = Selector {
            tag: None,
            classes: Vec::new(),
            attrs: Vec::new(),
        };

        match self.chars.peek() {
            Some(&(_, '*')) => {
                self.chars.next();
            }
            Some(&(_, ch)) if is_ident_char(ch) => {
                selector.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }

        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                '.' => {
                    self.chars.next();
                    selector.classes.push(self.ident()?);
                }
                '[' => {
                    self.chars.next();
                    selector.attrs.push(self.attr_matcher()?);
                }
                c if c.is_whitespace() => {
                    self.skip_whitespace();
                    if let Some(&(pos, ch)) = self.chars.peek() {
                        return Err(self.unexpected(ch, pos));
                    }
                }
                _ => return Err(self.unexpected(ch, pos)),
            }
        }

        Ok(selector)
    }

    fn attr_matcher(&mut self) -> Result<AttrMatcher, SelectorError> {
        self.skip_whitespace();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        match self.chars.next() {
            Some((_, ']')) => Ok(AttrMatcher { name, value: None }),
            Some((_, '=')) => {
                self.skip_whitespace();
                let value = match self.chars.peek() {
                    Some(&(_, quote @ ('"' | '\''))) => {
                        self.chars.next();
                        self.quoted(quote)?
                    }
                    _ => self.ident()?,
                };
                self.skip_whitespace();
                match self.chars.next() {
                    Some((_, ']')) => Ok(AttrMatcher {
                        name,
                        value: Some(value),
                    }),
                    Some((pos, ch)) => Err(self.unexpected(ch, pos)),
                    None => Err(SelectorError::Unterminated(self.input.to_owned())),
                }
            }
            Some((pos, ch)) => Err(self.unexpected(ch, pos)),
            None => Err(SelectorError::Unterminated(self.input.to_owned())),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, SelectorError> {
        let mut value = String::new();
        for (_, ch) in self.chars.by_ref() {
            if ch == quote {
                return Ok(value);
            }
            value.push(ch);
        }
        Err(SelectorError::Unterminated(self.input.to_owned()))
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let mut ident = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if !is_ident_char(ch) {
                break;
            }
            ident.push(ch);
            self.chars.next();
        }
        if ident.is_empty() {
            return match self.chars.peek() {
                Some(&(pos, ch)) => Err(self.unexpected(ch, pos)),
                None => Err(SelectorError::Unterminated(self.input.to_owned())),
            };
        }
        Ok(ident)
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
    }

    fn unexpected(&self, ch: char, pos: usize) -> SelectorError {
        SelectorError::UnexpectedChar {
            selector: self.input.to_owned(),
            ch,
            pos,
        }
    }
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> Element {
        let mut element = Element::new(tag);
        for (name, value) in attrs {
            element.set_attribute(name, value);
        }
        element
    }

    #[test]
    fn test_parse_attribute_with_value() {
        let selector = Selector::parse(r#"[role="tablist"]"#).unwrap();
        assert!(selector.matches(&element("div", &[("role", "tablist")])));
        assert!(!selector.matches(&element("div", &[("role", "tab")])));
        assert!(!selector.matches(&element("div", &[])));
    }

    #[test]
    fn test_parse_attribute_presence() {
        let selector = Selector::parse("[data-tab-button]").unwrap();
        assert!(selector.matches(&element("button", &[("data-tab-button", "")])));
        assert!(!selector.matches(&element("button", &[])));
    }

    #[test]
    fn test_parse_class() {
        let selector = Selector::parse(".tabbed-content__panels").unwrap();
        assert!(selector.matches(&element(
            "div",
            &[("class", "wide tabbed-content__panels")]
        )));
        assert!(!selector.matches(&element("div", &[("class", "tabbed-content__panel")])));
    }

    #[test]
    fn test_parse_compound() {
        let selector = Selector::parse("button.tab[role=tab][aria-selected='true']").unwrap();
        assert!(selector.matches(&element(
            "BUTTON",
            &[("class", "tab"), ("role", "tab"), ("aria-selected", "true")]
        )));
        assert!(!selector.matches(&element(
            "a",
            &[("class", "tab"), ("role", "tab"), ("aria-selected", "true")]
        )));
    }

    #[test]
    fn test_universal_matches_everything() {
        let selector = Selector::parse(" * ").unwrap();
        assert!(selector.matches(&element("section", &[])));
        assert_eq!(selector.to_string(), "*");
    }

    #[test]
    fn test_display_normalizes_quotes() {
        let selector = Selector::parse("div[role='tab']").unwrap();
        assert_eq!(selector.to_string(), r#"div[role="tab"]"#);
    }

    #[test]
    fn test_empty_selector() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
    }

    #[test]
    fn test_descendant_combinator_rejected() {
        let err = Selector::parse("div span").unwrap_err();
        assert!(matches!(
            err,
            SelectorError::UnexpectedChar { ch: 's', pos: 4, .. }
        ));
    }

    #[test]
    fn test_unterminated_attribute() {
        assert!(matches!(
            Selector::parse(r#"[role="tab"#),
            Err(SelectorError::Unterminated(_))
        ));
        assert!(matches!(
            Selector::parse("[role"),
            Err(SelectorError::Unterminated(_))
        ));
        assert!(matches!(
            Selector::parse("div."),
            Err(SelectorError::Unterminated(_))
        ));
    }
}
