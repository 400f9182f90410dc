//! Event scripts for `rw-tabbed replay`.
//!
//! One event per entry:
//!
//! - `click:<tab>`: click tab `<tab>` of the first widget
//! - `click:<widget>:<tab>`: click tab `<tab>` of widget `<widget>`
//! - `key:<Key>`: press a key on the focused element (`key:ArrowRight`,
//!   `key:Home`, `key:Space`)

use std::fmt;
use std::str::FromStr;

use rw_tabbed::Key;

/// Malformed script entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ScriptError {
    #[error("unknown event `{0}`, expected click:<tab>, click:<widget>:<tab> or key:<Key>")]
    UnknownEvent(String),

    #[error("invalid index `{value}` in event `{event}`")]
    InvalidIndex { event: String, value: String },

    #[error("missing key name in event `{0}`")]
    MissingKey(String),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ScriptError>,
    },
}

/// One replayed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptEvent {
    Click { widget: usize, tab: usize },
    Key(Key),
}

impl FromStr for ScriptEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("key:") {
            // " " is a valid key value, so only an empty name is rejected
            if rest.is_empty() {
                return Err(ScriptError::MissingKey(s.to_owned()));
            }
            return Ok(Self::Key(Key::from_key_value(rest)));
        }

        let Some(rest) = s.strip_prefix("click:") else {
            return Err(ScriptError::UnknownEvent(s.to_owned()));
        };
        let index = |value: &str| {
            value.parse::<usize>().map_err(|_| ScriptError::InvalidIndex {
                event: s.to_owned(),
                value: value.to_owned(),
            })
        };
        match rest.split_once(':') {
            Some((widget, tab)) => Ok(Self::Click {
                widget: index(widget)?,
                tab: index(tab)?,
            }),
            None => Ok(Self::Click {
                widget: 0,
                tab: index(rest)?,
            }),
        }
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click { widget, tab } => write!(f, "click:{widget}:{tab}"),
            Self::Key(key) => write!(f, "key:{key}"),
        }
    }
}

/// Parse a script file body.
///
/// Blank lines and lines starting with `#` are skipped. Surrounding
/// whitespace is trimmed, so a space key must be written as `key:Space`.
pub(crate) fn parse_script(content: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, entry)| {
            entry.parse().map_err(|source| ScriptError::Line {
                line,
                source: Box::new(source),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_click_on_first_widget() {
        assert_eq!(
            "click:2".parse::<ScriptEvent>(),
            Ok(ScriptEvent::Click { widget: 0, tab: 2 })
        );
    }

    #[test]
    fn test_click_on_named_widget() {
        assert_eq!(
            "click:1:0".parse::<ScriptEvent>(),
            Ok(ScriptEvent::Click { widget: 1, tab: 0 })
        );
    }

    #[test]
    fn test_key_events() {
        assert_eq!(
            "key:ArrowLeft".parse::<ScriptEvent>(),
            Ok(ScriptEvent::Key(Key::ArrowLeft))
        );
        assert_eq!("key: ".parse::<ScriptEvent>(), Ok(ScriptEvent::Key(Key::Space)));
        assert_eq!(
            "key:Escape".parse::<ScriptEvent>(),
            Ok(ScriptEvent::Key(Key::Other("Escape".to_owned())))
        );
    }

    #[test]
    fn test_invalid_entries() {
        assert_eq!(
            "tap:1".parse::<ScriptEvent>(),
            Err(ScriptError::UnknownEvent("tap:1".to_owned()))
        );
        assert_eq!(
            "click:-1".parse::<ScriptEvent>(),
            Err(ScriptError::InvalidIndex {
                event: "click:-1".to_owned(),
                value: "-1".to_owned(),
            })
        );
        assert_eq!(
            "key:".parse::<ScriptEvent>(),
            Err(ScriptError::MissingKey("key:".to_owned()))
        );
    }

    #[test]
    fn test_display_is_canonical() {
        let event: ScriptEvent = "click:3".parse().unwrap();
        assert_eq!(event.to_string(), "click:0:3");
        assert_eq!(ScriptEvent::Key(Key::End).to_string(), "key:End");
    }

    #[test]
    fn test_parse_script_skips_comments() {
        let script = "# open second tab\nclick:1\n\n  key:Home  \n";
        assert_eq!(
            parse_script(script),
            Ok(vec![
                ScriptEvent::Click { widget: 0, tab: 1 },
                ScriptEvent::Key(Key::Home),
            ])
        );
    }

    #[test]
    fn test_parse_script_reports_line() {
        let err = parse_script("click:0\nclick:x\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 2: invalid index `x` in event `click:x`"
        );
    }
}
