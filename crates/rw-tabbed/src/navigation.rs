//! Keyboard navigation policy for tab lists.
//!
//! Maps a key press on a tab to the tab that should become active. The
//! mapping depends on the list orientation: horizontal lists move with
//! Left/Right, vertical lists with Up/Down. Off-axis arrows are ignored so
//! the page keeps their default behavior (scrolling).

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Direction tabs are laid out in, fixed for the lifetime of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Tabs in a row; Left/Right navigate.
    #[default]
    Horizontal,
    /// Tabs in a column; Up/Down navigate.
    Vertical,
}

impl Orientation {
    /// Read orientation from an `aria-orientation` value.
    ///
    /// Only the exact value `vertical` selects [`Orientation::Vertical`];
    /// anything else, including a missing attribute, is horizontal.
    #[must_use]
    pub fn from_aria(value: Option<&str>) -> Self {
        match value {
            Some("vertical") => Self::Vertical,
            _ => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Key identity as reported by a keyboard event's `key` value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
    Space,
    /// Any key the navigation policy does not handle.
    Other(String),
}

impl Key {
    /// Map a key value (`"ArrowLeft"`, `" "`, `"Enter"`, ...) to a [`Key`].
    ///
    /// `"Space"` is accepted as a spelled-out alias for `" "`.
    #[must_use]
    pub fn from_key_value(value: &str) -> Self {
        match value {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Enter" => Self::Enter,
            " " | "Space" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key_value(s))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
            Self::Home => "Home",
            Self::End => "End",
            Self::Enter => "Enter",
            Self::Space => " ",
            Self::Other(other) => other,
        };
        f.write_str(value)
    }
}

/// Outcome of a key press on a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Key is not handled; its default behavior must be preserved.
    Ignore,
    /// Navigate to the target index. The default behavior is suppressed
    /// even when the target equals the current index.
    MoveTo(usize),
    /// Activate the current tab again (Space/Enter).
    Reactivate,
}

impl Navigation {
    /// Whether the key's default behavior must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Index this navigation lands on, starting from `current`.
    #[must_use]
    pub fn target(self, current: usize) -> usize {
        match self {
            Self::MoveTo(target) => target,
            Self::Ignore | Self::Reactivate => current,
        }
    }
}

/// Decide what a key press on tab `current` does in a list of `tab_count` tabs.
///
/// | Key | Axis | Target |
/// |---|---|---|
/// | `ArrowLeft` / `ArrowUp` | on-axis | previous, wrapping to the last tab |
/// | `ArrowRight` / `ArrowDown` | on-axis | next, wrapping to the first tab |
/// | `Home` | either | first tab |
/// | `End` | either | last tab |
/// | `Space` / `Enter` | either | reactivate `current` |
///
/// An empty list handles no keys.
///
/// # Example
///
/// ```
/// use rw_tabbed::{Key, Navigation, Orientation, navigate};
///
/// assert_eq!(
///     navigate(&Key::ArrowLeft, 0, Orientation::Horizontal, 3),
///     Navigation::MoveTo(2)
/// );
/// assert_eq!(
///     navigate(&Key::ArrowLeft, 0, Orientation::Vertical, 3),
///     Navigation::Ignore
/// );
/// ```
#[must_use]
pub fn navigate(key: &Key, current: usize, orientation: Orientation, tab_count: usize) -> Navigation {
    if tab_count == 0 {
        return Navigation::Ignore;
    }
    let last = tab_count - 1;
    let previous = if current == 0 { last } else { current - 1 };
    let next = if current == last { 0 } else { current + 1 };

    match (key, orientation) {
        (Key::ArrowLeft, Orientation::Horizontal) | (Key::ArrowUp, Orientation::Vertical) => {
            Navigation::MoveTo(previous)
        }
        (Key::ArrowRight, Orientation::Horizontal) | (Key::ArrowDown, Orientation::Vertical) => {
            Navigation::MoveTo(next)
        }
        (Key::Home, _) => Navigation::MoveTo(0),
        (Key::End, _) => Navigation::MoveTo(last),
        (Key::Space | Key::Enter, _) => Navigation::Reactivate,
        _ => Navigation::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const H: Orientation = Orientation::Horizontal;
    const V: Orientation = Orientation::Vertical;

    #[test]
    fn test_wrap_around_horizontal() {
        assert_eq!(navigate(&Key::ArrowLeft, 0, H, 3), Navigation::MoveTo(2));
        assert_eq!(navigate(&Key::ArrowRight, 2, H, 3), Navigation::MoveTo(0));
    }

    #[test]
    fn test_wrap_around_vertical() {
        assert_eq!(navigate(&Key::ArrowUp, 0, V, 3), Navigation::MoveTo(2));
        assert_eq!(navigate(&Key::ArrowDown, 2, V, 3), Navigation::MoveTo(0));
    }

    #[test]
    fn test_step_within_bounds() {
        assert_eq!(navigate(&Key::ArrowRight, 0, H, 3), Navigation::MoveTo(1));
        assert_eq!(navigate(&Key::ArrowLeft, 2, H, 3), Navigation::MoveTo(1));
        assert_eq!(navigate(&Key::ArrowDown, 1, V, 3), Navigation::MoveTo(2));
        assert_eq!(navigate(&Key::ArrowUp, 1, V, 3), Navigation::MoveTo(0));
    }

    #[test]
    fn test_off_axis_arrows_ignored() {
        for current in 0..3 {
            assert_eq!(navigate(&Key::ArrowUp, current, H, 3), Navigation::Ignore);
            assert_eq!(navigate(&Key::ArrowDown, current, H, 3), Navigation::Ignore);
            assert_eq!(navigate(&Key::ArrowLeft, current, V, 3), Navigation::Ignore);
            assert_eq!(navigate(&Key::ArrowRight, current, V, 3), Navigation::Ignore);
        }
    }

    #[test]
    fn test_home_end_any_orientation() {
        for orientation in [H, V] {
            for current in 0..4 {
                assert_eq!(
                    navigate(&Key::Home, current, orientation, 4),
                    Navigation::MoveTo(0)
                );
                assert_eq!(
                    navigate(&Key::End, current, orientation, 4),
                    Navigation::MoveTo(3)
                );
            }
        }
    }

    #[test]
    fn test_space_and_enter_reactivate() {
        assert_eq!(navigate(&Key::Space, 1, H, 3), Navigation::Reactivate);
        assert_eq!(navigate(&Key::Enter, 1, V, 3), Navigation::Reactivate);
        assert_eq!(Navigation::Reactivate.target(1), 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let key = Key::from_key_value("a");
        assert_eq!(key, Key::Other("a".to_owned()));
        assert_eq!(navigate(&key, 0, H, 3), Navigation::Ignore);
        assert_eq!(
            navigate(&Key::from_key_value("Tab"), 0, H, 3),
            Navigation::Ignore
        );
    }

    #[test]
    fn test_single_tab_wraps_to_itself() {
        assert_eq!(navigate(&Key::ArrowRight, 0, H, 1), Navigation::MoveTo(0));
        assert_eq!(navigate(&Key::ArrowLeft, 0, H, 1), Navigation::MoveTo(0));
    }

    #[test]
    fn test_empty_list_handles_nothing() {
        assert_eq!(navigate(&Key::Home, 0, H, 0), Navigation::Ignore);
        assert_eq!(navigate(&Key::Enter, 0, H, 0), Navigation::Ignore);
    }

    #[test]
    fn test_prevents_default() {
        assert!(!Navigation::Ignore.prevents_default());
        assert!(Navigation::MoveTo(0).prevents_default());
        assert!(Navigation::Reactivate.prevents_default());
    }

    #[test]
    fn test_key_values() {
        assert_eq!(Key::from_key_value(" "), Key::Space);
        assert_eq!(Key::from_key_value("Space"), Key::Space);
        assert_eq!("ArrowDown".parse::<Key>(), Ok(Key::ArrowDown));
        assert_eq!(Key::End.to_string(), "End");
    }

    #[test]
    fn test_orientation_from_aria() {
        assert_eq!(Orientation::from_aria(Some("vertical")), V);
        assert_eq!(Orientation::from_aria(Some("horizontal")), H);
        assert_eq!(Orientation::from_aria(Some("Vertical")), H);
        assert_eq!(Orientation::from_aria(None), H);
    }
}
