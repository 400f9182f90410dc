//! `rw-tabbed replay` command implementation.

use std::path::PathBuf;

use clap::Args;
use rw_tabbed::{Page, TabbedContent};

use super::load_page;
use crate::error::CliError;
use crate::output::Output;
use crate::script::{ScriptEvent, parse_script};

/// Arguments for the replay command.
#[derive(Args)]
pub(crate) struct ReplayArgs {
    /// HTML file containing the widgets.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover tabbed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Event to replay: click:<tab>, click:<widget>:<tab> or key:<Key>.
    #[arg(short, long = "event", value_name = "EVENT")]
    events: Vec<ScriptEvent>,

    /// File with one event per line, replayed after --event entries.
    #[arg(short, long)]
    script: Option<PathBuf>,
}

impl ReplayArgs {
    /// Execute the replay command.
    ///
    /// # Errors
    ///
    /// Returns an error if the page or script cannot be loaded, or an event
    /// targets a widget or tab that does not exist.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let mut events = self.events;
        if let Some(script) = &self.script {
            events.extend(parse_script(&std::fs::read_to_string(script)?)?);
        }

        let mut page = load_page(&self.file, self.config.as_deref())?;
        if page.roots().is_empty() {
            output.warning("No widgets found");
        }

        for event in &events {
            if !apply(&mut page, event)? {
                output.warning(&format!("{event}: nothing focused, key ignored"));
            }
        }

        output.result(&page.document().to_html());
        Ok(())
    }
}

/// Apply one event to the page.
///
/// Returns `false` for a key press with no focused element.
fn apply(page: &mut Page, event: &ScriptEvent) -> Result<bool, CliError> {
    match event {
        ScriptEvent::Click { widget, tab } => {
            let root = page
                .roots()
                .get(*widget)
                .copied()
                .ok_or_else(|| CliError::Replay(format!("{event}: no widget {widget}")))?;
            let target = page
                .component::<TabbedContent>(root)
                .and_then(TabbedContent::group)
                .and_then(|group| group.entries().get(*tab))
                .map(|entry| entry.tab)
                .ok_or_else(|| {
                    CliError::Replay(format!("{event}: widget {widget} has no tab {tab}"))
                })?;
            tracing::debug!(%event, "Replaying click");
            page.click(target);
            Ok(true)
        }
        ScriptEvent::Key(key) => {
            let delivered = page.press_key(key.clone());
            if let Some(delivered) = &delivered {
                tracing::debug!(
                    %event,
                    prevented = delivered.default_prevented(),
                    "Replayed key"
                );
            }
            Ok(delivered.is_some())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rw_tabbed::TabbedConfig;

    use super::super::build_page;
    use super::*;

    const HTML: &str = r#"<tabbed-content><div role="tablist"><button role="tab">A</button><button role="tab">B</button><button role="tab">C</button></div><div role="tabpanel">a</div><div role="tabpanel">b</div><div role="tabpanel">c</div></tabbed-content>"#;

    fn active(page: &Page) -> Option<usize> {
        let root = page.roots()[0];
        page.component::<TabbedContent>(root)?.active_index()
    }

    #[test]
    fn test_click_then_keys() {
        let mut page = build_page(HTML, &TabbedConfig::default()).unwrap();

        for entry in ["click:2", "key:ArrowRight", "key:End", "key:ArrowLeft"] {
            assert!(apply(&mut page, &entry.parse().unwrap()).unwrap());
        }

        assert_eq!(active(&page), Some(1));
        let html = page.document().to_html();
        assert!(html.contains(r#"<div role="tabpanel" hidden>a</div>"#));
    }

    #[test]
    fn test_replay_on_page_with_script_and_bare_ampersand() {
        let html = format!("<p>Tom & Jerry</p>{HTML}<script>if (a < b) {{}}</script>");
        let mut page = build_page(&html, &TabbedConfig::default()).unwrap();

        assert!(apply(&mut page, &"click:1".parse().unwrap()).unwrap());

        assert_eq!(active(&page), Some(1));
        let out = page.document().to_html();
        assert!(out.starts_with("<p>Tom &amp; Jerry</p><tabbed-content>"));
        assert!(out.ends_with("</tabbed-content><script>if (a < b) {}</script>"));
    }

    #[test]
    fn test_click_on_missing_tab() {
        let mut page = build_page(HTML, &TabbedConfig::default()).unwrap();
        let err = apply(&mut page, &"click:0:7".parse().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "click:0:7: widget 0 has no tab 7");
    }

    #[test]
    fn test_click_on_missing_widget() {
        let mut page = build_page(HTML, &TabbedConfig::default()).unwrap();
        let err = apply(&mut page, &"click:1:0".parse().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "click:1:0: no widget 1");
    }

    #[test]
    fn test_key_without_focus() {
        let mut page = build_page("<p>plain</p>", &TabbedConfig::default()).unwrap();
        assert!(!apply(&mut page, &"key:Home".parse().unwrap()).unwrap());
    }
}
