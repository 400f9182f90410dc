//! `rw-tabbed inspect` command implementation.

use std::path::PathBuf;

use clap::Args;
use rw_tabbed::{Page, TabbedContent};

use super::load_page;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// HTML file containing the widgets.
    file: PathBuf,

    /// Path to configuration file (default: auto-discover tabbed.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or page cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let page = load_page(&self.file, self.config.as_deref())?;
        let lines = describe(&page);
        if lines.is_empty() {
            output.warning("No widgets found");
        }
        for line in lines {
            output.result(&line);
        }
        Ok(())
    }
}

/// One summary line per upgraded widget.
fn describe(page: &Page) -> Vec<String> {
    page.roots()
        .into_iter()
        .enumerate()
        .filter_map(|(index, root)| {
            let widget = page.component::<TabbedContent>(root)?;
            Some(match widget.group() {
                Some(group) => format!(
                    "widget {index}: {} tabs, {}, active {}",
                    group.len(),
                    group.orientation(),
                    group
                        .active_index()
                        .map_or_else(|| "none".to_owned(), |i| i.to_string())
                ),
                None => format!("widget {index}: inert"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rw_tabbed::TabbedConfig;

    use super::super::build_page;
    use super::*;

    #[test]
    fn test_describe_widgets() {
        let html = concat!(
            r#"<tabbed-content initial-tab="1"><div role="tablist" aria-orientation="vertical"><button role="tab">A</button><button role="tab">B</button></div><div role="tabpanel">a</div><div role="tabpanel">b</div></tabbed-content>"#,
            r#"<tabbed-content initial-tab="5"><div role="tablist"><button role="tab">A</button></div><div role="tabpanel">a</div></tabbed-content>"#,
            r"<tabbed-content><p>empty</p></tabbed-content>",
        );
        let page = build_page(html, &TabbedConfig::default()).unwrap();

        assert_eq!(
            describe(&page),
            vec![
                "widget 0: 2 tabs, vertical, active 1",
                "widget 1: 1 tabs, horizontal, active none",
                "widget 2: inert",
            ]
        );
    }

    #[test]
    fn test_custom_tag() {
        let config = TabbedConfig::from_toml_str("[widget]\ntag = \"docs-tabs\"\n").unwrap();
        let html = r#"<docs-tabs><div role="tablist"><button role="tab">A</button></div><div role="tabpanel">a</div></docs-tabs>"#;
        let page = build_page(html, &config).unwrap();
        assert_eq!(describe(&page), vec!["widget 0: 1 tabs, horizontal, active 0"]);
    }
}
