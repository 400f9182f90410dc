//! CLI command implementations.

pub(crate) mod inspect;
pub(crate) mod replay;

use std::path::Path;
use std::rc::Rc;

use rw_dom::parse_html;
use rw_tabbed::{ComponentRegistry, Page, TabbedConfig, define_tabbed_content};

use crate::error::CliError;

pub(crate) use inspect::InspectArgs;
pub(crate) use replay::ReplayArgs;

/// Read `file`, load configuration and upgrade every widget in the page.
fn load_page(file: &Path, config: Option<&Path>) -> Result<Page, CliError> {
    let config = TabbedConfig::load(config)?;
    let html = std::fs::read_to_string(file)?;
    let page = build_page(&html, &config)?;
    tracing::info!(
        file = %file.display(),
        widgets = page.roots().len(),
        "Loaded page"
    );
    Ok(page)
}

/// Parse `html` and upgrade the widgets `config` describes.
fn build_page(html: &str, config: &TabbedConfig) -> Result<Page, CliError> {
    let markup = Rc::new(config.markup()?);
    let mut registry = ComponentRegistry::new();
    define_tabbed_content(&mut registry, &config.widget.tag, markup);

    let mut page = Page::new(parse_html(html), registry);
    page.upgrade();
    Ok(page)
}
