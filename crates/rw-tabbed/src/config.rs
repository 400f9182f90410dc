//! Configuration for the tabbed-content widget.
//!
//! Parses `tabbed.toml` files with serde. Every field has a default that
//! matches the markup rendered by RW, so an empty file (or no file at all)
//! yields a working widget:
//!
//! ```toml
//! [widget]
//! tag = "tabbed-content"
//! initial_tab_attribute = "initial-tab"
//! strategy = "auto"          # auto | paired | normalize
//!
//! [selectors]
//! tablist = '[role="tablist"]'
//! tab = '[role="tab"]'
//! panel = '[role="tabpanel"]'
//! panels_container = ".tabbed-content__panels"
//! tab_block = ".tabbed-content__tab-block"
//! block_button = "[data-tab-button]"
//! block_panel = "[data-tab-panel]"
//! block_index_attribute = "data-tab-index"
//!
//! [classes]
//! tab_active = "tabbed-content__tab--active"
//! panel_active = "tabbed-content__panel--active"
//! ```

use std::path::{Path, PathBuf};

use rw_dom::{Selector, SelectorError};
use serde::Deserialize;

use crate::group::{ActiveClasses, PANEL_ACTIVE_CLASS, TAB_ACTIVE_CLASS};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tabbed.toml";

/// How the initializer locates tab/panel pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Normalize when tab blocks are present, otherwise pair directly.
    #[default]
    Auto,
    /// Tabs and panels are already in place; pair them by position.
    Paired,
    /// Relocate tab blocks first; markup without blocks stays inert.
    Normalize,
}

/// Widget configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TabbedConfig {
    /// Widget registration settings.
    pub widget: WidgetConfig,
    /// Structural selectors.
    pub selectors: SelectorConfig,
    /// Active-state classes.
    pub classes: ClassConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Registration and initialization settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Element tag that instantiates the widget.
    pub tag: String,
    /// Root attribute holding the initial active index.
    pub initial_tab_attribute: String,
    /// Initializer strategy.
    pub strategy: Strategy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            tag: "tabbed-content".to_owned(),
            initial_tab_attribute: "initial-tab".to_owned(),
            strategy: Strategy::Auto,
        }
    }
}

/// Selectors locating widget structure inside the root element.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub tablist: String,
    pub tab: String,
    pub panel: String,
    pub panels_container: String,
    pub tab_block: String,
    pub block_button: String,
    pub block_panel: String,
    /// Attribute on tab blocks holding their declared order.
    pub block_index_attribute: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            tablist: r#"[role="tablist"]"#.to_owned(),
            tab: r#"[role="tab"]"#.to_owned(),
            panel: r#"[role="tabpanel"]"#.to_owned(),
            panels_container: ".tabbed-content__panels".to_owned(),
            tab_block: ".tabbed-content__tab-block".to_owned(),
            block_button: "[data-tab-button]".to_owned(),
            block_panel: "[data-tab-panel]".to_owned(),
            block_index_attribute: "data-tab-index".to_owned(),
        }
    }
}

/// Classes marking the active pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub tab_active: String,
    pub panel_active: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            tab_active: TAB_ACTIVE_CLASS.to_owned(),
            panel_active: PANEL_ACTIVE_CLASS.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Selector does not compile.
    #[error("Invalid selector for {field}: {source}")]
    Selector {
        /// Config field holding the selector.
        field: &'static str,
        /// Compilation error.
        source: SelectorError,
    },
}

/// Compiled markup contract used by the initializer.
#[derive(Debug, Clone)]
pub struct Markup {
    pub initial_tab_attribute: String,
    pub strategy: Strategy,
    pub tablist: Selector,
    pub tab: Selector,
    pub panel: Selector,
    pub panels_container: Selector,
    pub tab_block: Selector,
    pub block_button: Selector,
    pub block_panel: Selector,
    pub block_index_attribute: String,
    pub classes: ActiveClasses,
}

impl Default for Markup {
    fn default() -> Self {
        TabbedConfig::default()
            .markup()
            .expect("default selectors compile")
    }
}

impl TabbedConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `tabbed.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        if !config.widget.tag.contains('-') {
            tracing::warn!(
                tag = %config.widget.tag,
                "Widget tag has no hyphen, browsers will not treat it as a custom element"
            );
        }
        tracing::debug!(path = %path.display(), "Loaded tabbed config");
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        discover_from(&current)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for empty names and
    /// `ConfigError::Selector` for selectors that do not compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_name(&self.widget.tag, "widget.tag")?;
        require_name(&self.widget.initial_tab_attribute, "widget.initial_tab_attribute")?;
        require_name(
            &self.selectors.block_index_attribute,
            "selectors.block_index_attribute",
        )?;
        require_name(&self.classes.tab_active, "classes.tab_active")?;
        require_name(&self.classes.panel_active, "classes.panel_active")?;
        self.markup().map(|_| ())
    }

    /// Compile selectors into the markup contract.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Selector` naming the first selector that fails.
    pub fn markup(&self) -> Result<Markup, ConfigError> {
        let s = &self.selectors;
        Ok(Markup {
            initial_tab_attribute: self.widget.initial_tab_attribute.clone(),
            strategy: self.widget.strategy,
            tablist: compile(&s.tablist, "selectors.tablist")?,
            tab: compile(&s.tab, "selectors.tab")?,
            panel: compile(&s.panel, "selectors.panel")?,
            panels_container: compile(&s.panels_container, "selectors.panels_container")?,
            tab_block: compile(&s.tab_block, "selectors.tab_block")?,
            block_button: compile(&s.block_button, "selectors.block_button")?,
            block_panel: compile(&s.block_panel, "selectors.block_panel")?,
            block_index_attribute: s.block_index_attribute.clone(),
            classes: ActiveClasses {
                tab: self.classes.tab_active.clone(),
                panel: self.classes.panel_active.clone(),
            },
        })
    }
}

fn discover_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn compile(selector: &str, field: &'static str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|source| ConfigError::Selector { field, source })
}

/// Require a non-empty name without whitespace (tags, attributes, classes).
fn require_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} cannot contain whitespace"
        )));
    }
    Ok(())
}
