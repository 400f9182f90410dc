//! Accessible tabbed-content widget for RW pages.
//!
//! Turns `<tabbed-content>` markup into a tab interface following the WAI-ARIA
//! tabs pattern: exactly one tab is active, carries `aria-selected="true"`
//! and is the only tab reachable with Tab (`tabindex="0"`); its panel is
//! shown and every other panel is `hidden`. Arrow keys move between tabs
//! along the tab list's orientation, wrapping at both ends, and Home/End
//! jump to the first/last tab.
//!
//! # Architecture
//!
//! - [`navigation`]: pure key-to-target policy
//! - [`TabGroup`]: tab/panel pairs plus the active index, projecting state
//!   onto the document
//! - [`initialize`]: builds a group from widget markup, normalizing tab
//!   blocks when present
//! - [`TabbedContent`]: the component bound to one widget root
//! - [`ComponentRegistry`] and [`Page`]: tag registration, upgrade of
//!   matching elements and event routing
//! - [`TabbedConfig`]: `tabbed.toml` loading
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use rw_dom::parse_html;
//! use rw_tabbed::{ComponentRegistry, Key, Markup, Page, TabbedContent, define_tabbed_content};
//!
//! let html = r#"<tabbed-content>
//!   <div role="tablist">
//!     <button role="tab">macOS</button>
//!     <button role="tab">Linux</button>
//!   </div>
//!   <div role="tabpanel">brew install rw</div>
//!   <div role="tabpanel">cargo install rw</div>
//! </tabbed-content>"#;
//!
//! let mut registry = ComponentRegistry::new();
//! define_tabbed_content(&mut registry, "tabbed-content", Rc::new(Markup::default()));
//!
//! let mut page = Page::new(parse_html(html), registry);
//! assert_eq!(page.upgrade(), 1);
//!
//! let event = page.press_key(Key::ArrowRight).unwrap();
//! assert!(event.default_prevented());
//!
//! let root = page.roots()[0];
//! let widget = page.component::<TabbedContent>(root).unwrap();
//! assert_eq!(widget.active_index(), Some(1));
//! ```

mod config;
mod event;
mod group;
mod init;
pub mod navigation;
mod normalize;
mod page;
mod registry;
mod widget;

pub use config::{ClassConfig, ConfigError, Markup, SelectorConfig, Strategy, TabbedConfig, WidgetConfig};
pub use event::{KeyboardEvent, UiEvent};
pub use group::{ActiveClasses, PANEL_ACTIVE_CLASS, TAB_ACTIVE_CLASS, TabEntry, TabGroup};
pub use init::{initial_index, initialize};
pub use navigation::{Key, Navigation, Orientation, navigate};
pub use normalize::normalize_tab_blocks;
pub use page::Page;
pub use registry::{Component, ComponentRegistry, Factory};
pub use widget::{TabbedContent, define_tabbed_content};
