use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use colored::Colorize;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::fs;

pub mod copyright;

/// Name of the configuration file looked up by [`SiteConfig::discover`]
pub const CONFIG_FILE: &str = "docsite.toml";

/// Built-in configuration of the sinoui guide
pub const BUILTIN_SOURCE: &str = include_str!("config/sinoui.toml");

/// Top navigation entry, e.g. `{ doc = "react-index", label = "基础知识" }`.
///
/// One of `doc`, `page`, `href`, `blog`, `search` or `languages` selects what
/// the entry points to. Keys the record does not know about are kept in
/// `extra` and exported as they were written.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct HeaderLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// What a [`HeaderLink`] points to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Document by its id
    Doc(&'a str),
    /// Internal page by its id
    Page(&'a str),
    /// External URL
    Href(&'a str),
    Blog,
    /// Position of the search bar
    Search,
    /// Position of the language dropdown
    Languages,
    Unknown,
}

impl HeaderLink {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn target(&self) -> LinkTarget<'_> {
        if let Some(doc) = &self.doc {
            LinkTarget::Doc(doc)
        } else if let Some(page) = &self.page {
            LinkTarget::Page(page)
        } else if let Some(href) = &self.href {
            LinkTarget::Href(href)
        } else if self.blog == Some(true) {
            LinkTarget::Blog
        } else if self.search == Some(true) {
            LinkTarget::Search
        } else if self.languages == Some(true) {
            LinkTarget::Languages
        } else {
            LinkTarget::Unknown
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary_color: String,
    pub secondary_color: String,
    /// Any other named color role
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Highlight {
    /// highlight.js theme used in code blocks
    pub theme: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    Separate,
}

impl OnPageNav {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Separate => "separate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollToTopOptions {
    /// Any TOML value, the generator hands it to CSS as is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<toml::Value>,
    /// Options forwarded untouched to the scroll-to-top button
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Site metadata and feature flags read by the documentation site generator.
///
/// The record is immutable once loaded. `copyright` holds the rendered notice,
/// the year is interpolated from the template at load time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub url: String,
    pub base_url: String,
    pub project_name: String,
    pub organization_name: String,
    #[serde(default)]
    pub header_links: Vec<HeaderLink>,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub copyright: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Highlight>,
    #[serde(default)]
    pub use_prism: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_page_nav: Option<OnPageNav>,
    #[serde(default)]
    pub clean_url: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub enable_update_time: bool,
    #[serde(default)]
    pub enable_update_by: bool,
    #[serde(default)]
    pub docs_side_nav_collapsible: bool,
    #[serde(default)]
    pub scroll_to_top: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_to_top_options: Option<ScrollToTopOptions>,
    /// Arbitrary keys made available to the generator templates (e.g. `repoUrl`)
    #[serde(flatten)]
    pub custom: toml::Table,
}

impl SiteConfig {
    /// Built-in configuration, copyright rendered for the current year
    pub fn load() -> Result<Self> {
        Self::load_at(BUILTIN_SOURCE, copyright::current_year())
    }

    /// Parses a TOML configuration and renders its copyright for `year`
    #[instrument(level = "debug", skip(source))]
    pub fn load_at(source: &str, year: i32) -> Result<Self> {
        let mut config: SiteConfig = toml::from_str(source)
            .wrap_err_with(|| format!("{}", "Failed to parse site configuration".bold()))?;

        config.copyright = copyright::render(&config.copyright, year)?;

        // usePrism is a set, keep the first occurrence of every language
        let mut seen = HashSet::with_capacity(config.use_prism.len());
        config.use_prism.retain(|lang| seen.insert(lang.clone()));

        debug!(title = %config.title, links = config.header_links.len(), "Loaded site configuration");
        Ok(config)
    }

    /// Reads a configuration file, copyright rendered for the current year
    #[instrument(level = "debug")]
    pub async fn from_file(path: &Path) -> Result<Self> {
        let source = tokio::fs::read_to_string(path).await.wrap_err(format!(
            "{}: {}",
            "Failed to read site configuration".bold(),
            path.display()
        ))?;
        Self::load_at(&source, copyright::current_year())
            .wrap_err(format!("in {}", path.display()))
    }

    /// Loads the `docsite.toml` found in the working directory or one of its
    /// parents, falling back to the built-in configuration.
    pub async fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        match fs::find_file_in_previous_dirs(CONFIG_FILE, &current_dir).await? {
            Some(path) => {
                info!(path = %path.display(), "Using site configuration file");
                Self::from_file(&path).await
            }
            None => {
                info!("No {} found, using the built-in configuration", CONFIG_FILE);
                Self::load()
            }
        }
    }

    /// highlight.js theme, if any
    pub fn highlight_theme(&self) -> Option<&str> {
        self.highlight.as_ref().map(|h| h.theme.as_str())
    }

    /// Header link at `index`, in declaration order
    pub fn header_link(&self, index: usize) -> Option<&HeaderLink> {
        self.header_links.get(index)
    }
}
