use comfy_table::{presets::UTF8_FULL, Table};
use eyre::Result;

use crate::config::{HeaderLink, LinkTarget, SiteConfig};

fn flag(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}

fn describe_link(link: &HeaderLink) -> String {
    let target = match link.target() {
        LinkTarget::Doc(doc) => format!("doc:{doc}"),
        LinkTarget::Page(page) => format!("page:{page}"),
        LinkTarget::Href(href) => href.to_string(),
        LinkTarget::Blog => "blog".to_string(),
        LinkTarget::Search => "search".to_string(),
        LinkTarget::Languages => "languages".to_string(),
        LinkTarget::Unknown => "?".to_string(),
    };
    match link.label() {
        Some(label) => format!("{label} → {target}"),
        None => target,
    }
}

/// Build the table printed by `docsite show`
pub fn table(config: &SiteConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Field", "Value"]);

    let links = config
        .header_links
        .iter()
        .map(describe_link)
        .collect::<Vec<_>>()
        .join("\n");
    let z_index = config
        .scroll_to_top_options
        .as_ref()
        .and_then(|o| o.z_index.as_ref())
        .map(|z| z.to_string())
        .unwrap_or_default();

    let rows = [
        ("title", config.title.clone()),
        ("tagline", config.tagline.clone()),
        ("url", config.url.clone()),
        ("baseUrl", config.base_url.clone()),
        ("projectName", config.project_name.clone()),
        ("organizationName", config.organization_name.clone()),
        ("headerLinks", links),
        ("primaryColor", config.colors.primary_color.clone()),
        ("secondaryColor", config.colors.secondary_color.clone()),
        ("copyright", config.copyright.clone()),
        ("highlightTheme", config.highlight_theme().unwrap_or_default().to_string()),
        ("usePrism", config.use_prism.join(", ")),
        ("onPageNav", config.on_page_nav.map(|nav| nav.as_str()).unwrap_or_default().to_string()),
        ("cleanUrl", flag(config.clean_url)),
        ("ogImage", config.og_image.clone().unwrap_or_default()),
        ("twitterImage", config.twitter_image.clone().unwrap_or_default()),
        ("scripts", config.scripts.join("\n")),
        ("stylesheets", config.stylesheets.join("\n")),
        ("enableUpdateTime", flag(config.enable_update_time)),
        ("enableUpdateBy", flag(config.enable_update_by)),
        ("docsSideNavCollapsible", flag(config.docs_side_nav_collapsible)),
        ("scrollToTop", flag(config.scroll_to_top)),
        ("scrollToTopOptions.zIndex", z_index),
    ];
    for (field, value) in rows {
        table.add_row(vec![field.to_string(), value]);
    }

    for (role, color) in &config.colors.extra {
        table.add_row(vec![format!("colors.{role}"), color.clone()]);
    }
    for (name, stack) in config.fonts.iter().flatten() {
        table.add_row(vec![format!("fonts.{name}"), stack.join(", ")]);
    }
    if let Some(options) = &config.scroll_to_top_options {
        for (key, value) in &options.extra {
            table.add_row(vec![format!("scrollToTopOptions.{key}"), value.to_string()]);
        }
    }
    for (key, value) in &config.custom {
        table.add_row(vec![key.clone(), value.to_string()]);
    }

    table
}

pub async fn show() -> Result<()> {
    let config = SiteConfig::discover().await?;
    println!("{}", table(&config));
    Ok(())
}
