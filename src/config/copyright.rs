use chrono::Datelike;
use colored::Colorize;
use eyre::{eyre, Result};
use tera::{Context, Tera};
use tracing::{debug, instrument};

/// Current calendar year in the local timezone
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render a copyright template.
/// Template usage: "Copyright © {{ year }} acme.org" → "Copyright © 2024 acme.org"
#[instrument(level = "debug")]
pub fn render(template: &str, year: i32) -> Result<String> {
    let mut context = Context::new();
    context.insert("year", &year);

    // Copyright notices end up in HTML footers and RSS feeds, the generator escapes them
    let copyright = Tera::one_off(template, &context, false)
        .map_err(|e| eyre!("{}: {}", "Failed to render copyright template".bold(), e))?;
    debug!(%copyright, "Rendered copyright");

    Ok(copyright)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_year() {
        let copyright = render("Copyright © {{ year }} sinosoft.com.cn", 2024).unwrap();
        assert_eq!(copyright, "Copyright © 2024 sinosoft.com.cn");
    }

    #[test]
    fn plain_text_is_kept_as_is() {
        let copyright = render("All rights reserved", 1999).unwrap();
        assert_eq!(copyright, "All rights reserved");
    }

    #[test]
    fn markup_is_not_escaped() {
        let copyright = render("<b>{{ year }}</b> & co", 2030).unwrap();
        assert_eq!(copyright, "<b>2030</b> & co");
    }

    #[test]
    fn broken_template_is_an_error() {
        assert!(render("Copyright {{ year", 2024).is_err());
    }

    #[test]
    fn current_year_is_four_digits() {
        let year = current_year();
        assert_eq!(year.to_string().len(), 4);
    }
}
