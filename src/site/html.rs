use chrono::{Datelike, Utc};

use crate::routing::Route;
use crate::site::PageContext;

const GITHUB_URL: &str = "https://github.com/soglab";
const LINKEDIN_URL: &str = "https://linkedin.com/company/soglab";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Full HTML document with the shared header and footer around `main`.
pub(crate) fn layout(ctx: &PageContext<'_>, title: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
</head>
<body>
{header}
<main>
{main}
</main>
{footer}
</body>
</html>
"#,
        lang = ctx.locale,
        title = title,
        description = ctx.t("meta.description"),
        header = header(ctx),
        main = main,
        footer = footer(ctx),
    )
}

fn header(ctx: &PageContext<'_>) -> String {
    let home = ctx.links.route_href(ctx.locale, Route::Home);

    let nav: String = ctx
        .links
        .nav_links(ctx.current_path)
        .into_iter()
        .map(|link| {
            let current = if link.active { r#" aria-current="page""# } else { "" };
            format!(
                r#"<a href="{}"{}>{}</a>"#,
                escape_html(&link.href),
                current,
                ctx.t(&format!("nav.{}", link.route.key()))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let languages: String = ctx
        .links
        .language_links(ctx.current_path)
        .into_iter()
        .map(|link| {
            let current = if link.active { r#" aria-current="true""# } else { "" };
            format!(
                r#"<li><a href="{}" hreflang="{}" lang="{}"{}>{}</a></li>"#,
                escape_html(&link.href),
                link.locale,
                link.locale,
                current,
                escape_html(link.locale.native_name())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<header>
<a href="{home}" class="brand">Soglab</a>
<nav>
{nav}
</nav>
<ul class="language-switch" aria-label="{label}">
{languages}
</ul>
</header>"#,
        home = escape_html(&home),
        nav = nav,
        label = ctx.t("nav.language"),
        languages = languages,
    )
}

fn footer(ctx: &PageContext<'_>) -> String {
    let year = Utc::now().year().to_string();
    let copyright = ctx.messages.format("footer.copyright", &[("year", year.as_str())]);

    format!(
        r#"<footer>
<p>{}</p>
<a href="{}" target="_blank" rel="noopener noreferrer">GitHub</a>
<a href="{}" target="_blank" rel="noopener noreferrer">LinkedIn</a>
</footer>"#,
        escape_html(&copyright),
        GITHUB_URL,
        LINKEDIN_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_keeps_unicode() {
        assert_eq!(escape_html("한국어 © 2025"), "한국어 © 2025");
    }
}
