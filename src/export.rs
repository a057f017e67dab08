//! Static export: render every localized page to files.
//!
//! Output layout (relative to the export directory, which is served under
//! the base path):
//!
//! ```text
//! index.html                  redirect page to {base}/{default}
//! 404.html                    not-found page in the default locale
//! {locale}/index.html         home
//! {locale}/projects/index.html
//! {locale}/about/index.html
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::i18n::Locale;
use crate::server::AppState;
use crate::site::{self, PageContext};

/// Files written by an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
}

/// Render all pages of all locales into `out_dir`.
pub async fn export_site(state: &AppState, out_dir: &Path) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();
    let default_locale = Locale::default_locale();

    let redirect = site::render_redirect(
        &state.resolver.default_target(),
        state.catalogs.get(default_locale),
    );
    write_page(out_dir.join("index.html"), &redirect, &mut summary).await?;

    for locale in Locale::all() {
        for (route, _) in state.links.routes().iter() {
            let href = state.links.route_href(locale, route);
            let ctx = PageContext::new(locale, &href, &state.links, &state.catalogs);
            let html = site::render_page(route, &ctx);

            let relative = href
                .strip_prefix(state.links.base_path().as_str())
                .unwrap_or(&href)
                .trim_start_matches('/');
            write_page(out_dir.join(relative).join("index.html"), &html, &mut summary).await?;
        }
    }

    let missing = state.links.base_path().join("/404");
    let ctx = PageContext::new(default_locale, &missing, &state.links, &state.catalogs);
    write_page(
        out_dir.join("404.html"),
        &site::render_not_found(&ctx),
        &mut summary,
    )
    .await?;

    info!("Exported {} files to {}", summary.files.len(), out_dir.display());
    Ok(summary)
}

async fn write_page(path: PathBuf, html: &str, summary: &mut ExportSummary) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Wrote {}", path.display());
    summary.files.push(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routing::BasePath;
    use tempfile::TempDir;

    fn config(base_path: &str) -> Config {
        Config {
            port: 0,
            base_path: BasePath::parse(base_path).unwrap(),
            messages_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("messages"),
            export_dir: PathBuf::from("unused"),
        }
    }

    #[tokio::test]
    async fn test_export_writes_every_page() {
        let state = AppState::load(&config("")).await.unwrap();
        let out = TempDir::new().unwrap();

        let summary = export_site(&state, out.path()).await.unwrap();

        // redirect + 404 + 2 locales x 3 routes
        assert_eq!(summary.files.len(), 8);
        for page in [
            "index.html",
            "404.html",
            "ko/index.html",
            "ko/projects/index.html",
            "en/about/index.html",
        ] {
            assert!(out.path().join(page).exists(), "{page} missing");
        }
    }

    #[tokio::test]
    async fn test_exported_links_carry_base_path() {
        let state = AppState::load(&config("/soglab")).await.unwrap();
        let out = TempDir::new().unwrap();

        export_site(&state, out.path()).await.unwrap();

        let root = std::fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(root.contains("0;url=/soglab/ko"));

        let about = std::fs::read_to_string(out.path().join("en/about/index.html")).unwrap();
        assert!(about.contains(r#"href="/soglab/en/projects""#));
        assert!(about.contains(r#"href="/soglab/ko/about" hreflang="ko""#));
        assert!(!out.path().join("soglab").exists());
    }
}
