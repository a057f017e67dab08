use crate::i18n::MessageCatalog;
use crate::routing::Route;
use crate::site::html::{escape_html, layout};
use crate::site::{PageContext, Project, PROJECTS};

const CONTACT_EMAIL: &str = "contact@soglab.com";

/// Render the page for a route.
pub fn render_page(route: Route, ctx: &PageContext<'_>) -> String {
    match route {
        Route::Home => render_home(ctx),
        Route::Projects => render_projects(ctx),
        Route::About => render_about(ctx),
    }
}

fn render_home(ctx: &PageContext<'_>) -> String {
    let services: String = ["software", "game", "ai"]
        .iter()
        .map(|service| {
            format!(
                "<div class=\"service\">\n<h3>{}</h3>\n<p>{}</p>\n</div>",
                ctx.t(&format!("services.{}.title", service)),
                ctx.t(&format!("services.{}.description", service))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let main = format!(
        r##"<section class="hero">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a href="#projects">{hero_cta}</a>
</section>
<section class="services">
<h2>{services_title}</h2>
{services}
</section>
<section id="projects" class="projects">
<h2>{projects_title}</h2>
<p>{projects_subtitle}</p>
{cards}
</section>
<section class="about">
<h2>{about_title}</h2>
<p class="vision">{about_vision}</p>
<p>{about_description}</p>
<a href="{about_href}">{about_link}</a>
</section>"##,
        hero_title = ctx.t("hero.title"),
        hero_subtitle = ctx.t("hero.subtitle"),
        hero_cta = ctx.t("hero.cta"),
        services_title = ctx.t("services.title"),
        services = services,
        projects_title = ctx.t("projects.title"),
        projects_subtitle = ctx.t("projects.subtitle"),
        cards = project_cards(ctx),
        about_title = ctx.t("about.title"),
        about_vision = ctx.t("about.vision"),
        about_description = ctx.t("about.description"),
        about_href = escape_html(&ctx.links.route_href(ctx.locale, Route::About)),
        about_link = ctx.t("nav.about"),
    );

    layout(ctx, &ctx.t("meta.title"), &main)
}

fn render_projects(ctx: &PageContext<'_>) -> String {
    let main = format!(
        "<h1>{}</h1>\n<p>{}</p>\n{}",
        ctx.t("projects.title"),
        ctx.t("projects.subtitle"),
        project_cards(ctx)
    );

    layout(ctx, &page_title(ctx, "projects.title"), &main)
}

fn render_about(ctx: &PageContext<'_>) -> String {
    let values: String = ["innovation", "quality", "collaboration"]
        .iter()
        .map(|value| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                ctx.t(&format!("about.values.{}.title", value)),
                ctx.t(&format!("about.values.{}.description", value))
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let contact = ctx
        .messages
        .format("about.contact", &[("email", CONTACT_EMAIL)]);

    let main = format!(
        r#"<h1>{title}</h1>
<p class="vision">{vision}</p>
<p>{description}</p>
<section class="values">
<h3>{values_title}</h3>
<ul>
{values}
</ul>
</section>
<section class="contact">
<h3>{contact_title}</h3>
<p>{contact}</p>
</section>"#,
        title = ctx.t("about.title"),
        vision = ctx.t("about.vision"),
        description = ctx.t("about.description"),
        values_title = ctx.t("about.values_title"),
        values = values,
        contact_title = ctx.t("about.contact_title"),
        contact = escape_html(&contact),
    );

    layout(ctx, &page_title(ctx, "about.title"), &main)
}

/// Not-found page, linking back to the home page of the context's locale.
pub fn render_not_found(ctx: &PageContext<'_>) -> String {
    let main = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"{}\">{}</a>",
        ctx.t("not_found.title"),
        ctx.t("not_found.message"),
        escape_html(&ctx.links.route_href(ctx.locale, Route::Home)),
        ctx.t("not_found.back")
    );

    layout(ctx, &page_title(ctx, "not_found.title"), &main)
}

/// Stand-alone page sending the browser to `target`, for hosts that serve
/// the exported site without running the resolver.
pub fn render_redirect(target: &str, messages: &MessageCatalog) -> String {
    let target = escape_html(target);

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<meta http-equiv="refresh" content="0;url={target}">
<link rel="canonical" href="{target}">
</head>
<body>
<p>{message} <a href="{target}">{target}</a></p>
</body>
</html>
"#,
        lang = messages.locale(),
        title = escape_html(messages.t("redirect.title")),
        message = escape_html(messages.t("redirect.message")),
        target = target,
    )
}

fn page_title(ctx: &PageContext<'_>, key: &str) -> String {
    format!("{} | Soglab", ctx.t(key))
}

fn project_cards(ctx: &PageContext<'_>) -> String {
    PROJECTS
        .iter()
        .map(|project| project_card(ctx, project))
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_card(ctx: &PageContext<'_>, project: &Project) -> String {
    let title = escape_html(project.localized_title(ctx.messages));
    let tags: String = project
        .tags
        .iter()
        .map(|tag| format!("<li>{}</li>", escape_html(tag)))
        .collect();

    format!(
        r#"<article class="project" id="{slug}">
<img src="{image}" alt="{title}" width="600" height="400">
<h3>{title}</h3>
<p>{description}</p>
<ul class="tags">{tags}</ul>
</article>"#,
        slug = project.slug,
        image = escape_html(project.image),
        title = title,
        description = escape_html(project.localized_description(ctx.messages)),
        tags = tags,
    )
}
