//! Portfolio (root route) page

use super::{
    asset_url, document, external_link, html_escape, parallax_layer, preview_overlay, progress_bar,
    Animated,
};
use crate::content::{Certification, Content};
use crate::navigation::Route;
use crate::page::PageState;
use crate::section::SectionId;
use crate::SiteConfig;

/// Background layers and their declared speeds. The starfield's speed is the
/// slowest; the orbs drift progressively faster.
pub(crate) const LAYERS: [(&str, &str, Option<f64>); 4] = [
    ("starfield", "starfield-animation", Some(0.2)),
    ("orb-1", "cosmic-orb cosmic-orb-1", Some(0.3)),
    ("orb-2", "cosmic-orb cosmic-orb-2", Some(0.4)),
    ("orb-3", "cosmic-orb cosmic-orb-3", Some(0.5)),
];

fn slide(index: usize) -> &'static str {
    if index % 2 == 0 {
        "scroll-slide-left"
    } else {
        "scroll-slide-right"
    }
}

fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|t| format!(r#"<span class="badge">{}</span>"#, html_escape(t)))
        .collect::<Vec<_>>()
        .join("")
}

fn nav(state: &PageState, content: &Content, base: &str) -> String {
    let items = SectionId::ALL
        .iter()
        .map(|id| {
            let active = if state.active_section == Some(*id) { " active" } else { "" };
            format!(
                r#"<button class="nav-item{}" data-section="{}">{}</button>"#,
                active,
                id.as_str(),
                id.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<nav class="{fixed} site-nav">
<span class="brand">{name}</span>
{items}
<a class="download-cv" href="{href}" download="{file}">Download CV</a>
</nav>"#,
        fixed = super::FIXED_CLASS,
        name = html_escape(&content.profile.name),
        items = items,
        href = html_escape(&asset_url(base, &content.resume.path)),
        file = html_escape(&content.resume.file_name),
    )
}

fn hero(content: &Content, base: &str, anim: &mut Animated) -> String {
    let p = &content.profile;
    let stats = content.statistics();
    let socials = content
        .socials
        .iter()
        .map(|s| external_link(&s.href, "social", &s.title))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<section id="home">
<div {wrap}>
<div {avatar_wrap}><img class="avatar" src="{avatar}" alt="{name} profile picture" height="128"><span class="avatar-fallback">{initials}</span></div>
<h1 {h1}>{name}</h1>
<p {headline}>{headline_text}</p>
<p {tagline}>{tagline_text}</p>
<div {stats}>
<div class="stat"><strong>{years}</strong> Year Experience</div>
<div class="stat"><strong>{projects}</strong> Projects Tested</div>
<div class="stat"><strong>{certs}</strong> Certifications</div>
</div>
<div {socials_wrap}>
{socials}
</div>
<button {explore} data-section="about">Explore</button>
</div>
</section>"#,
        wrap = anim.attrs("scroll-fade-in"),
        avatar_wrap = anim.attrs("scroll-scale-in"),
        avatar = html_escape(&asset_url(base, &p.avatar)),
        name = html_escape(&p.name),
        initials = html_escape(&p.initials()),
        h1 = anim.attrs("scroll-slide-left"),
        headline = anim.attrs("scroll-slide-right"),
        headline_text = html_escape(&p.headline),
        tagline = anim.attrs("scroll-fade-in"),
        tagline_text = html_escape(&p.tagline),
        stats = anim.attrs("scroll-scale-in"),
        years = stats.years_experience,
        projects = stats.projects,
        certs = stats.certifications,
        socials_wrap = anim.attrs("scroll-fade-in"),
        socials = socials,
        explore = anim.attrs("scroll-fade-in"),
    )
}

fn about(content: &Content, base: &str, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"about\">\n<h2 {}>About</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, para) in content.profile.about.iter().enumerate() {
        out.push_str(&format!("<p {}>{}</p>\n", anim.attrs(slide(i)), html_escape(para)));
    }
    out.push_str(&format!("<h3 {}>Tech Stack</h3>\n<div class=\"tech-grid\">\n", anim.attrs("scroll-fade-in")));
    for tech in &content.tech_stack {
        out.push_str(&format!(
            r#"<div {}><img src="{}" alt="{} logo" height="40"><h4>{}</h4><span class="badge">{}</span></div>
"#,
            anim.attrs("scroll-scale-in"),
            html_escape(&asset_url(base, &tech.logo)),
            html_escape(&tech.name),
            html_escape(&tech.name),
            html_escape(&tech.label)
        ));
    }
    out.push_str("</div>\n</section>");
    out
}

fn experience(content: &Content, base: &str, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"experience\">\n<h2 {}>Experience</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, job) in content.jobs.iter().enumerate() {
        out.push_str(&format!(
            r#"<div {}>
<img class="logo" src="{}" alt="{} logo" height="80">
<h3>{}</h3>
<p class="company">{}</p>
<span class="period">{}</span>
<p>{}</p>
<div class="badges">{}</div>
</div>
"#,
            anim.attrs(slide(i)),
            html_escape(&asset_url(base, &job.logo)),
            html_escape(&job.company),
            html_escape(&job.title),
            html_escape(&job.company),
            html_escape(&job.period),
            html_escape(&job.description),
            badges(&job.technologies)
        ));
    }
    out.push_str("</section>");
    out
}

fn education(content: &Content, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"education\">\n<h2 {}>Education</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, edu) in content.education.iter().enumerate() {
        out.push_str(&format!(
            r#"<div {}>
<h3>{}</h3>
<p class="school">{}</p>
<span class="period">{}</span>
<p>{}</p>
</div>
"#,
            anim.attrs(slide(i)),
            html_escape(&edu.degree),
            html_escape(&edu.school),
            html_escape(&edu.period),
            html_escape(&edu.description)
        ));
    }
    out.push_str("</section>");
    out
}

/// A certification card with a clickable thumbnail. Shared with the gallery.
pub(crate) fn certification_card(cert: &Certification, base: &str, anim: &mut Animated, index: usize) -> String {
    format!(
        r#"<div {attrs} style="animation-delay: {delay:.1}s">
<button class="thumb" data-preview="{image}"><img src="{src}" alt="{title}" height="192"></button>
<h3>{title}</h3>
<p class="issuer">{issuer}</p>
<span class="badge">{level}</span> <span class="date">{date}</span>
{link}
</div>
"#,
        attrs = anim.attrs("scroll-scale-in"),
        delay = index as f64 * 0.1,
        image = html_escape(&cert.image),
        src = html_escape(&asset_url(base, &cert.image)),
        title = html_escape(&cert.title),
        issuer = html_escape(&cert.issuer),
        level = html_escape(&cert.level),
        date = html_escape(&cert.date),
        link = external_link(&cert.link, "cert-link", "View Certificate"),
    )
}

fn certificates(content: &Content, base: &str, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"certificates\">\n<h2 {}>Certifications</h2>\n<div class=\"cert-grid\">\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, cert) in content.featured_certifications.iter().enumerate() {
        out.push_str(&certification_card(cert, base, anim, i));
    }
    out.push_str(&format!(
        "</div>\n<a {} href=\"{}\" data-route=\"{}\">View All Certifications</a>\n</section>",
        anim.attrs("scroll-fade-in"),
        Route::Certifications.path(),
        Route::Certifications.path()
    ));
    out
}

fn projects(content: &Content, base: &str, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"projects\">\n<h2 {}>Projects</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, project) in content.projects.iter().enumerate() {
        let source = match &project.source_link {
            Some(href) => external_link(href, "source-link", "Code"),
            None => r#"<button class="source-link" disabled title="Source code not available for this project">Code</button>"#
                .to_string(),
        };
        out.push_str(&format!(
            r#"<div {} style="animation-delay: {:.1}s">
<img src="{}" alt="{}" height="160">
<h3>{}</h3>
<p>{}</p>
<div class="badges">{}</div>
{}
{}
</div>
"#,
            anim.attrs("scroll-scale-in"),
            i as f64 * 0.2,
            html_escape(&asset_url(base, &project.image)),
            html_escape(&project.title),
            html_escape(&project.title),
            html_escape(&project.description),
            badges(&project.technologies),
            external_link(&project.live_link, "live-link", "Live"),
            source
        ));
    }
    out.push_str("</section>");
    out
}

fn testimonials(content: &Content, base: &str, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"testimonials\">\n<h2 {}>Testimonials</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for (i, t) in content.testimonials.iter().enumerate() {
        let secondary = t
            .secondary_company
            .as_deref()
            .map(|c| format!(r#"<p class="company">{}</p>"#, html_escape(c)))
            .unwrap_or_default();
        out.push_str(&format!(
            r#"<div {}>
<img class="avatar" src="{}" alt="{} profile picture" height="64">
<blockquote>&quot;{}&quot;</blockquote>
<h4>{}</h4>
<p class="role">{}</p>
<p class="company">{}</p>
{}
</div>
"#,
            anim.attrs(slide(i)),
            html_escape(&asset_url(base, &t.image)),
            html_escape(&t.name),
            html_escape(&t.quote),
            html_escape(&t.name),
            html_escape(t.role.trim()),
            html_escape(&t.company),
            secondary
        ));
    }
    out.push_str("</section>");
    out
}

fn contact(content: &Content, anim: &mut Animated) -> String {
    let mut out = format!(
        "<section id=\"contact\">\n<h2 {}>Contact</h2>\n",
        anim.attrs("scroll-fade-in")
    );
    for c in &content.contacts {
        out.push_str(&format!(
            "<div {}><h4>{}</h4>{}</div>\n",
            anim.attrs("scroll-scale-in"),
            html_escape(&c.title),
            external_link(&c.href, "contact-link", &c.display_text)
        ));
    }
    out.push_str("</section>");
    out
}

/// Render the portfolio page for the given state.
pub fn render_portfolio(content: &Content, config: &SiteConfig, state: &PageState) -> String {
    let base = config.asset_base.as_str();
    let bindings = &state.bindings;
    let mut anim = Animated::new(bindings);

    let layers = LAYERS
        .iter()
        .map(|(key, class, speed)| parallax_layer(bindings, key, class, *speed))
        .collect::<Vec<_>>()
        .join("\n");

    let body = [
        preview_overlay(state, base),
        progress_bar(bindings),
        layers,
        nav(state, content, base),
        hero(content, base, &mut anim),
        about(content, base, &mut anim),
        experience(content, base, &mut anim),
        education(content, &mut anim),
        certificates(content, base, &mut anim),
        projects(content, base, &mut anim),
        testimonials(content, base, &mut anim),
        contact(content, &mut anim),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .cloned()
    .collect::<Vec<_>>()
    .join("\n");

    document(&config.title, &body)
}
