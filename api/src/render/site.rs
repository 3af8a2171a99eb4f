//! Sitemap and robots.txt rendering

use chrono::SecondsFormat;

use crate::domain::entities::PostLocation;

const CHANGE_FREQUENCY: &str = "weekly";
const PRIORITY: &str = "0.8";

/// Public URL of a post
pub fn post_url(site_url: &str, slug: &str) -> String {
    format!(
        "{}/blogs/{}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(slug)
    )
}

/// Render an XML sitemap of published posts
pub fn render_sitemap(site_url: &str, locations: &[PostLocation]) -> String {
    let mut buf = String::new();

    buf.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    buf.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for location in locations {
        buf.push_str("  <url>\n");
        buf.push_str(&format!(
            "    <loc>{}</loc>\n",
            escape_xml(&post_url(site_url, &location.slug))
        ));
        buf.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            location
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        buf.push_str(&format!("    <changefreq>{}</changefreq>\n", CHANGE_FREQUENCY));
        buf.push_str(&format!("    <priority>{}</priority>\n", PRIORITY));
        buf.push_str("  </url>\n");
    }
    buf.push_str("</urlset>\n");

    buf
}

/// Render robots.txt: everything but the admin area is crawlable
pub fn render_robots(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
