//! Render module
//!
//! Text renderings served outside the JSON API: the sitemap, robots.txt and
//! the markdown SEO report.

pub mod report;
pub mod site;

pub use report::render_seo_report;
pub use site::{render_robots, render_sitemap};
