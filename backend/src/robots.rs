use sitewriter::{ChangeFreq, UrlEntry};

use crate::config::ConfigError;

/// Both of these are fixed for as long as the server runs (the site is one page that only changes
/// on redeploy), so they're rendered once at startup and then just cloned out.
#[derive(Debug, Clone)]
pub struct CrawlerFiles {
	pub robots_txt: String,
	pub sitemap_xml: String
}

impl CrawlerFiles {
	pub fn new(site_url: &str) -> Result<Self, ConfigError> {
		Ok(Self {
			robots_txt: robots_txt(site_url),
			sitemap_xml: sitemap_xml(site_url)?
		})
	}
}

pub fn robots_txt(site_url: &str) -> String {
	format!("User-agent: *\nAllow: /\n\nSitemap: {site_url}/sitemap.xml\n")
}

pub fn sitemap_xml(site_url: &str) -> Result<String, ConfigError> {
	// everything lives on the one page; anchors don't belong in a sitemap
	let home = UrlEntry {
		loc: format!("{site_url}/").parse()
			.ok()
			.ok_or_else(|| ConfigError::SiteUrl(site_url.to_owned()))?,
		lastmod: None,
		changefreq: Some(ChangeFreq::Monthly),
		priority: Some(1.0)
	};

	Ok(sitewriter::generate_str(&[home]))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn robots_points_at_sitemap() {
		let txt = robots_txt("https://example.com");
		assert!(txt.starts_with("User-agent: *\nAllow: /\n"));
		assert!(txt.contains("Sitemap: https://example.com/sitemap.xml"));
	}

	#[test]
	fn sitemap_lists_the_home_page() {
		let xml = sitemap_xml("https://example.com").unwrap();
		assert!(xml.contains("<loc>https://example.com/</loc>"));
		assert!(xml.contains("monthly"));
	}

	#[test]
	fn relative_site_url_is_rejected() {
		assert!(matches!(sitemap_xml("studiomuller"), Err(ConfigError::SiteUrl(_))));
	}
}
