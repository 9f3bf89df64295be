use std::sync::Arc;

use axum::{
	extract::State,
	http::header,
	response::IntoResponse,
	routing::get,
	Router
};
use config::{Config, ConfigError};
use robots::CrawlerFiles;
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod robots;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backend=info,tower_http=info")))
		.with(tracing_subscriber::fmt::layer().compact())
		.init();

	let config = Config::from_env()?;
	info!(dist_dir = %config.dist_dir.display(), site_url = %config.site_url, "Read config");

	let app = site_router(&config)?;
	let listener = tokio::net::TcpListener::bind(config.addr).await?;

	info!("Serving on http://{}", config.addr);
	axum::serve(listener, app).await?;

	Ok(())
}

/// Everything the site needs: the two crawler files, and the built frontend for every other path.
/// Paths that aren't files get `index.html`, since there's only the one page.
fn site_router(config: &Config) -> Result<Router, ConfigError> {
	let crawler = Arc::new(CrawlerFiles::new(&config.site_url)?);

	let site = ServeDir::new(&config.dist_dir)
		.fallback(ServeFile::new(config.dist_dir.join("index.html")));

	Ok(Router::new()
		.route("/robots.txt", get(get_robots_txt))
		.route("/sitemap.xml", get(get_sitemap_xml))
		.with_state(crawler)
		.fallback_service(site)
		.layer(TraceLayer::new_for_http()))
}

async fn get_robots_txt(State(files): State<Arc<CrawlerFiles>>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], files.robots_txt.clone())
}

async fn get_sitemap_xml(State(files): State<Arc<CrawlerFiles>>) -> impl IntoResponse {
	([(header::CONTENT_TYPE, "application/xml")], files.sitemap_xml.clone())
}
