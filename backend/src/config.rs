use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "frontend/dist";
pub const DEFAULT_SITE_URL: &str = "https://studiomuller.com.br";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("BIND_ADDR ('{0}') isn't an ip address")]
	BindAddr(String),
	#[error("DIST_DIR ({}) isn't a directory. Run `trunk build` in frontend/ first, or point DIST_DIR at the built site", .0.display())]
	DistDir(PathBuf),
	#[error("SITE_URL ('{0}') isn't a valid absolute url")]
	SiteUrl(String)
}

#[derive(Debug, Clone)]
pub struct Config {
	pub addr: SocketAddr,
	pub dist_dir: PathBuf,
	pub site_url: String
}

impl Config {
	pub fn from_env() -> Result<Self, ConfigError> {
		// `dotenv::var` reads `.env` the first time it's called, so there's nothing to load first
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		// empty is the same as unset, so you can blank out a key in .env
		let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

		// a port that doesn't parse just falls back, same as it always has
		let port = var("BACKEND_PORT")
			.and_then(|p| p.parse::<u16>().ok())
			.unwrap_or(DEFAULT_PORT);

		let ip = match var("BIND_ADDR") {
			Some(addr) => addr.parse::<IpAddr>().map_err(|_| ConfigError::BindAddr(addr))?,
			None => IpAddr::V4(Ipv4Addr::LOCALHOST)
		};

		let dist_dir = PathBuf::from(var("DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.into()));
		if !dist_dir.is_dir() {
			return Err(ConfigError::DistDir(dist_dir));
		}

		let site_url = var("SITE_URL")
			.unwrap_or_else(|| DEFAULT_SITE_URL.into())
			.trim_end_matches('/')
			.to_owned();

		Ok(Self { addr: SocketAddr::new(ip, port), dist_dir, site_url })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map = pairs.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect::<HashMap<_, _>>();
		move |key| map.get(key).cloned()
	}

	fn existing_dir() -> String {
		std::env::temp_dir().display().to_string()
	}

	#[test]
	fn defaults_apply_when_unset() {
		let dir = existing_dir();
		let config = Config::from_lookup(lookup(&[("DIST_DIR", &dir)])).unwrap();

		assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)));
		assert_eq!(config.site_url, DEFAULT_SITE_URL);
	}

	#[test]
	fn reads_port_and_bind_addr() {
		let dir = existing_dir();
		let config = Config::from_lookup(lookup(&[
			("DIST_DIR", &dir),
			("BACKEND_PORT", "3000"),
			("BIND_ADDR", "0.0.0.0")
		])).unwrap();

		assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 3000)));
	}

	#[test]
	fn bad_port_falls_back() {
		let dir = existing_dir();
		let config = Config::from_lookup(lookup(&[("DIST_DIR", &dir), ("BACKEND_PORT", "eighty")])).unwrap();
		assert_eq!(config.addr.port(), DEFAULT_PORT);
	}

	#[test]
	fn bad_bind_addr_is_an_error() {
		let dir = existing_dir();
		let err = Config::from_lookup(lookup(&[("DIST_DIR", &dir), ("BIND_ADDR", "localhost")])).unwrap_err();
		assert!(matches!(err, ConfigError::BindAddr(ref a) if a == "localhost"));
	}

	#[test]
	fn missing_dist_dir_is_an_error() {
		let err = Config::from_lookup(lookup(&[("DIST_DIR", "/definitely/not/here")])).unwrap_err();
		assert!(matches!(err, ConfigError::DistDir(_)));
	}

	#[test]
	fn site_url_loses_trailing_slash() {
		let dir = existing_dir();
		let config = Config::from_lookup(lookup(&[("DIST_DIR", &dir), ("SITE_URL", "https://example.com/")])).unwrap();
		assert_eq!(config.site_url, "https://example.com");
	}
}
