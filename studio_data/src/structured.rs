//! schema.org description of the studio and what it offers, embedded in the page as JSON-LD so
//! search engines can pick up the services and prices.

use serde::Serialize;

use crate::{catalog::CATALOG, studio};

#[derive(Serialize)]
struct BeautySalon {
	#[serde(rename = "@context")]
	context: &'static str,
	#[serde(rename = "@type")]
	kind: &'static str,
	name: &'static str,
	image: &'static str,
	telephone: String,
	address: PostalAddress,
	#[serde(rename = "sameAs")]
	same_as: [&'static str; 1],
	#[serde(rename = "hasOfferCatalog")]
	offer_catalog: OfferCatalog
}

#[derive(Serialize)]
struct PostalAddress {
	#[serde(rename = "@type")]
	kind: &'static str,
	#[serde(rename = "addressLocality")]
	locality: &'static str,
	#[serde(rename = "addressRegion")]
	region: &'static str,
	#[serde(rename = "addressCountry")]
	country: &'static str
}

#[derive(Serialize)]
struct OfferCatalog {
	#[serde(rename = "@type")]
	kind: &'static str,
	name: &'static str,
	#[serde(rename = "itemListElement")]
	items: Vec<ListItem>
}

#[derive(Serialize)]
#[serde(untagged)]
enum ListItem {
	Category(OfferCatalog),
	Service(Offer)
}

#[derive(Serialize)]
struct Offer {
	#[serde(rename = "@type")]
	kind: &'static str,
	name: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	description: Option<&'static str>,
	price: String,
	#[serde(rename = "priceCurrency")]
	currency: &'static str
}

// "R$ 120" -> "120", "R$ 35,50" -> "35.50"
fn numeric_price(display: &str) -> String {
	display.chars()
		.filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
		.collect::<String>()
		.replace(',', ".")
}

/// The JSON-LD document for the whole studio, ready to go inside a
/// `<script type="application/ld+json">`
pub fn studio_json_ld() -> Result<String, serde_json::Error> {
	let categories = CATALOG.iter()
		.map(|cat| OfferCatalog {
			kind: "OfferCatalog",
			name: cat.title,
			items: cat.variants
				.iter()
				.map(|v| ListItem::Service(Offer {
					kind: "Offer",
					name: v.name,
					description: v.description,
					price: numeric_price(v.price),
					currency: "BRL"
				}))
				.collect()
		})
		.map(ListItem::Category)
		.collect();

	serde_json::to_string(&BeautySalon {
		context: "https://schema.org",
		kind: "BeautySalon",
		name: studio::VENUE,
		image: studio::HERO_IMAGE,
		telephone: format!("+{}", studio::WHATSAPP_RECIPIENT),
		address: PostalAddress {
			kind: "PostalAddress",
			locality: studio::CITY,
			region: studio::REGION,
			country: "BR"
		},
		same_as: [studio::INSTAGRAM_URL],
		offer_catalog: OfferCatalog {
			kind: "OfferCatalog",
			name: "Serviços",
			items: categories
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::Value;

	#[test]
	fn prices_lose_their_currency_sign() {
		assert_eq!(numeric_price("R$ 120"), "120");
		assert_eq!(numeric_price("R$ 35,50"), "35.50");
	}

	#[test]
	fn every_variant_becomes_an_offer() {
		let doc: Value = serde_json::from_str(&studio_json_ld().unwrap()).unwrap();
		assert_eq!(doc["@type"], "BeautySalon");
		assert_eq!(doc["name"], "Studio Müller");

		let categories = doc["hasOfferCatalog"]["itemListElement"].as_array().unwrap();
		assert_eq!(categories.len(), CATALOG.len());

		let brows = &categories[1];
		assert_eq!(brows["name"], "Sobrancelha");
		assert_eq!(brows["itemListElement"][1]["name"], "Design com Henna");
		assert_eq!(brows["itemListElement"][1]["price"], "35");
		assert_eq!(brows["itemListElement"][1]["priceCurrency"], "BRL");
	}
}
