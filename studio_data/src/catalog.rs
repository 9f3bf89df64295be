#[derive(Debug, PartialEq, Eq)]
pub struct Category {
	pub id: &'static str,
	pub title: &'static str,
	pub image: &'static str,
	pub variants: &'static [Variant]
}

#[derive(Debug, PartialEq, Eq)]
pub struct Variant {
	// unique across the whole catalog, not just inside its category, so that we can resolve both
	// the variant and its category from just this
	pub id: &'static str,
	pub name: &'static str,
	pub price: &'static str,
	pub duration: &'static str,
	pub description: Option<&'static str>
}

/// The category that gets rendered as its own wide card under the others
pub const PACKAGES_ID: &str = "packages";

pub static CATALOG: &[Category] = &[
	Category {
		id: "makeup",
		title: "Maquiagem",
		image: "https://i.postimg.cc/R04KpKP5/Imagem-do-Whats-App-de-2025-12-16-a(s)-18-15-59-d2a4b765.jpg",
		variants: &[
			Variant {
				id: "makeup-social",
				name: "Maquiagem Social",
				price: "R$ 80",
				duration: "50 a 60 min",
				description: Some("Ideal para convidadas e eventos. Pele corrigida com naturalidade e olhos marcados na medida certa.")
			},
			Variant {
				id: "makeup-party",
				name: "Maquiagem Festa",
				price: "R$ 120",
				duration: "1h15 a 1h30",
				description: Some("Produção completa com alta durabilidade, ideal para ocasiões especiais que pedem um visual mais elaborado.")
			}
		]
	},
	Category {
		id: "brows",
		title: "Sobrancelha",
		image: "https://i.postimg.cc/wjSb1fjp/Imagem-do-Whats-App-de-2025-12-16-a(s)-18-11-09-8414b38b.jpg",
		variants: &[
			Variant {
				id: "brows-design",
				name: "Design de Sobrancelhas",
				price: "R$ 25",
				duration: "15 a 20 min",
				description: Some("Mapeamento facial para encontrar o formato ideal, realçando seu olhar.")
			},
			Variant {
				id: "brows-henna",
				name: "Design com Henna",
				price: "R$ 35",
				duration: "25 a 30 min",
				description: Some("Design completo com aplicação de henna para preenchimento e definição.")
			}
		]
	},
	Category {
		id: "hair",
		title: "Cabelo",
		image: "https://i.postimg.cc/tgqnNyTy/Imagem-do-Whats-App-de-2025-12-16-a(s)-18-09-29-3383f52d.jpg",
		variants: &[
			Variant {
				id: "hair-flatiron",
				name: "Chapinha",
				price: "R$ 50",
				duration: "30 a 40 min",
				description: Some("Alinhamento dos fios com finalização profissional. Cabelo deve estar limpo e seco.")
			},
			Variant {
				id: "hair-babyliss",
				name: "Babyliss",
				price: "R$ 50",
				duration: "35 a 45 min",
				description: Some("Ondas soltas e modernas com fixação. Cabelo deve estar limpo e seco.")
			},
			Variant {
				id: "hair-combo",
				name: "Chapinha + Babyliss",
				price: "R$ 80",
				duration: "50 a 60 min",
				description: Some("Finalização completa para um look sofisticado. Cabelo deve estar limpo e seco.")
			}
		]
	},
	Category {
		id: PACKAGES_ID,
		title: "Pacotes",
		image: "https://i.postimg.cc/pXJBbKrN/Imagem-do-Whats-App-de-2025-12-16-a(s)-23-03-28-2d5e099d.jpg",
		variants: &[
			Variant {
				id: "package-basico",
				name: "Essencial",
				price: "R$ 100",
				duration: "1h05 a 1h15",
				description: Some("Design sem henna + maquiagem social")
			},
			Variant {
				id: "package-glow",
				name: "Glow",
				price: "R$ 110",
				duration: "1h15 a 1h30",
				description: Some("Design com henna + maquiagem social")
			},
			Variant {
				id: "package-power",
				name: "Luxo",
				price: "R$ 150",
				duration: "1h40 a 1h55",
				description: Some("Design com henna + maquiagem festa")
			},
			Variant {
				id: "package-evento",
				name: "Diamante",
				price: "R$ 160",
				duration: "1h50 a 2h15",
				description: Some("Maquiagem festa + chapinha OU babyliss")
			},
			Variant {
				id: "package-completao",
				name: "Premium",
				price: "R$ 200",
				duration: "2h05 a 2h25",
				description: Some("Design com henna + maquiagem festa + chapinha OU babyliss")
			}
		]
	}
];

/// Resolves a variant id into the variant and the category that owns it. `None` just means
/// there's nothing to display yet, it's not an error.
#[must_use]
pub fn find_variant(id: Option<&str>) -> Option<(&'static Category, &'static Variant)> {
	let id = id?;

	CATALOG.iter()
		.find_map(|cat| cat.variants
			.iter()
			.find(|v| v.id == id)
			.map(|v| (cat, v))
		)
}

#[must_use]
pub fn find_category(id: &str) -> Option<&'static Category> {
	CATALOG.iter().find(|cat| cat.id == id)
}

#[must_use]
pub fn category_of_variant(variant_id: &str) -> Option<&'static Category> {
	find_variant(Some(variant_id)).map(|(cat, _)| cat)
}

/// Every category except the packages, in declaration order
pub fn main_categories() -> impl Iterator<Item = &'static Category> {
	CATALOG.iter().filter(|cat| cat.id != PACKAGES_ID)
}

#[must_use]
pub fn package_category() -> Option<&'static Category> {
	find_category(PACKAGES_ID)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn variant_ids_are_globally_unique() {
		let mut seen = HashSet::new();
		for variant in CATALOG.iter().flat_map(|cat| cat.variants) {
			assert!(seen.insert(variant.id), "duplicate variant id {}", variant.id);
		}
	}

	#[test]
	fn finds_variant_and_its_category() {
		let (cat, variant) = find_variant(Some("brows-henna")).unwrap();
		assert_eq!(cat.title, "Sobrancelha");
		assert_eq!(variant.name, "Design com Henna");
		assert_eq!(variant.price, "R$ 35");

		let (cat, variant) = find_variant(Some("package-completao")).unwrap();
		assert_eq!(cat.id, PACKAGES_ID);
		assert_eq!(variant.name, "Premium");
	}

	#[test]
	fn nothing_found_for_missing_or_unknown_ids() {
		assert!(find_variant(None).is_none());
		assert!(find_variant(Some("")).is_none());
		assert!(find_variant(Some("nails-gel")).is_none());
		// category ids aren't variant ids
		assert!(find_variant(Some("brows")).is_none());
	}

	#[test]
	fn packages_are_split_from_main_categories() {
		let main = main_categories().map(|c| c.id).collect::<Vec<_>>();
		assert_eq!(main, ["makeup", "brows", "hair"]);
		assert_eq!(package_category().map(|c| c.title), Some("Pacotes"));
		assert_eq!(category_of_variant("hair-combo").map(|c| c.id), Some("hair"));
		assert!(category_of_variant("hair").is_none());
	}
}
