//! Everything the page shows or hides that can be worked out from state it already has. None of
//! this is ever stored; it's recomputed on each render so it can't drift from its inputs.

use crate::{catalog::category_of_variant, selection::Selection};

/// How far down (in css px) the page has to be scrolled before the header and the floating
/// button are allowed to show up
pub const SCROLL_THRESHOLD_PX: f64 = 50.;

/// Lets the booking panel start expanding before we scroll to it
pub const SELECTION_SCROLL_DELAY_MS: u32 = 300;
/// Same thing for the variant list under a freshly opened category
pub const CATEGORY_SCROLL_DELAY_MS: u32 = 250;
/// Gives the menu overlay a moment to start closing before jumping to a section
pub const NAV_SCROLL_DELAY_MS: u32 = 100;

/// Fraction of the contact section that has to be on screen for it to count as visible
pub const CONTACT_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Independent booleans, each fed by its own observer on the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewSignals {
	pub scrolled: bool,
	pub menu_open: bool,
	pub contact_visible: bool
}

#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_THRESHOLD_PX
}

/// Accordion behaviour: tapping the open item closes it, tapping anything else opens that one
/// instead. At most one item is ever open.
#[must_use]
pub fn toggle<T: PartialEq>(open: Option<T>, clicked: T) -> Option<T> {
	match open {
		Some(current) if current == clicked => None,
		_ => Some(clicked)
	}
}

/// When a selection exists, its category is the one that should be open. Otherwise whatever the
/// visitor last toggled stays as-is.
#[must_use]
pub fn expanded_for_selection(
	service_id: Option<&str>,
	current: Option<&'static str>
) -> Option<&'static str> {
	service_id
		.and_then(category_of_variant)
		.map(|cat| cat.id)
		.or(current)
}

#[must_use]
pub fn confirmation_visible(selection: &Selection) -> bool {
	selection.has_service()
}

#[must_use]
pub fn show_floating_cta(selection: &Selection, signals: ViewSignals) -> bool {
	selection.has_service()
		&& signals.scrolled
		&& !signals.menu_open
		&& !signals.contact_visible
}

// the header has to stay up while the menu is open, since it holds the close button
#[must_use]
pub fn show_header(signals: ViewSignals) -> bool {
	signals.scrolled || signals.menu_open
}

/// The places the menu can jump to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
	Home,
	About,
	Faq,
	Contact
}

impl Anchor {
	pub const MENU: [Self; 4] = [Self::Home, Self::About, Self::Faq, Self::Contact];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Home => "Início",
			Self::About => "Sobre Mim",
			Self::Faq => "Informações",
			Self::Contact => "Contato"
		}
	}

	#[must_use]
	pub fn element_id(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::About => "about",
			Self::Faq => "faq",
			Self::Contact => "contact"
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn selected() -> Selection {
		Selection::default().select_service("makeup-social")
	}

	#[test]
	fn toggle_opens_switches_and_closes() {
		assert_eq!(toggle(None, "brows"), Some("brows"));
		assert_eq!(toggle(Some("brows"), "brows"), None);
		assert_eq!(toggle(Some("brows"), "hair"), Some("hair"));
		assert_eq!(toggle(Some(0_usize), 2), Some(2));
		assert_eq!(toggle(Some(2_usize), 2), None);
	}

	#[test]
	fn selection_opens_its_category() {
		assert_eq!(expanded_for_selection(Some("brows-henna"), None), Some("brows"));
		assert_eq!(expanded_for_selection(Some("brows-henna"), Some("hair")), Some("brows"));
		assert_eq!(expanded_for_selection(None, Some("hair")), Some("hair"));
		assert_eq!(expanded_for_selection(None, None), None);
		// unresolvable selections don't force anything open
		assert_eq!(expanded_for_selection(Some("nope"), Some("makeup")), Some("makeup"));
	}

	#[test]
	fn confirmation_follows_selection() {
		assert!(!confirmation_visible(&Selection::default()));
		assert!(confirmation_visible(&selected()));
	}

	#[test]
	fn floating_cta_needs_every_signal() {
		let ready = ViewSignals { scrolled: true, menu_open: false, contact_visible: false };
		assert!(show_floating_cta(&selected(), ready));

		assert!(!show_floating_cta(&Selection::default(), ready));
		assert!(!show_floating_cta(&selected(), ViewSignals { scrolled: false, ..ready }));
		assert!(!show_floating_cta(&selected(), ViewSignals { menu_open: true, ..ready }));
		assert!(!show_floating_cta(&selected(), ViewSignals { contact_visible: true, ..ready }));
		assert!(!show_floating_cta(&selected(), ViewSignals::default()));
	}

	#[test]
	fn header_shows_when_scrolled_or_menu_open() {
		assert!(!show_header(ViewSignals::default()));
		assert!(show_header(ViewSignals { scrolled: true, ..ViewSignals::default() }));
		assert!(show_header(ViewSignals { menu_open: true, ..ViewSignals::default() }));
		// contact visibility has nothing to do with the header
		assert!(!show_header(ViewSignals { contact_visible: true, ..ViewSignals::default() }));
	}

	#[test]
	fn scroll_threshold_is_exclusive() {
		assert!(!is_scrolled(0.));
		assert!(!is_scrolled(50.));
		assert!(is_scrolled(50.5));
		assert!(is_scrolled(1200.));
	}

	#[test]
	fn anchors_have_distinct_ids() {
		let ids = Anchor::MENU.map(Anchor::element_id);
		assert_eq!(ids, ["home", "about", "faq", "contact"]);
		assert_eq!(Anchor::Faq.label(), "Informações");
	}
}
