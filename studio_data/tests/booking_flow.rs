use percent_encoding::percent_decode_str;
use studio_data::{
	Selection,
	SelectionAction,
	SelectionPatch,
	HandoffError,
	catalog::find_variant,
	handoff::handoff_link,
	view::{self, ViewSignals}
};

fn decoded_text(url: &str) -> String {
	let (base, text) = url.split_once("?text=").unwrap();
	assert_eq!(base, "https://wa.me/5518997346052");
	percent_decode_str(text).decode_utf8().unwrap().into_owned()
}

fn confirmation_label(selection: &Selection) -> &'static str {
	find_variant(selection.service_id.as_deref())
		.map_or("", |(_, variant)| variant.name)
}

#[test]
fn visitor_books_henna_brows() {
	let mut selection = Selection::default();
	let mut expanded = None;

	// nothing chosen yet, so nothing to confirm
	assert!(!view::confirmation_visible(&selection));
	assert_eq!(handoff_link(&selection), Err(HandoffError::NoSelection));

	// tap the "Sobrancelha" card
	expanded = view::toggle(expanded, "brows");
	assert_eq!(expanded, Some("brows"));

	// then "Design com Henna" inside it
	selection = selection.reduce(SelectionAction::SelectService("brows-henna".into()));
	expanded = view::expanded_for_selection(selection.service_id.as_deref(), expanded);
	assert_eq!(expanded, Some("brows"));

	assert!(view::confirmation_visible(&selection));
	assert_eq!(confirmation_label(&selection), "Design com Henna");

	// scrolled down to the booking panel, menu closed, footer not in view yet
	let signals = ViewSignals { scrolled: view::is_scrolled(900.), ..ViewSignals::default() };
	assert!(view::show_floating_cta(&selection, signals));

	let link = handoff_link(&selection).unwrap();
	assert_eq!(
		decoded_text(link.as_str()),
		"Olá! Gostaria de verificar disponibilidade para agendar no Studio Müller. ✨\n\
		\n\
		*Serviço:* Sobrancelha - Design com Henna\n\
		\n\
		Gostaria de combinar o melhor dia e horário!"
	);
}

#[test]
fn notes_make_it_into_the_message() {
	let selection = Selection::default()
		.reduce(SelectionAction::SelectService("brows-henna".into()))
		.reduce(SelectionAction::Update(SelectionPatch::notes("sensitive skin")));

	let link = handoff_link(&selection).unwrap();
	assert!(decoded_text(link.as_str()).contains("*Observações:* sensitive skin\n\nGostaria"));
}

#[test]
fn switching_services_drops_notes_before_composing() {
	let selection = Selection::default()
		.reduce(SelectionAction::SelectService("brows-henna".into()))
		.reduce(SelectionAction::Update(SelectionPatch::notes("alergia a henna")));
	assert_eq!(selection.notes, "alergia a henna");

	// tapping the same one again is harmless
	let selection = selection.reduce(SelectionAction::SelectService("brows-henna".into()));
	assert_eq!(selection.notes, "alergia a henna");

	let selection = selection.reduce(SelectionAction::SelectService("makeup-social".into()));
	assert!(selection.notes.is_empty());

	let text = decoded_text(handoff_link(&selection).unwrap().as_str());
	assert!(text.contains("*Serviço:* Maquiagem - Maquiagem Social\n"));
	assert!(!text.contains("Observações"));
}

#[test]
fn stale_selection_degrades_to_nothing() {
	let selection = Selection::default().select_service("brows-old-henna");

	// the panel is still there (something is selected), it just has nothing to name
	assert!(view::confirmation_visible(&selection));
	assert_eq!(confirmation_label(&selection), "");
	assert_eq!(
		handoff_link(&selection),
		Err(HandoffError::UnknownService("brows-old-henna".into()))
	);
}
