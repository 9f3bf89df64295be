use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use crate::{
	catalog::{Category, Variant, find_variant},
	selection::Selection,
	studio::{VENUE, WHATSAPP_BASE_URL, WHATSAPP_RECIPIENT}
};

// the same set of characters that `encodeURIComponent` leaves alone, since that's what whatsapp
// links are usually built with
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

pub const INQUIRY_MESSAGE: &str = "Olá! Tenho uma dúvida sobre os serviços do Studio Müller.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HandoffError {
	#[error("no service has been selected yet")]
	NoSelection,
	#[error("selected service `{0}` isn't in the catalog")]
	UnknownService(String)
}

/// A ready-to-open link into the studio's whatsapp chat, with the message it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffLink {
	url: String,
	message: String
}

impl HandoffLink {
	fn new(message: String) -> Self {
		let encoded = utf8_percent_encode(&message, URI_COMPONENT);
		let url = format!("{WHATSAPP_BASE_URL}/{WHATSAPP_RECIPIENT}?text={encoded}");
		Self { url, message }
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.url
	}

	#[must_use]
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl fmt::Display for HandoffLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.url)
	}
}

#[must_use]
pub fn compose_message(category: &Category, variant: &Variant, notes: &str) -> String {
	let mut message = format!(
		"Olá! Gostaria de verificar disponibilidade para agendar no {VENUE}. ✨\n\n\
		*Serviço:* {} - {}\n",
		category.title,
		variant.name
	);

	if notes.is_empty() {
		message.push('\n');
	} else {
		message.push_str("*Observações:* ");
		message.push_str(notes);
		message.push_str("\n\n");
	}

	message.push_str("Gostaria de combinar o melhor dia e horário!");
	message
}

/// Builds the link that finishes a booking over whatsapp. Opening it is up to the caller.
pub fn handoff_link(selection: &Selection) -> Result<HandoffLink, HandoffError> {
	let id = selection.service_id
		.as_deref()
		.ok_or(HandoffError::NoSelection)?;

	let (category, variant) = find_variant(Some(id))
		.ok_or_else(|| HandoffError::UnknownService(id.to_string()))?;

	Ok(HandoffLink::new(compose_message(category, variant, &selection.notes)))
}

/// The footer's "ask a question" link, which isn't tied to any selection
#[must_use]
pub fn inquiry_link() -> HandoffLink {
	HandoffLink::new(INQUIRY_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use percent_encoding::percent_decode_str;

	fn with_service(id: &str, notes: &str) -> Selection {
		Selection {
			service_id: Some(id.into()),
			notes: notes.into(),
			..Selection::default()
		}
	}

	fn decoded_text(link: &HandoffLink) -> String {
		let (_, text) = link.as_str()
			.split_once("?text=")
			.unwrap();
		percent_decode_str(text).decode_utf8().unwrap().into_owned()
	}

	#[test]
	fn message_without_notes_has_single_blank_line() {
		let link = handoff_link(&with_service("brows-henna", "")).unwrap();
		assert_eq!(
			link.message(),
			"Olá! Gostaria de verificar disponibilidade para agendar no Studio Müller. ✨\n\n\
			*Serviço:* Sobrancelha - Design com Henna\n\n\
			Gostaria de combinar o melhor dia e horário!"
		);
		assert!(link.message().contains("Design com Henna"));
		assert!(!link.message().contains("Observações"));
	}

	#[test]
	fn message_with_notes_gets_observations_line() {
		let link = handoff_link(&with_service("brows-henna", "sensitive skin")).unwrap();
		assert_eq!(
			link.message(),
			"Olá! Gostaria de verificar disponibilidade para agendar no Studio Müller. ✨\n\n\
			*Serviço:* Sobrancelha - Design com Henna\n\
			*Observações:* sensitive skin\n\n\
			Gostaria de combinar o melhor dia e horário!"
		);
	}

	#[test]
	fn link_targets_recipient_and_round_trips_text() {
		let link = handoff_link(&with_service("makeup-party", "levo 1 acompanhante & 2 filhos?")).unwrap();
		assert!(link.as_str().starts_with("https://wa.me/5518997346052?text="));
		assert_eq!(decoded_text(&link), link.message());
		assert_eq!(link.to_string(), link.as_str());
	}

	#[test]
	fn encodes_like_encode_uri_component() {
		let link = inquiry_link();
		let (_, text) = link.as_str().split_once("?text=").unwrap();
		assert_eq!(
			text,
			"Ol%C3%A1!%20Tenho%20uma%20d%C3%BAvida%20sobre%20os%20servi%C3%A7os%20do%20Studio%20M%C3%BCller."
		);
	}

	#[test]
	fn reserved_characters_are_escaped() {
		let link = handoff_link(&with_service("hair-combo", "a+b=c&d?e#f/g")).unwrap();
		let (_, text) = link.as_str().split_once("?text=").unwrap();
		assert!(text.contains("a%2Bb%3Dc%26d%3Fe%23f%2Fg"));
		assert!(!text.contains(' '));
		assert!(!text.contains('\n'));
	}

	#[test]
	fn no_selection_builds_nothing() {
		assert_eq!(handoff_link(&Selection::default()), Err(HandoffError::NoSelection));
	}

	#[test]
	fn unknown_service_is_reported() {
		assert_eq!(
			handoff_link(&with_service("nails-gel", "")),
			Err(HandoffError::UnknownService("nails-gel".into()))
		);
	}
}
