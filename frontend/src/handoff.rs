use gloo_console::log;
use studio_data::{Selection, handoff_link};

/// Sends the visitor off to whatsapp with their booking filled in. Nothing comes back from this;
/// whether the message actually gets sent is between them and whatsapp.
pub fn open_handoff(selection: &Selection) {
	match handoff_link(selection) {
		Ok(link) => open_in_new_tab(link.as_str()),
		// the button that calls this is only shown with a selection, so the only way to get here
		// is a selection that isn't in the catalog anymore. Nothing useful to tell the visitor.
		Err(e) => log!(format!("Not opening whatsapp: {e}"))
	}
}

pub fn open_in_new_tab(url: &str) {
	let Some(window) = web_sys::window() else {
		log!("No window to open a link from");
		return;
	};

	match window.open_with_url_and_target(url, "_blank") {
		Ok(Some(_)) => (),
		Ok(None) => log!("Opening a new tab was blocked for ", url),
		Err(e) => log!("Couldn't open link: ", e)
	}
}
