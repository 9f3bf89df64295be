use chrono::NaiveDate;

/// What the visitor is currently putting together. There's only ever one of these, owned by the
/// top of the page, and it only ever changes through [`Selection::reduce`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	pub service_id: Option<String>,
	// these two aren't set by anything right now (the day and time get sorted out over whatsapp)
	// but they're still cleared when switching services so they can't outlive the service they
	// were picked for
	pub date: Option<NaiveDate>,
	pub time_slot_id: Option<String>,
	pub notes: String
}

/// A partial [`Selection`]. Fields left as `None` are left alone when applied; the nullable
/// fields are doubly wrapped so that a patch can also clear them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionPatch {
	pub service_id: Option<Option<String>>,
	pub date: Option<Option<NaiveDate>>,
	pub time_slot_id: Option<Option<String>>,
	pub notes: Option<String>
}

impl SelectionPatch {
	#[must_use]
	pub fn notes(notes: impl Into<String>) -> Self {
		Self { notes: Some(notes.into()), ..Self::default() }
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionAction {
	Update(SelectionPatch),
	SelectService(String)
}

impl Selection {
	/// Overwrites exactly the fields present in `patch`. Nothing is validated.
	#[must_use]
	pub fn apply(&self, patch: SelectionPatch) -> Self {
		let SelectionPatch { service_id, date, time_slot_id, notes } = patch;

		Self {
			service_id: service_id.unwrap_or_else(|| self.service_id.clone()),
			date: date.unwrap_or(self.date),
			time_slot_id: time_slot_id.unwrap_or_else(|| self.time_slot_id.clone()),
			notes: notes.unwrap_or_else(|| self.notes.clone())
		}
	}

	/// Switching to a different service throws away everything that was picked for the old one;
	/// tapping the same service again keeps it all.
	#[must_use]
	pub fn select_service(&self, id: impl Into<String>) -> Self {
		let id = id.into();

		if self.service_id.as_deref() == Some(id.as_str()) {
			Self { service_id: Some(id), ..self.clone() }
		} else {
			Self {
				service_id: Some(id),
				date: None,
				time_slot_id: None,
				notes: String::new()
			}
		}
	}

	#[must_use]
	pub fn reduce(&self, action: SelectionAction) -> Self {
		match action {
			SelectionAction::Update(patch) => self.apply(patch),
			SelectionAction::SelectService(id) => self.select_service(id)
		}
	}

	#[must_use]
	pub fn has_service(&self) -> bool {
		self.service_id.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> Selection {
		Selection {
			service_id: Some("brows-henna".into()),
			date: NaiveDate::from_ymd_opt(2025, 12, 20),
			time_slot_id: Some("10:00".into()),
			notes: "sensitive skin".into()
		}
	}

	#[test]
	fn starts_empty() {
		let sel = Selection::default();
		assert!(sel.service_id.is_none());
		assert!(sel.date.is_none());
		assert!(sel.time_slot_id.is_none());
		assert!(sel.notes.is_empty());
		assert!(!sel.has_service());
	}

	#[test]
	fn empty_patch_changes_nothing() {
		let sel = filled();
		assert_eq!(sel.apply(SelectionPatch::default()), sel);
	}

	#[test]
	fn patch_overwrites_only_given_fields() {
		let sel = filled();

		let notes_only = sel.apply(SelectionPatch::notes("manhã, por favor"));
		assert_eq!(notes_only, Selection { notes: "manhã, por favor".into(), ..filled() });

		let cleared = sel.apply(SelectionPatch {
			date: Some(None),
			time_slot_id: Some(Some("14:30".into())),
			..SelectionPatch::default()
		});
		assert_eq!(cleared, Selection {
			date: None,
			time_slot_id: Some("14:30".into()),
			..filled()
		});
	}

	#[test]
	fn patching_the_service_is_a_plain_merge() {
		// only select_service resets the dependent fields
		let sel = filled().apply(SelectionPatch {
			service_id: Some(Some("makeup-social".into())),
			..SelectionPatch::default()
		});
		assert_eq!(sel.service_id.as_deref(), Some("makeup-social"));
		assert_eq!(sel.notes, "sensitive skin");
	}

	#[test]
	fn reselecting_same_service_keeps_notes() {
		let once = filled().select_service("brows-henna");
		let twice = once.select_service("brows-henna");
		assert_eq!(once, filled());
		assert_eq!(twice, filled());
	}

	#[test]
	fn switching_service_resets_dependent_fields() {
		let sel = filled().select_service("makeup-social");
		assert_eq!(sel, Selection {
			service_id: Some("makeup-social".into()),
			..Selection::default()
		});
	}

	#[test]
	fn unknown_ids_are_stored_as_is() {
		let sel = Selection::default().select_service("not-a-service");
		assert_eq!(sel.service_id.as_deref(), Some("not-a-service"));
	}

	#[test]
	fn reduce_routes_both_actions() {
		let sel = Selection::default()
			.reduce(SelectionAction::SelectService("hair-combo".into()))
			.reduce(SelectionAction::Update(SelectionPatch::notes("cabelo longo")));

		assert_eq!(sel.service_id.as_deref(), Some("hair-combo"));
		assert_eq!(sel.notes, "cabelo longo");

		let sel = sel.reduce(SelectionAction::SelectService("hair-flatiron".into()));
		assert!(sel.notes.is_empty());
	}
}
