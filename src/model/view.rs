// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cards::CardStore;

/// The key that identifies the highlighted card.
///
/// Two cards sharing a front within one subject share a key; the first by
/// position wins at jump time. That ambiguity is a documented limitation of
/// the key format, not something this module tries to repair.
pub fn highlight_key(subject: &str, front: &str) -> String {
    format!("{subject} - {front}")
}

/// Which subject tab is focused and which card is visually emphasized.
///
/// Neither field is validated against the live store: a highlight key whose
/// card was deleted simply matches nothing, and a focused subject that was
/// removed falls back to "show all" at display time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    highlighted: Option<String>,
    active_subject: Option<String>,
}

impl ViewState {
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn active_subject(&self) -> Option<&str> {
        self.active_subject.as_deref()
    }

    /// A search-jump: emphasize the card and focus its subject tab.
    pub fn jump_to_card(&mut self, subject: &str, front: &str) {
        self.highlighted = Some(highlight_key(subject, front));
        self.active_subject = Some(subject.to_owned());
    }

    pub fn focus_subject(&mut self, subject: &str) {
        self.active_subject = Some(subject.to_owned());
    }

    /// Shows every subject tab again and clears the highlight.
    pub fn show_all_tabs(&mut self) {
        self.active_subject = None;
        self.highlighted = None;
    }

    /// Accepts a highlight key handed over by the host (e.g. a shared
    /// location reference), equivalent to the highlight half of a jump.
    pub fn restore_highlight(&mut self, key: impl Into<String>) {
        self.highlighted = Some(key.into());
    }

    pub fn is_highlighted(&self, subject: &str, front: &str) -> bool {
        match self.highlighted.as_deref() {
            Some(key) => key == highlight_key(subject, front),
            None => false,
        }
    }

    /// The subject tabs the host should draw: the focused subject alone while
    /// it still exists, otherwise the full list.
    pub fn subjects_to_display<'a>(&'a self, cards: &'a CardStore) -> Vec<&'a str> {
        if let Some(active) = self.active_subject.as_deref() {
            if cards.contains_subject(active) {
                return vec![active];
            }
        }
        cards.subjects().iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{highlight_key, ViewState};
    use crate::model::cards::CardStore;

    #[test]
    fn jump_sets_highlight_and_focus() {
        let mut view = ViewState::default();
        view.jump_to_card("수학", "F=ma");

        assert_eq!(view.highlighted(), Some("수학 - F=ma"));
        assert_eq!(view.active_subject(), Some("수학"));
        assert!(view.is_highlighted("수학", "F=ma"));
        assert!(!view.is_highlighted("물리", "F=ma"));
    }

    #[test]
    fn show_all_tabs_clears_both() {
        let mut view = ViewState::default();
        view.jump_to_card("수학", "F=ma");
        view.show_all_tabs();

        assert_eq!(view.highlighted(), None);
        assert_eq!(view.active_subject(), None);
    }

    #[test]
    fn restore_highlight_does_not_touch_focus() {
        let mut view = ViewState::default();
        view.restore_highlight(highlight_key("수학", "F=ma"));

        assert!(view.is_highlighted("수학", "F=ma"));
        assert_eq!(view.active_subject(), None);
    }

    #[test]
    fn display_list_narrows_to_live_active_subject() {
        let store = CardStore::with_default_subjects();
        let mut view = ViewState::default();

        assert_eq!(view.subjects_to_display(&store), vec!["수학", "화학", "물리"]);

        view.focus_subject("화학");
        assert_eq!(view.subjects_to_display(&store), vec!["화학"]);
    }

    #[test]
    fn dangling_active_subject_falls_back_to_show_all() {
        let mut store = CardStore::with_default_subjects();
        let mut view = ViewState::default();
        view.focus_subject("화학");

        store.remove_subject("화학");
        assert_eq!(view.subjects_to_display(&store), vec!["수학", "물리"]);
    }

    #[test]
    fn stale_highlight_matches_nothing() {
        let mut view = ViewState::default();
        view.jump_to_card("수학", "F=ma");

        // The card may since have been deleted; the key is simply inert.
        assert!(!view.is_highlighted("수학", "E=mc^2"));
        assert!(view.is_highlighted("수학", "F=ma"));
    }
}
