// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::cards::CardStore;
use super::quiz::QuizState;
use super::view::ViewState;

/// The top-level container the host runs against: card store, tab/highlight
/// view state, and quiz state, owned together and passed explicitly to every
/// operation.
///
/// One `Session` per host session; nothing is shared across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    cards: CardStore,
    view: ViewState,
    quiz: QuizState,
}

impl Session {
    /// A fresh session: the three default subjects, all collections empty,
    /// nothing focused or highlighted, quiz idle.
    pub fn new() -> Self {
        Self {
            cards: CardStore::with_default_subjects(),
            view: ViewState::default(),
            quiz: QuizState::default(),
        }
    }

    pub fn with_cards(cards: CardStore) -> Self {
        Self {
            cards,
            view: ViewState::default(),
            quiz: QuizState::default(),
        }
    }

    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut CardStore {
        &mut self.cards
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizState {
        &mut self.quiz
    }

    /// Replaces the whole card store in one step (snapshot import).
    ///
    /// View and quiz state are deliberately left alone: a now-dangling
    /// highlight or focus self-heals at display time, and the quizzed card
    /// is an owned copy.
    pub fn import_cards(&mut self, cards: CardStore) {
        self.cards = cards;
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::model::cards::{CardStore, DEFAULT_SUBJECTS};
    use crate::model::quiz::QuizPhase;

    #[test]
    fn new_session_has_documented_initial_values() {
        let session = Session::new();
        assert_eq!(session.cards().subjects(), &DEFAULT_SUBJECTS);
        assert_eq!(session.cards().total_cards(), 0);
        assert_eq!(session.view().active_subject(), None);
        assert_eq!(session.view().highlighted(), None);
        assert_eq!(session.quiz().phase(), QuizPhase::Idle);
    }

    #[test]
    fn import_replaces_the_store_but_not_view_state() {
        let mut session = Session::new();
        session.view_mut().jump_to_card("수학", "F=ma");

        let mut incoming = CardStore::new();
        incoming.add_subject("영어");
        session.import_cards(incoming);

        assert_eq!(session.cards().subjects(), &["영어".to_owned()]);
        // The stale highlight stays; it simply matches nothing anymore.
        assert_eq!(session.view().highlighted(), Some("수학 - F=ma"));
    }
}
