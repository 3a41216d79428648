// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::card::Card;
use super::scope::SubjectScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Showing,
    Revealed,
}

/// The quiz drill: which pool is being drawn from, the card on display, and
/// whether its answer is uncovered.
///
/// The current card is an owned copy; deleting the card from the store does
/// not disturb a quiz in progress. There is no explicit "end quiz" — the
/// state remains until the next draw overwrites it or the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    scope: SubjectScope,
    current: Option<Card>,
    revealed: bool,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            scope: SubjectScope::All,
            current: None,
            revealed: false,
        }
    }
}

impl QuizState {
    pub fn scope(&self) -> &SubjectScope {
        &self.scope
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    pub fn answer_revealed(&self) -> bool {
        self.revealed
    }

    pub fn phase(&self) -> QuizPhase {
        match (&self.current, self.revealed) {
            (None, _) => QuizPhase::Idle,
            (Some(_), false) => QuizPhase::Showing,
            (Some(_), true) => QuizPhase::Revealed,
        }
    }

    /// Installs a freshly drawn card and covers the answer again.
    pub fn set_drawn(&mut self, card: Card, scope: SubjectScope) {
        self.scope = scope;
        self.current = Some(card);
        self.revealed = false;
    }

    /// Uncovers the answer. Returns whether the phase changed; revealing an
    /// already-revealed card (or nothing at all) is a harmless no-op.
    pub fn reveal(&mut self) -> bool {
        if self.current.is_some() && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }
}
