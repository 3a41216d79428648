// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::card::Card;

/// Subjects seeded into a fresh session.
pub const DEFAULT_SUBJECTS: [&str; 3] = ["수학", "화학", "물리"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardStoreError {
    EmptyFront,
    EmptyBack,
    UnknownSubject {
        name: String,
    },
    CardIndexOutOfBounds {
        subject: String,
        index: usize,
        len: usize,
    },
}

impl fmt::Display for CardStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFront => f.write_str("card front must not be empty"),
            Self::EmptyBack => f.write_str("card back must not be empty"),
            Self::UnknownSubject { name } => write!(f, "unknown subject '{name}'"),
            Self::CardIndexOutOfBounds { subject, index, len } => {
                write!(f, "card index {index} out of bounds for subject '{subject}' (len={len})")
            }
        }
    }
}

impl std::error::Error for CardStoreError {}

/// The in-memory card collection: an insertion-ordered subject list plus one
/// ordered card sequence per subject.
///
/// Invariant: the subject list and the keys of the card mapping never
/// diverge. Every mutator maintains both sides together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    subjects: Vec<String>,
    cards: BTreeMap<String, Vec<Card>>,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_subjects() -> Self {
        let mut store = Self::new();
        for subject in DEFAULT_SUBJECTS {
            store.add_subject(subject);
        }
        store
    }

    /// Rebuilds a store from pre-normalized parts.
    ///
    /// The caller must already have matched `subjects` and `cards` keys
    /// one-to-one (snapshot restore does this normalization).
    pub(crate) fn from_parts(subjects: Vec<String>, cards: BTreeMap<String, Vec<Card>>) -> Self {
        debug_assert_eq!(subjects.len(), cards.len());
        debug_assert!(subjects.iter().all(|subject| cards.contains_key(subject)));
        Self { subjects, cards }
    }

    /// Subject names in display order.
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn contains_subject(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Appends a new subject with an empty card sequence.
    ///
    /// Returns false without mutating when the name is empty or already
    /// present; a duplicate add is a defined no-op, not an error.
    pub fn add_subject(&mut self, name: &str) -> bool {
        if name.is_empty() || self.cards.contains_key(name) {
            return false;
        }
        self.subjects.push(name.to_owned());
        self.cards.insert(name.to_owned(), Vec::new());
        true
    }

    /// Removes a subject and discards its card sequence entirely.
    ///
    /// Returns false (no-op) when the name is absent.
    pub fn remove_subject(&mut self, name: &str) -> bool {
        if self.cards.remove(name).is_none() {
            return false;
        }
        self.subjects.retain(|subject| subject != name);
        true
    }

    /// Appends a card to a subject's sequence.
    ///
    /// Fails without mutation when front or back is empty or the subject is
    /// unknown.
    pub fn add_card(&mut self, subject: &str, card: Card) -> Result<(), CardStoreError> {
        if card.front().is_empty() {
            return Err(CardStoreError::EmptyFront);
        }
        if card.back().is_empty() {
            return Err(CardStoreError::EmptyBack);
        }
        let Some(sequence) = self.cards.get_mut(subject) else {
            return Err(CardStoreError::UnknownSubject { name: subject.to_owned() });
        };
        sequence.push(card);
        Ok(())
    }

    /// Removes and returns the card at `index` within a subject's sequence.
    ///
    /// Cards after `index` shift down by one position; index references held
    /// elsewhere mean "card at this index now", not an identity.
    pub fn delete_card(&mut self, subject: &str, index: usize) -> Result<Card, CardStoreError> {
        let Some(sequence) = self.cards.get_mut(subject) else {
            return Err(CardStoreError::UnknownSubject { name: subject.to_owned() });
        };
        if index >= sequence.len() {
            return Err(CardStoreError::CardIndexOutOfBounds {
                subject: subject.to_owned(),
                index,
                len: sequence.len(),
            });
        }
        Ok(sequence.remove(index))
    }

    /// The card sequence of a subject, empty for an unknown subject.
    pub fn cards(&self, subject: &str) -> &[Card] {
        self.cards.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count_cards(&self, subject: &str) -> usize {
        self.cards(subject).len()
    }

    pub fn total_cards(&self) -> usize {
        self.cards.values().map(Vec::len).sum()
    }

    /// All cards in subject list order, then card sequence order.
    pub fn iter_cards(&self) -> impl Iterator<Item = (&str, usize, &Card)> + '_ {
        self.subjects.iter().flat_map(|subject| {
            self.cards(subject)
                .iter()
                .enumerate()
                .map(move |(index, card)| (subject.as_str(), index, card))
        })
    }
}
