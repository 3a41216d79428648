// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

use mnemo::model::{Card, CardStore};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (3, 4),
            Self::Medium => (10, 50),
            Self::Large => (20, 250),
        }
    }
}

/// Deterministic store fixture: a fixed number of subjects with a fixed
/// number of cards each, fronts/backs carrying stable searchable tokens.
pub fn store(case: Case) -> CardStore {
    let (subjects, cards_per_subject) = case.dimensions();

    let mut store = CardStore::new();
    for s in 0..subjects {
        let subject = format!("subject_{s:02}");
        store.add_subject(&subject);
        for c in 0..cards_per_subject {
            let card = Card::new(
                format!("front_{s:02}_{c:04}"),
                format!("back term_{:02} of subject_{s:02}", c % 7),
                c % 3 == 0,
            );
            store.add_card(&subject, card).expect("fixture card");
        }
    }
    store
}
