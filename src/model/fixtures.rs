// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::card::Card;
use super::cards::CardStore;

/// A populated store for the built-in demo session.
pub(crate) fn demo_store() -> CardStore {
    let mut store = CardStore::with_default_subjects();

    store
        .add_card("수학", Card::new("피타고라스 정리", "a^2 + b^2 = c^2", true))
        .expect("demo card");
    store
        .add_card(
            "수학",
            Card::new("근의 공식", "x = \\frac{-b \\pm \\sqrt{b^2 - 4ac}}{2a}", true),
        )
        .expect("demo card");
    store
        .add_card("화학", Card::new("이상 기체 방정식", "PV = nRT", true))
        .expect("demo card");
    store
        .add_card("화학", Card::new("아보가드로 수", "N_A = 6.022 \\times 10^{23}", true))
        .expect("demo card");
    store
        .add_card("물리", Card::new("뉴턴의 제2법칙", "F = ma", true))
        .expect("demo card");
    store
        .add_card("물리", Card::new("운동 에너지", "E_k = \\frac{1}{2}mv^2", true))
        .expect("demo card");
    store
        .add_card("물리", Card::new("빛의 속도", "c = 299,792,458 m/s", false))
        .expect("demo card");

    store
}

#[cfg(test)]
pub(crate) fn two_subject_store() -> CardStore {
    let mut store = CardStore::new();
    store.add_subject("alpha");
    store.add_subject("beta");
    store.add_card("alpha", Card::new("a0", "first", false)).expect("fixture card");
    store.add_card("alpha", Card::new("a1", "second", false)).expect("fixture card");
    store.add_card("beta", Card::new("b0", "third", true)).expect("fixture card");
    store
}
