// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end session scenarios through the public API.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mnemo::model::{QuizPhase, Session, SubjectScope, DEFAULT_SUBJECTS};
use mnemo::ops::{apply_intent, ApplyError, Intent, Outcome, QuizOp, StoreOp, ViewOp};
use mnemo::query::search;
use mnemo::snapshot::Snapshot;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn note_search_jump_and_delete_end_to_end() {
    let mut session = Session::new();
    let mut rng = rng();

    assert_eq!(session.cards().subjects(), &DEFAULT_SUBJECTS);
    for subject in DEFAULT_SUBJECTS {
        assert_eq!(session.cards().count_cards(subject), 0);
    }

    let outcome = apply_intent(
        &mut session,
        &Intent::Store(StoreOp::AddCard {
            subject: "수학".to_owned(),
            front: "F=ma".to_owned(),
            back: "뉴턴의 법칙".to_owned(),
            latex: true,
        }),
        &mut rng,
    )
    .expect("add card");
    assert_eq!(
        outcome,
        Outcome::CardStored {
            subject: "수학".to_owned(),
            front: "F=ma".to_owned(),
        }
    );
    assert_eq!(session.cards().count_cards("수학"), 1);

    let hits = search(session.cards(), "ma", &SubjectScope::All).collect::<Vec<_>>();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].subject, "수학");
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].card.front(), "F=ma");

    let (subject, front) = (hits[0].subject.to_owned(), hits[0].card.front().to_owned());
    apply_intent(
        &mut session,
        &Intent::View(ViewOp::JumpToCard { subject, front }),
        &mut rng,
    )
    .expect("jump");
    assert_eq!(session.view().highlighted(), Some("수학 - F=ma"));
    assert_eq!(session.view().active_subject(), Some("수학"));
    assert_eq!(
        session.view().subjects_to_display(session.cards()),
        vec!["수학"]
    );

    apply_intent(&mut session, &Intent::View(ViewOp::ShowAllTabs), &mut rng).expect("show all");
    assert_eq!(session.view().highlighted(), None);
    assert_eq!(session.view().active_subject(), None);

    apply_intent(
        &mut session,
        &Intent::Store(StoreOp::DeleteCard {
            subject: "수학".to_owned(),
            index: 0,
        }),
        &mut rng,
    )
    .expect("delete card");
    assert_eq!(session.cards().count_cards("수학"), 0);
    assert_eq!(search(session.cards(), "ma", &SubjectScope::All).count(), 0);
}

#[test]
fn quiz_draw_on_an_entirely_empty_store_declines() {
    let mut session = Session::new();

    let err = apply_intent(
        &mut session,
        &Intent::Quiz(QuizOp::Draw {
            scope: SubjectScope::All,
        }),
        &mut rng(),
    )
    .expect_err("expected empty pool");

    assert_eq!(
        err,
        ApplyError::EmptyPool {
            scope: SubjectScope::All
        }
    );
    assert_eq!(session.quiz().phase(), QuizPhase::Idle);
}

#[test]
fn snapshot_round_trip_reproduces_the_session_store() {
    let mut session = Session::new();
    let mut rng = rng();

    apply_intent(
        &mut session,
        &Intent::Store(StoreOp::AddSubject {
            name: "영어".to_owned(),
        }),
        &mut rng,
    )
    .expect("add subject");
    for (subject, front, back) in [
        ("수학", "F=ma", "뉴턴의 법칙"),
        ("영어", "ephemeral", "잠깐 동안의"),
        ("영어", "ubiquitous", "어디에나 있는"),
    ] {
        apply_intent(
            &mut session,
            &Intent::Store(StoreOp::AddCard {
                subject: subject.to_owned(),
                front: front.to_owned(),
                back: back.to_owned(),
                latex: false,
            }),
            &mut rng,
        )
        .expect("add card");
    }

    let raw = Snapshot::capture(session.cards()).to_json_string().expect("export");

    let mut fresh = Session::new();
    let snapshot = Snapshot::from_json_str(&raw).expect("import");
    fresh.import_cards(snapshot.into_store());

    assert_eq!(fresh.cards(), session.cards());
}

#[test]
fn malformed_snapshot_import_leaves_the_session_untouched() {
    let mut session = Session::new();
    let mut rng = rng();
    apply_intent(
        &mut session,
        &Intent::Store(StoreOp::AddCard {
            subject: "수학".to_owned(),
            front: "F=ma".to_owned(),
            back: "뉴턴의 법칙".to_owned(),
            latex: true,
        }),
        &mut rng,
    )
    .expect("add card");
    let before = session.clone();

    // Import is parse-then-replace; a parse failure never reaches the session.
    let err = Snapshot::from_json_str("{broken").expect_err("expected parse failure");
    assert!(!err.to_string().is_empty());
    assert_eq!(session, before);
}
