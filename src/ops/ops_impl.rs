// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Store/view/quiz intent-application helpers used by `apply_intent`.
/// Keeps `ops::mod` focused on public intent types and orchestration.
fn apply_store_op(session: &mut Session, op: &StoreOp) -> Result<Outcome, ApplyError> {
    match op {
        StoreOp::AddSubject { name } => {
            if session.cards_mut().add_subject(name) {
                Ok(Outcome::SubjectAdded { name: name.clone() })
            } else {
                Ok(Outcome::Noop)
            }
        }
        StoreOp::RemoveSubject { name } => {
            if session.cards_mut().remove_subject(name) {
                Ok(Outcome::SubjectRemoved { name: name.clone() })
            } else {
                Ok(Outcome::Noop)
            }
        }
        StoreOp::AddCard {
            subject,
            front,
            back,
            latex,
        } => {
            session
                .cards_mut()
                .add_card(subject, Card::new(front.clone(), back.clone(), *latex))?;
            Ok(Outcome::CardStored {
                subject: subject.clone(),
                front: front.clone(),
            })
        }
        StoreOp::DeleteCard { subject, index } => {
            let removed = session.cards_mut().delete_card(subject, *index)?;
            Ok(Outcome::CardDeleted {
                subject: subject.clone(),
                front: removed.front().to_owned(),
            })
        }
    }
}

fn apply_view_op(session: &mut Session, op: &ViewOp) -> Outcome {
    match op {
        ViewOp::JumpToCard { subject, front } => {
            session.view_mut().jump_to_card(subject, front);
            Outcome::JumpedToCard {
                key: highlight_key(subject, front),
            }
        }
        ViewOp::FocusSubject { subject } => {
            session.view_mut().focus_subject(subject);
            Outcome::SubjectFocused {
                name: subject.clone(),
            }
        }
        ViewOp::ShowAllTabs => {
            session.view_mut().show_all_tabs();
            Outcome::ViewReset
        }
    }
}

fn apply_quiz_op(
    session: &mut Session,
    op: &QuizOp,
    rng: &mut impl Rng,
) -> Result<Outcome, ApplyError> {
    match op {
        QuizOp::Draw { scope } | QuizOp::Next { scope } => draw_random(session, scope, rng),
        QuizOp::Reveal => {
            if session.quiz_mut().reveal() {
                Ok(Outcome::AnswerRevealed)
            } else {
                Ok(Outcome::Noop)
            }
        }
    }
}

/// Draws uniformly at random from the scoped pool.
///
/// The previous card is not excluded; immediate repeats are possible by
/// design. An empty pool declines and leaves the quiz state untouched.
fn draw_random(
    session: &mut Session,
    scope: &SubjectScope,
    rng: &mut impl Rng,
) -> Result<Outcome, ApplyError> {
    let pool = session
        .cards()
        .iter_cards()
        .filter(|(subject, _, _)| scope.matches(subject))
        .map(|(_, _, card)| card)
        .collect::<Vec<_>>();

    let Some(card) = pool.choose(rng) else {
        return Err(ApplyError::EmptyPool {
            scope: scope.clone(),
        });
    };
    let drawn = (*card).clone();

    session.quiz_mut().set_drawn(drawn, scope.clone());
    Ok(Outcome::CardDrawn)
}
