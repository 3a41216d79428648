// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The mutation surface of a session.
//!
//! Every user action is an [`Intent`]; [`apply_intent`] applies it to the
//! session and reports an [`Outcome`] the host can surface, or an
//! [`ApplyError`] when the operation declines without mutating anything.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{highlight_key, Card, CardStoreError, Session, SubjectScope};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Store(StoreOp),
    View(ViewOp),
    Quiz(QuizOp),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOp {
    AddSubject {
        name: String,
    },
    RemoveSubject {
        name: String,
    },
    AddCard {
        subject: String,
        front: String,
        back: String,
        latex: bool,
    },
    DeleteCard {
        subject: String,
        index: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    /// Selecting a search hit: highlight the card and focus its subject tab.
    JumpToCard { subject: String, front: String },
    FocusSubject { subject: String },
    ShowAllTabs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOp {
    Draw { scope: SubjectScope },
    Reveal,
    /// Re-draws and covers the answer again; same semantics as `Draw`.
    Next { scope: SubjectScope },
}

/// What an applied intent did, for the host to report back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A defined no-op: duplicate or empty subject add, absent subject
    /// remove, reveal with nothing left to uncover.
    Noop,
    SubjectAdded { name: String },
    SubjectRemoved { name: String },
    CardStored { subject: String, front: String },
    CardDeleted { subject: String, front: String },
    JumpedToCard { key: String },
    SubjectFocused { name: String },
    ViewReset,
    CardDrawn,
    AnswerRevealed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Store(CardStoreError),
    EmptyPool { scope: SubjectScope },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(source) => write!(f, "{source}"),
            Self::EmptyPool { scope } => write!(f, "no cards to draw from ({scope})"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(source) => Some(source),
            Self::EmptyPool { .. } => None,
        }
    }
}

impl From<CardStoreError> for ApplyError {
    fn from(source: CardStoreError) -> Self {
        Self::Store(source)
    }
}

/// Applies one intent to the session.
///
/// Failing intents decline without mutating anything; the session is exactly
/// as it was before the call.
pub fn apply_intent(
    session: &mut Session,
    intent: &Intent,
    rng: &mut impl Rng,
) -> Result<Outcome, ApplyError> {
    match intent {
        Intent::Store(op) => apply_store_op(session, op),
        Intent::View(op) => Ok(apply_view_op(session, op)),
        Intent::Quiz(op) => apply_quiz_op(session, op, rng),
    }
}

// Extracted intent-application implementation.
include!("ops_impl.rs");
