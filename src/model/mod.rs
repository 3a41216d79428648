// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session aggregates the card store, the tab/highlight view state, and the
//! quiz state; every operation takes the aggregate explicitly.

pub mod card;
pub mod cards;
pub(crate) mod fixtures;
pub mod quiz;
pub mod scope;
pub mod session;
pub mod view;

pub use card::Card;
pub use cards::{CardStore, CardStoreError, DEFAULT_SUBJECTS};
pub use quiz::{QuizPhase, QuizState};
pub use scope::SubjectScope;
pub use session::Session;
pub use view::{highlight_key, ViewState};
