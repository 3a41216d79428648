// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// A single flashcard: a prompt, an answer, and a math-rendering flag.
///
/// The record itself is dumb data; "front and back must not be empty" is
/// enforced where cards enter the store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    front: String,
    back: String,
    latex: bool,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>, latex: bool) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            latex,
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    /// Whether the back should be rendered as mathematical notation.
    pub fn latex(&self) -> bool {
        self.latex
    }
}
