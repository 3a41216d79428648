// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// Restricts search and quiz pools to one subject, or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectScope {
    All,
    Subject(String),
}

impl SubjectScope {
    pub fn matches(&self, subject: &str) -> bool {
        match self {
            Self::All => true,
            Self::Subject(name) => name == subject,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Subject(name) => Some(name),
        }
    }
}

impl fmt::Display for SubjectScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all subjects"),
            Self::Subject(name) => write!(f, "subject '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SubjectScope;

    #[test]
    fn all_matches_every_subject() {
        assert!(SubjectScope::All.matches("수학"));
        assert!(SubjectScope::All.matches(""));
        assert_eq!(SubjectScope::All.subject(), None);
    }

    #[test]
    fn subject_scope_matches_only_its_own_name() {
        let scope = SubjectScope::Subject("수학".to_owned());
        assert!(scope.matches("수학"));
        assert!(!scope.matches("화학"));
        assert_eq!(scope.subject(), Some("수학"));
    }
}
