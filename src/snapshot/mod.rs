// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot capture/restore for the card store.
//!
//! The wire format is JSON:
//! `{"subjects": [string, ...], "cards": {subject: [[front, back, latex], ...]}}`.
//! Both keys are optional on import and default to empty. Import is
//! all-or-nothing: a snapshot is parsed and normalized completely before the
//! caller replaces any live state.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::{Card, CardStore};

#[derive(Debug)]
pub enum SnapshotError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        source: serde_json::Error,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { source } => write!(f, "snapshot json error: {source}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and the rename to stable
    /// storage where possible. Exact guarantees are platform/filesystem-
    /// dependent.
    Durable,
}

/// A serializable copy of the full subject/card state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    subjects: Vec<String>,
    cards: BTreeMap<String, Vec<Card>>,
}

impl Snapshot {
    pub fn capture(store: &CardStore) -> Self {
        let subjects = store.subjects().to_vec();
        let cards = subjects
            .iter()
            .map(|subject| (subject.clone(), store.cards(subject).to_vec()))
            .collect();
        Self { subjects, cards }
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn cards(&self, subject: &str) -> &[Card] {
        self.cards.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Builds a store from the snapshot, normalizing so the subject list and
    /// the card mapping match one-to-one.
    ///
    /// Listed subjects get their (possibly empty) sequences; card entries
    /// keyed by unlisted subjects are appended after the listed ones in
    /// sorted order; empty and duplicate names are dropped.
    pub fn into_store(self) -> CardStore {
        let Self {
            subjects,
            mut cards,
        } = self;

        let mut ordered = Vec::with_capacity(subjects.len().max(cards.len()));
        let mut sequences = BTreeMap::new();

        for subject in subjects {
            if subject.is_empty() || sequences.contains_key(&subject) {
                continue;
            }
            let sequence = cards.remove(&subject).unwrap_or_default();
            sequences.insert(subject.clone(), sequence);
            ordered.push(subject);
        }

        for (subject, sequence) in cards {
            if subject.is_empty() {
                continue;
            }
            sequences.insert(subject.clone(), sequence);
            ordered.push(subject);
        }

        CardStore::from_parts(ordered, sequences)
    }

    pub fn to_json_string(&self) -> Result<String, SnapshotError> {
        let json = snapshot_to_json(self);
        serde_json::to_string_pretty(&json).map_err(|source| SnapshotError::Json { source })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, SnapshotError> {
        let json: SnapshotJson =
            serde_json::from_str(raw).map_err(|source| SnapshotError::Json { source })?;
        Ok(snapshot_from_json(json))
    }
}

/// `[front, back, latex]` — the positional triple of the wire format.
type CardJson = (String, String, bool);

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnapshotJson {
    #[serde(default)]
    subjects: Vec<String>,
    #[serde(default)]
    cards: BTreeMap<String, Vec<CardJson>>,
}

fn snapshot_to_json(snapshot: &Snapshot) -> SnapshotJson {
    SnapshotJson {
        subjects: snapshot.subjects.clone(),
        cards: snapshot
            .cards
            .iter()
            .map(|(subject, sequence)| {
                let sequence = sequence
                    .iter()
                    .map(|card| (card.front().to_owned(), card.back().to_owned(), card.latex()))
                    .collect();
                (subject.clone(), sequence)
            })
            .collect(),
    }
}

fn snapshot_from_json(json: SnapshotJson) -> Snapshot {
    Snapshot {
        subjects: json.subjects,
        cards: json
            .cards
            .into_iter()
            .map(|(subject, sequence)| {
                let sequence = sequence
                    .into_iter()
                    .map(|(front, back, latex)| Card::new(front, back, latex))
                    .collect();
                (subject, sequence)
            })
            .collect(),
    }
}

pub fn read_snapshot_file(path: &Path) -> Result<Snapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Snapshot::from_json_str(&raw)
}

pub fn write_snapshot_file(
    path: &Path,
    snapshot: &Snapshot,
    durability: WriteDurability,
) -> Result<(), SnapshotError> {
    let json = snapshot.to_json_string()?;
    write_atomic(path, format!("{json}\n").as_bytes(), durability)
}

fn write_atomic(
    path: &Path,
    bytes: &[u8],
    durability: WriteDurability,
) -> Result<(), SnapshotError> {
    let io_error = |source: io::Error| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return Err(io_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "snapshot path has no file name",
        )));
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let tmp_path = path.with_file_name(format!(".{file_name}.tmp-{}", std::process::id()));

    let write_result = (|| -> io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(bytes)?;
        if durability == WriteDurability::Durable {
            file.sync_all()?;
        }
        drop(file);
        fs::rename(&tmp_path, path)
    })();

    if let Err(source) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(source));
    }

    if durability == WriteDurability::Durable {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            // Directory sync is best-effort; not all platforms support it.
            let _ = fs::File::open(parent).and_then(|dir| dir.sync_all());
        }
    }

    Ok(())
}
