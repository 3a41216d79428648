// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Card, CardStore, SubjectScope};

/// One search match: the owning subject, the card, and its position within
/// the subject's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub subject: &'a str,
    pub card: &'a Card,
    pub index: usize,
}

/// Case-insensitive substring scan over card fronts and backs in scope.
///
/// The result is lazy and finite; hits arrive in subject list order, then
/// card sequence order within each subject. There is no ranking — this is a
/// pure filter, re-run from the live store on every search.
pub fn search<'a>(cards: &'a CardStore, query: &str, scope: &SubjectScope) -> Search<'a> {
    Search {
        cards,
        needle: query.to_lowercase(),
        scope: scope.clone(),
        subject_pos: 0,
        card_pos: 0,
    }
}

/// A restartable scan over the store; `restart` (or a fresh [`search`] call)
/// rewinds to the first hit.
#[derive(Debug, Clone)]
pub struct Search<'a> {
    cards: &'a CardStore,
    needle: String,
    scope: SubjectScope,
    subject_pos: usize,
    card_pos: usize,
}

impl Search<'_> {
    pub fn restart(&mut self) {
        self.subject_pos = 0;
        self.card_pos = 0;
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let cards = self.cards;
        loop {
            let subject = cards.subjects().get(self.subject_pos)?;
            if !self.scope.matches(subject) {
                self.subject_pos += 1;
                self.card_pos = 0;
                continue;
            }

            let sequence = cards.cards(subject);
            while self.card_pos < sequence.len() {
                let index = self.card_pos;
                self.card_pos += 1;

                let card = &sequence[index];
                if card.front().to_lowercase().contains(&self.needle)
                    || card.back().to_lowercase().contains(&self.needle)
                {
                    return Some(SearchHit {
                        subject: subject.as_str(),
                        card,
                        index,
                    });
                }
            }

            self.subject_pos += 1;
            self.card_pos = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{search, SearchHit};
    use crate::model::fixtures::two_subject_store;
    use crate::model::{Card, CardStore, SubjectScope};

    fn hit_fronts(hits: Vec<SearchHit<'_>>) -> Vec<(&str, usize, &str)> {
        hits.into_iter()
            .map(|hit| (hit.subject, hit.index, hit.card.front()))
            .collect()
    }

    fn scenario_store() -> CardStore {
        let mut store = CardStore::with_default_subjects();
        store
            .add_card("수학", Card::new("F=ma", "뉴턴의 법칙", true))
            .expect("add card");
        store
    }

    #[test]
    fn substring_match_is_case_insensitive_on_front_and_back() {
        let mut store = CardStore::with_default_subjects();
        store
            .add_card("물리", Card::new("Newton", "Force equals MAss times acceleration", false))
            .expect("add card");

        let hits = search(&store, "newton", &SubjectScope::All).collect::<Vec<_>>();
        assert_eq!(hits.len(), 1);

        let hits = search(&store, "mass", &SubjectScope::All).collect::<Vec<_>>();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, "물리");
        assert_eq!(hits[0].index, 0);
    }

    #[test]
    fn hits_arrive_in_subject_list_order_then_card_order() {
        let store = two_subject_store();
        let hits = search(&store, "", &SubjectScope::All).collect::<Vec<_>>();
        assert_eq!(
            hit_fronts(hits),
            vec![("alpha", 0, "a0"), ("alpha", 1, "a1"), ("beta", 0, "b0")]
        );
    }

    #[test]
    fn scope_restricts_the_scan_to_one_subject() {
        let store = two_subject_store();
        let scope = SubjectScope::Subject("beta".to_owned());
        let hits = search(&store, "", &scope).collect::<Vec<_>>();
        assert_eq!(hit_fronts(hits), vec![("beta", 0, "b0")]);
    }

    #[test]
    fn unmatched_query_yields_nothing_on_a_populated_store() {
        let store = two_subject_store();
        assert!(store.total_cards() > 0);

        let mut hits = search(&store, "xyz123notfound", &SubjectScope::All);
        assert!(hits.next().is_none());
    }

    #[test]
    fn scan_is_restartable() {
        let store = two_subject_store();
        let mut scan = search(&store, "a", &SubjectScope::All);

        let first_pass = scan.by_ref().count();
        assert!(first_pass > 0);
        assert_eq!(scan.next(), None);

        scan.restart();
        assert_eq!(scan.count(), first_pass);
    }

    #[test]
    fn scenario_query_finds_the_single_card_at_index_zero() {
        let store = scenario_store();
        let hits = search(&store, "ma", &SubjectScope::All).collect::<Vec<_>>();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subject, "수학");
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[0].card.front(), "F=ma");
    }

    #[test]
    fn deleting_the_card_empties_the_scenario_query() {
        let mut store = scenario_store();
        store.delete_card("수학", 0).expect("delete card");
        assert_eq!(search(&store, "ma", &SubjectScope::All).count(), 0);
    }
}
