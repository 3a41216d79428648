// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mnemo::model::SubjectScope;
use mnemo::query::search;

mod fixtures;

// Benchmark identity (keep stable):
// - Group name in this file: `query.search`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `hits_medium`, `miss_large`).
fn benches_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("query.search");

    let medium = fixtures::store(fixtures::Case::Medium);
    let large = fixtures::store(fixtures::Case::Large);

    group.throughput(Throughput::Elements(medium.total_cards() as u64));
    group.bench_function("hits_medium", |b| {
        b.iter(|| {
            let hits = search(&medium, black_box("term_03"), &SubjectScope::All).count();
            black_box(hits)
        })
    });

    group.throughput(Throughput::Elements(large.total_cards() as u64));
    group.bench_function("miss_large", |b| {
        b.iter(|| {
            let hits = search(&large, black_box("xyz123notfound"), &SubjectScope::All).count();
            black_box(hits)
        })
    });

    let scope = SubjectScope::Subject("subject_07".to_owned());
    group.throughput(Throughput::Elements(large.count_cards("subject_07") as u64));
    group.bench_function("scoped_large", |b| {
        b.iter(|| {
            let hits = search(&large, black_box("term_03"), &scope).count();
            black_box(hits)
        })
    });

    group.finish();
}

criterion_group!(benches, benches_search);
criterion_main!(benches);
