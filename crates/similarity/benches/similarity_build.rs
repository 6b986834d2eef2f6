//! Benchmarks for the all-pairs similarity build
//!
//! Run with: cargo bench --package similarity

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{DataIndex, Interaction, MovieId};
use properties::{Property, PropertyTable};
use similarity::{CosineMeasure, JaccardMeasure, build_matrix};

const MOVIES: MovieId = 500;

/// Synthetic catalog where movies share directors and subjects in cycles
fn synthetic_properties() -> PropertyTable {
    let rows = (0..MOVIES).flat_map(|id| {
        vec![
            (id, Property::new("http://dbpedia.org/ontology/director", format!("d{}", id % 40))),
            (id, Property::new("http://purl.org/dc/terms/subject", format!("s{}", id % 25))),
            (id, Property::new("http://purl.org/dc/terms/subject", format!("s{}", id % 7))),
            (id, Property::new("http://dbpedia.org/ontology/starring", format!("a{}", id % 90))),
        ]
    });
    PropertyTable::from_rows(&[], rows)
}

fn synthetic_interactions() -> DataIndex {
    let mut index = DataIndex::new();
    for user_id in 0..2000u32 {
        for step in 0..15u32 {
            index.insert_interaction(Interaction {
                user_id,
                movie_id: (user_id * 7 + step * 31) % MOVIES,
                value: 1,
            });
        }
    }
    index
}

fn bench_jaccard_build(c: &mut Criterion) {
    let table = synthetic_properties();
    let ids: Vec<MovieId> = (0..MOVIES).collect();
    let measure = JaccardMeasure::new(&table);

    c.bench_function("jaccard_build_500", |b| {
        b.iter(|| black_box(build_matrix(&measure, black_box(&ids))))
    });
}

fn bench_cosine_build(c: &mut Criterion) {
    let index = synthetic_interactions();
    let ids: Vec<MovieId> = (0..MOVIES).collect();
    let measure = CosineMeasure::new(&index);

    c.bench_function("cosine_build_500", |b| {
        b.iter(|| black_box(build_matrix(&measure, black_box(&ids))))
    });
}

criterion_group!(benches, bench_jaccard_build, bench_cosine_build);
criterion_main!(benches);
