//! Topic Index Benchmarks
//!
//! Rebuild cost of the per-chapter topic index and highlight painting.
//!
//! Run with: `cargo bench --bench topic_index`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::BTreeMap;

use verse_index::models::{FormatType, Tag, Topic, Verse, VerseId};
use verse_index::resolver::{paint_tags, render_units};
use verse_index::topics::TopicIndex;

/// A chapter of `verse_count` verses with twenty words each
fn chapter(verse_count: u32) -> Vec<Verse> {
    (1..=verse_count)
        .map(|n| Verse {
            id: n as VerseId,
            version_id: 1,
            book: "Psalms".to_string(),
            chapter: 119,
            verse: n,
            text: vec!["word"; 20].join(" "),
            format_type: FormatType::Poetry,
        })
        .collect()
}

fn topics(count: i64) -> Vec<Topic> {
    (1..=count)
        .map(|id| Topic {
            id,
            name: format!("Topic {}", id),
            description: None,
        })
        .collect()
}

/// Tags spread over the chapter, a few spilling into the next one
fn tags(count: i64, topic_count: i64, verse_count: u32) -> Vec<Tag> {
    (1..=count)
        .map(|id| {
            let start = (id as u32 * 7) % verse_count + 1;
            let end_position = if id % 10 == 0 {
                "Ps 120:2.3".to_string()
            } else {
                format!("Ps 119:{}.5", (start + 3).min(verse_count))
            };
            Tag {
                id,
                topic_id: Some(id % topic_count + 1),
                version: "WEB".to_string(),
                start_position: format!("Ps 119:{}.2", start),
                end_position,
                created_at: None,
            }
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("topic_index_build");

    for tag_count in [10, 100, 1000] {
        let verses = chapter(176);
        let topics = topics(25);
        let tags = tags(tag_count, 25, 176);
        let links: BTreeMap<VerseId, Vec<Topic>> = verses
            .iter()
            .step_by(5)
            .map(|v| (v.id, vec![topics[(v.id % 25) as usize].clone()]))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(tag_count), &tag_count, |b, _| {
            b.iter(|| {
                TopicIndex::build(
                    black_box(&topics),
                    black_box(&verses),
                    black_box(&links),
                    black_box(&tags),
                )
            })
        });
    }

    group.finish();
}

fn bench_paint(c: &mut Criterion) {
    let verses = chapter(176);
    let tags = tags(100, 25, 176);

    c.bench_function("paint_and_render_chapter", |b| {
        b.iter(|| {
            let highlights = paint_tags(black_box(&verses), black_box(&tags));
            render_units(&verses, &highlights)
        })
    });
}

criterion_group!(benches, bench_build, bench_paint);
criterion_main!(benches);
