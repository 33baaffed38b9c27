use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera::config::GalleryOptions;
use tessera::gallery::{
    navigable_sequence, neighbor, Gallery, ItemDescriptor, ItemId, Step, TagFilter,
};
use tessera::RecordingPresenter;

const TAGS: [&str; 5] = ["nature", "city", "people", "night", "sea"];

/// `n` items spread round-robin over five tags, one in ten a video.
fn descriptors(n: usize) -> Vec<ItemDescriptor> {
    (0..n)
        .map(|i| {
            let ext = if i % 10 == 9 { "mp4" } else { "jpg" };
            ItemDescriptor::new(format!("media/{i:05}.{ext}"), Some(TAGS[i % TAGS.len()]))
        })
        .collect()
}

fn bench_sequences(c: &mut Criterion) {
    let gallery = Gallery::new("bench", descriptors(10_000), GalleryOptions::default());
    let city = TagFilter::Tag("city".to_string());

    let mut group = c.benchmark_group("sequences");
    group.bench_function("navigable_all_10k", |b| {
        b.iter(|| black_box(navigable_sequence(gallery.items(), &TagFilter::All).len()));
    });
    group.bench_function("navigable_tag_10k", |b| {
        b.iter(|| black_box(navigable_sequence(gallery.items(), &city).len()));
    });

    let sequence = navigable_sequence(gallery.items(), &city);
    let last = sequence.last().map(|item| item.src.clone()).unwrap_or_default();
    group.bench_function("neighbor_of_last", |b| {
        b.iter(|| black_box(neighbor(&sequence, &last, Step::Next).map(|item| item.id)));
    });
    group.bench_function("neighbor_not_found", |b| {
        b.iter(|| black_box(neighbor(&sequence, "missing.jpg", Step::Prev).map(|item| item.id)));
    });
    group.finish();
}

fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitions");

    group.bench_function("filter_change_10k", |b| {
        let mut gallery = Gallery::new("bench", descriptors(10_000), GalleryOptions::default());
        let mut presenter = RecordingPresenter::default();
        let mut i = 0;
        b.iter(|| {
            i += 1;
            let filter = TagFilter::Tag(TAGS[i % TAGS.len()].to_string());
            gallery.set_active_tag(filter, &mut presenter);
            presenter.clear();
        });
    });

    group.bench_function("step_next_filtered_10k", |b| {
        let mut gallery = Gallery::new("bench", descriptors(10_000), GalleryOptions::default());
        let mut presenter = RecordingPresenter::default();
        gallery.set_active_tag(TagFilter::Tag("sea".to_string()), &mut presenter);
        gallery.open(ItemId(4), &mut presenter);
        b.iter(|| {
            black_box(gallery.next(&mut presenter));
            presenter.clear();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sequences, bench_transitions);
criterion_main!(benches);
