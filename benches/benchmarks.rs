//! Performance benchmarks for twig

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use termcolor::Buffer;
use twig::test_utils::TestDir;
use twig::tree::list_children;
use twig::{LineCollector, OutputConfig, StreamingFormatter, TreeRenderer};

/// Build a tree `depth` levels deep with `width` subdirectories and files per level.
fn create_tree(width: usize, depth: usize) -> TestDir {
    let dir = TestDir::new();
    fill(&dir, "", width, depth);
    dir
}

fn fill(dir: &TestDir, base: &str, width: usize, depth: usize) {
    for i in 0..width {
        dir.add_file(&format!("{}File_{:03}.txt", base, i));
    }
    if depth == 0 {
        return;
    }
    for i in 0..width {
        let sub = format!("{}dir_{:03}/", base, i);
        dir.add_dir(&sub);
        fill(dir, &sub, width, depth - 1);
    }
}

fn bench_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing");

    let small = create_tree(10, 0);
    group.bench_function("flat_10_entries", |b| {
        b.iter(|| list_children(black_box(small.path())))
    });

    let large = create_tree(500, 0);
    group.bench_function("flat_500_entries", |b| {
        b.iter(|| list_children(black_box(large.path())))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let tree = create_tree(6, 3);

    group.bench_function("collector_6x3", |b| {
        b.iter(|| {
            let mut collector = LineCollector::new();
            TreeRenderer::new()
                .render(black_box(tree.path()), &mut collector)
                .unwrap()
        })
    });

    group.bench_function("colored_buffer_6x3", |b| {
        b.iter(|| {
            let config = OutputConfig {
                use_color: true,
                show_header: false,
            };
            let mut formatter = StreamingFormatter::new(Buffer::ansi(), config);
            TreeRenderer::new()
                .render(black_box(tree.path()), &mut formatter)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_listing, bench_render);
criterion_main!(benches);
