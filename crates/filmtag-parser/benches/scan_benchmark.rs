//! Benchmarks for filmtag-parser.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use filmtag_parser::config::ScannerConfig;
use filmtag_parser::{scan, AssetKind, Scanner};

const MOVIE_SAMPLES: &[&str] = &[
    "The.Movie.Name.2011.720p.BluRay.x264-GROUP",
    "Le.Film.2008.FRENCH.DVDRip.XviD",
    "Inception [2010] [ita].avi",
    "Movie [SET Trilogy - 2].Part2.mkv",
    "Trailer.[Official Trailer].mov",
];

const TV_SAMPLES: &[&str] = &[
    "Show.Name.S02E03E04.HDTV.FRENCH",
    "Show - S01E02 - Pilot.mkv",
    "The.Series.3x07.720p.HDTV.x264.avi",
    "Show.S01E05E03.mkv",
];

fn bench_scan_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_single");

    group.bench_function("simple_movie", |b| {
        b.iter(|| {
            scan(
                black_box("The.Movie.Name.2011.720p.BluRay.x264-GROUP"),
                AssetKind::Directory,
            )
        })
    });

    group.bench_function("tv_episode", |b| {
        b.iter(|| scan(black_box("Show - S01E02 - Pilot.mkv"), AssetKind::File))
    });

    group.bench_function("unstructured", |b| {
        b.iter(|| scan(black_box("randomfile"), AssetKind::File))
    });

    group.finish();
}

fn bench_scan_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_batch");

    group.throughput(Throughput::Elements(MOVIE_SAMPLES.len() as u64));
    group.bench_function("movies", |b| {
        b.iter(|| {
            for sample in MOVIE_SAMPLES {
                black_box(scan(black_box(sample), AssetKind::File));
            }
        })
    });

    group.throughput(Throughput::Elements(TV_SAMPLES.len() as u64));
    group.bench_function("tv_episodes", |b| {
        b.iter(|| {
            for sample in TV_SAMPLES {
                black_box(scan(black_box(sample), AssetKind::File));
            }
        })
    });

    group.finish();
}

fn bench_skip_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("skip_keywords");
    let input = "The.Movie.Name.PROPER.LIMITED.2011.720p.BluRay.x264-GROUP";

    for count in [0usize, 4, 16] {
        let keywords = (0..count).map(|i| format!("SKIP{}", i));
        let config = ScannerConfig::builder()
            .skip_keywords(keywords)
            .skip_keyword("PROPER")
            .skip_keyword("LIMITED")
            .build();
        let scanner = match Scanner::new(config) {
            Ok(scanner) => scanner,
            Err(e) => panic!("scanner config rejected: {}", e),
        };
        group.bench_with_input(BenchmarkId::new("scan", count), input, |b, input| {
            b.iter(|| scanner.scan(black_box(input), AssetKind::Directory))
        });
    }

    group.finish();
}

fn bench_catalog_build(c: &mut Criterion) {
    c.bench_function("catalog_build", |b| {
        b.iter(|| Scanner::new(black_box(ScannerConfig::default())))
    });
}

criterion_group!(
    benches,
    bench_scan_single,
    bench_scan_batch,
    bench_skip_keywords,
    bench_catalog_build
);
criterion_main!(benches);
