//! Benchmarks for archive creation performance.
//!
//! Measures walk-and-compress throughput and exclusion matching across
//! different directory shapes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::uninlined_format_args,
    clippy::items_after_statements
)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use packdir_core::ArchiveConfig;
use packdir_core::create_archive;
use packdir_core::creation::config::default_exclude_patterns;
use packdir_core::creation::filters::ExclusionSet;
use std::fs;
use std::hint::black_box;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a flat directory with `file_count` files of 1 KB each.
fn create_test_directory(temp: &TempDir, file_count: usize) -> PathBuf {
    let dir = temp.path().join("bench_data");
    fs::create_dir_all(&dir).unwrap();

    let content = "x".repeat(1024);
    for i in 0..file_count {
        fs::write(dir.join(format!("file_{:05}.txt", i)), &content).unwrap();
    }

    dir
}

/// Creates a project-like tree where most files sit in excluded directories.
fn create_project_directory(temp: &TempDir) -> PathBuf {
    let root = temp.path().join("project");

    fn fill(dir: &Path, prefix: &str, count: usize) {
        fs::create_dir_all(dir).unwrap();
        for i in 0..count {
            fs::write(dir.join(format!("{prefix}_{i}.js")), "module.exports = 1;\n").unwrap();
        }
    }

    fill(&root.join("src"), "src", 50);
    fill(&root.join("node_modules/a/lib"), "dep", 200);
    fill(&root.join("node_modules/b/dist"), "dep", 200);
    fill(&root.join("dist"), "bundle", 20);
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    for i in 0..100 {
        fs::write(root.join(format!(".git/objects/obj_{i}")), "blob").unwrap();
    }
    for i in 0..10 {
        fs::write(root.join(format!("run_{i}.log")), "log line\n").unwrap();
    }

    root
}

fn benchmark_create_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_flat");

    for file_count in [10, 100, 500] {
        let temp = TempDir::new().unwrap();
        let source_dir = create_test_directory(&temp, file_count);
        let output = temp.path().join("output.zip");
        let config = ArchiveConfig::default()
            .with_root(&source_dir)
            .with_output(&output);

        group.throughput(Throughput::Bytes((file_count * 1024) as u64));
        group.bench_with_input(
            BenchmarkId::new("files", file_count),
            &config,
            |b, config| {
                b.iter(|| {
                    let _ = create_archive(black_box(config));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_create_project(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let root = create_project_directory(&temp);
    let config = ArchiveConfig::default()
        .with_root(&root)
        .with_output(temp.path().join("projeto.zip"));

    c.bench_function("create_project_mostly_excluded", |b| {
        b.iter(|| {
            let _ = create_archive(black_box(&config));
        });
    });
}

fn benchmark_exclusion_matching(c: &mut Criterion) {
    let set = ExclusionSet::new(&default_exclude_patterns("projeto.zip")).unwrap();
    let paths = [
        "src/components/Button.tsx",
        "node_modules/react/index.js",
        "services/api/logs/2024/app.log",
        ".env",
        "README.md",
    ];

    c.bench_function("is_excluded_default_patterns", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(set.is_excluded(black_box(path)));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_create_flat,
    benchmark_create_project,
    benchmark_exclusion_matching
);
criterion_main!(benches);
