use criterion::{Criterion, criterion_group, criterion_main};
use pbxsync::config::default_expected_files;
use pbxsync::scanner::{LineScanner, ReferenceScanner};
use std::fmt::Write;
use std::hint::black_box;

fn create_manifest(files: usize) -> String {
    let mut manifest = String::from("// !$*UTF8*$!\n{\n\tobjects = {\n");

    for i in 0..files {
        let _ = writeln!(
            manifest,
            "\t\t{i:024X} /* File{i}.swift in Sources */ = {{isa = PBXBuildFile; fileRef = {i:024X}; }};"
        );
    }
    for i in 0..files {
        let _ = writeln!(
            manifest,
            "\t\t{i:024X} /* File{i}.swift */ = {{isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = File{i}.swift; sourceTree = \"<group>\"; }};"
        );
    }

    manifest.push_str("\t};\n}\n");
    manifest
}

fn benchmark_reference_scan(c: &mut Criterion) {
    let scanner = LineScanner::new("PBXFileReference", "swift").unwrap();

    let small = create_manifest(10);
    let medium = create_manifest(500);
    let large = create_manifest(10_000);

    let mut group = c.benchmark_group("reference_scan");

    group.bench_function("small_manifest", |b| b.iter(|| scanner.scan(black_box(&small))));
    group.bench_function("medium_manifest", |b| b.iter(|| scanner.scan(black_box(&medium))));
    group.bench_function("large_manifest", |b| b.iter(|| scanner.scan(black_box(&large))));

    group.finish();
}

fn benchmark_check(c: &mut Criterion) {
    let scanner = LineScanner::new("PBXFileReference", "swift").unwrap();
    let expected = default_expected_files();
    let manifest = create_manifest(500);

    c.bench_function("check_text", |b| {
        b.iter(|| pbxsync::check::check_text(black_box(&manifest), &scanner, &expected, 2))
    });
}

criterion_group!(benches, benchmark_reference_scan, benchmark_check);
criterion_main!(benches);
