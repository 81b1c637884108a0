use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathnorm::path::{
    classify_prefix, concat, directory_contains, get_extension, normalize, wildcard_match,
    CaseSensitivity, Flavor, PathRelationship, SeparatorStyle,
};

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let unix = SeparatorStyle::Unix;

    // Benchmark absolute path normalization
    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize(black_box("/absolute/path/to/file"), unix));
    });

    // Benchmark relative path normalization
    group.bench_function("relative_path", |b| {
        b.iter(|| normalize(black_box("./relative/path"), unix));
    });

    // Benchmark path with . and .. components
    group.bench_function("with_dots", |b| {
        b.iter(|| normalize(black_box("/a/b/../c/./d"), unix));
    });

    // Benchmark path with many .. components
    group.bench_function("many_dots", |b| {
        b.iter(|| normalize(black_box("/a/b/c/d/../../e/f"), unix));
    });

    // Benchmark a root escape
    group.bench_function("root_escape", |b| {
        b.iter(|| normalize(black_box("/a/../../b"), unix));
    });

    let deep = "segment/".repeat(200) + "../".repeat(100).as_str();
    group.bench_function("deep_path", |b| {
        b.iter(|| normalize(black_box(&deep), unix));
    });

    group.finish();
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix");

    for (name, path) in [
        ("relative", "a/b/c.txt"),
        ("unix_root", "/a/b/c.txt"),
        ("drive", "C:\\a\\b\\c.txt"),
        ("home", "~user/a/b"),
        ("unc_hostname", "\\\\server.example.org\\a\\b\\c.txt"),
        ("unc_ipv6", "\\\\21f1:da00::c0:1\\a\\b\\c.txt"),
        ("unc_invalid", "\\\\-server\\a\\b\\c.txt"),
    ] {
        group.bench_with_input(BenchmarkId::new("classify", name), &path, |b, &path| {
            b.iter(|| classify_prefix(black_box(path)));
        });
    }

    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    group.bench_function("concat", |b| {
        b.iter(|| {
            concat(
                black_box(Some("/srv/www/site")),
                black_box("../logs/access.log"),
                SeparatorStyle::Unix,
            )
        });
    });

    group.bench_function("extension_windows", |b| {
        b.iter(|| get_extension(black_box("C:\\data\\archive.tar.gz"), Flavor::Windows));
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let ancestor = "/users/test/projects/pathnorm";
    let descendant = "/users/test/projects/pathnorm/src/path";
    let unrelated1 = "/users/test/projects/pathnorm/src";
    let unrelated2 = "/users/test/projects/other";

    // Benchmark ancestor relationship
    group.bench_function("ancestor", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(descendant), Flavor::Unix));
    });

    // Benchmark same relationship
    group.bench_function("same", |b| {
        b.iter(|| PathRelationship::between(black_box(ancestor), black_box(ancestor), Flavor::Unix));
    });

    // Benchmark unrelated relationship
    group.bench_function("unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(unrelated1), black_box(unrelated2), Flavor::Unix));
    });

    // Benchmark case-insensitive containment
    group.bench_function("contains_insensitive", |b| {
        b.iter(|| {
            directory_contains(
                black_box("C:\\Users\\Test"),
                black_box("c:/users/test/Documents/file.txt"),
                CaseSensitivity::Insensitive,
                Flavor::Windows,
            )
        });
    });

    group.finish();
}

fn bench_wildcard(c: &mut Criterion) {
    let mut group = c.benchmark_group("wildcard");

    for (name, text, pattern) in [
        ("literal", "Makefile", "Makefile"),
        ("suffix", "report-2024-final.txt", "*.txt"),
        ("mixed", "report-2024-final.txt", "report-????-*.t?t"),
        ("backtracking", "aaaaaaaaaaaaaaaaaaaaaaaab", "*a*a*a*a*b"),
    ] {
        group.bench_with_input(BenchmarkId::new("match", name), &(text, pattern), |b, &(t, p)| {
            b.iter(|| {
                wildcard_match(
                    black_box(Some(t)),
                    black_box(Some(p)),
                    CaseSensitivity::Sensitive,
                    Flavor::Unix,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_prefix,
    bench_decompose,
    bench_relationship,
    bench_wildcard
);
criterion_main!(benches);
