/// Argument Parsing Benchmarks
///
/// Measures the grammar pass and the full resolution pipeline for command
/// lines of increasing length.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::path::Path;
use std::time::Duration;
use tracefront::parser::parse_tokens;
use tracefront::target::{TargetHost, TargetIdentity};
use tracefront::FrontEndArgs;

struct NameOnlyHost;

impl TargetHost for NameOnlyHost {
    fn resolve_identity(&self, path: &Path) -> tracefront::Result<TargetIdentity> {
        Ok(TargetIdentity {
            assembly_name: "App".to_string(),
            assembly_path: path.to_path_buf(),
        })
    }

    fn duplicate(&self, _: &Path, _: &Path) -> tracefront::Result<()> {
        Ok(())
    }
}

fn command_line(flags: usize) -> Vec<String> {
    let pool = [
        "--verbose",
        "--nesting-depth=4",
        "--vs-flags",
        "--sample-start=1000",
        "--robust-mode",
        "--omit-var=^tmp",
    ];
    let mut tokens: Vec<String> = pool
        .iter()
        .cycle()
        .take(flags)
        .map(|s| s.to_string())
        .collect();
    tokens.push("App.exe".to_string());
    tokens.push("input.txt".to_string());
    tokens
}

/// Benchmark: grammar pass only
fn bench_grammar(c: &mut Criterion) {
    let mut group = c.benchmark_group("grammar");
    group.measurement_time(Duration::from_secs(5));

    for flags in [1, 8, 32, 128].iter() {
        let tokens = command_line(*flags);
        group.throughput(Throughput::Elements(*flags as u64));
        group.bench_with_input(BenchmarkId::from_parameter(flags), &tokens, |b, tokens| {
            b.iter(|| black_box(parse_tokens(tokens.as_slice()).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark: full resolution including regex compilation
fn bench_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");
    group.measurement_time(Duration::from_secs(5));

    let tokens = command_line(8);
    group.bench_function("typical_command_line", |b| {
        b.iter(|| black_box(FrontEndArgs::parse_with(tokens.as_slice(), &NameOnlyHost).unwrap()));
    });

    group.finish();
}

/// Benchmark: program-point filtering
fn bench_ppt_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("ppt_filter");
    let tokens = vec![
        "--ppt-omit-pattern=Test".to_string(),
        "--ppt-select-pattern=^App\\.".to_string(),
        "App.exe".to_string(),
    ];
    let args = FrontEndArgs::parse_with(tokens.as_slice(), &NameOnlyHost).unwrap();

    group.bench_function("should_print_program_point", |b| {
        b.iter(|| {
            black_box(args.should_print_program_point("App.Stack.Push(System.Int32)", Some(":::ENTER")));
            black_box(args.should_print_program_point("App.Program.<Main>b__0()", None));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_grammar, bench_resolution, bench_ppt_filter);

criterion_main!(benches);
