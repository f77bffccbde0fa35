//! Benchmarks for the interpretation and planning pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shrdlite::interpret;
use shrdlite::parse;
use shrdlite::plan::{self, PlannerConfig};
use shrdlite::world::catalog;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_ambiguous", |bench| {
        bench.iter(|| black_box(parse::parse("put a ball in a box on the floor").unwrap()))
    });
}

fn bench_interpret(c: &mut Criterion) {
    let world = catalog::small();
    let commands = parse::parse("put a ball in a box").unwrap();

    c.bench_function("interpret_small_world", |bench| {
        bench.iter(|| black_box(interpret::interpret(&commands, &world).unwrap()))
    });
}

fn bench_plan(c: &mut Criterion) {
    let world = catalog::small();
    let commands = parse::parse("take a blue object").unwrap();
    let goals = interpret::interpret(&commands, &world).unwrap();

    c.bench_function("plan_take_blue_object", |bench| {
        bench.iter(|| {
            black_box(plan::plan(&goals, &world, PlannerConfig::default()).unwrap())
        })
    });
}

criterion_group!(benches, bench_parse, bench_interpret, bench_plan);
criterion_main!(benches);
