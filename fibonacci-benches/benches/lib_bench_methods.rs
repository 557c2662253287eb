use std::hint::black_box;

use fibonacci::Method;
use fibonacci_benches::setup_method;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};

#[library_benchmark]
#[bench::recursive(args = ("recursive"), setup = setup_method)]
#[bench::iterative(args = ("iterative"), setup = setup_method)]
fn bench_method(method: Method) -> i64 {
    black_box(method.compute(black_box(20)).unwrap())
}

library_benchmark_group!(name = bench_method_group; benchmarks = bench_method);

main!(library_benchmark_groups = bench_method_group);
