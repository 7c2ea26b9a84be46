use linefeed_bench_runner::prelude::*;

const SCRIPTS_DIR: &str = "tests/linefeed/advent_of_code_2020";

/// The solution for `day` and the puzzle input it runs against.
fn make_workload_for_day(day: u32) -> WorkloadSpec {
    WorkloadSpec::new(
        format!("{SCRIPTS_DIR}/day{day:02}.lf"),
        format!("{SCRIPTS_DIR}/inputs/day{day:02}-secret.txt"),
    )
}

/// Days 1 to 12, in order.
fn make_catalog() -> WorkloadCatalog {
    (1..=12).map(make_workload_for_day).collect()
}

fn main() -> LinefeedBenchResult<()> {
    let builder = BenchmarkDefinitionBuilder::new_with_init(env!("CARGO_PKG_NAME"))
        .with_catalog(make_catalog());

    run(builder)?;

    Ok(())
}
