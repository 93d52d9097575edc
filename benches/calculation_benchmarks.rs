//! Performance benchmarks for the payroll engine.
//!
//! Covers a single employee's accrual at growing punch counts and full
//! payroll runs over batches of employees.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::calculation::{JobRateTable, calculate_employee_accrual, calculate_payroll};
use payroll_engine::config::AccrualPolicy;
use payroll_engine::models::{Employee, JobRate, TimePunch};

const JOBS: [&str; 3] = ["Hospital - Painter", "Hospital - Laborer", "Shop - Laborer"];

fn create_job_table() -> JobRateTable {
    JobRateTable::new(&[
        JobRate::new(JOBS[0], Decimal::new(3125, 2), Decimal::ONE),
        JobRate::new(JOBS[1], Decimal::new(20, 0), Decimal::new(5, 1)),
        JobRate::new(JOBS[2], Decimal::new(1625, 2), Decimal::new(125, 2)),
    ])
}

/// Creates an employee with `punch_count` 9-hour punches recorded newest first.
fn create_employee(name: &str, punch_count: usize) -> Employee {
    let punches = (0..punch_count)
        .rev()
        .map(|i| {
            let day = 1 + (i % 28);
            let hour = 6 + (i / 28) % 3;
            TimePunch::new(
                JOBS[i % JOBS.len()],
                format!("2022-02-{:02} {:02}:00:00", day, hour),
                format!("2022-02-{:02} {:02}:00:00", day, hour + 9),
            )
        })
        .collect();
    Employee::new(name, punches)
}

fn bench_employee_accrual(c: &mut Criterion) {
    let jobs = create_job_table();
    let policy = AccrualPolicy::default();
    let mut group = c.benchmark_group("employee_accrual");

    for punch_count in [5, 14, 56] {
        let employee = create_employee("emp_bench", punch_count);
        group.throughput(Throughput::Elements(punch_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(punch_count),
            &employee,
            |b, employee| {
                b.iter(|| {
                    calculate_employee_accrual(black_box(employee), &jobs, &policy).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_payroll_batch(c: &mut Criterion) {
    let jobs = create_job_table();
    let policy = AccrualPolicy::default();
    let mut group = c.benchmark_group("payroll_batch");

    for employee_count in [100, 1000] {
        let employees: Vec<Employee> = (0..employee_count)
            .map(|i| create_employee(&format!("emp_{:04}", i), 6))
            .collect();
        group.throughput(Throughput::Elements(employee_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employees,
            |b, employees| {
                b.iter(|| calculate_payroll(&jobs, black_box(employees), &policy).unwrap())
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_employee_accrual, bench_payroll_batch);
criterion_main!(benches);
