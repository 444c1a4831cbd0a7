//! Performance benchmarks for the Grade Engine.
//!
//! This benchmark suite verifies that the calculation engine stays far below
//! its default 300ms time budget:
//! - Single evaluation calculation: < 20μs mean
//! - Ten evaluations: < 50μs mean
//! - Detailed breakdown of ten evaluations: < 100μs mean
//! - Batch of 1000 students: < 50ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use grade_engine::calculator::GradeCalculator;
use grade_engine::config::ConfigLoader;
use grade_engine::models::{Evaluation, MAX_EVALUATIONS, Student, Teacher};

/// Creates a calculator with the rules from the default config file.
fn create_calculator() -> GradeCalculator {
    let config = ConfigLoader::load("./config/grading.yaml").expect("Failed to load config");
    let teacher = Teacher::new("T_BENCH", "Bench Teacher").expect("Invalid teacher");
    GradeCalculator::with_rules(teacher, config.into_rules()).expect("Invalid rules")
}

/// Creates a student with `count` evaluations of equal weight.
///
/// `count` must divide 100 so the weights sum exactly.
fn create_student(id: usize, count: usize) -> Student {
    let mut student = Student::new(format!("S{:04}", id), "Bench Student").expect("Invalid student");
    let weight = Decimal::from(100 / count as u32);

    for i in 0..count {
        // Scores spread over the scale: 10.00, 11.25, 12.50, ...
        let score = Decimal::new(1000 + ((i + id) % 9) as i64 * 125, 2);
        let evaluation = Evaluation::new(format!("Evaluation {}", i + 1), score, weight)
            .expect("Invalid evaluation");
        student.add_evaluation(evaluation).expect("Capacity exceeded");
    }
    student.set_minimum_attendance(id % 7 != 0);
    student
}

/// Benchmark: Single evaluation calculation.
///
/// Target: < 20μs mean
fn bench_single_evaluation(c: &mut Criterion) {
    let mut calculator = create_calculator();
    let student = create_student(1, 1);
    let extra = Decimal::new(15, 1);

    c.bench_function("single_evaluation", |b| {
        b.iter(|| {
            let outcome = calculator.calculate_final_grade(black_box(&student), black_box(extra));
            calculator.clear_history();
            black_box(outcome)
        })
    });
}

/// Benchmark: Student with the maximum of ten evaluations.
///
/// Target: < 50μs mean
fn bench_ten_evaluations(c: &mut Criterion) {
    let mut calculator = create_calculator();
    let student = create_student(1, MAX_EVALUATIONS);
    let extra = Decimal::new(15, 1);

    c.bench_function("ten_evaluations", |b| {
        b.iter(|| {
            let outcome = calculator.calculate_final_grade(black_box(&student), black_box(extra));
            calculator.clear_history();
            black_box(outcome)
        })
    });
}

/// Benchmark: Detailed breakdown of ten evaluations.
///
/// Target: < 100μs mean
fn bench_calculation_detail(c: &mut Criterion) {
    let mut calculator = create_calculator();
    let student = create_student(1, MAX_EVALUATIONS);
    let extra = Decimal::new(15, 1);

    c.bench_function("calculation_detail", |b| {
        b.iter(|| {
            let detail = calculator.get_calculation_detail(black_box(&student), black_box(extra));
            calculator.clear_history();
            black_box(detail)
        })
    });
}

/// Benchmark: Batch of 1000 students.
///
/// Target: < 50ms mean
fn bench_batch_1000(c: &mut Criterion) {
    let students: Vec<Student> = (0..1000).map(|i| create_student(i, [1, 2, 4, 5, 10][i % 5])).collect();
    let extra = Decimal::new(1, 0);

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(1000));
    // Reduce sample size for large batches to keep benchmark time reasonable
    group.sample_size(10);

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let mut calculator = create_calculator();
            let mut results = Vec::with_capacity(students.len());
            for student in &students {
                results.push(calculator.calculate_final_grade(student, extra));
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Various evaluation counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for count in [1usize, 2, 4, 5, 10].iter() {
        let mut calculator = create_calculator();
        let student = create_student(1, *count);
        let extra = Decimal::new(15, 1);

        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("evaluations", count), count, |b, _| {
            b.iter(|| {
                let outcome = calculator.calculate_final_grade(&student, extra);
                calculator.clear_history();
                black_box(outcome)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_evaluation,
    bench_ten_evaluations,
    bench_calculation_detail,
    bench_batch_1000,
    bench_scaling,
);
criterion_main!(benches);
