//! Benchmarks for the fincalc calculators.
//!
//! Run with: cargo bench -p fincalc-calculators

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fincalc_calculators::prelude::*;

// =============================================================================
// DEBT PAYOFF
// =============================================================================

fn bench_debt_payoff(c: &mut Criterion) {
    let calc = DebtPayoff::default();

    let mut group = c.benchmark_group("debt_payoff");
    // 363, 109, 50 and 12 simulated months
    for payment in [167.0, 200.0, 300.0, 1000.0] {
        let input = DebtPayoffInput::new(10_000.0, 19.99, payment);
        group.bench_with_input(BenchmarkId::from_parameter(payment), &input, |b, input| {
            b.iter(|| calc.calculate(black_box(input)))
        });
    }
    group.finish();

    let unreachable = DebtPayoffInput::new(10_000.0, 19.99, 100.0);
    c.bench_function("debt_payoff_unreachable", |b| {
        b.iter(|| calc.calculate(black_box(&unreachable)))
    });
}

// =============================================================================
// CLOSED FORM
// =============================================================================

fn bench_closed_form(c: &mut Criterion) {
    let loan = LoanInput::default();
    c.bench_function("loan_payment", |b| {
        b.iter(|| LoanPayment.calculate(black_box(&loan)))
    });

    let retirement = RetirementInput::default();
    c.bench_function("retirement", |b| {
        b.iter(|| RetirementProjection.calculate(black_box(&retirement)))
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let options = EvaluationOptions::default();
    let requests: Vec<CalculationRequest> = CalculatorKind::all()
        .iter()
        .map(|kind| CalculationRequest::default_for(*kind))
        .collect();

    c.bench_function("evaluate_all_defaults", |b| {
        b.iter(|| {
            for request in &requests {
                black_box(evaluate(black_box(request), &options));
            }
        })
    });
}

criterion_group!(payoff, bench_debt_payoff);
criterion_group!(closed_form, bench_closed_form, bench_dispatch);

criterion_main!(payoff, closed_form);
