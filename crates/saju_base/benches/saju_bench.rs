use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    ALL_STEMS, Gender, HeavenlyStem, compute_chart, day_ganji, hour_branch, ten_god, year_ganji,
};

fn sexagenary_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(1990, 5, 15).unwrap();

    let mut group = c.benchmark_group("sexagenary");
    group.bench_function("year_ganji", |b| b.iter(|| year_ganji(black_box(1990))));
    group.bench_function("day_ganji", |b| b.iter(|| day_ganji(black_box(date))));
    group.bench_function("hour_branch", |b| {
        b.iter(|| hour_branch(black_box(8), black_box(30)))
    });
    group.finish();
}

fn classifier_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.bench_function("ten_god_grid", |b| {
        b.iter(|| {
            for day in ALL_STEMS {
                for target in ALL_STEMS {
                    black_box(ten_god(target, day));
                }
            }
        })
    });
    group.bench_function("ten_god_single", |b| {
        b.iter(|| ten_god(black_box(HeavenlyStem::Gyeong), black_box(HeavenlyStem::Gap)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 5, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();
    let outside = NaiveDate::from_ymd_opt(2150, 5, 15)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(birth), Gender::Male))
    });
    group.bench_function("compute_chart_default_terms", |b| {
        b.iter(|| compute_chart(black_box(outside), Gender::Male))
    });
    group.bench_function("element_balance", |b| {
        let chart = compute_chart(birth, Gender::Male);
        b.iter(|| black_box(&chart).element_balance())
    });
    group.finish();
}

criterion_group!(benches, sexagenary_bench, classifier_bench, chart_bench);
criterion_main!(benches);
