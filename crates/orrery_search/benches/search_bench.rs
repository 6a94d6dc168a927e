use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orrery_core::ReferenceTables;
use orrery_search::{
    find_minimum, nearest_phase, seasonal_marker, Phase, PhaseSearchConfig, SeasonSearchConfig,
    SeasonalMarker,
};
use orrery_time::Jd;

fn golden_section_bench(c: &mut Criterion) {
    c.bench_function("golden_section_parabola", |b| {
        b.iter(|| {
            find_minimum(
                |x| Ok((x - 1.25) * (x - 1.25)),
                black_box(-4.0),
                black_box(6.0),
                1e-10,
            )
            .expect("search should converge")
        })
    });
}

fn lunar_phase_bench(c: &mut Criterion) {
    let config = PhaseSearchConfig::default();
    let mut group = c.benchmark_group("search_lunar_phase");
    group.bench_function("nearest_new_moon", |b| {
        b.iter(|| {
            nearest_phase(
                &ReferenceTables,
                black_box(Phase::New),
                black_box(Jd::new(2_460_388.0)),
                &config,
            )
            .expect("search should succeed")
        })
    });
    group.finish();
}

fn season_bench(c: &mut Criterion) {
    let config = SeasonSearchConfig::default();
    let mut group = c.benchmark_group("search_season");
    group.bench_function("march_equinox", |b| {
        b.iter(|| {
            seasonal_marker(
                &ReferenceTables,
                black_box(2024),
                black_box(SeasonalMarker::MarchEquinox),
                &config,
            )
            .expect("search should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, golden_section_bench, lunar_phase_bench, season_bench);
criterion_main!(benches);
