use criterion::{Criterion, criterion_group, criterion_main};
use pulse_chart::api::try_convert;
use pulse_chart::core::{
    CellValue, Column, ColumnSource, DataLabelSettings, DataRole, ForcedDomain,
    MissingSecondaryPolicy, Sample, SeriesBuildOptions, SeriesTemplate, TabularView, ValueGroup,
    ValueType, build_series, calculate_domains,
};
use pulse_chart::PulseChartConfig;
use std::hint::black_box;

fn samples_10k() -> Vec<Sample> {
    (0..10_000)
        .map(|i| {
            // Every 50th category jumps ahead, opening a new series.
            let position = (i + i / 50) as f64;
            let sample = Sample::new(i, position);
            if i % 7 == 0 {
                sample.with_secondary(Some(i as f64 * 0.5))
            } else {
                sample.with_primary(Some(i as f64 * 0.25))
            }
        })
        .collect()
}

fn template() -> SeriesTemplate {
    SeriesTemplate {
        display_name: Some("Home".to_owned()),
        key: "home".to_owned(),
        identity: "home".to_owned(),
        line_index: 0,
        color: "#3779B7".to_owned(),
        category_source: ColumnSource::new("Minute", ValueType::Numeric),
        value_source: ColumnSource::new("Home", ValueType::Numeric),
        secondary_source: Some(ColumnSource::new("Away", ValueType::Numeric)),
        label_settings: DataLabelSettings::default(),
    }
}

fn bench_build_series_10k(c: &mut Criterion) {
    let samples = samples_10k();
    let template = template();
    let options = SeriesBuildOptions {
        is_scalar: false,
        is_date_mode: false,
        has_secondary_group: true,
        missing_secondary_policy: MissingSecondaryPolicy::Baseline,
        large_value_digits: 6,
    };

    c.bench_function("build_series_10k", |b| {
        b.iter(|| {
            let series = build_series(black_box(samples.clone()), &template, options)
                .expect("build series");
            black_box(series);
        })
    });
}

fn bench_domains_10k(c: &mut Criterion) {
    let template = template();
    let options = SeriesBuildOptions {
        is_scalar: true,
        is_date_mode: false,
        has_secondary_group: true,
        missing_secondary_policy: MissingSecondaryPolicy::Baseline,
        large_value_digits: 6,
    };
    let series = build_series(samples_10k(), &template, options).expect("build series");

    c.bench_function("calculate_domains_10k", |b| {
        b.iter(|| {
            let _ = calculate_domains(
                black_box(&series),
                ValueType::Numeric,
                true,
                ForcedDomain::default(),
            );
        })
    });
}

fn bench_convert_10k(c: &mut Criterion) {
    let category = Column::new(
        ColumnSource::new("Minute", ValueType::Numeric).with_role(DataRole::Timestamp),
        (0..10_000).map(|i| CellValue::from(i as f64)).collect(),
    );
    let title = Column::new(
        ColumnSource::new("Event", ValueType::Text).with_role(DataRole::EventTitle),
        (0..10_000)
            .map(|i| {
                if i % 100 == 0 {
                    CellValue::from(format!("event {i}"))
                } else {
                    CellValue::Null
                }
            })
            .collect(),
    );
    let home = Column::new(
        ColumnSource::new("Home", ValueType::Numeric).with_role(DataRole::Value),
        (0..10_000)
            .map(|i| CellValue::from((i % 3 != 0).then_some(i as f64)))
            .collect(),
    );
    let away = Column::new(
        ColumnSource::new("Away", ValueType::Numeric).with_role(DataRole::Value),
        (0..10_000).map(|i| CellValue::from(i as f64 * 2.0)).collect(),
    );
    let view = TabularView::new(
        vec![category, title],
        vec![
            ValueGroup::new("home", vec![home]),
            ValueGroup::new("away", vec![away]),
        ],
    );
    let config = PulseChartConfig::default();

    c.bench_function("try_convert_10k", |b| {
        b.iter(|| {
            let _ = try_convert(black_box(&view), &config).expect("convert");
        })
    });
}

criterion_group!(
    benches,
    bench_build_series_10k,
    bench_domains_10k,
    bench_convert_10k
);
criterion_main!(benches);
