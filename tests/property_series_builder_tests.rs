use chrono::{TimeZone, Utc};
use pulse_chart::core::{
    CellValue, ColumnSource, DataLabelSettings, MAX_ORDINAL_STEP, MIN_INTERVAL_MS,
    MissingSecondaryPolicy, Sample, SeriesBuildOptions, SeriesTemplate, ValueType, build_series,
    is_gap, value_domain,
};
use proptest::prelude::*;

const BASE_MILLIS: i64 = 1_700_000_000_000;

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

fn options(is_scalar: bool, is_date_mode: bool) -> SeriesBuildOptions {
    SeriesBuildOptions {
        is_scalar,
        is_date_mode,
        has_secondary_group: true,
        missing_secondary_policy: MissingSecondaryPolicy::Baseline,
        large_value_digits: 6,
    }
}

fn annotation() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z]{0,4}")
}

// Categories advance by 1 or 2 steps, so some neighbours split and some don't.
fn samples_strategy() -> impl Strategy<Value = Vec<Sample>> {
    proptest::collection::vec(
        (
            1u8..=2,
            proptest::option::of(-1_000.0f64..1_000.0),
            proptest::option::of(0.0f64..1_000.0),
            annotation(),
            annotation(),
        ),
        0..64,
    )
    .prop_map(|rows| {
        let mut position = 0.0;
        rows.into_iter()
            .enumerate()
            .map(|(index, (step, primary, secondary, title, description))| {
                position += f64::from(step);
                Sample::new(index, position)
                    .with_primary(primary)
                    .with_secondary(secondary)
                    .with_event(title, description)
            })
            .collect()
    })
}

// Millisecond steps on both sides of the one-minute threshold, plus the
// threshold itself. Returns the samples and the step taken before each one.
fn date_samples_strategy() -> impl Strategy<Value = (Vec<Sample>, Vec<i64>)> {
    proptest::collection::vec(
        (
            prop_oneof![1i64..60_000, Just(60_000i64), 60_001i64..600_000],
            proptest::option::of(-1_000.0f64..1_000.0),
        ),
        0..64,
    )
    .prop_map(|rows| {
        let mut millis = BASE_MILLIS;
        let mut steps = Vec::with_capacity(rows.len());
        let samples = rows
            .into_iter()
            .enumerate()
            .map(|(index, (step, primary))| {
                millis += step;
                steps.push(step);
                let time = Utc
                    .timestamp_millis_opt(millis)
                    .single()
                    .expect("valid timestamp");
                Sample::new(index, CellValue::DateTime(time)).with_primary(primary)
            })
            .collect();
        (samples, steps)
    })
}

fn is_annotated(text: Option<&str>) -> bool {
    text.is_some_and(|text| !text.is_empty())
}

proptest! {
    #[test]
    fn ordinal_mode_preserves_order_and_count(samples in samples_strategy()) {
        let expected: Vec<usize> = samples.iter().map(|sample| sample.category_index).collect();

        let series = build_series(samples, &template(), options(false, false)).expect("build");
        let indices: Vec<usize> = series
            .iter()
            .flat_map(|item| item.data.iter().map(|point| point.category_index))
            .collect();

        prop_assert_eq!(indices, expected);
        prop_assert!(series.iter().all(|item| !item.is_empty()));
    }

    #[test]
    fn ordinal_series_are_split_exactly_at_gaps(samples in samples_strategy()) {
        let series = build_series(samples, &template(), options(false, false)).expect("build");

        for item in &series {
            for pair in item.data.windows(2) {
                prop_assert!(!is_gap(pair[1].x, pair[0].x, false));
            }
        }
        for pair in series.windows(2) {
            let last = pair[0].data.last().and_then(|point| point.x);
            let first = pair[1].data.first().and_then(|point| point.x);
            let (Some(last), Some(first)) = (last, first) else {
                continue;
            };
            prop_assert!(first - last > MAX_ORDINAL_STEP);
        }
    }

    #[test]
    fn date_series_are_split_exactly_at_one_minute_gaps(
        (samples, steps) in date_samples_strategy()
    ) {
        let expected_starts: Vec<usize> = steps
            .iter()
            .enumerate()
            .filter(|(index, step)| *index == 0 || **step > 60_000)
            .map(|(index, _)| index)
            .collect();

        let series = build_series(samples, &template(), options(false, true)).expect("build");

        for item in &series {
            prop_assert!(!item.is_empty());
            for pair in item.data.windows(2) {
                let previous = pair[0].x.expect("date position");
                let current = pair[1].x.expect("date position");
                prop_assert!(current - previous <= MIN_INTERVAL_MS);
            }
        }
        let starts: Vec<usize> = series
            .iter()
            .filter_map(|item| item.data.first().map(|point| point.category_index))
            .collect();
        prop_assert_eq!(starts, expected_starts);
    }

    #[test]
    fn scalar_mode_keeps_present_primary_values_in_order(samples in samples_strategy()) {
        let expected: Vec<usize> = samples
            .iter()
            .filter(|sample| sample.primary.is_some())
            .map(|sample| sample.category_index)
            .collect();

        let series = build_series(samples, &template(), options(true, false)).expect("build");
        let indices: Vec<usize> = series
            .iter()
            .flat_map(|item| item.data.iter().map(|point| point.category_index))
            .collect();

        prop_assert_eq!(indices, expected);
        prop_assert!(series.iter().all(|item| !item.is_empty()));
    }

    #[test]
    fn value_domain_matches_observed_extremes(samples in samples_strategy()) {
        let series = build_series(samples, &template(), options(false, false)).expect("build");
        let values: Vec<f64> = series
            .iter()
            .flat_map(|item| item.data.iter().map(|point| point.value))
            .collect();

        let Some(domain) = value_domain(&series) else {
            prop_assert!(values.is_empty());
            return Ok(());
        };

        let min_y = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(domain.min, min_y.min(-max_y));
        prop_assert_eq!(domain.max, max_y);
    }

    #[test]
    fn tooltips_exist_only_for_annotated_points(samples in samples_strategy()) {
        let annotated: Vec<bool> = samples
            .iter()
            .map(|sample| {
                is_annotated(sample.event_title.as_deref())
                    || is_annotated(sample.event_description.as_deref())
            })
            .collect();
        let descriptions: Vec<Option<String>> = samples
            .iter()
            .map(|sample| sample.event_description.clone().filter(|text| !text.is_empty()))
            .collect();

        let series = build_series(samples, &template(), options(false, false)).expect("build");
        for point in series.iter().flat_map(|item| item.data.iter()) {
            prop_assert_eq!(point.tooltip.is_some(), annotated[point.category_index]);
            if let Some(tooltip) = &point.tooltip {
                prop_assert_eq!(&tooltip.description, &descriptions[point.category_index]);
            }
        }
    }
}
