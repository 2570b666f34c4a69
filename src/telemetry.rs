//! Optional log output for the conversion pipeline.
//!
//! Conversion failures, series flushes and axis fallbacks are reported as
//! `tracing` events with structured fields. Hosts that already run a
//! subscriber see them there; others can call [`init_default_tracing`].

/// Installs a compact stderr subscriber showing target and level, so pipeline
/// events such as `pulse conversion produced no dataset` can be traced back to
/// `pulse_chart::api` or `pulse_chart::core`.
///
/// `RUST_LOG` selects the filter (`pulse_chart=debug` shows every update);
/// without it only `info` and above are printed. Returns `false` when the
/// `telemetry` feature is off or another global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
