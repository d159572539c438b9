use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::TrackerError;

/// Runtime counters for record handling, registered in their own registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    records_parsed: IntCounter,
    records_rejected: IntCounterVec,
    reports: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let records_parsed = IntCounter::new(
            "tracker_records_parsed_total",
            "Records that passed validation",
        )?;
        let records_rejected = IntCounterVec::new(
            Opts::new(
                "tracker_records_rejected_total",
                "Records rejected, by error kind",
            ),
            &["reason"],
        )?;
        let reports = IntCounterVec::new(
            Opts::new("tracker_reports_total", "Reports produced, by record kind"),
            &["kind"],
        )?;

        registry.register(Box::new(records_parsed.clone()))?;
        registry.register(Box::new(records_rejected.clone()))?;
        registry.register(Box::new(reports.clone()))?;

        Ok(Self {
            registry,
            records_parsed,
            records_rejected,
            reports,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Text exposition of everything in the registry.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        if let Err(e) = TextEncoder::new().encode(&self.registry.gather(), &mut buf) {
            log::warn!("failed to encode metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

pub fn records_parsed_total(metrics: &Metrics) -> &IntCounter {
    &metrics.records_parsed
}

pub fn records_rejected_total(metrics: &Metrics, err: &TrackerError) -> IntCounter {
    metrics.records_rejected.with_label_values(&[err.kind()])
}

pub fn reports_total(metrics: &Metrics, kind: &str) -> IntCounter {
    metrics.reports.with_label_values(&[kind])
}

static GLOBAL: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(m) => Some(m),
    Err(e) => {
        log::error!("failed to set up tracker metrics: {e}");
        None
    }
});

/// Process-wide counters used by the free report functions.
pub fn global() -> Option<&'static Metrics> {
    GLOBAL.as_ref()
}
