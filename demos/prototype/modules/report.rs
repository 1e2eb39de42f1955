//! A small object graph wired through the container: a clock, a sample
//! store, and a report service depending on both.

use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use binder_di::{Describe, Instance, ParamSpec, TypeDescriptor};

pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        SystemClock
    }

    /// Seconds since the epoch, zero if the system clock is unusable
    pub fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Describe for SystemClock {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("SystemClock", vec![], |_| Ok(Instance::new(SystemClock)))
    }
}

pub struct MetricsStore {
    samples: Vec<f64>,
}

impl MetricsStore {
    pub fn with_samples(samples: Vec<f64>) -> Self {
        MetricsStore { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl Describe for MetricsStore {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("MetricsStore", vec![], |_| {
            Ok(Instance::new(MetricsStore::with_samples(Vec::new())))
        })
    }
}

pub struct ReportService {
    clock: Arc<SystemClock>,
    store: Arc<MetricsStore>,
}

impl ReportService {
    pub fn new(clock: Arc<SystemClock>, store: Arc<MetricsStore>) -> Self {
        ReportService { clock, store }
    }

    pub fn render(&self) -> String {
        let samples = self.store.samples();
        let mean = if samples.is_empty() {
            0.0
        } else {
            samples.iter().sum::<f64>() / samples.len() as f64
        };
        format!(
            "[{}] {} samples, mean {mean:.2}",
            self.clock.now(),
            samples.len(),
        )
    }
}

impl Describe for ReportService {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new(
            "ReportService",
            vec![
                ParamSpec::of_type("SystemClock"),
                ParamSpec::of_type("MetricsStore"),
            ],
            |arguments| {
                let mut arguments = arguments.into_iter();
                let clock = arguments
                    .next()
                    .ok_or("missing constructor argument")?
                    .downcast::<SystemClock>()?;
                let store = arguments
                    .next()
                    .ok_or("missing constructor argument")?
                    .downcast::<MetricsStore>()?;
                Ok(Instance::new(ReportService::new(clock, store)))
            },
        )
    }
}
