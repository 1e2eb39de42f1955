use binder_config::{loader, RawBinding};
use binder_di::{Recipe, TypeRegistry, Value};

use crate::modules::report::{MetricsStore, ReportService, SystemClock};

mod modules;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut types = TypeRegistry::new();
    types
        .register::<SystemClock>()
        .register::<MetricsStore>()
        .register::<ReportService>();

    let container = loader::from_bindings_with_types(
        types,
        vec![
            // a pre-built store, returned as-is on every request
            RawBinding::new()
                .identifier("MetricsStore")
                .recipe(Recipe::instance(MetricsStore::with_samples(vec![
                    12.0, 14.5, 9.8,
                ]))),
            // the clock is built lazily, once
            RawBinding::new()
                .identifier("SystemClock")
                .recipe(Recipe::factory(|_| Ok(Value::object(SystemClock::new()))))
                .single(true),
            // the report service is wired up automatically from its
            // constructor description, as soon as the batch is loaded
            RawBinding::new()
                .identifier("report")
                .recipe(Recipe::type_name("ReportService"))
                .eager(true),
        ],
    )?;

    tracing::debug!("Container ready: {:?}", container);

    let report = container.require::<ReportService>("report")?;
    println!("{}", report.render());

    Ok(())
}
