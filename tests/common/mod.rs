pub mod employee_source;

use std::sync::Arc;

use datafusion::arrow::array::{Int32Array, RecordBatch, StringArray};
use datafusion::execution::context::SessionContext;
use datafusion_record_set_provider::provider::RecordSetProvider;
use datafusion_record_set_provider::source::RowSource;
use datafusion_record_set_provider::table::SourceTable;
use employee_source::{employee_source, EMPLOYEES};

pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Helper function to setup test environment
pub async fn setup_test_env() -> SessionContext {
    setup_test_env_with(Arc::new(employee_source())).await
}

/// Registers the `employees` table of `source` in a fresh context.
pub async fn setup_test_env_with(source: Arc<dyn RowSource>) -> SessionContext {
    init_logging();

    let ctx = SessionContext::new();
    let provider = Arc::new(RecordSetProvider::new(source));
    let table = SourceTable::try_new(provider, EMPLOYEES).await.unwrap();
    ctx.register_table(EMPLOYEES, Arc::new(table)).unwrap();

    ctx
}

pub fn extract_strings(results: &[RecordBatch], column: usize) -> Vec<String> {
    let mut values = Vec::new();
    for batch in results {
        let array = batch
            .column(column)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        values.extend(array.iter().flatten().map(str::to_string));
    }
    values
}

pub fn extract_ints(results: &[RecordBatch], column: usize) -> Vec<i32> {
    let mut values = Vec::new();
    for batch in results {
        let array = batch
            .column(column)
            .as_any()
            .downcast_ref::<Int32Array>()
            .unwrap();
        values.extend(array.iter().flatten());
    }
    values
}

pub fn column_names(results: &[RecordBatch]) -> Vec<String> {
    results
        .first()
        .map(|batch| {
            batch
                .schema()
                .fields()
                .iter()
                .map(|f| f.name().clone())
                .collect()
        })
        .unwrap_or_default()
}
