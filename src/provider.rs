// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::Arc;

use datafusion::common::TableReference;

use crate::config::RecordSetOptions;
use crate::error::Result;
use crate::projector::project;
use crate::record_set::{assemble, RecordSet};
use crate::resolver::resolve_with_threshold;
use crate::source::RowSource;
use crate::types::{ColumnHandle, TableMetadata};

/// Produces [`RecordSet`]s for requested columns of tables served by a
/// [`RowSource`].
///
/// The provider keeps no per-request state and can be shared between
/// concurrent queries behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RecordSetProvider {
    source: Arc<dyn RowSource>,
    options: RecordSetOptions,
}

impl RecordSetProvider {
    pub fn new(source: Arc<dyn RowSource>) -> Self {
        Self {
            source,
            options: RecordSetOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RecordSetOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RecordSetOptions {
        &self.options
    }

    pub fn source(&self) -> &Arc<dyn RowSource> {
        &self.source
    }

    /// Returns the metadata of `table` as reported by the source.
    pub async fn table_metadata(&self, table: &TableReference) -> Result<TableMetadata> {
        Ok(self.source.fetch_table_metadata(table).await?)
    }

    /// Fetches `table` and re-projects its rows onto `columns`.
    ///
    /// Column `j` of the returned set is the native column matching
    /// `columns[j]` ignoring case, typed as the table metadata declares it.
    /// Metadata is fetched and resolved before any row is requested from the
    /// source, so an unknown column never costs a row fetch.
    pub async fn provide_record_set(
        &self,
        table: &TableReference,
        columns: &[ColumnHandle],
    ) -> Result<RecordSet> {
        let metadata = self.table_metadata(table).await?;
        let mapping =
            resolve_with_threshold(columns, &metadata, self.options.folded_index_threshold)?;

        let rows = self.source.fetch_rows(table).await?;
        let num_source_rows = rows.len();
        let projected = project(&mapping, rows)?;
        let record_set = assemble(&mapping, &metadata, projected);

        log::debug!(
            "Provided record set for {table}: {} of {} columns, {num_source_rows} rows",
            record_set.num_columns(),
            metadata.len(),
        );
        Ok(record_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordSetError;
    use crate::source::MemoryRowSource;
    use crate::types::ColumnMetadata;
    use arrow::datatypes::DataType;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use datafusion::common::DataFusionError;
    use datafusion::scalar::ScalarValue;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn people() -> TableMetadata {
        TableMetadata::new(vec![
            ColumnMetadata::new("id", DataType::Int32),
            ColumnMetadata::new("Name", DataType::Utf8),
            ColumnMetadata::new("age", DataType::Int32),
        ])
    }

    /// Counts row fetches on top of an in-memory source.
    #[derive(Debug)]
    struct CountingSource {
        inner: MemoryRowSource,
        row_fetches: AtomicUsize,
    }

    #[async_trait]
    impl RowSource for CountingSource {
        async fn fetch_table_metadata(
            &self,
            table: &TableReference,
        ) -> datafusion::common::Result<TableMetadata> {
            self.inner.fetch_table_metadata(table).await
        }

        async fn fetch_rows(
            &self,
            table: &TableReference,
        ) -> datafusion::common::Result<Vec<Vec<ScalarValue>>> {
            self.row_fetches.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_rows(table).await
        }
    }

    fn counting_source() -> Arc<CountingSource> {
        Arc::new(CountingSource {
            inner: MemoryRowSource::new().with_table(
                "people",
                people(),
                vec![vec![
                    ScalarValue::Int32(Some(1)),
                    ScalarValue::Utf8(Some("Ann".to_string())),
                    ScalarValue::Int32(Some(30)),
                ]],
            ),
            row_fetches: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn provides_projected_record_set() {
        let source = counting_source();
        let provider = RecordSetProvider::new(source.clone());
        let columns = [
            ColumnHandle::new("age", DataType::Int32),
            ColumnHandle::new("id", DataType::Int32),
        ];
        let set = provider
            .provide_record_set(&TableReference::bare("people"), &columns)
            .await
            .unwrap();
        assert_eq!(set.types(), [DataType::Int32, DataType::Int32]);
        assert_eq!(
            set.rows(),
            [vec![ScalarValue::Int32(Some(30)), ScalarValue::Int32(Some(1))]]
        );
        assert_eq!(source.row_fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_column_fails_before_rows_are_fetched() {
        let source = counting_source();
        let provider = RecordSetProvider::new(source.clone());
        let err = provider
            .provide_record_set(
                &TableReference::bare("people"),
                &[ColumnHandle::new("salary", DataType::Int64)],
            )
            .await
            .unwrap_err();
        assert_matches!(err, RecordSetError::UnknownColumn { column } if column == "salary");
        assert_eq!(source.row_fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn source_errors_propagate() {
        let provider = RecordSetProvider::new(counting_source());
        let err = provider
            .provide_record_set(&TableReference::bare("missing"), &[])
            .await
            .unwrap_err();
        assert_matches!(err, RecordSetError::DataFusion(DataFusionError::Plan(_)));
    }

    #[tokio::test]
    async fn folded_index_gives_same_result() {
        let source = counting_source();
        let columns = [
            ColumnHandle::new("NAME", DataType::Utf8),
            ColumnHandle::new("Age", DataType::Int32),
        ];
        let table = TableReference::bare("people");
        let linear = RecordSetProvider::new(source.clone())
            .provide_record_set(&table, &columns)
            .await
            .unwrap();
        let indexed = RecordSetProvider::new(source)
            .with_options(RecordSetOptions::new().with_folded_index_threshold(0))
            .provide_record_set(&table, &columns)
            .await
            .unwrap();
        assert_eq!(linear, indexed);
    }
}
