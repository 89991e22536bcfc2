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


use std::any::Any;
use std::sync::Arc;

use arrow::datatypes::SchemaRef;
use async_trait::async_trait;
use datafusion::catalog::Session;
use datafusion::common::TableReference;
use datafusion::datasource::{TableProvider, TableType};
use datafusion::error::Result;
use datafusion::logical_expr::{Expr, TableProviderFilterPushDown};
use datafusion::physical_plan::ExecutionPlan;

use crate::physical_plan::exec::record_set::RecordSetExec;
use crate::provider::RecordSetProvider;
use crate::types::ColumnHandle;

/// A DataFusion [`TableProvider`] over one table of a
/// [`RowSource`](crate::source::RowSource).
///
/// The schema is taken from the table metadata once, when the table is
/// created. Scans translate DataFusion's projection into requested columns
/// and defer all row fetching to [`RecordSetExec`]. Filters are never pushed
/// down and `limit` is left to the operators above the scan.
#[derive(Debug)]
pub struct SourceTable {
    provider: Arc<RecordSetProvider>,
    table: TableReference,
    schema: SchemaRef,
}

impl SourceTable {
    /// Creates a table, fetching its metadata to build the schema.
    pub async fn try_new(
        provider: Arc<RecordSetProvider>,
        table: impl Into<TableReference>,
    ) -> Result<Self> {
        let table = table.into();
        let schema = provider.table_metadata(&table).await?.schema();
        Ok(Self {
            provider,
            table,
            schema,
        })
    }

    pub fn table(&self) -> &TableReference {
        &self.table
    }

    /// Builds the requested columns, and their output schema, for a scan
    /// projection. `None` requests every column in native order.
    fn requested_columns(
        &self,
        projection: Option<&Vec<usize>>,
    ) -> Result<(Vec<ColumnHandle>, SchemaRef)> {
        let schema = match projection {
            Some(indices) => Arc::new(self.schema.project(indices)?),
            None => self.schema.clone(),
        };
        let columns = schema
            .fields()
            .iter()
            .map(|field| ColumnHandle::from(field.as_ref()))
            .collect();
        Ok((columns, schema))
    }
}

#[async_trait]
impl TableProvider for SourceTable {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    fn table_type(&self) -> TableType {
        self.provider.options().table_type
    }

    async fn scan(
        &self,
        _state: &dyn Session,
        projection: Option<&Vec<usize>>,
        _filters: &[Expr],
        _limit: Option<usize>,
    ) -> Result<Arc<dyn ExecutionPlan>> {
        let (columns, schema) = self.requested_columns(projection)?;
        log::debug!(
            "Planning scan of {} with projection {:?}",
            self.table,
            projection
        );
        Ok(Arc::new(RecordSetExec::try_new(
            self.provider.clone(),
            self.table.clone(),
            columns,
            schema,
        )?))
    }

    fn supports_filters_pushdown(
        &self,
        filters: &[&Expr],
    ) -> Result<Vec<TableProviderFilterPushDown>> {
        Ok(vec![TableProviderFilterPushDown::Unsupported; filters.len()])
    }
}
