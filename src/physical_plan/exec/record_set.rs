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
use std::fmt;
use std::sync::Arc;

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use datafusion::common::{Statistics, TableReference};
use datafusion::error::{DataFusionError, Result};
use datafusion::execution::context::TaskContext;
use datafusion::execution::SendableRecordBatchStream;
use datafusion::physical_plan::metrics::{BaselineMetrics, ExecutionPlanMetricsSet, MetricsSet};
use datafusion::physical_plan::stream::RecordBatchStreamAdapter;
use datafusion::physical_plan::{DisplayAs, DisplayFormatType, ExecutionPlan, PlanProperties};
use futures::stream;

use crate::physical_plan::create_plan_properties_for_single_batch;
use crate::provider::RecordSetProvider;
use crate::types::ColumnHandle;

/// Physical plan node producing the record set of a table for a list of
/// requested columns.
///
/// Executing the plan runs [`RecordSetProvider::provide_record_set`] and
/// emits the whole record set as a single [`RecordBatch`]. The plan always has
/// exactly one partition and no children.
#[derive(Debug)]
pub struct RecordSetExec {
    provider: Arc<RecordSetProvider>,
    table: TableReference,
    columns: Vec<ColumnHandle>,
    /// Output schema, one field per requested column.
    schema: SchemaRef,
    plan_properties: PlanProperties,
    metrics: ExecutionPlanMetricsSet,
}

impl RecordSetExec {
    /// Create a new `RecordSetExec` plan.
    pub fn try_new(
        provider: Arc<RecordSetProvider>,
        table: TableReference,
        columns: Vec<ColumnHandle>,
        schema: SchemaRef,
    ) -> Result<Self> {
        if schema.fields().len() != columns.len() {
            return Err(DataFusionError::Plan(format!(
                "RecordSetExec for {table} requests {} columns but its schema has {} fields",
                columns.len(),
                schema.fields().len()
            )));
        }

        let plan_properties = create_plan_properties_for_single_batch(schema.clone());
        Ok(Self {
            provider,
            table,
            columns,
            schema,
            plan_properties,
            metrics: ExecutionPlanMetricsSet::new(),
        })
    }

    pub fn table(&self) -> &TableReference {
        &self.table
    }

    pub fn columns(&self) -> &[ColumnHandle] {
        &self.columns
    }
}

impl DisplayAs for RecordSetExec {
    fn fmt_as(&self, t: DisplayFormatType, f: &mut fmt::Formatter) -> fmt::Result {
        match t {
            DisplayFormatType::Default | DisplayFormatType::Verbose => {
                let columns: Vec<_> = self.columns.iter().map(|c| c.name()).collect();
                write!(
                    f,
                    "RecordSetExec: table={}, columns=[{}]",
                    self.table,
                    columns.join(", ")
                )
            }
            DisplayFormatType::TreeRender => write!(f, "RecordSetExec"),
        }
    }
}

impl ExecutionPlan for RecordSetExec {
    fn name(&self) -> &str {
        "RecordSetExec"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    fn properties(&self) -> &PlanProperties {
        &self.plan_properties
    }

    fn children(&self) -> Vec<&Arc<dyn ExecutionPlan>> {
        vec![]
    }

    fn with_new_children(
        self: Arc<Self>,
        children: Vec<Arc<dyn ExecutionPlan>>,
    ) -> Result<Arc<dyn ExecutionPlan>> {
        if !children.is_empty() {
            return Err(DataFusionError::Internal(
                "RecordSetExec does not accept children".to_string(),
            ));
        }
        Ok(self)
    }

    fn execute(
        &self,
        partition: usize,
        _context: Arc<TaskContext>,
    ) -> Result<SendableRecordBatchStream> {
        if partition != 0 {
            return Err(DataFusionError::Internal(format!(
                "RecordSetExec only supports a single partition, got partition {partition}"
            )));
        }

        let provider = self.provider.clone();
        let table = self.table.clone();
        let columns = self.columns.clone();
        let schema = self.schema.clone();
        let baseline_metrics = BaselineMetrics::new(&self.metrics, partition);

        let fetch = async move {
            let record_set = provider.provide_record_set(&table, &columns).await?;
            let timer = baseline_metrics.elapsed_compute().timer();
            let batch = record_set.to_record_batch(schema)?;
            timer.done();
            baseline_metrics.record_output(batch.num_rows());
            baseline_metrics.done();
            Ok::<RecordBatch, DataFusionError>(batch)
        };

        Ok(Box::pin(RecordBatchStreamAdapter::new(
            self.schema.clone(),
            stream::once(fetch),
        )))
    }

    fn metrics(&self) -> Option<MetricsSet> {
        Some(self.metrics.clone_inner())
    }

    fn statistics(&self) -> Result<Statistics> {
        Ok(Statistics::new_unknown(&self.schema()))
    }
}
