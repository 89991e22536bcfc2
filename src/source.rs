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

use std::collections::HashMap;

use async_trait::async_trait;
use datafusion::common::{DataFusionError, Result, TableReference};

use crate::types::{SourceRow, TableMetadata};

/// Fetches table metadata and raw rows from an external data source.
///
/// Implementations own all I/O. The rows returned by [`fetch_rows`] must be
/// positionally aligned with the columns returned by
/// [`fetch_table_metadata`] for the same table.
///
/// [`fetch_rows`]: RowSource::fetch_rows
/// [`fetch_table_metadata`]: RowSource::fetch_table_metadata
#[async_trait]
pub trait RowSource: Send + Sync + std::fmt::Debug {
    /// Returns the canonical column list of `table`.
    async fn fetch_table_metadata(&self, table: &TableReference) -> Result<TableMetadata>;

    /// Returns every row of `table`, each in native column order.
    async fn fetch_rows(&self, table: &TableReference) -> Result<Vec<SourceRow>>;
}

#[derive(Debug, Clone)]
struct MemoryTable {
    metadata: TableMetadata,
    rows: Vec<SourceRow>,
}

/// A [`RowSource`] serving tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    tables: HashMap<TableReference, MemoryTable>,
}

impl MemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) `table`.
    pub fn with_table(
        mut self,
        table: impl Into<TableReference>,
        metadata: TableMetadata,
        rows: Vec<SourceRow>,
    ) -> Self {
        self.tables
            .insert(table.into(), MemoryTable { metadata, rows });
        self
    }

    fn table(&self, table: &TableReference) -> Result<&MemoryTable> {
        self.tables
            .get(table)
            .ok_or_else(|| DataFusionError::Plan(format!("Table not found: {table}")))
    }
}

#[async_trait]
impl RowSource for MemoryRowSource {
    async fn fetch_table_metadata(&self, table: &TableReference) -> Result<TableMetadata> {
        Ok(self.table(table)?.metadata.clone())
    }

    async fn fetch_rows(&self, table: &TableReference) -> Result<Vec<SourceRow>> {
        Ok(self.table(table)?.rows.clone())
    }
}
