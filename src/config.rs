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

//! Tunables for the record set pipeline.

use datafusion::datasource::TableType;

/// Native column count above which column resolution switches from a linear
/// scan to a case-folded name index.
pub const DEFAULT_FOLDED_INDEX_THRESHOLD: usize = 32;

/// Options carried by a [`RecordSetProvider`](crate::provider::RecordSetProvider).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSetOptions {
    /// Tables with more native columns than this are resolved through a
    /// precomputed case-folded name index instead of a linear scan.
    pub folded_index_threshold: usize,
    /// Table type reported by [`SourceTable`](crate::table::SourceTable).
    pub table_type: TableType,
}

impl Default for RecordSetOptions {
    fn default() -> Self {
        Self {
            folded_index_threshold: DEFAULT_FOLDED_INDEX_THRESHOLD,
            table_type: TableType::Base,
        }
    }
}

impl RecordSetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_folded_index_threshold(mut self, threshold: usize) -> Self {
        self.folded_index_threshold = threshold;
        self
    }

    pub fn with_table_type(mut self, table_type: TableType) -> Self {
        self.table_type = table_type;
        self
    }
}
