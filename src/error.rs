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

//! Error type shared by the record set pipeline.

use arrow::error::ArrowError;
use datafusion_common::DataFusionError;
use thiserror::Error;

/// Errors raised while resolving, projecting or packaging a record set.
///
/// Every variant is a hard failure for the request that produced it: the
/// pipeline never retries and never hands back a partial [`RecordSet`].
///
/// [`RecordSet`]: crate::record_set::RecordSet
#[derive(Error, Debug)]
pub enum RecordSetError {
    /// A requested column has no case-insensitive match in the table metadata.
    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    /// A fetched row is shorter than the resolved column mapping requires.
    ///
    /// This means the rows returned by the source drifted away from the
    /// metadata describing them.
    #[error("Row {row} has {len} values but column index {index} was requested")]
    IndexOutOfRange { row: usize, index: usize, len: usize },

    /// The schema handed to [`RecordSet::to_record_batch`] does not have one
    /// field per record set column.
    ///
    /// [`RecordSet::to_record_batch`]: crate::record_set::RecordSet::to_record_batch
    #[error("Schema has {actual} fields but the record set has {expected} columns")]
    SchemaMismatch { expected: usize, actual: usize },

    /// Failure reported by the row source or while casting values.
    #[error(transparent)]
    DataFusion(#[from] DataFusionError),

    /// Failure while building Arrow arrays.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

pub type Result<T, E = RecordSetError> = std::result::Result<T, E>;

impl From<RecordSetError> for DataFusionError {
    fn from(e: RecordSetError) -> Self {
        match e {
            RecordSetError::DataFusion(e) => e,
            RecordSetError::Arrow(e) => DataFusionError::from(e),
            other => DataFusionError::External(Box::new(other)),
        }
    }
}
