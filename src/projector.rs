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

//! Row projection: applying a [`ColumnIndexMapping`] to source rows.

use datafusion::scalar::ScalarValue;

use crate::error::{RecordSetError, Result};
use crate::resolver::ColumnIndexMapping;
use crate::types::{ProjectedRow, SourceRow};

/// Re-orders every row so that value `j` of output row `i` is
/// `rows[i][mapping[j]]`.
///
/// Output rows keep the order of the input rows. Values are passed through
/// untouched: no filtering, deduplication or coercion happens here. Trailing
/// values beyond the mapping are dropped.
///
/// Fails with [`RecordSetError::IndexOutOfRange`] on the first row shorter
/// than [`ColumnIndexMapping::required_width`]; no rows are returned in that
/// case.
pub fn project(mapping: &ColumnIndexMapping, rows: Vec<SourceRow>) -> Result<Vec<ProjectedRow>> {
    let required = mapping.required_width();
    let indices = mapping.indices();

    // A value can be moved out of the source row at its last use in the
    // mapping; earlier uses of a repeated column clone it.
    let last_use: Vec<bool> = indices
        .iter()
        .enumerate()
        .map(|(j, index)| !indices[j + 1..].contains(index))
        .collect();

    rows.into_iter()
        .enumerate()
        .map(|(row_number, mut row)| {
            if row.len() < required {
                return Err(RecordSetError::IndexOutOfRange {
                    row: row_number,
                    index: required - 1,
                    len: row.len(),
                });
            }
            Ok(indices
                .iter()
                .zip(&last_use)
                .map(|(&index, &last)| {
                    if last {
                        std::mem::replace(&mut row[index], ScalarValue::Null)
                    } else {
                        row[index].clone()
                    }
                })
                .collect())
        })
        .collect()
}
