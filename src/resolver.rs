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

//! Column resolution: matching requested columns against a table's native
//! column list.
//!
//! Resolution runs once per request and produces a [`ColumnIndexMapping`]
//! that the [`projector`](crate::projector) then applies to every row, so no
//! name lookup ever happens per row.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::DEFAULT_FOLDED_INDEX_THRESHOLD;
use crate::error::{RecordSetError, Result};
use crate::types::{fold_name, names_match, ColumnHandle, TableMetadata};

/// Positions of the requested columns within a table's native column order.
///
/// Entry `j` is the index into [`TableMetadata::columns`] (and into every
/// source row) holding the `j`-th requested column. A mapping is only ever
/// produced by [`resolve`], so every entry is in range for the metadata it
/// was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndexMapping {
    indices: Vec<usize>,
}

impl ColumnIndexMapping {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Smallest row width this mapping can be applied to.
    pub fn required_width(&self) -> usize {
        self.indices.iter().max().map_or(0, |max| max + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

/// Resolves `requested` against `table` using the default strategy
/// threshold.
///
/// See [`resolve_with_threshold`].
pub fn resolve(requested: &[ColumnHandle], table: &TableMetadata) -> Result<ColumnIndexMapping> {
    resolve_with_threshold(requested, table, DEFAULT_FOLDED_INDEX_THRESHOLD)
}

/// Resolves each requested column, in order, to the position of the first
/// native column whose name matches ignoring case.
///
/// Tables with at most `folded_index_threshold` columns are scanned linearly
/// per requested column. Wider tables get a case-folded name index built once
/// for the request. Both strategies return the same mapping.
///
/// Fails with [`RecordSetError::UnknownColumn`] on the first requested column
/// with no match.
pub fn resolve_with_threshold(
    requested: &[ColumnHandle],
    table: &TableMetadata,
    folded_index_threshold: usize,
) -> Result<ColumnIndexMapping> {
    let indices = if table.len() > folded_index_threshold {
        resolve_indexed(requested, table)?
    } else {
        resolve_linear(requested, table)?
    };

    log::trace!(
        "Resolved columns [{}] to native positions {:?}",
        requested
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        indices
    );

    Ok(ColumnIndexMapping { indices })
}

fn resolve_linear(requested: &[ColumnHandle], table: &TableMetadata) -> Result<Vec<usize>> {
    requested
        .iter()
        .map(|column| {
            table
                .columns()
                .iter()
                .position(|native| names_match(native.name(), column.name()))
                .ok_or_else(|| unknown_column(column))
        })
        .collect()
}

fn resolve_indexed(requested: &[ColumnHandle], table: &TableMetadata) -> Result<Vec<usize>> {
    let mut positions = HashMap::with_capacity(table.len());
    for (index, native) in table.columns().iter().enumerate() {
        // first occurrence wins
        if let Entry::Vacant(entry) = positions.entry(fold_name(native.name())) {
            entry.insert(index);
        }
    }

    requested
        .iter()
        .map(|column| {
            positions
                .get(&fold_name(column.name()))
                .copied()
                .ok_or_else(|| unknown_column(column))
        })
        .collect()
}

fn unknown_column(column: &ColumnHandle) -> RecordSetError {
    RecordSetError::UnknownColumn {
        column: column.name().to_string(),
    }
}
