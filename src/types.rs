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

//! Common type definitions used throughout the crate.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use datafusion::scalar::ScalarValue;

/// A row as returned by a [`RowSource`](crate::source::RowSource).
///
/// `row[i]` holds the value of `TableMetadata::columns()[i]`.
pub type SourceRow = Vec<ScalarValue>;

/// A row re-ordered to match the requested columns.
///
/// `row[j]` holds the value of the `j`-th requested column.
pub type ProjectedRow = Vec<ScalarValue>;

/// Folds a column name for case-insensitive comparison.
pub(crate) fn fold_name(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

/// Compares two column names ignoring letter case, without allocating.
pub(crate) fn names_match(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// A column of a source table, as described by its metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnMetadata {
    name: String,
    data_type: DataType,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

impl fmt::Display for ColumnMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.data_type)
    }
}

/// A column requested by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnHandle {
    name: String,
    data_type: DataType,
}

impl ColumnHandle {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }
}

impl From<&Field> for ColumnHandle {
    fn from(field: &Field) -> Self {
        Self::new(field.name().clone(), field.data_type().clone())
    }
}

impl fmt::Display for ColumnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The canonical, ordered column list of a source table.
///
/// Column order here defines the positional meaning of every [`SourceRow`]
/// fetched for the table. Names are expected to be unique ignoring case; when
/// they are not, lookups resolve to the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetadata {
    columns: Vec<ColumnMetadata>,
}

impl TableMetadata {
    pub fn new(columns: Vec<ColumnMetadata>) -> Self {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(fold_name(column.name())) {
                log::warn!(
                    "Column '{}' collides with an earlier column ignoring case; \
                     lookups resolve to the first occurrence",
                    column.name()
                );
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnMetadata] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the Arrow schema of the table. Every field is nullable since
    /// the source makes no promise about missing values.
    pub fn schema(&self) -> SchemaRef {
        Arc::new(Schema::new(
            self.columns
                .iter()
                .map(|c| Field::new(c.name(), c.data_type().clone(), true))
                .collect::<Vec<_>>(),
        ))
    }
}

impl From<&Schema> for TableMetadata {
    fn from(schema: &Schema) -> Self {
        Self::new(
            schema
                .fields()
                .iter()
                .map(|f| ColumnMetadata::new(f.name().clone(), f.data_type().clone()))
                .collect(),
        )
    }
}

impl FromIterator<ColumnMetadata> for TableMetadata {
    fn from_iter<T: IntoIterator<Item = ColumnMetadata>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
