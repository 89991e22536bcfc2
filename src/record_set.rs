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

//! The in-memory result of a record set request.

use arrow::array::{new_empty_array, ArrayRef, RecordBatch, RecordBatchOptions};
use arrow::datatypes::{DataType, SchemaRef};
use datafusion::scalar::ScalarValue;

use crate::error::{RecordSetError, Result};
use crate::resolver::ColumnIndexMapping;
use crate::types::{ProjectedRow, TableMetadata};

/// Typed, ordered columns paired with the rows holding their values.
///
/// A `RecordSet` cannot be modified once assembled. Column `j` has type
/// `types()[j]` and value `row[j]` in every row.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    types: Vec<DataType>,
    rows: Vec<ProjectedRow>,
}

/// Packages projected rows with the types of the columns they were projected
/// from, in requested order.
///
/// `mapping` must have been resolved against `table`.
pub fn assemble(
    mapping: &ColumnIndexMapping,
    table: &TableMetadata,
    rows: Vec<ProjectedRow>,
) -> RecordSet {
    let types = mapping
        .iter()
        .map(|index| table.columns()[index].data_type().clone())
        .collect();
    RecordSet { types, rows }
}

impl RecordSet {
    pub fn types(&self) -> &[DataType] {
        &self.types
    }

    pub fn rows(&self) -> &[ProjectedRow] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows, each as a slice of values in column order.
    pub fn iter(&self) -> impl Iterator<Item = &[ScalarValue]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn into_rows(self) -> Vec<ProjectedRow> {
        self.rows
    }

    /// Builds a single [`RecordBatch`] holding every row of the set.
    ///
    /// `schema` supplies the column names and must have exactly one field
    /// per column. Null values become nulls of the column type and values of
    /// a different type are cast to the column type.
    pub fn to_record_batch(&self, schema: SchemaRef) -> Result<RecordBatch> {
        if schema.fields().len() != self.types.len() {
            return Err(RecordSetError::SchemaMismatch {
                expected: self.types.len(),
                actual: schema.fields().len(),
            });
        }

        let columns = self
            .types
            .iter()
            .enumerate()
            .map(|(j, data_type)| self.column_array(j, data_type))
            .collect::<Result<Vec<_>>>()?;

        let options = RecordBatchOptions::new().with_row_count(Some(self.rows.len()));
        Ok(RecordBatch::try_new_with_options(schema, columns, &options)?)
    }

    fn column_array(&self, column: usize, data_type: &DataType) -> Result<ArrayRef> {
        if self.rows.is_empty() {
            return Ok(new_empty_array(data_type));
        }
        let values = self
            .rows
            .iter()
            .map(|row| coerce_value(&row[column], data_type))
            .collect::<Result<Vec<_>>>()?;
        Ok(ScalarValue::iter_to_array(values)?)
    }
}

fn coerce_value(value: &ScalarValue, data_type: &DataType) -> Result<ScalarValue> {
    if value.is_null() {
        return Ok(ScalarValue::try_from(data_type)?);
    }
    if value.data_type() == *data_type {
        return Ok(value.clone());
    }
    Ok(value.cast_to(data_type)?)
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ProjectedRow;
    type IntoIter = std::slice::Iter<'a, ProjectedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
