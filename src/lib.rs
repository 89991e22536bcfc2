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


//! # DataFusion Record Set Provider
//!
//! This crate turns the rows of an external data source into record sets shaped
//! for a DataFusion query. A source hands back whole rows in its own native
//! column order; a query asks for some of those columns, in an order of its
//! choosing, possibly differing in letter case from the source's names. The
//! crate bridges the two.
//!
//! ## Pipeline
//!
//! Every request runs the same stateless, single-pass pipeline:
//!
//! 1. **Resolve** ([`resolver::resolve`]): each requested column is matched,
//!    ignoring case, against the table's [`types::TableMetadata`]. The result is
//!    a [`resolver::ColumnIndexMapping`] holding one native position per
//!    requested column. Unknown columns fail the request here.
//! 2. **Project** ([`projector::project`]): the mapping is applied to every
//!    source row, so row `i` of the output holds the requested values of source
//!    row `i`. No per-row name lookups happen.
//! 3. **Assemble** ([`record_set::assemble`]): projected rows are paired with
//!    the native types of their columns into an immutable
//!    [`record_set::RecordSet`].
//!
//! [`provider::RecordSetProvider::provide_record_set`] composes the three steps
//! with the two fetches of a [`source::RowSource`]: table metadata first, rows
//! second.
//!
//! ```text
//! fetch_table_metadata ──► resolve ──┐
//!                                    ├──► project ──► assemble ──► RecordSet
//! fetch_rows ────────────────────────┘
//! ```
//!
//! ## DataFusion integration
//!
//! - [`table::SourceTable`]: a `TableProvider` whose schema is the table
//!   metadata. `scan` maps DataFusion's projection to requested columns.
//! - [`physical_plan::exec::record_set::RecordSetExec`]: a single-partition
//!   `ExecutionPlan` that runs the pipeline when executed and emits the record
//!   set as one `RecordBatch`.
//!
//! ## Errors
//!
//! Failures are reported as [`error::RecordSetError`]. Both contract
//! violations (an unknown column, a row shorter than the metadata promises)
//! fail the whole request; partial record sets are never produced.

pub mod config;
pub mod error;
pub mod physical_plan;
pub mod projector;
pub mod provider;
pub mod record_set;
pub mod resolver;
pub mod source;
pub mod table;
pub mod types;

pub use error::{RecordSetError, Result};
pub use provider::RecordSetProvider;
pub use record_set::RecordSet;
