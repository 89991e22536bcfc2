use arrow::datatypes::DataType;
use datafusion::scalar::ScalarValue;
use datafusion_record_set_provider::source::MemoryRowSource;
use datafusion_record_set_provider::types::{ColumnMetadata, SourceRow, TableMetadata};

pub const EMPLOYEES: &str = "employees";

// +----+---------+-----+-------------+
// | id | name    | age | department  |
// +----+---------+-----+-------------+
// | 1  | Alice   | 25  | Engineering |
// | 2  | Bob     | 30  | Sales       |
// | 3  | Charlie | 35  | Marketing   |
// | 4  | David   | 28  | Engineering |
// | 5  | Eve     | 32  | Sales       |
// +----+---------+-----+-------------+
pub fn employee_metadata() -> TableMetadata {
    TableMetadata::new(vec![
        ColumnMetadata::new("id", DataType::Int32),
        ColumnMetadata::new("name", DataType::Utf8),
        ColumnMetadata::new("age", DataType::Int32),
        ColumnMetadata::new("department", DataType::Utf8),
    ])
}

pub fn employee(id: i32, name: &str, age: i32, department: &str) -> SourceRow {
    vec![
        ScalarValue::Int32(Some(id)),
        ScalarValue::Utf8(Some(name.to_string())),
        ScalarValue::Int32(Some(age)),
        ScalarValue::Utf8(Some(department.to_string())),
    ]
}

pub fn employee_rows() -> Vec<SourceRow> {
    vec![
        employee(1, "Alice", 25, "Engineering"),
        employee(2, "Bob", 30, "Sales"),
        employee(3, "Charlie", 35, "Marketing"),
        employee(4, "David", 28, "Engineering"),
        employee(5, "Eve", 32, "Sales"),
    ]
}

pub fn employee_source() -> MemoryRowSource {
    MemoryRowSource::new().with_table(EMPLOYEES, employee_metadata(), employee_rows())
}
