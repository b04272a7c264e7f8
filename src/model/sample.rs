//! Built-in employee directory used by `--demo` and the tests

use super::table_data::{Row, TableData};

pub const DEMO_TITLE: &str = "Employee Directory";

const HEADERS: [&str; 4] = ["First Name", "Last Name", "Position", "Start Date"];

const EMPLOYEES: [[&str; 4]; 12] = [
    ["John", "Doe", "Manager", "2020-01-15"],
    ["Jane", "Smith", "Developer", "2021-03-22"],
    ["Bob", "Johnson", "Designer", "2019-11-08"],
    ["Alice", "Brown", "Analyst", "2022-05-10"],
    ["Charlie", "Wilson", "Developer", "2021-08-17"],
    ["Diana", "Davis", "Manager", "2020-09-03"],
    ["Eve", "Miller", "Designer", "2023-01-12"],
    ["Frank", "Garcia", "Analyst", "2022-12-05"],
    ["Grace", "Martinez", "Developer", "2021-06-28"],
    ["Henry", "Anderson", "Manager", "2019-04-14"],
    ["Ivy", "Taylor", "Designer", "2023-03-07"],
    ["Jack", "Thomas", "Analyst", "2022-10-21"],
];

pub fn employee_headers() -> Vec<String> {
    HEADERS.iter().map(|h| h.to_string()).collect()
}

pub fn employee_rows() -> Vec<Row> {
    EMPLOYEES
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

pub fn employees() -> TableData {
    TableData::new(employee_headers(), employee_rows())
}
