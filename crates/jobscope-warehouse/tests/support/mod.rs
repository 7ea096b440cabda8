//! On-disk warehouse fixtures for integration tests.

use std::path::{Path, PathBuf};

use duckdb::Connection;

pub const SEED: &str = "
CREATE TABLE job_postings (
    title TEXT,
    company_name TEXT,
    max_salary DOUBLE,
    pay_period TEXT,
    formatted_work_type TEXT
);
CREATE TABLE companies (company_id BIGINT, company_size INTEGER);
CREATE TABLE company_industries (company_id BIGINT, industry TEXT);

INSERT INTO companies VALUES (10, 0), (20, 2), (30, 9);
INSERT INTO company_industries VALUES
    (10, 'Software Development'),
    (20, 'Financial Services'),
    (30, 'Retail');

INSERT INTO job_postings VALUES
    ('Software Engineer', '10', 180000, 'YEARLY', 'Full-time'),
    ('Software Engineer', '10', 165000, 'YEARLY', 'Full-time'),
    ('Data Analyst',      '10', 95000,  'YEARLY', 'Contract'),
    ('Teller',            '20', 22,     'HOURLY', 'Part-time'),
    ('Teller',            '20', NULL,   NULL,     'Part-time'),
    ('Branch Manager',    '20', 110000, 'YEARLY', 'Full-time'),
    ('Cashier',           '30', 15,     'HOURLY', NULL),
    ('Recruiter',         'Globex Staffing', 70000, 'YEARLY', 'Full-time');
";

/// Write a seeded `DuckDB` file under `dir` and return its path.
pub fn seeded_file(dir: &Path) -> PathBuf {
    let path = dir.join("warehouse.duckdb");
    let conn = Connection::open(&path).expect("create warehouse file");
    conn.execute_batch(SEED).expect("seed warehouse");
    drop(conn);
    path
}
