//! Seeded in-memory contexts for command tests.

use jobscope_config::JobscopeConfig;
use jobscope_warehouse::Warehouse;

use crate::context::AppContext;

const SCHEMA: &str = "
CREATE TABLE job_postings (
    title TEXT,
    company_name TEXT,
    max_salary DOUBLE,
    pay_period TEXT,
    formatted_work_type TEXT
);
CREATE TABLE companies (company_id BIGINT, company_size INTEGER);
CREATE TABLE company_industries (company_id BIGINT, industry TEXT);
";

const ROWS: &str = "
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

/// Context over three companies and eight postings, one of which has a
/// non-numeric company identifier.
pub fn seeded_context() -> AppContext {
    context_with(&format!("{SCHEMA}{ROWS}"))
}

/// Context whose tables exist but hold no rows.
pub fn empty_context() -> AppContext {
    context_with(SCHEMA)
}

fn context_with(sql: &str) -> AppContext {
    let warehouse = Warehouse::open_in_memory().expect("open in-memory warehouse");
    warehouse.conn().execute_batch(sql).expect("seed warehouse");
    AppContext {
        config: JobscopeConfig::default(),
        warehouse,
    }
}
