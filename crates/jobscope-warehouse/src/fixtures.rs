//! In-memory warehouse fixtures for unit tests.

use duckdb::params;

use crate::Warehouse;

const CREATE_TABLES: &str = "
CREATE TABLE job_postings (
    title TEXT,
    company_name TEXT,
    max_salary DOUBLE,
    pay_period TEXT,
    formatted_work_type TEXT
);
CREATE TABLE companies (
    company_id BIGINT,
    company_size INTEGER
);
CREATE TABLE company_industries (
    company_id BIGINT,
    industry TEXT
);
";

/// One `job_postings` row.
#[derive(Debug, Clone, Copy, Default)]
pub struct Posting<'a> {
    pub title: Option<&'a str>,
    pub company: Option<&'a str>,
    pub max_salary: Option<f64>,
    pub pay_period: Option<&'a str>,
    pub work_type: Option<&'a str>,
}

impl<'a> Posting<'a> {
    pub const fn at(title: &'a str, company: &'a str) -> Self {
        Self {
            title: Some(title),
            company: Some(company),
            max_salary: None,
            pay_period: None,
            work_type: None,
        }
    }

    pub const fn paid(mut self, max_salary: f64, pay_period: &'a str) -> Self {
        self.max_salary = Some(max_salary);
        self.pay_period = Some(pay_period);
        self
    }

    pub const fn work_type(mut self, work_type: &'a str) -> Self {
        self.work_type = Some(work_type);
        self
    }
}

/// Build an in-memory warehouse holding the given rows.
pub fn seeded(
    postings: &[Posting<'_>],
    companies: &[(i64, Option<i64>)],
    industries: &[(i64, &str)],
) -> Warehouse {
    let warehouse = Warehouse::open_in_memory().expect("open in-memory warehouse");
    insert_rows(&warehouse, postings, companies, industries);
    warehouse
}

fn insert_rows(
    warehouse: &Warehouse,
    postings: &[Posting<'_>],
    companies: &[(i64, Option<i64>)],
    industries: &[(i64, &str)],
) {
    let conn = warehouse.conn();
    conn.execute_batch(CREATE_TABLES).expect("create fixture tables");

    let mut insert = conn
        .prepare("INSERT INTO job_postings VALUES (?, ?, ?, ?, ?)")
        .unwrap();
    for p in postings {
        insert
            .execute(params![
                p.title,
                p.company,
                p.max_salary,
                p.pay_period,
                p.work_type
            ])
            .unwrap();
    }

    let mut insert = conn.prepare("INSERT INTO companies VALUES (?, ?)").unwrap();
    for (id, size) in companies {
        insert.execute(params![id, size]).unwrap();
    }

    let mut insert = conn
        .prepare("INSERT INTO company_industries VALUES (?, ?)")
        .unwrap();
    for (id, industry) in industries {
        insert.execute(params![id, industry]).unwrap();
    }
}

/// `count` copies of one posting.
pub fn repeat<'a>(posting: Posting<'a>, count: usize) -> Vec<Posting<'a>> {
    vec![posting; count]
}
