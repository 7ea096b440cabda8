pub mod dashboard;
pub mod diagnostics;
pub mod dispatch;
pub mod explore;
pub mod industries;
pub mod report;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;
