mod collector;
mod repository;

pub use collector::collect_report_data;
