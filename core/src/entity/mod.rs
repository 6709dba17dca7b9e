pub mod scans;
pub mod users;
