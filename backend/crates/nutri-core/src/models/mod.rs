pub mod deletion_report;
pub mod identity;
pub mod provision_outcome;
pub mod user_id;
