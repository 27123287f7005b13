pub mod catalog;
pub mod choose;
pub mod dispatch;
pub mod estimate;
pub mod options;
pub mod report;
pub mod reset;
pub mod schema;
pub mod shared;
pub mod status;
