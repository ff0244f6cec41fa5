pub mod cadet;
pub mod inspection;
pub mod position;
pub mod rank;
pub mod report;
pub mod requirement;
