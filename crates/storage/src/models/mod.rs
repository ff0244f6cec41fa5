mod cadet;
mod inspection;
mod position;
mod rank;
mod report;
mod requirement;

pub use cadet::Cadet;
pub use inspection::{Inspection, InspectionItemScore};
pub use position::Position;
pub use rank::Rank;
pub use report::Report;
pub use requirement::Requirement;
