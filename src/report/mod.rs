pub mod models;
pub mod writer;

pub use models::{PlayerSummary, SkillReport};
pub use writer::ReportWriter;
