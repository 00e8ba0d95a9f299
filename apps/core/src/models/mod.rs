pub mod analysis;
pub mod job;
pub mod resume;

pub use analysis::MatchAnalysis;
pub use job::JobPosting;
pub use resume::{ContactInfo, EducationEntry, ExperienceEntry, Language, ResumeRecord, UNKNOWN};
