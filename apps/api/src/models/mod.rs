pub mod job;
pub mod preview;
pub mod resume;
