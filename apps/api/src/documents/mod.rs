//! Document intake — upload, conversion to text, and structured keyword
//! extraction for resumes and job descriptions.

pub mod extract;
pub mod handlers;
pub mod job;
pub mod resume;
