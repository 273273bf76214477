//! Input side of the pipeline: candidate resumes and the role requirements.

pub mod requirements;
pub mod resumes;
