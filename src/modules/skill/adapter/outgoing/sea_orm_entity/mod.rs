pub mod certifications;
pub mod skills;
