mod content_id;
mod fallback;
mod profile;
mod resolution;

pub use content_id::ContentId;
pub use fallback::FallbackContent;
pub use profile::{PROFILE_TOTAL_EXPERIENCE, PROFILE_TOTAL_PROJECTS, PROFILE_YEARS_CODING};
pub use resolution::{ContentResolver, ContentSource, Resolved};
