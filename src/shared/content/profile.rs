// Career facts that cannot be derived from stored records. Both the static
// payloads and the database summaries report these.
pub const PROFILE_YEARS_CODING: u32 = 5;
pub const PROFILE_TOTAL_EXPERIENCE: &str = "5+ years";
pub const PROFILE_TOTAL_PROJECTS: u32 = 50;
