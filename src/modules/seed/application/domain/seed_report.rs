use std::fmt;

/// Collections that receive demo records when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeedCollection {
    Skills,
    Experiences,
    Projects,
    Certifications,
}

impl SeedCollection {
    pub const ALL: [SeedCollection; 4] = [
        SeedCollection::Skills,
        SeedCollection::Experiences,
        SeedCollection::Projects,
        SeedCollection::Certifications,
    ];
}

impl fmt::Display for SeedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedCollection::Skills => "skills",
            SeedCollection::Experiences => "experiences",
            SeedCollection::Projects => "projects",
            SeedCollection::Certifications => "certifications",
        };
        f.write_str(name)
    }
}

/// Records inserted per collection during one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub skills: u64,
    pub experiences: u64,
    pub projects: u64,
    pub certifications: u64,
}

impl SeedReport {
    pub fn record(&mut self, collection: SeedCollection, inserted: u64) {
        match collection {
            SeedCollection::Skills => self.skills = inserted,
            SeedCollection::Experiences => self.experiences = inserted,
            SeedCollection::Projects => self.projects = inserted,
            SeedCollection::Certifications => self.certifications = inserted,
        }
    }

    pub fn total(&self) -> u64 {
        self.skills + self.experiences + self.projects + self.certifications
    }
}
