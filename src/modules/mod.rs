pub mod about;
pub mod contact;
pub mod experience;
pub mod project;
pub mod seed;
pub mod skill;
