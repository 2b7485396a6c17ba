pub mod entities;
pub mod static_content;
