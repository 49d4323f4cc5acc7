pub mod blend;
pub mod hex;
pub mod reader;
pub mod wcag;
