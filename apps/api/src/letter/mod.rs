// Reference letters: roster lookup, last-4 check, DOCX placeholder fill.

pub mod generator;
pub mod handlers;
pub mod template;
