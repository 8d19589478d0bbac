pub mod assignment;
pub mod slot;
pub mod trainee;
