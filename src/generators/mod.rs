// src/generators/mod.rs
mod password;

pub use password::PasswordGenerator;
