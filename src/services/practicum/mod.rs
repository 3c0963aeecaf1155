pub mod client;

pub use client::{HomeworkApi, PracticumClient, PracticumError};
