pub mod quiz;

pub use quiz::QuizConfig;
