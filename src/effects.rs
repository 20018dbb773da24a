pub mod confetti;
pub mod shell;
