//! Command module structure for the primer CLI

pub mod character;
pub mod planet;
pub mod ui;

/// How a command finished, mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input passed validation and the result was printed
    Accepted,
    /// Input was well-formed but failed validation
    Rejected,
    /// Input could not be parsed or was incomplete
    InvalidInput,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Rejected => 1,
            Outcome::InvalidInput => 2,
        }
    }
}
