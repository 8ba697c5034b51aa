//! Items related to [logging](log).
//!
//! Calls to the log macros are made throughout the library. No log implementation is provided,
//! install one (such as `env_logger`) in the consuming binary to see the output.

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [assignment enumeration](crate::language::Vocabulary::all_assignments)
    pub const ASSIGNMENTS: &str = "assignments";

    /// Logs related to [parsing](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [equivalence and entailment](crate::semantics)
    pub const SEMANTICS: &str = "semantics";

    /// Logs related to [truth tables](crate::display)
    pub const DISPLAY: &str = "display";

    /// Logs related to [proofs](crate::proof)
    pub const PROOF: &str = "proof";
}
