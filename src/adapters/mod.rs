// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod prompt;
pub mod ses;

pub use prompt::LineConfirmation;
pub use ses::SesSuppressionApi;
