pub mod severity;

pub use severity::{classify, Severity};
