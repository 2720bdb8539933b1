mod support_analyzer;

pub use support_analyzer::*;
