pub mod cli;
pub mod logger;
pub mod report;
pub mod sampler;
pub mod selector;
pub mod shell;
