pub mod sse;
pub mod topic;
pub mod transcript;
