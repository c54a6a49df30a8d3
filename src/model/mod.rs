pub mod fixture;
pub mod invocation;
