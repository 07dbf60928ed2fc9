pub mod decision;
pub mod interval;
pub mod pipeline;
pub mod provider;
pub mod rate;
pub mod selector;
