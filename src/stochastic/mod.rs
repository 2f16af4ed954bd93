pub mod disruption;
pub mod sampler;
