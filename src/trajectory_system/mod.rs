pub mod impact;
pub mod kinematics;
pub mod sampler;
