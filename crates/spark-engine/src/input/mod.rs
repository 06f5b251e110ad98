pub mod queue;
pub mod intent;
