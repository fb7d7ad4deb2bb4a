pub mod bounded_set;
pub mod fixed_capacity;
