pub mod algorithm;
pub mod colour_mapping;
pub mod iteration_budget;
