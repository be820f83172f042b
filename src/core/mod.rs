// Copyright @yucwang 2021

pub mod angle_grid;
pub mod bsdf;
pub mod computation_node;
pub mod evaluator;
pub mod interaction;
