//! Bio generation: request shapes, the two engines, prompts, and response
//! segmentation.

pub mod engine;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod segment;
pub mod templates;
