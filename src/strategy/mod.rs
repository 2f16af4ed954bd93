pub mod reorder_point;
pub mod traits;
