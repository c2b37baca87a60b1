pub mod review_flow;

pub use review_flow::{load_next, load_previous, load_selection_for_review};
