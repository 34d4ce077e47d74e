pub mod legend;
pub mod nav;
pub mod pie;
pub mod popup;
pub mod project_list;
pub mod scatter;
pub mod stats;
