mod filter;
mod pattern;
mod probe;
mod render;
mod walk;

pub use filter::{FilterSet, IgnorePatterns};
pub use probe::has_matching_files;
pub use render::write_line;
pub use walk::{TreeOptions, render_tree};
