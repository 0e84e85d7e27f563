pub mod export;
pub mod launch;
pub mod paths;

pub use export::{export_module_list, render_module_list};
pub use launch::launch_imaris;
pub use paths::SelectorPaths;
