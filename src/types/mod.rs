mod generated;
mod target;

pub use generated::GeneratedIcon;
pub use target::IconTarget;
