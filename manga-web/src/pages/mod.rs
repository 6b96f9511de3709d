mod recommendations;

pub use recommendations::Recommendations;
