mod rounded;
pub use rounded::Rounded;
