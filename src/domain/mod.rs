pub mod error;
pub mod markup;
pub mod pitch;
pub mod view;
