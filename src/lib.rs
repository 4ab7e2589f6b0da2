pub mod components;
pub mod listeners;
pub mod model;
pub mod state;
pub mod util;
