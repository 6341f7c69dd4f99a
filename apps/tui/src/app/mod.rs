// App module for the property map viewer
// Holds viewer state and turns key presses into controller calls

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
