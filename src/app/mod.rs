mod events;
mod init;
mod render;
mod state;
mod step;

pub use state::App;
