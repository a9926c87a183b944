pub mod agent;
pub mod animation;
pub mod board;
pub mod difficulty;
pub mod input;
pub mod matrix;
pub mod round_timer;
pub mod score;
pub mod screens;
pub mod session;
pub mod settings;
pub mod shift;
pub mod state;
pub mod view;
