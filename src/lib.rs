pub mod context;
pub mod core;
pub mod game;
pub mod network;
pub mod player;
pub mod referee;
