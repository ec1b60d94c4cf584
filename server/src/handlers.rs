pub mod chat;
pub mod hello;
