pub mod app;
pub mod controller;
pub mod events;
pub mod registry;
pub mod serialization;
pub mod shell;
pub mod shell_bridge;
pub mod storage;
