//! Core 模块
//!
//! 配置、服务器状态与 HTTP 服务器启动。

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
