//! 核心：错误类型、响应信封与中间件

pub mod error;
pub mod middleware;
pub mod response;
