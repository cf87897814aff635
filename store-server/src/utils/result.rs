//! 统一 Result 别名
//!
//! Handler 与业务逻辑统一返回 [`AppResult`]，错误经由
//! [`AppError`] 的 `IntoResponse` 落到响应信封。

use crate::AppError;

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;
