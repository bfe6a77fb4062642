//! 认证模块
//!
//! 提供从请求凭证中识别调用者的功能

pub mod credential;

pub use credential::{CredentialExtractor, HeaderCredentialExtractor};
