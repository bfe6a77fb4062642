//! 核心类型模块
//!
//! 包含用户目录的实体定义

pub mod user;

pub use user::{NewUser, User, UserId, UserPatch};
