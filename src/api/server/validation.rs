//! 输入验证
//!
//! 规则以 `validator` 属性声明在 `NewUser`/`UserPatch` 上；
//! 角色和分组的取值范围由反序列化保证

use validator::Validate;

use crate::core::error::ValidationError;
use crate::core::{NewUser, UserPatch};

pub fn validate_new_user(candidate: &NewUser) -> Result<(), ValidationError> {
    candidate.validate().map_err(ValidationError::from)
}

/// 只检查补丁中出现的字段，空补丁合法
pub fn validate_patch(patch: &UserPatch) -> Result<(), ValidationError> {
    patch.validate().map_err(ValidationError::from)
}
