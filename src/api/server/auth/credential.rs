use crate::core::UserId;

/// 凭证提取 trait
///
/// 把请求携带的原始凭证转换为调用者 ID，无法识别时返回 `None`。
/// 替换为真实的凭证校验（签名、过期等）只需实现本 trait，不影响鉴权逻辑
pub trait CredentialExtractor: Send + Sync {
    fn extract(&self, credential: Option<&str>) -> Option<UserId>;
}

/// 请求头凭证提取器
///
/// 凭证值就是调用者的数字 ID，不做任何签名校验
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderCredentialExtractor;

impl CredentialExtractor for HeaderCredentialExtractor {
    fn extract(&self, credential: Option<&str>) -> Option<UserId> {
        credential?.trim().parse::<UserId>().ok()
    }
}
