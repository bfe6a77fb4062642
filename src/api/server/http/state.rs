use crate::api::server::DirectoryService;
use crate::storage::UserStore;
use std::sync::Arc;

pub struct AppState<S: UserStore + 'static> {
    service: Arc<DirectoryService<S>>,
}

impl<S: UserStore + 'static> AppState<S> {
    pub fn new(service: Arc<DirectoryService<S>>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &DirectoryService<S> {
        &self.service
    }
}

// 手动实现，避免 derive 给 S 加上 Clone 约束
impl<S: UserStore + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}
