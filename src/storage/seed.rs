//! 预置用户数据

use crate::core::permission::{GroupId, Role};
use crate::core::types::User;

/// 服务启动时载入的预置用户
pub fn predefined_users() -> Vec<User> {
    use GroupId::{Group1, Group2};
    use Role::{Admin, Personal, Viewer};

    vec![
        User::new(1, "John Doe", [Admin, Personal], [Group1, Group2]),
        User::new(2, "Grabriel Monroe", [Personal], [Group1, Group2]),
        User::new(3, "Alex Xavier", [Personal], [Group2]),
        User::new(4, "Jarvis Khan", [Admin, Personal], [Group2]),
        User::new(5, "Martines Polok", [Admin, Personal], [Group1]),
        User::new(6, "Gabriela Wozniak", [Viewer, Personal], [Group1]),
    ]
}
