//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::CreateUserRequest};

impl MemoryStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let record = User {
            id: self.next_id(),
            username: user.username,
            role: user.role,
            created_at: chrono::Utc::now(),
        };

        self.users.insert(record.id, record.clone());
        Ok(record)
    }

    /// 通过ID获取用户信息
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }
}
