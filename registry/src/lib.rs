use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{health::HealthCheckRepositoryImpl, user::UserRepositoryImpl};
use kernel::repository::{health::HealthCheckRepository, user::UserRepository};

/// Shared handle set for the request handlers. Cloning is cheap; every
/// clone sees the same read-only collaborators.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        Self::from_parts(health_check_repository, user_repository)
    }

    /// Wires arbitrary store implementations. The endpoint tests use this to
    /// swap the Postgres repositories for in-memory ones.
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            user_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
