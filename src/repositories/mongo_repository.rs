//! "MongoDB" 저장소 기능
//!
//! 연결 수립/종료와 도메인 리포지토리 생성을 담당합니다.
//! 연결은 [`RepositoryHandle`]에 담겨 반환되고, 같은 구현이 다시 꺼내
//! 사용자/게시물 리포지토리를 만듭니다.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use crate::config::application_config::MongoConfig;
use crate::core::capabilities::{Logger, Repository, RepositoryHandle};
use crate::db::Database;
use crate::domain::entities::{PostDocument, UserDocument};
use crate::errors::domain::{DomainError, InternalError};
use crate::repositories::posts::post_repo::{MongoPostRepository, POSTS_COLLECTION};
use crate::repositories::users::user_repo::{MongoUserRepository, USERS_COLLECTION};
use crate::repositories::{PostRepository, UserRepository};
use crate::utils::timeout::with_timeout;

const LOCATION: &str = "repositories.mongo_repository.";

pub struct MongoRepository {
    config: MongoConfig,
    timeout: Duration,
    logger: Arc<dyn Logger>,
    database: Mutex<Option<Arc<Database>>>,
}

impl MongoRepository {
    pub fn new(config: MongoConfig, timeout: Duration, logger: Arc<dyn Logger>) -> Self {
        Self {
            config,
            timeout,
            logger,
            database: Mutex::new(None),
        }
    }

    fn database_from(&self, handle: &RepositoryHandle, function: &str) -> Result<Arc<Database>, DomainError> {
        handle.downcast::<Database>().ok_or_else(|| {
            InternalError::new(
                format!("{}{}", LOCATION, function),
                "repository handle does not hold a MongoDB connection",
            )
            .into()
        })
    }

    async fn create_indexes(&self, database: &Database) -> Result<(), DomainError> {
        let location = format!("{}create_indexes", LOCATION);
        let users = database.get_database().collection::<UserDocument>(USERS_COLLECTION);
        let posts = database.get_database().collection::<PostDocument>(POSTS_COLLECTION);

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).name("email_unique".to_string()).build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder().name("created_at_desc".to_string()).build())
            .build();

        with_timeout(self.timeout, &location, async {
            users
                .create_index(email_index)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;
            posts
                .create_index(created_at_index)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;
            Ok(())
        })
        .await
    }
}

impl MongoRepository {
    /// 연결을 보관한 뒤 인덱스를 만듭니다.
    ///
    /// 인덱스 생성이 실패해도 연결은 이미 보관되어 있으므로 `close_repository`가 닫습니다.
    async fn prepare(&self, database: Database) -> Result<RepositoryHandle, DomainError> {
        let database = Arc::new(database);
        *self.database.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&database));

        self.create_indexes(&database).await?;

        self.logger.info(&DomainError::info(
            format!("{}new_repository", LOCATION),
            "Database connection is established...",
        ));

        // 핸들은 Arc<Database>가 아닌 Database를 감싸므로 한 번 더 복제합니다.
        Ok(RepositoryHandle::new(Database::clone(&database)))
    }
}

#[async_trait]
impl Repository for MongoRepository {
    async fn new_repository(&self) -> Result<RepositoryHandle, DomainError> {
        let database = Database::connect(&self.config, self.timeout).await?;
        self.prepare(database).await
    }

    async fn close_repository(&self) -> Result<(), DomainError> {
        let database = self
            .database
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(database) = database {
            database.close().await;
            self.logger.info(&DomainError::info(
                format!("{}close_repository", LOCATION),
                "Database connection is closed...",
            ));
        }

        Ok(())
    }

    fn new_user_repository(
        &self,
        handle: &RepositoryHandle,
    ) -> Result<Arc<dyn UserRepository>, DomainError> {
        let database = self.database_from(handle, "new_user_repository")?;
        Ok(Arc::new(MongoUserRepository::new(&database, self.timeout)))
    }

    fn new_post_repository(
        &self,
        handle: &RepositoryHandle,
    ) -> Result<Arc<dyn PostRepository>, DomainError> {
        let database = self.database_from(handle, "new_post_repository")?;
        Ok(Arc::new(MongoPostRepository::new(&database, self.timeout)))
    }
}
