//! Database Connection Management Module
//!
//! MongoDB 연결을 만들고, ping으로 확인하고, 종료 시 닫는 기능을 제공합니다.
//! 연결 정보는 [`MongoConfig`]에서 읽으며 모든 네트워크 호출에는 타임아웃이 적용됩니다.
//!
//! ```rust,ignore
//! let database = Database::connect(&config.mongodb, config.context_timeout).await?;
//! let users = database.get_database().collection::<UserDocument>("users");
//! ```

use std::time::Duration;

use log::info;
use mongodb::bson::doc;
use mongodb::{options::ClientOptions, Client};

use crate::config::application_config::MongoConfig;
use crate::errors::domain::DomainError;
use crate::utils::timeout::with_timeout;

const LOCATION: &str = "db.mongodb.";

#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 클라이언트를 만들고 ping으로 연결을 확인합니다.
    pub async fn connect(config: &MongoConfig, timeout: Duration) -> Result<Self, DomainError> {
        let database = Self::open(config, timeout).await?;
        database.ping(timeout).await?;

        info!("✅ MongoDB 연결 성공: {}", database.database_name);
        Ok(database)
    }

    /// 클라이언트만 만듭니다. 실제 연결은 첫 작업에서 이루어집니다.
    pub async fn open(config: &MongoConfig, timeout: Duration) -> Result<Self, DomainError> {
        let location = format!("{}open", LOCATION);

        let mut client_options = with_timeout(timeout, &location, async {
            ClientOptions::parse(&config.uri)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))
        })
        .await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some(config.app_name.clone());
        client_options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(client_options)
            .map_err(|e| DomainError::internal(location.as_str(), e))?;

        Ok(Self {
            client,
            database_name: config.name.clone(),
        })
    }

    pub async fn ping(&self, timeout: Duration) -> Result<(), DomainError> {
        let location = format!("{}ping", LOCATION);
        with_timeout(timeout, &location, async {
            self.get_database()
                .run_command(doc! { "ping": 1 })
                .await
                .map(|_| ())
                .map_err(|e| DomainError::internal(location.as_str(), e))
        })
        .await
    }

    /// 진행 중인 작업이 끝나기를 기다린 뒤 연결 풀을 닫습니다.
    pub async fn close(&self) {
        self.client.clone().shutdown().await;
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
