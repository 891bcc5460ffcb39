//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 내장 `DatabaseProvider`가 설정에서 [`DatabaseSettings`]를 읽어 [`Database`]를
//! `bindings::DATABASE` 식별자로 컨테이너에 등록합니다.
//!
//! 클라이언트는 처음 사용할 때 생성되므로 부팅 단계에서는 네트워크 연결이 일어나지 않습니다.
//!
//! # 설정 키
//!
//! ```bash
//! DB_HOST=localhost
//! DB_PORT=27017
//! DB_USERNAME=
//! DB_PASSWORD=
//! DB_DATABASE=app
//! DB_APP_NAME=app_kernel
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! let database = app.database()?;
//! database.ping().await?;
//!
//! let users = database.database().await?.collection::<User>("users");
//! ```

use log::info;
use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, Credential, ServerAddress};
use tokio::sync::OnceCell;

use crate::config::Config;
use crate::errors::AppResult;

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub app_name: String,
}

impl DatabaseSettings {
    /// 설정 저장소의 `DB_*` 키에서 연결 설정을 읽습니다.
    ///
    /// 포트가 없거나 `u16` 범위를 벗어나면 27017을 사용합니다.
    pub fn from_config(config: &dyn Config) -> Self {
        let port = u16::try_from(config.get_int("DB_PORT"))
            .ok()
            .filter(|port| *port > 0)
            .unwrap_or(27017);

        Self {
            host: config.get_with_default("DB_HOST", "localhost"),
            port,
            username: config.get("DB_USERNAME"),
            password: config.get("DB_PASSWORD"),
            database: config.get_with_default("DB_DATABASE", "app"),
            app_name: config.get_with_default("DB_APP_NAME", "app_kernel"),
        }
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// 로그 출력용 주소. 비밀번호는 가려집니다.
    pub fn display_address(&self) -> String {
        if self.has_credentials() {
            format!(
                "mongodb://{}:***@{}:{}/{}",
                self.username, self.host, self.port, self.database
            )
        } else {
            format!("mongodb://{}:{}/{}", self.host, self.port, self.database)
        }
    }

    fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::default();
        options.hosts = vec![ServerAddress::Tcp {
            host: self.host.clone(),
            port: Some(self.port),
        }];
        options.app_name = Some(self.app_name.clone());

        if self.has_credentials() {
            let mut credential = Credential::default();
            credential.username = Some(self.username.clone());
            credential.password = Some(self.password.clone());
            options.credential = Some(credential);
        }

        options
    }
}

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 첫 호출에서 한 번만 생성되며 이후 호출은 같은 클라이언트를 공유합니다.
pub struct Database {
    settings: DatabaseSettings,
    client: OnceCell<Client>,
}

impl Database {
    pub fn new(settings: DatabaseSettings) -> Self {
        Self {
            settings,
            client: OnceCell::new(),
        }
    }

    pub fn from_config(config: &dyn Config) -> Self {
        Self::new(DatabaseSettings::from_config(config))
    }

    pub fn settings(&self) -> &DatabaseSettings {
        &self.settings
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.settings.database
    }

    /// 클라이언트가 이미 생성되었는지 여부
    pub fn is_connected(&self) -> bool {
        self.client.initialized()
    }

    /// MongoDB 클라이언트를 반환합니다. 처음 호출 시 생성합니다.
    ///
    /// # Errors
    ///
    /// * `DatabaseError` - 클라이언트 옵션이 유효하지 않은 경우
    pub async fn client(&self) -> AppResult<&Client> {
        let client = self
            .client
            .get_or_try_init(|| async {
                let client = Client::with_options(self.settings.client_options())?;
                info!("MongoDB client created: {}", self.settings.display_address());
                Ok::<_, mongodb::error::Error>(client)
            })
            .await?;

        Ok(client)
    }

    /// 실제 MongoDB 작업을 위한 `mongodb::Database` 인스턴스를 반환합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let users_collection = database.database().await?.collection::<User>("users");
    /// ```
    pub async fn database(&self) -> AppResult<mongodb::Database> {
        Ok(self.client().await?.database(&self.settings.database))
    }

    /// `ping` 명령으로 연결 상태를 확인합니다.
    pub async fn ping(&self) -> AppResult<()> {
        self.database()
            .await?
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 확인: {}", self.settings.database);
        Ok(())
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("address", &self.settings.display_address())
            .field("connected", &self.is_connected())
            .finish()
    }
}
