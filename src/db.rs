use crate::config::DatabaseConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Author, Post};
use crate::store::BlogStore;
use async_trait::async_trait;
use deadpool_postgres::{Config, Object, Pool, Runtime};
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::Row;
use tracing::{error, info, warn};
use uuid::Uuid;

const AUTHOR_COLUMNS: &str = "id, name, created_at, updated_at";
const POST_COLUMNS: &str = "id, author_id, title, body, created_at, updated_at";

/// PostgreSQL-backed store on a deadpool connection pool
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Build the connection pool and verify connectivity before returning.
    pub async fn new(config: DatabaseConfig) -> ApiResult<Self> {
        info!("Creating PostgreSQL connection pool for host: {}:{}", config.host, config.port);

        let pool = Self::create_pool(config)?;

        let db = Database { pool };
        db.ping().await?;

        Ok(db)
    }

    fn create_pool(config: DatabaseConfig) -> ApiResult<Pool> {
        let mut pg_config = Config::new();

        pg_config.host = Some(config.host);
        pg_config.port = Some(config.port);
        pg_config.dbname = Some(config.database);
        pg_config.user = Some(config.username);
        pg_config.password = Some(config.password);
        pg_config.connect_timeout = Some(config.connection_timeout);

        pg_config.ssl_mode = Some(match config.ssl_mode.as_str() {
            "disable" => deadpool_postgres::SslMode::Disable,
            "allow" | "prefer" => deadpool_postgres::SslMode::Prefer,
            "require" => deadpool_postgres::SslMode::Require,
            other => {
                // native-tls verifies certificates whenever TLS is negotiated
                warn!("SSL mode '{}' handled as 'require'", other);
                deadpool_postgres::SslMode::Require
            }
        });

        pg_config.manager = Some(deadpool_postgres::ManagerConfig {
            recycling_method: deadpool_postgres::RecyclingMethod::Fast,
        });

        let mut pool_config = deadpool_postgres::PoolConfig::new(config.max_connections as usize);
        pool_config.timeouts.wait = Some(config.connection_timeout);
        pg_config.pool = Some(pool_config);

        let tls_connector = TlsConnector::builder()
            .build()
            .map_err(|e| {
                error!("Failed to create TLS connector: {}", e);
                ApiError::Database(format!("TLS connector creation failed: {}", e))
            })?;
        let tls = MakeTlsConnector::new(tls_connector);

        pg_config.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| {
                error!("Failed to create connection pool: {}", e);
                ApiError::Database(format!("Connection pool creation failed: {}", e))
            })
    }

    async fn get_connection(&self) -> ApiResult<Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    /// Create the authors and posts tables if they do not exist yet.
    pub async fn migrate(&self) -> ApiResult<()> {
        info!("Running database migrations");

        let client = self.get_connection().await?;

        let authors_table = r#"
            CREATE TABLE IF NOT EXISTS authors (
                id UUID PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        let posts_table = r#"
            CREATE TABLE IF NOT EXISTS posts (
                id UUID PRIMARY KEY,
                author_id UUID NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
                title VARCHAR(255) NOT NULL,
                body TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
        "#;

        let indexes = [
            "CREATE INDEX IF NOT EXISTS idx_authors_name ON authors(name)",
            "CREATE INDEX IF NOT EXISTS idx_posts_author_id ON posts(author_id)",
            "CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at DESC)",
        ];

        for statement in std::iter::once(authors_table)
            .chain(std::iter::once(posts_table))
            .chain(indexes)
        {
            client.execute(statement, &[])
                .await
                .map_err(|e| {
                    error!("Migration statement failed: {}", e);
                    ApiError::from(e)
                })?;
        }

        info!("Database migrations completed");
        Ok(())
    }
}

fn author_from_row(row: &Row) -> Author {
    Author {
        id: row.get(0),
        name: row.get(1),
        created_at: row.get(2),
        updated_at: row.get(3),
    }
}

fn post_from_row(row: &Row) -> Post {
    Post {
        id: row.get(0),
        author_id: row.get(1),
        title: row.get(2),
        body: row.get(3),
        created_at: row.get(4),
        updated_at: row.get(5),
    }
}

#[async_trait]
impl BlogStore for Database {
    async fn list_authors(&self) -> ApiResult<Vec<Author>> {
        let client = self.get_connection().await?;
        let query = format!("SELECT {} FROM authors ORDER BY name, id", AUTHOR_COLUMNS);

        let rows = client.query(query.as_str(), &[]).await?;
        Ok(rows.iter().map(author_from_row).collect())
    }

    async fn find_author(&self, id: Uuid) -> ApiResult<Option<Author>> {
        let client = self.get_connection().await?;
        let query = format!("SELECT {} FROM authors WHERE id = $1", AUTHOR_COLUMNS);

        let row = client.query_opt(query.as_str(), &[&id]).await?;
        Ok(row.as_ref().map(author_from_row))
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let client = self.get_connection().await?;
        let query = format!("SELECT {} FROM posts ORDER BY created_at DESC, id", POST_COLUMNS);

        let rows = client.query(query.as_str(), &[]).await?;
        Ok(rows.iter().map(post_from_row).collect())
    }

    async fn find_post(&self, id: Uuid) -> ApiResult<Option<Post>> {
        let client = self.get_connection().await?;
        let query = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);

        let row = client.query_opt(query.as_str(), &[&id]).await?;
        Ok(row.as_ref().map(post_from_row))
    }

    async fn ping(&self) -> ApiResult<()> {
        let client = self.get_connection().await?;

        client.execute("SELECT 1", &[])
            .await
            .map_err(|e| {
                error!("Database connection test failed: {}", e);
                ApiError::from(e)
            })?;

        info!("Database connection test successful");
        Ok(())
    }
}
