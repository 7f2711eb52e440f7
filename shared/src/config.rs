use std::env;

use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub event_bus: KafkaConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let event_bus = KafkaConfig::from_env();
        Ok(Self {
            database,
            event_bus,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

/// Event-bus hook. The read path never publishes; the broker location is
/// still part of deployment configuration so a future producer can pick it
/// up without a config change.
pub struct KafkaConfig {
    pub brokers: String,
    pub user_events_topic: String,
}

impl KafkaConfig {
    fn from_env() -> Self {
        let brokers = env::var("KAFKA_BROKERS").unwrap_or_else(|_| "localhost:9092".into());
        let user_events_topic =
            env::var("KAFKA_USER_EVENTS_TOPIC").unwrap_or_else(|_| "user-events".into());
        Self {
            brokers,
            user_events_topic,
        }
    }
}
