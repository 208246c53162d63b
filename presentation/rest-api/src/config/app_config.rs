use imaging::config::ImagingConfig;
use poem::middleware::Cors;

use super::access_config::AccessConfig;
use super::classifier_config::ClassifierConfig;
use super::imaging_config::imaging_config_from_env;
use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub classifier: ClassifierConfig,
    pub access: AccessConfig,
    pub imaging: ImagingConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            classifier: ClassifierConfig::from_env()?,
            access: AccessConfig::from_env()?,
            imaging: imaging_config_from_env()?,
        })
    }
}
