use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::SharingRule;

#[async_trait]
pub trait RulesRepository: Send + Sync {
    fn from_string(&self, rules_ron: &str) -> Result<Vec<SharingRule>, ServerError>;

    async fn from_file<P>(&self, rules_ron: P) -> Result<Vec<SharingRule>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
