use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::rule_model::SharingRuleModel,
    entities::SharingRule,
    errors::{EmptyRuleList, InvalidRon, ReadError},
};

#[async_trait]
pub(crate) trait RulesRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<SharingRule>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<SharingRule>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct RulesRonDatasourceImpl;

impl RulesRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RulesRonDatasource for RulesRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<SharingRule>, ServerError> {
        let models: Vec<SharingRuleModel> =
            from_str(s).map_err(|e| InvalidRon::with_debug("SharingRule", &e))?;
        if models.is_empty() {
            return Err(EmptyRuleList::new());
        }
        let rules = models
            .into_iter()
            .map(SharingRuleModel::try_into_rule)
            .collect::<Result<Vec<_>, ServerError>>()?;
        tracing::debug!(rule_count = rules.len(), "Loaded sharing rules");
        Ok(rules)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<SharingRule>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(
            &tokio::fs::read_to_string(path)
                .await
                .map_err(|e| ReadError::with_debug(&e))?,
        )
    }
}
