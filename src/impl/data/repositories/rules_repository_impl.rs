use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::rules_ron_datasource::{RulesRonDatasource, RulesRonDatasourceImpl},
    domain::repositories::rules_repository::RulesRepository,
    entities::SharingRule,
};

pub(crate) struct RulesRepositoryImpl<DS = RulesRonDatasourceImpl>
where
    DS: RulesRonDatasource,
{
    rules_datasource: DS,
}

#[async_trait]
impl<DS> RulesRepository for RulesRepositoryImpl<DS>
where
    DS: RulesRonDatasource,
{
    fn from_string(&self, rules_ron: &str) -> Result<Vec<SharingRule>, ServerError> {
        self.rules_datasource.from_string(rules_ron)
    }

    async fn from_file<P>(&self, rules_ron: P) -> Result<Vec<SharingRule>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.rules_datasource.from_file(rules_ron).await
    }
}

impl RulesRepositoryImpl<RulesRonDatasourceImpl> {
    pub(crate) fn new() -> Self {
        RulesRepositoryImpl {
            rules_datasource: RulesRonDatasourceImpl::new(),
        }
    }
}
