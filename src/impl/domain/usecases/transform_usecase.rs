use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::rules_repository_impl::RulesRepositoryImpl,
    domain::{
        logic::share_processor::ShareProcessor, repositories::rules_repository::RulesRepository,
    },
    entities::{Entry, TransformOutput},
};

/// Applies a configured list of sharing rules to a batch of ledger entries.
#[async_trait]
pub trait TransformUsecase: Send + Sync {
    fn from_string(
        &self,
        entries: Vec<Entry>,
        rules_ron: &str,
    ) -> Result<TransformOutput, ServerError>;

    async fn from_file<P>(
        &self,
        entries: Vec<Entry>,
        rules_ron: P,
    ) -> Result<TransformOutput, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct TransformUsecaseImpl<R1 = RulesRepositoryImpl>
where
    R1: RulesRepository,
{
    rules_repository: R1,
}

#[async_trait]
impl<R1> TransformUsecase for TransformUsecaseImpl<R1>
where
    R1: RulesRepository,
{
    fn from_string(
        &self,
        entries: Vec<Entry>,
        rules_ron: &str,
    ) -> Result<TransformOutput, ServerError> {
        let rules = self.rules_repository.from_string(rules_ron)?;
        Ok(ShareProcessor::new(rules).process(entries))
    }

    async fn from_file<P>(
        &self,
        entries: Vec<Entry>,
        rules_ron: P,
    ) -> Result<TransformOutput, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let rules = self.rules_repository.from_file(rules_ron).await?;
        Ok(ShareProcessor::new(rules).process(entries))
    }
}

impl TransformUsecaseImpl<RulesRepositoryImpl> {
    pub(crate) fn new() -> Self {
        TransformUsecaseImpl {
            rules_repository: RulesRepositoryImpl::new(),
        }
    }
}
