use fractic_server_error::ServerError;

use crate::{
    entities::{Entry, TransformOutput},
    domain::usecases::transform_usecase::{TransformUsecase as _, TransformUsecaseImpl},
};

/// Main entry point.
///
/// Loads a sharing-rule configuration and applies it to a batch of ledger
/// entries, producing the transformed batch plus synthesized account
/// declarations.
pub struct ShareUtil {
    transform_usecase: TransformUsecaseImpl,
}

impl ShareUtil {
    pub fn new() -> Self {
        Self {
            transform_usecase: TransformUsecaseImpl::new(),
        }
    }

    /// Transforms `entries` using a RON rule list provided inline.
    pub fn from_string(
        &self,
        entries: Vec<Entry>,
        rules_ron: &str,
    ) -> Result<TransformOutput, ServerError> {
        self.transform_usecase.from_string(entries, rules_ron)
    }

    /// Transforms `entries` using a RON rule list loaded from `rules_ron`.
    pub async fn from_file<P>(
        &self,
        entries: Vec<Entry>,
        rules_ron: P,
    ) -> Result<TransformOutput, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.transform_usecase.from_file(entries, rules_ron).await
    }
}
