// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod rules_ron_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod decimal_model;
        pub(crate) mod iso_date_model;
        pub(crate) mod rule_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod rules_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod account_registry;
        pub(crate) mod amount;
        pub(crate) mod entry;
        pub(crate) mod metadata;
        pub(crate) mod rule;
        pub(crate) mod transaction;
        pub(crate) mod transform;
    }
    pub(crate) mod logic {
        pub(crate) mod account_opener;
        pub(crate) mod account_rewriter;
        pub(crate) mod amount_splitter;
        pub(crate) mod posting_expander;
        pub(crate) mod posting_grouper;
        pub(crate) mod rule_resolver;
        pub(crate) mod share_processor;
    }
    pub(crate) mod repositories {
        pub(crate) mod rules_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod transform_usecase;
    }
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::account_registry::*;
        pub use crate::domain::entities::amount::*;
        pub use crate::domain::entities::entry::*;
        pub use crate::domain::entities::metadata::*;
        pub use crate::domain::entities::rule::*;
        pub use crate::domain::entities::transaction::*;
        pub use crate::domain::entities::transform::*;
    }
}
