use std::sync::Arc;

use uuid::Uuid;

use crate::config::Config;
use crate::models::user::User;
use crate::scoring::SemanticScorer;
use crate::store::{seed::seed_demo_data, ReanalysisPolicy, Store};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub config: Config,
    /// Pluggable semantic scorer. Default: RandomSemanticScorer. Swap via SEMANTIC_SCORER env.
    pub semantic: Arc<dyn SemanticScorer>,
    /// The operator shown in the navigation shell.
    pub operator: User,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let store = Store::new();
        if config.seed_demo_data {
            seed_demo_data(&store);
        }
        let semantic = config.semantic_backend.build();
        Self::with_parts(config, Arc::new(store), semantic)
    }

    pub fn with_parts(config: Config, store: Arc<Store>, semantic: Arc<dyn SemanticScorer>) -> Self {
        let operator = User {
            id: Uuid::new_v4(),
            name: config.operator.name.clone(),
            email: config.operator.email.clone(),
            role: config.operator.role,
            location: config.operator.location.clone(),
        };
        Self {
            store,
            config,
            semantic,
            operator,
        }
    }

    pub fn policy(&self) -> ReanalysisPolicy {
        self.config.reanalysis_policy
    }
}
