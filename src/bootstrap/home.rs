use std::sync::Arc;

use chrono::Local;

use crate::application::ports::todo_api::TodoApi;
use crate::application::services::settings::KvAdapter;
use crate::application::services::settings::background::BackgroundRepository;
use crate::application::services::settings::quick_links::QuickLinkRepository;
use crate::application::services::todo_board::TodoBoard;
use crate::bootstrap::config::ClientConfig;
use crate::domain::greeting::greeting;
use crate::infrastructure::remote::todo_client_reqwest::ReqwestTodoClient;
use crate::infrastructure::storage::select_store;

/// Everything the new-tab page needs, wired once from [`ClientConfig`].
pub struct HomeContext {
    pub cfg: ClientConfig,
    pub quick_links: QuickLinkRepository,
    pub background: BackgroundRepository,
    pub todos: TodoBoard,
}

impl HomeContext {
    pub fn new(cfg: ClientConfig) -> Self {
        let api: Arc<dyn TodoApi> = Arc::new(ReqwestTodoClient::new(&cfg));
        Self::with_api(cfg, api)
    }

    pub fn with_api(cfg: ClientConfig, api: Arc<dyn TodoApi>) -> Self {
        let kv = KvAdapter::new(select_store(cfg.storage_path.as_deref()));
        tracing::debug!(?cfg, backend = kv.backend_name(), "home_context_ready");
        Self {
            quick_links: QuickLinkRepository::new(kv.clone()),
            background: BackgroundRepository::new(kv),
            todos: TodoBoard::new(api),
            cfg,
        }
    }

    pub fn greeting(&self) -> &'static str {
        greeting(&Local::now())
    }
}
