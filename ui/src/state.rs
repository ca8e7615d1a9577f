use ffgz_business::{BusinessConfig, register_all};
use ffgz_states::StateCtx;

/// Top-level view selected in the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Types,
    Data,
    ActivityLog,
}

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
    pub tab: Tab,
}

impl Default for State {
    fn default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let config = BusinessConfig::from_env();
        #[cfg(target_arch = "wasm32")]
        let config = BusinessConfig::default();
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_all(&mut ctx, config);
        Self {
            ctx,
            tab: Tab::default(),
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }
}
