use std::sync::Arc;

use common::{LinkConfig, MainLayoutData};
use pages::{Handler, PageContext};

use crate::config::Config;


/// The unchanging configuration for the current runtime. Mostly values read from
/// config, but some other constructed data too
#[derive(Debug)]
pub struct GlobalState {
    pub link_config: LinkConfig,
    pub handler: Handler,
    pub config: Config
}

impl GlobalState {
    pub fn new(config: Config) -> Self {
        Self {
            link_config: LinkConfig::from_root(&config.http_root),
            handler: Handler::new(pages::templates()),
            config
        }
    }
}

/// A context generated for each request. The global_state is cheap to clone, the
/// page context is built fresh every time.
pub struct RequestContext {
    pub global_state: Arc<GlobalState>,
    pub page_context: PageContext,
}

impl RequestContext {
    pub fn generate(state: Arc<GlobalState>, path: &str) -> Self
    {
        let layout_data = MainLayoutData {
            config: state.link_config.clone(),
            current_path: String::from(path),
        };

        RequestContext {
            page_context: PageContext {
                layout_data,
                renderer: state.handler.renderer.clone()
            },
            global_state: state,
        }
    }
}
