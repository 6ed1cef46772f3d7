//! The root management client.

use std::sync::Arc;

use cattle_core::{Dispatcher, ResourceClient, Result};
use cattle_http::{ClientOpts, HttpDispatcher};
use tracing::{debug, instrument};

use crate::types::{
    Catalog, Cluster, ClusterTemplate, ClusterTemplateRevision, KontainerDriver, Node, NodeDriver,
    Project, Setting, Token, User,
};

/// One typed sub-client per management resource, all sharing one
/// dispatcher.
#[derive(Clone)]
pub struct Client {
    dispatcher: Arc<dyn Dispatcher>,

    pub cluster: ResourceClient<Cluster>,
    pub project: ResourceClient<Project>,
    pub node: ResourceClient<Node>,
    pub token: ResourceClient<Token>,
    pub catalog: ResourceClient<Catalog>,
    pub node_driver: ResourceClient<NodeDriver>,
    pub kontainer_driver: ResourceClient<KontainerDriver>,
    pub cluster_template: ResourceClient<ClusterTemplate>,
    pub cluster_template_revision: ResourceClient<ClusterTemplateRevision>,
    pub setting: ResourceClient<Setting>,
    pub user: ResourceClient<User>,
}

impl Client {
    /// Connect over HTTP and wire every sub-client to the connection.
    ///
    /// Fails without producing a client if the options are invalid or the
    /// schema document cannot be loaded.
    #[instrument(skip(opts), fields(url = %opts.url))]
    pub async fn new(opts: ClientOpts) -> Result<Self> {
        let dispatcher = HttpDispatcher::connect(opts).await?;
        debug!("management client ready");
        Ok(Self::with_dispatcher(Arc::new(dispatcher)))
    }

    /// Wire every sub-client to an existing dispatcher.
    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            cluster: ResourceClient::new(Arc::clone(&dispatcher)),
            project: ResourceClient::new(Arc::clone(&dispatcher)),
            node: ResourceClient::new(Arc::clone(&dispatcher)),
            token: ResourceClient::new(Arc::clone(&dispatcher)),
            catalog: ResourceClient::new(Arc::clone(&dispatcher)),
            node_driver: ResourceClient::new(Arc::clone(&dispatcher)),
            kontainer_driver: ResourceClient::new(Arc::clone(&dispatcher)),
            cluster_template: ResourceClient::new(Arc::clone(&dispatcher)),
            cluster_template_revision: ResourceClient::new(Arc::clone(&dispatcher)),
            setting: ResourceClient::new(Arc::clone(&dispatcher)),
            user: ResourceClient::new(Arc::clone(&dispatcher)),
            dispatcher,
        }
    }

    /// The dispatcher every sub-client forwards to.
    pub fn dispatcher(&self) -> &Arc<dyn Dispatcher> {
        &self.dispatcher
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
