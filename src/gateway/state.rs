use crate::gateway::client::ServerClient;

/// Gateway state shared by every handler.
#[derive(Clone)]
pub struct GatewayState {
    pub server: ServerClient,
}

impl GatewayState {
    pub fn new(server: ServerClient) -> Self {
        Self { server }
    }
}
