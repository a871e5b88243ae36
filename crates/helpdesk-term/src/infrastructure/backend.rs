use helpdesk_client::SupportClientBox;

use crate::configuration::{Config, ConfigKey};

pub struct BackendManager {}

impl BackendManager {
    /// Build the backend client from the configured base address.
    pub fn get() -> SupportClientBox {
        helpdesk_client::for_base_url(Config::get(ConfigKey::BackendUrl))
    }
}
