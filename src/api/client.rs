use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build the client shared by the rate provider and the limit publisher.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
