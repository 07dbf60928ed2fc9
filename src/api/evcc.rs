//! [evcc](https://evcc.io) REST API client.

mod models;

use async_trait::async_trait;
use reqwest::{Client, Url, header::CONTENT_TYPE};

use self::models::RatesResponse;
use crate::{
    core::{
        decision::ChargeLimit,
        provider::{LimitPublisher, RateProvider},
        rate::RatePoint,
    },
    prelude::*,
};

pub struct Api {
    client: Client,
    base_url: Url,
    rates_url: Url,
}

impl Api {
    /// Rates default to the grid tariff of the same evcc instance.
    pub fn new(client: Client, base_url: Url, rates_url: Option<Url>) -> Result<Self> {
        let rates_url = match rates_url {
            Some(rates_url) => rates_url,
            None => Self::endpoint(&base_url, &["api", "tariff", "grid"])?,
        };
        Ok(Self { client, base_url, rates_url })
    }

    fn charge_limit_url(&self, charge_limit: ChargeLimit) -> Result<Url> {
        let charge_limit = charge_limit.to_string();
        Self::endpoint(&self.base_url, &["api", "batterygridchargelimit", charge_limit.as_str()])
    }

    fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url> {
        let mut url = base_url.clone();
        url.path_segments_mut()
            .ok()
            .with_context(|| format!("`{base_url}` cannot be a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl RateProvider for Api {
    #[instrument(skip_all, fields(url = %self.rates_url))]
    async fn get_rates(&self) -> Result<Vec<RatePoint>> {
        info!("fetching…");
        let body = self
            .client
            .get(self.rates_url.clone())
            .send()
            .await
            .context("failed to fetch the rates")?
            .error_for_status()
            .context("the rates request failed")?
            .text()
            .await
            .context("failed to read the rates")?;
        let response = serde_json::from_str::<RatesResponse>(&body)
            .context("failed to deserialize the rates")?;
        Ok(response.into_rates().into_iter().map(RatePoint::from).collect())
    }
}

#[async_trait]
impl LimitPublisher for Api {
    #[instrument(skip_all, fields(charge_limit = %charge_limit))]
    async fn publish(&self, charge_limit: ChargeLimit) -> Result {
        let url = self.charge_limit_url(charge_limit)?;
        info!(%url, "publishing…");
        let body = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("failed to publish the charge limit")?
            .error_for_status()
            .context("the charge limit request failed")?
            .text()
            .await
            .context("failed to read the response")?;
        debug!(%body, "published");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    fn api(base_url: &str, rates_url: Option<&str>) -> Result<Api> {
        Api::new(Client::new(), base_url.parse()?, rates_url.map(str::parse).transpose()?)
    }

    #[test]
    fn test_default_rates_url() -> Result {
        let api = api("http://evcc.local:7070", None)?;
        assert_eq!(api.rates_url.as_str(), "http://evcc.local:7070/api/tariff/grid");
        Ok(())
    }

    #[test]
    fn test_explicit_rates_url() -> Result {
        let api = api("http://evcc.local:7070", Some("https://example.com/rates.json"))?;
        assert_eq!(api.rates_url.as_str(), "https://example.com/rates.json");
        Ok(())
    }

    #[test]
    fn test_charge_limit_url() -> Result {
        let api = api("http://evcc.local:7070/", None)?;
        let url = api.charge_limit_url(ChargeLimit::at_least(KilowattHourRate::from(0.22)))?;
        assert_eq!(url.as_str(), "http://evcc.local:7070/api/batterygridchargelimit/0.25");
        let url = api.charge_limit_url(ChargeLimit::ZERO)?;
        assert_eq!(url.as_str(), "http://evcc.local:7070/api/batterygridchargelimit/0");
        Ok(())
    }

    #[test]
    fn test_charge_limit_url_with_prefix() -> Result {
        let api = api("http://localhost/evcc/", None)?;
        let url = api.charge_limit_url(ChargeLimit::at_least(KilowattHourRate::from(-0.07)))?;
        assert_eq!(url.as_str(), "http://localhost/evcc/api/batterygridchargelimit/-0.05");
        Ok(())
    }

    #[test]
    fn test_cannot_be_base() {
        assert!(api("mailto:evcc@example.com", None).is_err());
    }
}
