use url::Url;

use super::elements::ElementCollection;
use super::error::{OverpassError, OverpassResult};

/// Overpass QL for all subway route relations within a named area,
/// plus the elements they reference.
pub fn subway_query(area: &str) -> String {
    format!(
        "[out:json];\n\
         area[name=\"{area}\"]->.searchArea;\n\
         relation[\"route\"~\"subway\"](area.searchArea);\n\
         out meta;\n\
         >;\n\
         out body;"
    )
}

#[derive(Clone)]
pub struct OverpassClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl OverpassClient {
    pub fn new(endpoint: &str) -> OverpassResult<OverpassClient> {
        let client = OverpassClient {
            client: reqwest::Client::new(),
            endpoint: Url::parse(endpoint)?,
        };

        Ok(client)
    }

    /// Run one query against the interpreter and deserialize the
    /// response document. A non-success status aborts immediately,
    /// there is no retry.
    pub async fn query(&self, ql: &str) -> OverpassResult<ElementCollection> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("data", ql);

        log::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OverpassError::Status(status));
        }

        let data_str = response.text().await?;
        log::trace!("Response: {}", data_str);
        let data = serde_json::from_str(&data_str)?;

        Ok(data)
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_subway_query() {
        let ql = subway_query("Berlin");

        assert!(ql.contains("area[name=\"Berlin\"]"));
        assert!(ql.contains("relation[\"route\"~\"subway\"]"));
        assert!(ql.starts_with("[out:json];"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = OverpassClient::new("not a url");
        assert!(matches!(result, Err(OverpassError::Url(_))));
    }
}
