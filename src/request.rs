//! Trigger request assembly: the validated domain entity and the JSON body
//! it serializes to on the wire.

use serde::{Deserialize, Serialize};

/// Fixed path segment of the vectorize operation, appended to the service
/// base URL.
pub const VECTORIZE_PATH: &str = "/vectorize";

/// The one domain entity of this crate. Eligible to send only once all five
/// fields are populated and `clients` came out of
/// [`crate::clients::normalize_clients`] with at least one entry. Lives for a
/// single process invocation: built from CLI input, consumed by one POST,
/// discarded.
#[derive(Debug, Clone)]
pub struct TriggerRequest {
    /// Base URL of the vectorization service.
    pub service_url: String,
    /// Location of the dataset to process.
    pub dataset_url: String,
    /// Caller-supplied job identifier, opaque to this crate.
    pub job_id: String,
    /// Normalized, non-empty list of client identifiers.
    pub clients: Vec<String>,
    /// Study identifier, opaque to this crate.
    pub study_id: String,
}

impl TriggerRequest {
    /// Full endpoint for the vectorize operation: base URL with trailing
    /// slashes removed, then [`VECTORIZE_PATH`].
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.service_url.trim_end_matches('/'), VECTORIZE_PATH)
    }

    /// The four-key wire body. Client order is preserved as normalized.
    pub fn body(&self) -> TriggerBody {
        TriggerBody {
            url: self.dataset_url.clone(),
            job_id: self.job_id.clone(),
            clients_list: self.clients.clone(),
            study_id: self.study_id.clone(),
        }
    }
}

/// JSON body of the trigger POST. Key spelling is part of the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerBody {
    pub url: String,
    pub job_id: String,
    pub clients_list: Vec<String>,
    pub study_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(clients: &[&str]) -> TriggerRequest {
        TriggerRequest {
            service_url: "http://localhost:5001".to_string(),
            dataset_url: "http://data/metadata.json".to_string(),
            job_id: "job-42".to_string(),
            clients: clients.iter().map(|c| c.to_string()).collect(),
            study_id: "study-7".to_string(),
        }
    }

    #[test]
    fn endpoint_appends_vectorize_path() {
        assert_eq!(
            request(&["client1"]).endpoint(),
            "http://localhost:5001/vectorize"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slashes() {
        let mut req = request(&["client1"]);
        req.service_url = "http://localhost:5001/".to_string();
        assert_eq!(req.endpoint(), "http://localhost:5001/vectorize");

        req.service_url = "http://localhost:5001///".to_string();
        assert_eq!(req.endpoint(), "http://localhost:5001/vectorize");
    }

    #[test]
    fn body_uses_contract_key_names() {
        let body = request(&["client1", "client2"]).body();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["url"], "http://data/metadata.json");
        assert_eq!(json["jobId"], "job-42");
        assert_eq!(json["studyId"], "study-7");
        assert_eq!(
            json["clientsList"],
            serde_json::json!(["client1", "client2"])
        );
    }

    #[test]
    fn body_round_trips_client_order() {
        let body = request(&["b", "a", "b", "c"]).body();
        let text = serde_json::to_string(&body).unwrap();
        let back: TriggerBody = serde_json::from_str(&text).unwrap();
        assert_eq!(back, body);
        assert_eq!(back.clients_list, vec!["b", "a", "b", "c"]);
    }
}
