use vectrig::api;
use vectrig::clients::normalize_clients;
use vectrig::logging;
use vectrig::request::TriggerRequest;

use super::args::CliArgs;

/// Service name attached to every logged event, shared with the rest of the
/// pipeline tooling.
pub const SERVICE_NAME: &str = "trigger-vectorization-pipeline";

/// Run the full trigger flow and map the outcome to a process exit code:
/// 0 for HTTP 200, 1 for everything else (normalization failure, transport
/// failure, non-200 response). Single attempt, no retry from any state.
pub fn run(args: CliArgs) -> i32 {
    let log = logging::init(SERVICE_NAME);
    log.action("Starting Vectorization Pipeline Trigger");

    let clients = match normalize_clients(&args.clients_list) {
        Ok(clients) => clients,
        Err(err) => {
            log.failure(&format!("Invalid --clientsList argument: {err}"));
            return 1;
        }
    };

    let request = TriggerRequest {
        service_url: args.vectorization_service_url,
        dataset_url: args.url,
        job_id: args.job_id,
        clients,
        study_id: args.study_id,
    };

    match api::trigger(&request, log.as_ref()) {
        Ok(response) if response.is_success() => {
            log.action("Vectorization trigger request succeeded.");
            0
        }
        Ok(response) => {
            log.failure(&format!(
                "Vectorization trigger request failed with status {}.",
                response.status
            ));
            1
        }
        Err(err) => {
            log.failure(&format!("Error sending request: {err}"));
            1
        }
    }
}
