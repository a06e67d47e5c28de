use clap::Parser;

/// Long flag spellings are camelCase on purpose: they are part of the
/// invocation contract shared with the rest of the pipeline tooling.
#[derive(Parser, Debug)]
#[command(
    name = "vectrig",
    version,
    about = "Trigger the vectorization service via a POST request"
)]
pub struct CliArgs {
    /// Base URL of the vectorization service (e.g. http://localhost:5001)
    #[arg(long = "vectorizationServiceUrl")]
    pub vectorization_service_url: String,

    /// The dataset URL to be vectorized
    #[arg(long)]
    pub url: String,

    /// Unique job ID for the vectorization/aggregation process
    #[arg(long = "jobId")]
    pub job_id: String,

    /// Client identifiers: a JSON array, a bracketed comma-separated list,
    /// or a single bare value (e.g. --clientsList '["client1", "client2"]')
    #[arg(long = "clientsList")]
    pub clients_list: String,

    /// Study identifier (required for both dev and prod modes)
    #[arg(long = "studyId")]
    pub study_id: String,
}
