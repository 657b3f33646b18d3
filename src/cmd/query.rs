use std::sync::Arc;

use clap::Args;
use log::info;

use crate::cli::context::get_current_context;
use crate::cli::query::{QueryClient, QueryRequest};
use crate::cli::submitter::{StdoutOutput, Submitter};

/// Submit a time-range query and print the response data
#[derive(Args)]
pub struct QueryCommand {
    /// Start of the queried range, sent verbatim
    #[clap(long)]
    pub start: String,

    /// End of the queried range, sent verbatim
    #[clap(long)]
    pub end: String,

    /// Query mode forwarded to the server; omitted means unselected
    #[clap(long = "query-type")]
    pub query_type: Option<String>,

    /// Query API host, overriding the current context
    #[clap(long)]
    pub host: Option<String>,
}

#[tokio::main]
pub async fn execute(args: QueryCommand) -> Result<(), anyhow::Error> {
    let query_host = match args.host {
        Some(host) => host,
        None => get_current_context()?.query_host,
    };

    let request = QueryRequest::new(args.start, args.end, args.query_type);
    info!("Submitting query to {}", query_host);

    let submitter = Submitter::new(QueryClient::new(query_host), Arc::new(StdoutOutput));
    submitter.submit_and_wait(request).await
}
