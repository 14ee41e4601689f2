use env_logger::Env;
use pagesnap::{
    configuration::get_configuration,
    pipeline::{run_snapshot, SnapshotOutcome},
    services::build_client,
};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let client = build_client();

    // Jobs run strictly in sequence; a failed one never takes down the
    // rest of the scheduled run, and the process exits 0 either way.
    for job in configuration.jobs() {
        let outcome = run_snapshot(&client, &job).await;
        match outcome {
            SnapshotOutcome::Written { path, record_count } => {
                println!(
                    "{}: wrote {} records to {}",
                    job.name,
                    record_count,
                    path.display()
                );
            }
            SnapshotOutcome::EmptyNotWritten => {
                println!("{}: no records extracted, nothing written", job.name);
            }
            SnapshotOutcome::Failed { reason } => {
                log::error!("{}: {reason}", job.name);
                println!("{}: failed: {reason}", job.name);
            }
        }
    }
}
