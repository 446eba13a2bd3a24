//! Terminal front end for the assessment service: fills an intake from flags,
//! submits it, prints the report table, and optionally saves the PDF export.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use assessment_api::assessment::IntakeField;
use assessment_api::client::{format_table, save_export, submit, BridgeClient, IntakeSession, Settled};

#[derive(Parser, Debug)]
#[command(
    name = "assessment-cli",
    version,
    about = "Submit a clinical intake and print the generated assessment"
)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,
    #[arg(long)]
    diagnosis: String,
    #[arg(long)]
    history_of_trauma: String,
    #[arg(long)]
    symptoms: String,
    #[arg(long)]
    history_of_problem: String,
    #[arg(long)]
    treatment_plan: String,
    /// Also download the PDF export to this path.
    #[arg(long)]
    pdf: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = BridgeClient::new(args.server.as_str())?;

    let mut session = IntakeSession::new();
    session.set(IntakeField::Diagnosis, args.diagnosis);
    session.set(IntakeField::HistoryOfTrauma, args.history_of_trauma);
    session.set(IntakeField::Symptoms, args.symptoms);
    session.set(IntakeField::HistoryOfProblem, args.history_of_problem);
    session.set(IntakeField::TreatmentPlan, args.treatment_plan);

    let settled = submit(&mut session, &client)
        .await
        .map_err(|e| anyhow!("please fill in: {}", e.missing_labels()))?;
    match settled {
        Settled::Updated => {}
        Settled::Failed => bail!("assessment request to {} failed", args.server),
        Settled::Stale => bail!("assessment response was superseded"),
    }

    let assessment = session.assessment().unwrap_or_default();
    let rows = session.rows();
    if rows.is_empty() {
        println!("{assessment}");
    } else {
        print!("{}", format_table(&rows));
    }

    if let Some(path) = args.pdf {
        let bytes = client.export_pdf(assessment).await?;
        save_export(&path, &bytes)
            .with_context(|| format!("Failed to write PDF to {}", path.display()))?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}
