use std::path::PathBuf;

use certverify::{
    client::{ClientConfig, VerificationClient},
    codec,
    request::{ManualVerificationRequest, UploadFile},
    response::VerificationResult,
    utils::certificate_link,
};
use clap::{Parser, Subcommand};
use log::info;
use url::Url;

mod logging;

#[derive(Parser)]
#[command(author, version, about = "Verifies credentials and prints shareable certificate links", long_about = None)]
struct Cli {
    /// Verification service base URL. Defaults to $CERTVERIFY_API_URL, then http://localhost:8000.
    #[arg(long, global = true)]
    api_url: Option<Url>,
    /// Base URL of the certificate view server used for printed links.
    #[arg(long, global = true, default_value = "http://localhost:3000")]
    view_url: String,
    /// Print the raw verification result as JSON.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a certificate document for verification.
    Upload { file: PathBuf },
    /// Verify by identifier without uploading a document.
    Manual {
        #[arg(long)]
        certificate_id: Option<String>,
        #[arg(long)]
        issuer_url: Option<String>,
    },
    /// Show the result carried by a certificate token.
    Decode { token: String },
}

fn print_result(result: &VerificationResult, json: bool) -> Result<(), anyhow::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    let extraction = &result.extraction;
    println!("Verdict:      {}", result.final_verdict);
    println!("Message:      {}", result.verification.message);
    if let Some(name) = &extraction.candidate_name {
        println!("Candidate:    {}", name);
    }
    if let Some(org) = &extraction.issuer_org {
        println!("Issuer:       {}", org);
    }
    if let Some(url) = &extraction.issuer_url {
        println!("Issuer URL:   {}", url);
    }
    if let Some(id) = &extraction.certificate_id {
        println!("Certificate:  {}", id);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = match cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env()?,
    };

    let result = match cli.command {
        Commands::Upload { file } => {
            let client = VerificationClient::new(config)?;
            info!("Uploading {} to {}", file.display(), client.get_api_base_url());
            client.verify_by_upload(UploadFile::from_path(&file)?).await?
        }
        Commands::Manual {
            certificate_id,
            issuer_url,
        } => {
            let client = VerificationClient::new(config)?;
            let request = ManualVerificationRequest {
                certificate_id,
                issuer_url,
            };
            client.verify_manually(&request).await?
        }
        Commands::Decode { token } => {
            let result = codec::decode(&token)?;
            print_result(&result, cli.json)?;
            return Ok(());
        }
    };

    print_result(&result, cli.json)?;
    let token = codec::encode(&result)?;
    println!(
        "Share link:   {}",
        certificate_link(&cli.view_url, token.as_str())
    );

    Ok(())
}
