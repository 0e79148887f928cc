/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::process::ExitCode;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;

/// Exit status for any failure reported by S3
const BACKEND_FAILURE: u8 = 2;

const VERSION: &str = concat!(
    "version ",
    env!("CARGO_PKG_VERSION"),
    " by Rob Shearer\n\nFor more information visit <http://v.cx/2016/s3-content-negotiation>."
);

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "sicon", display_name = "SiCoN")]
#[command(version = VERSION)]
#[command(about = "Copy files in an AWS S3 bucket to simulate HTTP content negotiation.")]
pub struct Args {
    /// Use AWS S3 bucket named BUCKET
    #[arg(short = 'b', long, value_name = "BUCKET", required = true)]
    aws_bucket: String,
}

async fn run(args: Args) -> Result<(), s3_sicon::error::Error> {
    let config = s3_sicon::from_env().load().await;
    let client = s3_sicon::Client::new(config);

    let output = client
        .sync_shadows()
        .bucket(args.aws_bucket)
        .on_arbitrary_choice(|choice| println!("{choice}"))
        .send()
        .await?;

    tracing::debug!(
        "listed {} objects, copied {} shadows, skipped {}",
        output.objects_listed(),
        output.copied().len(),
        output.skipped().len()
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", DisplayErrorContext(&err));
            ExitCode::from(BACKEND_FAILURE)
        }
    }
}
