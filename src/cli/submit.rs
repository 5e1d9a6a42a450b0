use anyhow::Result;
use clap::Args;

use crate::form::{FormController, FormStatus};

/// Send a submission to a running server, exactly as the contact page does.
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Submission endpoint of a running server
    #[arg(long, default_value = "http://127.0.0.1:3000/api/contact")]
    pub endpoint: String,

    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Plain contact message (leave unset for a quote request)
    #[arg(long)]
    pub message: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    /// One of: warehousing, distribution, supply-chain, transportation
    #[arg(long)]
    pub service_type: Option<String>,

    #[arg(long)]
    pub shipment_volume: Option<String>,

    /// Desired start date, YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,

    #[arg(long)]
    pub requirements: Option<String>,
}

pub async fn submit(args: SubmitArgs) -> Result<()> {
    let mut controller = FormController::new(args.endpoint)?;

    let form = controller.form_mut();
    form.name = args.name;
    form.email = args.email;
    form.message = args.message.unwrap_or_default();
    form.company_name = args.company_name.unwrap_or_default();
    form.service_type = args.service_type.unwrap_or_default();
    form.shipment_volume = args.shipment_volume.unwrap_or_default();
    form.start_date = args.start_date.unwrap_or_default();
    form.requirements = args.requirements.unwrap_or_default();

    match controller.submit().await {
        FormStatus::Success { message } => {
            println!("{message}");
            Ok(())
        }
        FormStatus::Error { message } => Err(anyhow::anyhow!(message.clone())),
        _ => Err(anyhow::anyhow!(crate::form::FALLBACK_ERROR)),
    }
}
