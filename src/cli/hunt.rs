use chrono::Local;

use crate::{cli::Args, core::pipeline::Pipeline, prelude::*};

#[instrument(skip_all)]
pub async fn hunt(args: &Args) -> Result {
    let evcc = args.evcc.new_client()?;
    let decision = Pipeline::builder()
        .provider(&evcc)
        .publisher(&evcc)
        .now(Local::now())
        .rank(args.decision.rank)
        .rule(args.decision.rule())
        .scout(args.scout)
        .build()
        .run()
        .await?;
    if decision.charge_limit.is_charging() {
        info!(charge_limit = %decision.charge_limit, "grid charging is scheduled");
    } else {
        info!("grid charging is not worth it");
    }
    Ok(())
}
