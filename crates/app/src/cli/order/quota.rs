use clap::Args;
use ferragem::{
    money::format_amount,
    quota::{DEFAULT_MONTHLY_CAP, QuotaPolicy},
};
use ferragem_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService},
};
use uuid::Uuid;

use crate::cli::now_in;

#[derive(Debug, Args)]
pub(crate) struct QuotaArgs {
    /// Person UUID whose quota should be checked
    #[arg(long)]
    person_uuid: Uuid,

    /// Orders allowed per person per calendar month
    #[arg(long, env = "FERRAGEM_MONTHLY_CAP", default_value_t = DEFAULT_MONTHLY_CAP)]
    monthly_cap: u32,

    /// IANA time zone for the quota month; system zone when omitted
    #[arg(long, env = "FERRAGEM_TIME_ZONE")]
    time_zone: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: QuotaArgs) -> Result<(), String> {
    let quota = QuotaPolicy::new(args.monthly_cap)
        .map_err(|error| format!("invalid monthly cap: {error}"))?;

    let now = now_in(args.time_zone.as_deref())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::with_quota(Db::new(pool), quota);

    let decision = service
        .check_quota(args.person_uuid.into(), &now)
        .await
        .map_err(|error| format!("failed to check quota: {error}"))?;

    println!("cap: {}", decision.cap);
    println!("placed: {}", decision.placed);
    println!("remaining: {}", decision.remaining);
    println!("allowed: {}", decision.allowed);

    let orders = service
        .orders_for_person(args.person_uuid.into(), &now)
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    for order in orders {
        println!();
        println!("order_uuid: {}", order.uuid);
        println!("status: {}", order.status);
        println!("total: {}", format_amount(order.total_cents));
        println!("created_at: {}", order.created_at);
    }

    Ok(())
}
