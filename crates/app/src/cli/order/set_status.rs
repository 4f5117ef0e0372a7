use clap::Args;
use ferragem::status::OrderStatus;
use ferragem_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct SetStatusArgs {
    /// Order UUID to update
    #[arg(long)]
    order_uuid: Uuid,

    /// Target status: pending, processing, completed or canceled
    #[arg(long)]
    status: OrderStatus,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: SetStatusArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool));

    let order = service
        .set_status(args.order_uuid.into(), args.status)
        .await
        .map_err(|error| format!("failed to update order status: {error}"))?;

    println!("order_uuid: {}", order.uuid);
    println!("status: {}", order.status);

    Ok(())
}
