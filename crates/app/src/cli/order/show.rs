use std::io;

use clap::Args;
use ferragem::receipt::{Receipt, ReceiptLine};
use ferragem_app::{
    database::{self, Db},
    domain::orders::{OrdersService, PgOrdersService},
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// Order UUID to display
    #[arg(long)]
    order_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ShowOrderArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgOrdersService::new(Db::new(pool));

    let placed = service
        .get_order(args.order_uuid.into())
        .await
        .map_err(|error| format!("failed to fetch order: {error}"))?;

    println!("order_uuid: {}", placed.order.uuid);
    println!("person_uuid: {}", placed.order.person_uuid);
    println!("status: {}", placed.order.status);
    println!(
        "customer: {} <{}>",
        placed.order.customer_name, placed.order.customer_email
    );
    println!("department: {}", placed.order.department);

    if let Some(notes) = &placed.order.notes {
        println!("notes: {notes}");
    }

    println!("created_at: {}", placed.order.created_at);

    let receipt = Receipt::new(
        placed
            .lines
            .iter()
            .map(|line| ReceiptLine {
                name: line.product_name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price_cents,
                line_total: line.line_total_cents,
            })
            .collect(),
        placed.order.total_cents,
    );

    receipt
        .write_to(&mut io::stdout().lock())
        .map_err(|error| format!("failed to print receipt: {error}"))?;

    Ok(())
}
