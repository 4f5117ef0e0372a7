use std::{io, path::PathBuf};

use clap::Args;
use ferragem::{
    quota::{DEFAULT_MONTHLY_CAP, QuotaPolicy},
    receipt::{Receipt, ReceiptLine},
};
use ferragem_app::{
    database::{self, Db},
    domain::{
        orders::{OrdersService, PgOrdersService, data::CustomerInfo},
        people::{PeopleService, PgPeopleService, data::CandidateProfile},
    },
};

use crate::cli::{cart::file, now_in};

#[derive(Debug, Args)]
pub(crate) struct PlaceOrderArgs {
    /// Matricula of the collaborator placing the order
    #[arg(long)]
    matricula: String,

    /// Name to put on the order form
    #[arg(long)]
    name: String,

    /// Contact email for the order
    #[arg(long)]
    email: String,

    /// Requesting department
    #[arg(long)]
    department: String,

    /// Free-form note attached to the order
    #[arg(long)]
    notes: Option<String>,

    /// Orders allowed per person per calendar month
    #[arg(long, env = "FERRAGEM_MONTHLY_CAP", default_value_t = DEFAULT_MONTHLY_CAP)]
    monthly_cap: u32,

    /// Cart file holding the lines to order
    #[arg(long, env = "FERRAGEM_CART", default_value = "cart.json")]
    cart_file: PathBuf,

    /// IANA time zone for the quota month; system zone when omitted
    #[arg(long, env = "FERRAGEM_TIME_ZONE")]
    time_zone: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: PlaceOrderArgs) -> Result<(), String> {
    let cart = file::load(&args.cart_file)?;

    if cart.is_empty() {
        return Err(format!(
            "cart file {} has no lines; add some with `cart add`",
            args.cart_file.display()
        ));
    }

    let quota = QuotaPolicy::new(args.monthly_cap)
        .map_err(|error| format!("invalid monthly cap: {error}"))?;

    let now = now_in(args.time_zone.as_deref())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let people = PgPeopleService::new(pool.clone());
    let orders = PgOrdersService::with_quota(Db::new(pool), quota);

    let person = people
        .resolve_collaborator(
            &args.matricula,
            CandidateProfile {
                display_name: args.name.clone(),
                contact_email: args.email.clone(),
                sector: Some(args.department.clone()),
                phone: None,
            },
        )
        .await
        .map_err(|error| format!("failed to resolve collaborator: {error}"))?;

    let placed = orders
        .place_order(
            person.uuid,
            CustomerInfo {
                name: args.name,
                email: args.email,
                department: args.department,
                notes: args.notes,
            },
            cart.lines(),
            &now,
        )
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    println!("order_uuid: {}", placed.order.uuid);
    println!("status: {}", placed.order.status);

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

    // Only a committed order empties the cart.
    file::clear(&args.cart_file)?;

    Ok(())
}
