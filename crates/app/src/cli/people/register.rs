use clap::Args;
use ferragem_app::{
    database,
    domain::people::{PeopleService, PgPeopleService, data::NewCustomer, records::PersonUuid},
    identity::{IdentityClient, IdentityConfig},
};

#[derive(Debug, Args)]
pub(crate) struct RegisterCustomerArgs {
    /// Email for the new account
    #[arg(long)]
    email: String,

    /// Password for the new account
    #[arg(long)]
    password: String,

    /// Customer display name
    #[arg(long)]
    name: String,

    /// Contact phone
    #[arg(long)]
    phone: Option<String>,

    /// Identity provider base URL
    #[arg(long, env = "IDENTITY_URL")]
    identity_url: String,

    /// Identity provider publishable API key
    #[arg(long, env = "IDENTITY_API_KEY", hide_env_values = true)]
    identity_api_key: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: RegisterCustomerArgs) -> Result<(), String> {
    let identity = IdentityClient::new(IdentityConfig {
        base_url: args.identity_url,
        api_key: args.identity_api_key,
    });

    let session = identity
        .sign_up(&args.email, &args.password)
        .await
        .map_err(|error| format!("failed to create identity account: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPeopleService::new(pool);

    let person = service
        .register_customer(NewCustomer {
            uuid: PersonUuid::new(),
            account_key: session.account_key,
            display_name: args.name,
            contact_email: session.email,
            phone: args.phone,
        })
        .await
        .map_err(|error| format!("failed to register customer: {error}"))?;

    println!("person_uuid: {}", person.uuid);
    println!("account_key: {}", person.external_key);
    println!("email: {}", person.contact_email);

    Ok(())
}
