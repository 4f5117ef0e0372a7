use clap::Args;
use ferragem_app::{
    database,
    domain::people::{PeopleService, PgPeopleService},
    identity::{IdentityClient, IdentityConfig},
};

#[derive(Debug, Args)]
pub(crate) struct LoginArgs {
    /// Account email
    #[arg(long)]
    email: String,

    /// Account password
    #[arg(long)]
    password: String,

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

pub(crate) async fn run(args: LoginArgs) -> Result<(), String> {
    let identity = IdentityClient::new(IdentityConfig {
        base_url: args.identity_url,
        api_key: args.identity_api_key,
    });

    let session = identity
        .sign_in(&args.email, &args.password)
        .await
        .map_err(|error| format!("failed to sign in: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPeopleService::new(pool);

    let person = service
        .find_customer_by_account(&session.account_key)
        .await
        .map_err(|error| format!("failed to look up customer: {error}"))?
        .ok_or_else(|| {
            format!(
                "account {} has no customer profile; run `people register` first",
                session.account_key
            )
        })?;

    println!("person_uuid: {}", person.uuid);
    println!("display_name: {}", person.display_name);
    println!("email: {}", person.contact_email);

    Ok(())
}
