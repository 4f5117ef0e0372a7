use clap::Args;
use ferragem_app::{
    database,
    domain::people::{PeopleService, PgPeopleService, data::CandidateProfile},
};

#[derive(Debug, Args)]
pub(crate) struct ResolveCollaboratorArgs {
    /// Collaborator matricula
    #[arg(long)]
    matricula: String,

    /// Display name from the staff directory
    #[arg(long)]
    name: String,

    /// Contact email from the staff directory
    #[arg(long)]
    email: String,

    /// Sector the collaborator works in
    #[arg(long)]
    sector: Option<String>,

    /// Contact phone
    #[arg(long)]
    phone: Option<String>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ResolveCollaboratorArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPeopleService::new(pool);

    let person = service
        .resolve_collaborator(
            &args.matricula,
            CandidateProfile {
                display_name: args.name,
                contact_email: args.email,
                sector: args.sector,
                phone: args.phone,
            },
        )
        .await
        .map_err(|error| format!("failed to resolve collaborator: {error}"))?;

    println!("person_uuid: {}", person.uuid);
    println!("kind: {}", person.kind.as_str());
    println!("matricula: {}", person.external_key);
    println!("display_name: {}", person.display_name);

    Ok(())
}
