use clap::{Parser, Subcommand};
use orgdesk_core::{
    legacy_route, CoreConfig, NonEmptyText, OrganizationService, ProjectService, Slug,
    DEFAULT_DATA_DIR,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "orgdesk")]
#[command(about = "OrgDesk settings backend CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all organizations
    List,
    /// Create an organization
    CreateOrganization {
        /// Organization slug
        slug: String,
        /// Organization display name
        name: String,
    },
    /// Translate a settings path to its legacy equivalent
    LegacyRoute {
        /// Current-style settings path (e.g. /settings/account/api/)
        path: String,
    },
    /// Remove a project (danger zone)
    RemoveProject {
        /// Owning organization slug
        org: String,
        /// Project slug
        project: String,
    },
}

fn config() -> Result<Arc<CoreConfig>, Box<dyn std::error::Error>> {
    let data_dir = std::env::var("ORGDESK_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
    let data_dir = PathBuf::from(data_dir);
    std::fs::create_dir_all(&data_dir)?;
    Ok(Arc::new(CoreConfig::new(data_dir)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            let service = OrganizationService::new(config()?);
            let organizations = service.list();
            if organizations.is_empty() {
                println!("No organizations found.");
            } else {
                for org in organizations {
                    println!(
                        "Slug: {}, Name: {}, Open membership: {}, Created: {}",
                        org.slug, org.name, org.open_membership, org.created_at
                    );
                }
            }
        }
        Some(Commands::CreateOrganization { slug, name }) => {
            let service = OrganizationService::new(config()?);
            let slug = Slug::new(&slug)?;
            let name = NonEmptyText::new(&name)?;
            match service.create(slug, name) {
                Ok(org) => println!("Created organization {} ({})", org.slug, org.id),
                Err(e) => eprintln!("Error creating organization: {}", e),
            }
        }
        Some(Commands::LegacyRoute { path }) => {
            let route = legacy_route(&path);
            let mode = if route.client_routed {
                "client-routed"
            } else {
                "plain link"
            };
            println!("{} ({})", route.path, mode);
        }
        Some(Commands::RemoveProject { org, project }) => {
            let service = ProjectService::new(config()?);
            let org = Slug::new(&org)?;
            let project = Slug::new(&project)?;
            match service.remove(&org, &project) {
                Ok(()) => println!("Removed project {}/{}", org, project),
                Err(e) => eprintln!("Error removing project: {}", e),
            }
        }
        None => {
            println!("Use 'orgdesk --help' for commands");
        }
    }

    Ok(())
}
