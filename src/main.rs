use clap::Parser;
use folio::application::{init, JourneyService};
use folio::application::{project_detail, visible_hackathons, visible_projects};
use folio::cli::{output, Cli, Commands};
use folio::domain::profile::{collect_skills, skill_counts};
use folio::domain::{Profile, TagSelection, TimelineOrder};
use folio::error::FolioError;
use folio::infrastructure::{FileSystemStore, ProfileStore};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn load_profile() -> Result<Profile, FolioError> {
    let store = FileSystemStore::discover()?;
    store.load_profile()
}

fn run(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::About => {
            let profile = load_profile()?;
            print!("{}", output::format_about(&profile));
            Ok(())
        }
        Commands::Timeline { recent } => {
            let store = FileSystemStore::discover()?;
            let service = JourneyService::new(store);
            let order = if recent {
                TimelineOrder::RecentFirst
            } else {
                TimelineOrder::Chronological
            };
            let milestones = service.execute(order)?;
            print!("{}", output::format_timeline(&milestones));
            Ok(())
        }
        Commands::Projects { tags } => {
            let profile = load_profile()?;
            let selection = TagSelection::from_tags(tags);
            let projects = visible_projects(&profile, &selection);
            print!("{}", output::format_project_list(&projects));
            Ok(())
        }
        Commands::Hackathons { tags } => {
            let profile = load_profile()?;
            let selection = TagSelection::from_tags(tags);
            let hackathons = visible_hackathons(&profile, &selection);
            print!("{}", output::format_hackathon_list(&hackathons));
            Ok(())
        }
        Commands::Experience => {
            let profile = load_profile()?;
            print!("{}", output::format_experience_list(&profile.experience));
            Ok(())
        }
        Commands::Skills => {
            let profile = load_profile()?;
            let skills = collect_skills(&profile);
            let counts = skill_counts(&profile);
            print!("{}", output::format_skill_list(&skills, &counts));
            Ok(())
        }
        Commands::Show { id } => {
            let profile = load_profile()?;
            let project = project_detail(&profile, &id)?;
            print!("{}", output::format_project_detail(project));
            Ok(())
        }
    }
}
