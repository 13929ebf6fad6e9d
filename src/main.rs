use clap::Parser;
use vaultkeep::cli::{Cli, Commands};
use vaultkeep::store::ItemPatch;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => vaultkeep::cli::commands::init::execute(&cli),
        Commands::Add {
            ref title,
            category,
            ref service,
            ref value,
            ref note,
            favorite,
        } => vaultkeep::cli::commands::add::execute(
            &cli,
            title,
            category,
            service,
            value.as_deref(),
            note.as_deref(),
            favorite,
        ),
        Commands::Get { ref id } => vaultkeep::cli::commands::get::execute(&cli, id),
        Commands::Show { ref id } => vaultkeep::cli::commands::show::execute(&cli, id),
        Commands::List {
            category,
            favorites,
        } => vaultkeep::cli::commands::list::execute(&cli, category, favorites),
        Commands::Search { ref query } => vaultkeep::cli::commands::search::execute(&cli, query),
        Commands::Update {
            ref id,
            ref title,
            ref value,
            category,
            ref service,
            ref note,
            clear_note,
            favorite,
        } => {
            let patch = ItemPatch {
                title: title.clone(),
                value: value.clone(),
                category,
                service: service.clone(),
                favorite,
                note: note.clone(),
                clear_note,
            };
            vaultkeep::cli::commands::update::execute(&cli, id, patch)
        }
        Commands::Delete { ref id, force } => {
            vaultkeep::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Favorite { ref id } => vaultkeep::cli::commands::favorite::execute(&cli, id),
        Commands::Completions { ref shell } => vaultkeep::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        vaultkeep::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
