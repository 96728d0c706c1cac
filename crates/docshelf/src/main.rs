use anyhow::{bail, Context};
use clap::Parser;
use console::style;
use directories::ProjectDirs;
use docshelfapp::api::ShelfApi;
use docshelfapp::commands::{CmdResult, MessageLevel};
use docshelfapp::store::{BlobStore, FsBlobStore};
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod session;

use args::{Cli, Commands};
use session::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = match cli.dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    let backend = FsBlobStore::new(root);
    let saved = Session::load(&backend);
    let mut api = ShelfApi::load(backend)
        .context("Failed to load collections (corrupt data? move the blob aside to reset)")?
        .with_session(saved.selection, saved.sort_mode);

    match cli.command {
        Commands::Create { name } => {
            let result = api.create_collection(&name)?;
            render(&result);
        }
        Commands::Delete { collection } => {
            let id = resolve(&api, &collection)?;
            let result = api.delete_collection(id)?;
            render(&result);
        }
        Commands::Toggle {
            collection,
            document,
        } => {
            let id = resolve(&api, &collection)?;
            let result = api.toggle_membership(id, &document)?;
            render(&result);
        }
        Commands::Assign {
            document,
            collections,
        } => {
            let ids = collections
                .iter()
                .map(|c| resolve(&api, c))
                .collect::<anyhow::Result<Vec<Uuid>>>()?;
            let result = api.assign_document(&document, &ids)?;
            render(&result);
        }
        Commands::Select { collection } => {
            let id = resolve(&api, &collection)?;
            let result = api.toggle_selection(id)?;
            render(&result);
            if let Some(label) = result.label {
                println!("Filter: {}", style(label).bold());
            }
        }
        Commands::Sort { mode } => {
            let result = api.set_sort_mode(mode.into())?;
            render_list(&api, &result);
        }
        Commands::List => {
            let result = api.list_collections()?;
            render_list(&api, &result);
        }
        Commands::Label => {
            println!("{}", api.selected_label());
        }
        Commands::Filter { documents } => {
            for doc in &documents {
                if api.should_show_document(doc) {
                    println!("{}", doc);
                }
            }
        }
    }

    // Capture selection + sort mode for the next invocation
    Session {
        selection: api.selection().clone(),
        sort_mode: api.sort_mode(),
    }
    .save(api.backend())?;

    Ok(())
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "docshelf", "docshelf")
        .context("Could not determine the platform data directory")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn resolve<B: BlobStore>(api: &ShelfApi<B>, reference: &str) -> anyhow::Result<Uuid> {
    match api.resolve(reference) {
        Some(id) => Ok(id),
        None => bail!("No collection matches '{}'", reference),
    }
}

fn render(result: &CmdResult) {
    for message in &result.messages {
        match message.level {
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => eprintln!("{}", style(&message.content).yellow()),
            MessageLevel::Info => println!("{}", style(&message.content).dim()),
        }
    }
}

fn render_list<B: BlobStore>(api: &ShelfApi<B>, result: &CmdResult) {
    if let Some(label) = &result.label {
        println!("{}", style(label).bold());
    }
    if result.listed.is_empty() {
        println!("{}", style("No collections yet").dim());
        return;
    }
    for collection in &result.listed {
        let mark = if api.selection().contains(collection.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let short_id: String = collection.id.to_string().chars().take(8).collect();
        println!(
            "{} {} {} {}",
            mark,
            collection.name,
            style(collection.document_ids.len()).dim(),
            style(short_id).dim()
        );
    }
    render(result);
}
