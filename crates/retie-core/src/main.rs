use clap::{Arg, Command};
use retie_core::{Blog, ComposeForm, Dialog};
use retie_post::SystemClock;
use retie_render::{to_html, DisplaySurface, MemorySurface};
use retie_store::FileBackend;
use std::path::PathBuf;

/// One-shot form fed from command-line arguments.
struct ArgForm {
    title: String,
    content: String,
    reset: bool,
}

impl ComposeForm for ArgForm {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn content(&self) -> String {
        self.content.clone()
    }

    fn reset(&mut self) {
        self.reset = true;
    }
}

/// The CLI has no modal; visibility toggles are no-ops.
struct NoDialog;

impl Dialog for NoDialog {
    fn open(&mut self) {}

    fn close(&mut self) {}
}

fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("retie"))
        .unwrap_or_else(|| PathBuf::from(".retie"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("retie")
        .version(retie_core::VERSION)
        .about("Personal blog: persisted posts, newest-first display")
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .help("Directory holding the persisted slots"),
        )
        .subcommand(Command::new("list").about("Render all posts, newest first"))
        .subcommand(
            Command::new("post")
                .about("Publish a new post")
                .arg(Arg::new("title").long("title").required(true).help("Post title"))
                .arg(
                    Arg::new("content")
                        .long("content")
                        .required(true)
                        .help("Post body; embedded newlines are preserved"),
                ),
        )
        .subcommand(Command::new("theme").about("Toggle the light/dark theme"))
        .arg_required_else_help(true);

    let matches = cli.get_matches();
    let store_dir = matches
        .get_one::<String>("store")
        .map_or_else(default_store_dir, PathBuf::from);
    let backend = FileBackend::open(store_dir)?;
    let mut blog = Blog::new(backend, SystemClock::new());

    match matches.subcommand() {
        Some(("list", _)) => {
            let mut surface = MemorySurface::new();
            blog.initialize(&mut surface)?;
            println!("theme: {}", blog.current_theme());
            for card in surface.children() {
                println!("{}", to_html(card));
            }
        }
        Some(("post", args)) => {
            let mut form = ArgForm {
                title: args.get_one::<String>("title").cloned().unwrap_or_default(),
                content: args
                    .get_one::<String>("content")
                    .cloned()
                    .unwrap_or_default(),
                reset: false,
            };
            let mut surface = MemorySurface::new();
            blog.create_post(&mut surface, &mut form, &mut NoDialog)?;
            // A rejected draft is a silent no-op, exit code included.
            if form.reset {
                println!("published ({} posts)", blog.posts().len());
            }
        }
        Some(("theme", _)) => {
            let theme = blog.toggle_theme()?;
            println!("{theme}");
        }
        _ => {}
    }

    Ok(())
}
