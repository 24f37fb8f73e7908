//! Main application entry point (native).

#[cfg(feature = "native")]
mod cli {
    use std::path::PathBuf;

    use clap::Parser;
    use tagging_app::{App, AppConfig, AppError};
    use tagging_core::FileSource;

    #[derive(Parser)]
    #[command(
        name = "tagging-question",
        version,
        about = "Sort tags into an answer and check them"
    )]
    pub struct Args {
        /// JSON file with the widget settings (image, question, dataset).
        #[arg(long, env = "TAGGING_CONFIG")]
        config: Option<PathBuf>,
        /// JSON file holding the tag dataset. Overrides the config file.
        #[arg(long, env = "TAGGING_DATASET")]
        dataset: Option<PathBuf>,
        /// Question shown above the tags.
        #[arg(long)]
        question: Option<String>,
        /// Image shown with the question.
        #[arg(long)]
        image: Option<String>,
        /// Shuffle the tags before the first round.
        #[arg(long)]
        shuffle: bool,
    }

    pub fn run() -> Result<(), AppError> {
        let args = Args::parse();
        let mut config = match &args.config {
            Some(path) => AppConfig::from_config_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(dataset) = args.dataset {
            config.widget.dataset = dataset.display().to_string();
        }
        if let Some(question) = args.question {
            config.widget.question = question;
        }
        if let Some(image) = args.image {
            config.widget.image = image;
        }
        config.shuffle = args.shuffle;

        let source = FileSource::new(config.dataset_path());
        let mut app = App::new(config);
        if let Err(e) = pollster::block_on(app.load_from(&source)) {
            log::error!("Error fetching tag data: {e}");
        }

        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        app.run(stdin.lock(), &mut stdout)
    }
}

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting tagging question");

    if let Err(e) = cli::run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
