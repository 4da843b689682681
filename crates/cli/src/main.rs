use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use groundnote_chunker::ChunkerConfig;
use groundnote_index::{IndexConfig, VectorScheme};
use groundnote_store::{DocumentStore, PlainTextExtractor, StoreConfig};
use groundnote_studio::{GoogleTts, OpenAiChatClient, Studio};
use std::path::PathBuf;

/// Widest leading-chunk budget any generation feature reads
const CONTEXT_CHUNKS: usize = 10;

#[derive(Parser)]
#[command(name = "groundnote")]
#[command(about = "Document grounding, retrieval, and study-artifact generation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Document file to load (repeatable)
    #[arg(long = "doc", global = true)]
    docs: Vec<PathBuf>,

    /// Chunk size in characters
    #[arg(long, global = true, default_value_t = 1000)]
    chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    #[arg(long, global = true, default_value_t = 200)]
    overlap: usize,

    /// Vectorization scheme: tfidf|simple
    #[arg(long, global = true, default_value = "tfidf")]
    scheme: String,

    /// Maximum vocabulary size (defaults per scheme: tfidf 100, simple 300)
    #[arg(long, global = true)]
    max_terms: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank document chunks against a query
    Search(SearchArgs),

    /// Answer a question grounded in the loaded documents
    Ask(AskArgs),

    /// Show statistics for the loaded documents
    Stats,

    /// Generate a prose summary
    Summary,

    /// Extract key insights
    Insights,

    /// Generate a multiple-choice quiz
    Quiz(QuizArgs),

    /// Generate study flashcards
    Flashcards(FlashcardArgs),

    /// Generate a table of contents
    Toc,

    /// Generate an ASCII-tree mind map
    #[command(name = "mind-map")]
    MindMap,

    /// Generate an audio overview (script + MP3)
    Audio(AudioArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Maximum number of chunks to return
    #[arg(long, short = 'n', default_value_t = 5)]
    top_k: usize,
}

#[derive(Args)]
struct AskArgs {
    /// Question to answer
    question: String,

    /// Number of chunks to ground the answer in
    #[arg(long, short = 'n', default_value_t = 3)]
    top_k: usize,
}

#[derive(Args)]
struct QuizArgs {
    /// Number of questions to generate
    #[arg(long, default_value_t = 5)]
    questions: usize,
}

#[derive(Args)]
struct FlashcardArgs {
    /// Number of flashcards to generate
    #[arg(long, default_value_t = 10)]
    cards: usize,
}

#[derive(Args)]
struct AudioArgs {
    /// Output path for the MP3 file
    #[arg(long, short, default_value = "overview.mp3")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let mut store = build_store(&cli)?;
    load_documents(&mut store, &cli.docs)?;

    match cli.command {
        Commands::Search(args) => {
            let hits = store.retrieve(&args.query, args.top_k);
            if hits.is_empty() {
                log::info!("No chunks matched the query");
            }
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Ask(args) => {
            let hits = store.retrieve(&args.question, args.top_k);
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let answer = studio.answer(&args.question, &hits).await?;
            println!("{}", serde_json::to_string_pretty(&answer)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&store.stats())?);
        }
        Commands::Summary => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let summary = studio.summary(&store.leading_chunks(CONTEXT_CHUNKS)).await?;
            println!("{summary}");
        }
        Commands::Insights => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let insights = studio
                .key_insights(&store.leading_chunks(CONTEXT_CHUNKS))
                .await?;
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        Commands::Quiz(args) => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let quiz = studio
                .quiz(&store.leading_chunks(CONTEXT_CHUNKS), args.questions)
                .await?;
            println!("{}", serde_json::to_string_pretty(&quiz)?);
        }
        Commands::Flashcards(args) => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let cards = studio
                .flashcards(&store.leading_chunks(CONTEXT_CHUNKS), args.cards)
                .await?;
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        Commands::Toc => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let toc = studio
                .table_of_contents(&store.leading_chunks(CONTEXT_CHUNKS))
                .await?;
            println!("{}", serde_json::to_string_pretty(&toc)?);
        }
        Commands::MindMap => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let map = studio
                .mind_map(&store.leading_chunks(CONTEXT_CHUNKS))
                .await?;
            println!("{map}");
        }
        Commands::Audio(args) => {
            let studio = Studio::new(OpenAiChatClient::groq()?);
            let tts = GoogleTts::from_env()?;
            let overview = studio
                .audio_overview(&tts, &store.leading_chunks(CONTEXT_CHUNKS))
                .await?;
            std::fs::write(&args.output, &overview.audio)
                .with_context(|| format!("Failed to write {}", args.output.display()))?;
            log::info!(
                "Wrote {} bytes of audio to {}",
                overview.audio.len(),
                args.output.display()
            );
            println!("{}", overview.script);
        }
    }

    Ok(())
}

fn build_store(cli: &Cli) -> Result<DocumentStore> {
    let scheme: VectorScheme = cli.scheme.parse().map_err(|e: String| anyhow!(e))?;
    let mut index = match scheme {
        VectorScheme::Tfidf => IndexConfig::default(),
        VectorScheme::Simple => IndexConfig::simple(),
    };
    if let Some(max_terms) = cli.max_terms {
        index.max_terms = max_terms;
    }

    let config = StoreConfig {
        chunker: ChunkerConfig {
            chunk_size: cli.chunk_size,
            overlap: cli.overlap,
            ..Default::default()
        },
        index,
        ..Default::default()
    };

    DocumentStore::new(config).context("Invalid store configuration")
}

fn load_documents(store: &mut DocumentStore, docs: &[PathBuf]) -> Result<()> {
    let extractor = PlainTextExtractor;
    for path in docs {
        let report = store
            .add_document_from_file(&extractor, path)
            .with_context(|| format!("Failed to load document {}", path.display()))?;
        log::info!(
            "Loaded '{}': {} chunks, {} characters",
            report.doc_name,
            report.chunks_created,
            report.char_count
        );
    }
    Ok(())
}
