use std::io;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use rs_predict_core::io::{read_corpus_tokens, CorpusError};
use rs_predict_core::model::trigram_model::TrigramModel;
use rs_predict_core::session;

#[derive(Parser, Debug)]
#[command(name = "rs-predict")]
#[command(about = "Predict the next word from a trigram model of a text corpus")]
#[command(version)]
struct Args {
    /// Plain text corpus (UTF-8) to learn from
    #[arg(default_value = "data.txt")]
    corpus: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Quiet by default so log lines don't interleave with the prompt; use RUST_LOG=info to see progress
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // A missing corpus is a user mistake: explain it and leave without a session
    let tokens = match read_corpus_tokens(&args.corpus) {
        Ok(tokens) => tokens,
        Err(CorpusError::NotFound { path }) => {
            eprintln!("\n[ERROR] '{}' not found.", path.display());
            eprintln!(
                "Please download a plain text file and save it as '{}', or pass its path as the first argument.",
                path.display()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // The model is built once, then only read by the session
    let model = TrigramModel::build_parallel(&tokens);

    session::run(&model, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
