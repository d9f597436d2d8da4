//! Groq setup check: verifies the credential, optionally writes a `.env`,
//! and runs one small test generation.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};

use quizgen_backend::config::Settings;
use quizgen_backend::groq::{CompletionBackend, CompletionParams, Groq};
use quizgen_backend::quiz::validate::parse_question;
use quizgen_backend::{telemetry, util};

const TEST_PROMPT: &str = r#"Generate a simple quiz question about Python programming in JSON format:
{
  "question": "What is Python?",
  "options": ["A programming language", "A snake", "A movie", "A game"],
  "correct_answer": "A programming language",
  "explanation": "Python is a high-level programming language."
}"#;

const TEST_PARAMS: CompletionParams = CompletionParams { temperature: 0.3, max_tokens: 200 };

#[derive(Parser, Debug)]
#[command(version, about = "Check that the quiz backend can talk to Groq")]
struct Args {
    /// Write this API key to the env file before checking.
    #[arg(long, value_name = "KEY")]
    write_env: Option<String>,

    /// Env file to write with --write-env.
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Overwrite an existing env file.
    #[arg(long)]
    force: bool,

    /// Only check configuration; skip the test generation.
    #[arg(long)]
    skip_test: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init_tracing();
    let args = Args::parse();

    if let Some(key) = &args.write_env {
        if let Err(e) = write_env_file(&args.env_file, key, args.force) {
            error!(target: "quizgen_backend", path = %args.env_file.display(), error = %e, "Could not write env file");
            return ExitCode::FAILURE;
        }
        info!(target: "quizgen_backend", path = %args.env_file.display(), "Env file written");
        std::env::set_var("GROQ_API_KEY", key.trim());
    }

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!(target: "quizgen_backend", error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let groq = match Groq::from_settings(&settings) {
        Ok(g) => {
            let masked = settings.api_key.as_deref().map(util::mask_secret).unwrap_or_default();
            info!(target: "quizgen_backend", api_key = %masked, model = %g.model, base_url = %g.base_url, "Groq client initialized");
            g
        }
        Err(e) => {
            error!(target: "quizgen_backend", error = %e, "Groq is not configured");
            warn!(target: "quizgen_backend", "Get a free key at https://console.groq.com/keys, then export GROQ_API_KEY or run with --write-env <KEY>");
            return ExitCode::FAILURE;
        }
    };

    if args.skip_test {
        info!(target: "quizgen_backend", "Configuration looks good; test generation skipped");
        return ExitCode::SUCCESS;
    }

    match groq.complete_json(TEST_PROMPT, TEST_PARAMS).await {
        Ok(raw) => {
            info!(target: "quizgen_backend", sample = %util::trunc_for_log(&raw, 100), "Test generation successful");
            if let Err(e) = parse_question(&raw) {
                warn!(target: "quizgen_backend", error = %e, "Sample output would be replaced by the fallback question");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(target: "quizgen_backend", error = %e, "Test generation failed; the key may be invalid or rate limited");
            ExitCode::FAILURE
        }
    }
}

fn write_env_file(path: &std::path::Path, key: &str, force: bool) -> std::io::Result<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, "API key is empty"));
    }
    if path.exists() && !force {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "env file already exists (use --force to overwrite)",
        ));
    }
    std::fs::write(path, format!("GROQ_API_KEY={}\n", key))
}
