//! HelpBubble offline tooling: dataset construction, model evaluation and quick queries.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use helpbubble::{
    AnswerModel, ContextRouter, DEFAULT_TRAIN_RATIO, Evaluator, ExtractiveReader,
    FallbackResponder, KnowledgeBase, QaRecord, ReaderConfig, build_dataset, compare_models,
    load_or_sample, load_squad_file, render_comparison, render_summary, save_records,
    save_report, split_train_eval,
};

#[derive(Parser)]
#[command(name = "helpbubble-eval")]
#[command(about = "Dataset and evaluation tooling for HelpBubble")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Knowledge-base JSON file (or set HELPBUBBLE_KNOWLEDGE_PATH); built-in catalog otherwise
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the e-commerce QA dataset and write train/eval/full splits
    BuildDataset {
        #[arg(short, long, default_value = "data")]
        out_dir: PathBuf,

        #[arg(long, default_value_t = DEFAULT_TRAIN_RATIO)]
        train_ratio: f64,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate one reader model
    Evaluate {
        /// Model directory (or set HELPBUBBLE_MODEL_PATH)
        #[arg(short, long)]
        model_path: Option<PathBuf>,

        /// Label used in reports
        #[arg(long)]
        model_name: Option<String>,

        /// Evaluation records; the built-in sample set is used when missing
        #[arg(short, long, default_value = "data/ecommerce_qa_eval.json")]
        dataset: PathBuf,

        /// Optional SQuAD v1.1 file evaluated after the support dataset
        #[arg(long)]
        squad: Option<PathBuf>,

        #[arg(long, default_value_t = 50)]
        squad_limit: usize,

        #[arg(short, long, default_value = "models")]
        output_dir: PathBuf,
    },

    /// Evaluate several reader models on the same records
    Compare {
        /// Model directories, evaluated in the given order
        #[arg(short, long = "model", required = true)]
        models: Vec<PathBuf>,

        #[arg(short, long, default_value = "data/ecommerce_qa_eval.json")]
        dataset: PathBuf,

        #[arg(short, long, default_value = "models")]
        output_dir: PathBuf,
    },

    /// Answer a single question from the command line
    Ask {
        question: String,

        /// Answer against this text instead of a routed passage
        #[arg(short, long)]
        context: Option<String>,

        /// Model directory (or set HELPBUBBLE_MODEL_PATH); canned answers otherwise
        #[arg(short, long)]
        model_path: Option<PathBuf>,
    },

    /// List knowledge-base categories
    Contexts,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let knowledge_path = cli.knowledge.or_else(|| {
        std::env::var("HELPBUBBLE_KNOWLEDGE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    });

    match cli.command {
        Commands::BuildDataset {
            out_dir,
            train_ratio,
            seed,
        } => run_build_dataset(&out_dir, train_ratio, seed),
        Commands::Evaluate {
            model_path,
            model_name,
            dataset,
            squad,
            squad_limit,
            output_dir,
        } => {
            let reader = load_reader(model_path, model_name)?;
            run_evaluate(reader, &dataset, squad.as_deref(), squad_limit, &output_dir)
        }
        Commands::Compare {
            models,
            dataset,
            output_dir,
        } => run_compare(&models, &dataset, &output_dir),
        Commands::Ask {
            question,
            context,
            model_path,
        } => run_ask(knowledge_path.as_deref(), &question, context, model_path),
        Commands::Contexts => {
            let kb = load_knowledge(knowledge_path.as_deref())?;
            for category in kb.categories() {
                let marker = if category == kb.default_category() {
                    " (default)"
                } else {
                    ""
                };
                println!("{}{}", category, marker);
            }
            println!("Total contexts: {}", kb.len());
            Ok(())
        }
    }
}

fn run_build_dataset(out_dir: &Path, train_ratio: f64, seed: Option<u64>) -> Result<()> {
    let records = build_dataset();

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (train, eval) = split_train_eval(records.clone(), train_ratio, &mut rng)?;

    save_records(&train, &out_dir.join("ecommerce_qa_train.json"))?;
    save_records(&eval, &out_dir.join("ecommerce_qa_eval.json"))?;
    save_records(&records, &out_dir.join("ecommerce_qa_full.json"))?;

    println!("Training samples: {}", train.len());
    println!("Evaluation samples: {}", eval.len());
    println!("Total samples: {}", records.len());
    Ok(())
}

fn run_evaluate<M: AnswerModel>(
    reader: M,
    dataset: &Path,
    squad: Option<&Path>,
    squad_limit: usize,
    output_dir: &Path,
) -> Result<()> {
    let evaluator = Evaluator::new(reader);

    let records = load_or_sample(dataset)?;
    let report = evaluator.evaluate_dataset(&records);
    save_report(&report, output_dir, "ecommerce_evaluation_results.json")?;
    println!("{}", render_summary(&report));

    if let Some(squad) = squad {
        let squad_records = load_squad_file(squad, Some(squad_limit))?;
        if squad_records.is_empty() {
            tracing::warn!(path = %squad.display(), "SQuAD file has no questions, skipping");
        } else {
            let report = evaluator.evaluate_dataset(&squad_records);
            save_report(&report, output_dir, "squad_evaluation_results.json")?;
            println!("{}", render_summary(&report));
        }
    }

    println!("Results written to {}", output_dir.display());
    Ok(())
}

fn run_compare(model_paths: &[PathBuf], dataset: &Path, output_dir: &Path) -> Result<()> {
    let readers = model_paths
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            load_reader(Some(path.clone()), Some(name))
        })
        .collect::<Result<Vec<_>>>()?;

    let records: Vec<QaRecord> = load_or_sample(dataset)?;
    let reports = compare_models(&readers, &records);

    save_report(&reports, output_dir, "ecommerce_model_comparison.json")?;
    println!("{}", render_comparison(&reports));
    Ok(())
}

fn run_ask(
    knowledge_path: Option<&Path>,
    question: &str,
    context: Option<String>,
    model_path: Option<PathBuf>,
) -> Result<()> {
    if question.trim().is_empty() {
        bail!("question must not be blank");
    }

    let router = ContextRouter::new(load_knowledge(knowledge_path)?);
    let decision = router.route(question);

    let reader = match load_reader(model_path, None) {
        Ok(reader) => Some(reader),
        Err(e) => {
            tracing::warn!("Reader unavailable ({:#}), using canned answers", e);
            None
        }
    };

    let passage = match (&context, decision.passage) {
        (Some(context), _) => context.as_str(),
        (None, Some(passage)) => passage,
        (None, None) => "",
    };

    if let Some(reader) = reader {
        match reader.answer(question, passage) {
            Ok(answer) => {
                println!("Category:   {}", decision.category);
                println!("Answer:     {}", answer.text);
                println!("Confidence: {:.3}", answer.score);
                return Ok(());
            }
            Err(e) => tracing::warn!(error = %e, "Reader failed, using canned answer"),
        }
    }

    let reply = FallbackResponder::new(router.clone()).respond(question);
    println!("Category:   {}", reply.category);
    println!("Answer:     {}", reply.answer);
    println!("Confidence: 0.000 (fallback)");
    Ok(())
}

fn load_reader(model_path: Option<PathBuf>, model_name: Option<String>) -> Result<ExtractiveReader> {
    let mut config = ReaderConfig::from_env();
    if let Some(path) = model_path {
        config.model_path = Some(path);
    }
    if let Some(name) = model_name {
        config.model_name = name;
    }

    ExtractiveReader::load(config).context("Failed to load reader model")
}

fn load_knowledge(path: Option<&Path>) -> Result<KnowledgeBase> {
    match path {
        Some(path) => KnowledgeBase::from_json_file(path)
            .with_context(|| format!("Failed to load knowledge base {}", path.display())),
        None => Ok(KnowledgeBase::builtin()),
    }
}
