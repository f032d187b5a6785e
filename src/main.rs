//! codedaily command-line host

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use codedaily::catalog::Catalog;
use codedaily::cli::{Action, CliArgs};
use codedaily::clipboard::SystemClipboard;
use codedaily::config::AppConfig;
use codedaily::config_paths;
use codedaily::editable::ChangeOrigin;
use codedaily::editor::CodeEditor;
use codedaily::evaluation::{GeminiEvaluator, GeminiSettings};
use codedaily::messages::{CodeMsg, ConsoleMsg, Msg, NavigationMsg};
use codedaily::model::AppModel;
use codedaily::runtime::Runtime;
use codedaily::syntax::{Highlighter, Language, TreeSitterHighlighter};
use codedaily::view::{
    render_console, render_editor, render_navbar, render_problem, ConsoleView, NavbarView,
};

fn main() -> Result<ExitCode> {
    codedaily::tracing::init();

    let config = AppConfig::load();
    let invocation = CliArgs::parse().into_invocation(&config);
    if let Action::Config { set_language } = invocation.action {
        return configure(config, set_language);
    }
    let catalog = load_catalog(invocation.catalog.as_ref())?;

    match invocation.action {
        Action::List => {
            for problem in catalog.problems() {
                println!("{}. {} ({})", problem.id, problem.title, problem.difficulty);
            }
        }
        Action::Show { day } => {
            let model = open(catalog, day, config.default_language);
            println!("{}", render_navbar(&NavbarView::from_model(&model)));
            println!();
            print!("{}", render_problem(model.problem()));
        }
        Action::Starter { day, language } => {
            let model = open(catalog, day, language);
            println!("{}", model.starter_code());
        }
        Action::Highlight { file, language } => {
            let text = read_source(&file)?;
            let mut editor = CodeEditor::new(&text);
            let mut highlighter = TreeSitterHighlighter::new();
            let view = editor.render(
                &text,
                language,
                ChangeOrigin::ExternalReset,
                Some(&mut highlighter as &mut dyn Highlighter),
            );
            println!("{}", render_editor(&view));
        }
        Action::Run {
            day,
            language,
            file,
        } => return run(catalog, &config, day, language, file),
        Action::Config { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Print config and log locations, saving a new default language if given
fn configure(mut config: AppConfig, set_language: Option<Language>) -> Result<ExitCode> {
    if let Some(language) = set_language {
        config.default_language = language;
        config.save().map_err(anyhow::Error::msg)?;
    }

    let shown = |path: Option<PathBuf>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    };
    println!("config:   {}", shown(config_paths::config_file()));
    println!("log:      {}", shown(config_paths::log_file()));
    println!("language: {}", config.default_language.display_name());
    if let Some(catalog) = &config.catalog {
        println!("catalog:  {}", catalog.display());
    }
    println!("model:    {} ({})", config.evaluator.model, config.evaluator.endpoint);
    Ok(ExitCode::SUCCESS)
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin().context("loading built-in catalog"),
    }
}

fn read_source(path: &PathBuf) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Model positioned on `day` with `language` selected
fn open(catalog: Catalog, day: u32, language: Language) -> AppModel {
    let mut model = AppModel::new(catalog, language);
    model.switch_pairing(day, language);
    model
}

fn run(
    catalog: Catalog,
    config: &AppConfig,
    day: u32,
    language: Language,
    file: PathBuf,
) -> Result<ExitCode> {
    let code = read_source(&file)?;

    let settings = GeminiSettings::from_env(
        config.evaluator.endpoint.clone(),
        config.evaluator.model.clone(),
        &config.evaluator.api_key_vars(),
        config.evaluator.timeout(),
    )?;
    let evaluator = GeminiEvaluator::new(settings).context("building HTTP client")?;
    let mut runtime = Runtime::new(Arc::new(evaluator), Box::new(SystemClipboard));

    let mut model = AppModel::new(catalog, language);
    runtime.dispatch(&mut model, Msg::Navigation(NavigationMsg::SelectDay(day)));
    runtime.dispatch(&mut model, Msg::Code(CodeMsg::Load(code)));
    println!("{}", render_navbar(&NavbarView::from_model(&model)));
    println!("{}. {} ({})", model.day(), model.problem().title, language.display_name());
    println!();

    runtime.dispatch(&mut model, Msg::Console(ConsoleMsg::Run));
    let wait = config.evaluator.timeout() + Duration::from_secs(5);
    if !runtime.wait_for_run(&mut model, wait) {
        anyhow::bail!("no evaluation result after {}s", wait.as_secs());
    }

    if let Some(view) = ConsoleView::from_state(&model.console) {
        print!("{}", render_console(&view));
    }

    let passed = model.console.result.as_ref().is_some_and(|r| r.is_pass());
    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
