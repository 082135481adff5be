mod cli;

use cli::Args;
use component_tree::adapters::outbound::console::{NullProgressReporter, StderrProgressReporter};
use component_tree::adapters::outbound::filesystem::FileSystemReader;
use component_tree::adapters::outbound::memory::InMemoryStore;
use component_tree::adapters::outbound::security::StaticUserSession;
use component_tree::application::dto::{ComponentTreeRequest, OutputFormat, DEFAULT_PAGE_SIZE};
use component_tree::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use component_tree::application::read_models::ComponentTreeReadModelBuilder;
use component_tree::application::use_cases::LoadComponentTreeUseCase;
use component_tree::component_tree::policies::QualifierRules;
use component_tree::config::{self, ConfigFile};
use component_tree::ports::outbound::ProgressReporter;
use component_tree::shared::error::{ExitCode, TreeError};
use component_tree::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{} {}", "❌ error:".red().bold(), e);

        for cause in e.chain().skip(1) {
            eprintln!("   {} {}", "caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let config = load_config(&args)?.unwrap_or_default();
    let qualifier_rules = config.qualifier_rules()?;
    let request = build_request(&args, &config)?;
    let format = resolve_format(&args, &config)?;

    if args.quiet {
        execute(
            &args,
            &config,
            qualifier_rules,
            request,
            format,
            NullProgressReporter,
        )
    } else {
        execute(
            &args,
            &config,
            qualifier_rules,
            request,
            format,
            StderrProgressReporter::new(),
        )
    }
}

fn execute<PR: ProgressReporter>(
    args: &Args,
    config: &ConfigFile,
    qualifier_rules: QualifierRules,
    request: ComponentTreeRequest,
    format: OutputFormat,
    progress_reporter: PR,
) -> Result<()> {
    progress_reporter.report(&format!(
        "📖 Loading store fixture from: {}",
        args.store.display()
    ));
    let fixture = FileSystemReader::new().read_store_fixture(&args.store)?;
    let store = InMemoryStore::new(fixture)?;

    let user_session = StaticUserSession::anonymous()
        .with_system_admin(args.system_admin || config.system_admin())
        .with_grants(config.grants().iter().chain(&args.grants))?;

    let use_case = LoadComponentTreeUseCase::new(
        store,
        user_session,
        progress_reporter,
        qualifier_rules,
    );
    let data = use_case.execute(request)?;

    let model = ComponentTreeReadModelBuilder::build(&data);
    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(format));
    }
    let output = FormatterFactory::create(format).format(&model)?;

    PresenterFactory::create(PresenterType::from_output(args.output.clone())).present(&output)
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(&std::env::current_dir()?),
    }
}

/// Command line values win over the config file
fn build_request(args: &Args, config: &ConfigFile) -> Result<ComponentTreeRequest> {
    let metric_keys = if args.metric_keys.is_empty() {
        config.metric_keys.clone().unwrap_or_default()
    } else {
        args.metric_keys.clone()
    };

    let page_size = args
        .page_size
        .or(config.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let mut builder = ComponentTreeRequest::builder()
        .strategy(args.strategy)
        .metric_keys(metric_keys)
        .sort(args.sort.clone())
        .asc(args.ascending())
        .page(args.page)
        .page_size(page_size);

    if let Some(uuid) = &args.component {
        builder = builder.base_component_id(uuid);
    }
    if let Some(key) = &args.component_key {
        builder = builder.base_component_key(key);
    }
    if let Some(qualifiers) = &args.qualifiers {
        builder = builder.qualifiers(qualifiers);
    }
    if let Some(query) = &args.query {
        builder = builder.query(query);
    }
    if let Some(metric) = &args.metric_sort {
        builder = builder.metric_sort(metric);
    }

    builder.build()
}

fn resolve_format(args: &Args, config: &ConfigFile) -> Result<OutputFormat> {
    match (args.format, &config.format) {
        (Some(format), _) => Ok(format),
        (None, Some(format)) => format
            .parse()
            .map_err(|e: String| TreeError::validation(e).into()),
        (None, None) => Ok(OutputFormat::Json),
    }
}
