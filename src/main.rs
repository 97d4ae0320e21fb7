//! create-stencil-components application entry point.
//! Parses arguments, collects the project options and runs the generator.

use create_stencil_components::{
    answers::{load_answers_from_stdin, Answers},
    cli::{get_args, Args},
    config::ProjectConfig,
    error::{default_error_handler, Result},
    generator::generate_project,
    logger::init_logger,
    prompt::{collect_config, DialoguerPrompter, Prompter},
    template::{default_templates_root, TemplateLayout},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Prints what to run after a successful generation.
fn print_next_steps(config: &ProjectConfig) {
    let package_manager = config.package_manager();

    println!("Next steps:");
    println!("  $ cd {}", config.project_name());
    if !config.install_dependencies() {
        println!("  $ {package_manager} install");
    }
    println!("  $ npx nx run-many -t build");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Merges command-line options with preloaded answers
/// 2. Prompts for whatever is still missing (unless `--yes`)
/// 3. Generates the project from the templates root
/// 4. Prints the next steps
fn run(args: Args) -> Result<()> {
    println!("Welcome to create-stencil-components!");

    let preloaded = if args.stdin { load_answers_from_stdin()? } else { Answers::default() };
    let answers = args.answers().or(preloaded);

    let prompter = DialoguerPrompter::new();
    let prompt: Option<&dyn Prompter> = if args.yes { None } else { Some(&prompter) };
    let config = collect_config(prompt, answers)?;

    let layout = TemplateLayout::new(args.templates_dir.unwrap_or_else(default_templates_root));
    let project_dir = generate_project(&config, &layout, &args.output_dir)?;

    println!("Your project is ready in {}!", project_dir.display());
    print_next_steps(&config);
    Ok(())
}
