//! glsketch CLI - scaffold GLSL shader-sketch projects

use anyhow::Result;
use clap::Parser;
use glsketch_core::prompts::CreateArgs;
use glsketch_core::{PackageManager, Template};

#[derive(Parser, Debug)]
#[command(name = "glsketch")]
#[command(about = "Scaffold a Vite + three.js GLSL shader-sketch project")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Template variant
    #[arg(long, value_enum, default_value_t = Template::Three)]
    pub template: Template,

    /// Generate a TypeScript bootstrap and tsconfig
    #[arg(
        long = "ts",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub typescript: Option<bool>,

    /// Package manager to use (default: detected from the invoking manager)
    #[arg(long = "pm", value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,

    /// Skip git repository initialization
    #[arg(long = "no-git")]
    pub no_git: bool,

    /// Skip attaching the lygia shader library submodule
    #[arg(long = "no-lygia")]
    pub no_lygia: bool,

    /// Skip launching the editor
    #[arg(long = "no-code")]
    pub no_code: bool,

    /// Launch the dev server after scaffolding
    #[arg(long, conflicts_with = "no_run")]
    pub run: bool,

    /// Do not launch the dev server
    #[arg(long = "no-run")]
    pub no_run: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template: args.template,
            typescript: args.typescript.unwrap_or(false),
            package_manager: args.package_manager,
            install: !args.no_install,
            git: !args.no_git,
            shader_lib: !args.no_lygia,
            editor: !args.no_code,
            run: if args.run {
                Some(true)
            } else if args.no_run {
                Some(false)
            } else {
                None
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // The one place process environment is read
    let user_agent = std::env::var("npm_config_user_agent").ok();

    let result = glsketch_core::run(args.into(), user_agent.as_deref()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
