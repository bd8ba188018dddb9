//! Interactive scaffold flow using cliclack (Charm-style inline prompts)
//!
//! This is the orchestrator: it resolves missing fields through prompts,
//! runs the fatal creation pipeline, then walks the optional stages in a
//! fixed order, downgrading their failures to warnings.

use crate::config::{PackageManager, ScaffoldConfig, Template};
use crate::tools::{editor, git, pm};
use crate::{scaffold, validate};
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for a scaffold run, before prompting fills the gaps
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,

    /// Template variant (defaults to `three`)
    pub template: Template,

    /// Emit a TypeScript bootstrap and tsconfig
    pub typescript: bool,

    /// Package manager; detected from the user-agent hint when absent
    pub package_manager: Option<PackageManager>,

    /// Install dependencies after writing files
    pub install: bool,

    /// Initialize a git repository and create the initial commit
    pub git: bool,

    /// Attach the lygia shader library submodule (requires git)
    pub shader_lib: bool,

    /// Launch the editor in the new project
    pub editor: bool,

    /// Explicit dev-server decision; `None` follows `install`
    pub run: Option<bool>,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            name: None,
            template: Template::default(),
            typescript: false,
            package_manager: None,
            install: true,
            git: true,
            shader_lib: true,
            editor: true,
            run: None,
        }
    }
}

/// Run the interactive scaffold.
///
/// `user_agent` is the `npm_config_user_agent` value read once by the
/// binary; it is only consulted when no package manager was given.
pub async fn run(args: CreateArgs, user_agent: Option<&str>) -> Result<()> {
    cliclack::intro("glsketch")?;

    // Step 1: resolve the name, prompting when missing. Cancelling the
    // prompt bails before anything touches the filesystem.
    let raw_name = match args.name {
        Some(name) => name,
        None => cliclack::input("Project name")
            .placeholder("my-sketch")
            .validate(|input: &String| match validate::project_name(input) {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            })
            .interact()?,
    };
    let project_name = validate::project_name(&raw_name)?;

    // Step 2: resolve the remaining configuration from flags and defaults
    let package_manager = args
        .package_manager
        .unwrap_or_else(|| PackageManager::detect(user_agent));

    let config = ScaffoldConfig {
        project_name,
        template: args.template,
        use_typescript: args.typescript,
        package_manager,
        auto_install: args.install,
        auto_git: args.git,
        auto_shader_lib: args.shader_lib,
        auto_editor: args.editor,
        auto_run: args.run.unwrap_or(args.install),
    };

    let parent = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    // Step 3: fatal pipeline - validate, claim the directory, write files
    let spinner = cliclack::spinner();
    spinner.start("Creating project files...");
    let (project_dir, file_count) = match scaffold::create_project(&config, &parent).await {
        Ok(created) => created,
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e);
        }
    };
    spinner.stop(format!(
        "Created {} files in {}",
        file_count,
        project_dir.display()
    ));

    // Step 4: install dependencies
    let mut install_ok = false;
    if config.auto_install {
        cliclack::log::info(format!("Installing dependencies with {}", package_manager))?;
        match pm::install(package_manager, &project_dir).await {
            Ok(()) => {
                install_ok = true;
                cliclack::log::success("Dependencies installed")?;
            }
            Err(e) => {
                cliclack::log::warning(format!(
                    "Install failed: {}. Run '{}' in the project later.",
                    e,
                    package_manager.install_command()
                ))?;
            }
        }
    }

    // Step 5: git init, then the lygia submodule
    if config.auto_git {
        match git::init_repository(&project_dir).await {
            Ok(()) => {
                cliclack::log::success("Initialized git repository")?;

                if config.auto_shader_lib {
                    match git::add_shader_library(&project_dir).await {
                        Ok(()) => cliclack::log::success("Attached lygia shader library")?,
                        Err(e) => cliclack::log::warning(format!(
                            "Could not attach lygia: {}. Run '{}' in the project later.",
                            e,
                            git::lygia_manual_command()
                        ))?,
                    }
                }
            }
            Err(e) => {
                cliclack::log::warning(format!(
                    "Skipping git setup: {}. Run 'git init' in the project later.",
                    e
                ))?;
            }
        }
    }

    // Step 6: editor launch
    if config.auto_editor {
        if editor::is_available() {
            if let Err(e) = editor::open(&project_dir).await {
                cliclack::log::warning(format!("Could not launch editor: {}", e))?;
            }
        } else {
            cliclack::log::info("Editor launcher 'code' not found, skipping")?;
        }
    }

    // Step 7: next steps, before the (blocking) dev server takes over
    print_next_steps(&config, install_ok)?;

    // Step 8: dev server, last because it blocks until the user stops it.
    // Attempted whenever requested, even after a skipped or failed install;
    // its failure is a warning like every other optional stage.
    if config.auto_run {
        if let Err(e) = pm::run_dev(package_manager, &project_dir).await {
            cliclack::log::warning(format!(
                "Dev server failed: {}. Run '{}' in the project later.",
                e,
                package_manager.dev_command()
            ))?;
        }
    }

    Ok(())
}

fn print_next_steps(config: &ScaffoldConfig, install_ok: bool) -> Result<()> {
    let mut steps = vec![format!("cd {}", config.project_name)];
    if !install_ok {
        steps.push(config.package_manager.install_command());
    }
    steps.push(config.package_manager.dev_command());

    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy sketching!")?;

    Ok(())
}
