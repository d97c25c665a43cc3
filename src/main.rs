use aiu_gen::descriptor::{ArtifactSpec, RunConfig, parse_input_arg};
use aiu_gen::{assemble, render};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Crate version on release tags, `dev@<hash>` otherwise.
fn version_string() -> &'static str {
    if env!("ON_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("GIT_HASH") {
        "" => "dev@local",
        // One-time leak; the string lives as long as the process
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "aiu-gen")]
#[command(about = "Generate update descriptors for Advanced Installer style updaters")]
#[command(long_about = "\
Generate update descriptors for Advanced Installer style updaters

For each installer file, computes size, SHA-256 and MD5, resolves a display
name, section name and download URL, and emits one section of the descriptor
document the updater polls:

  [my-app]
  Name = My App
  ProductVersion = 2.1.3
  URL = https://updates.example.com/dl/my_app-setup.exe
  ...

Name resolution (first available wins):
  Name:     --name → derived from the file name (my_app-v2.exe → \"My App V2\")
  Section:  --id → 'SECTION:' path prefix → derived (my_app-v2.exe → my-app-v2)
  URL:      --url verbatim (single input only) → --base-url + '/' + file name

A one-character prefix like 'C:' is read as a Windows drive letter, never as
a section name; use --id for single-character section names.

Per-input options (--name, --id, --flags) apply to inputs in order; a single
--registry-key applies to every input. Example:

  aiu-gen -v 2.1.3 -u https://updates.example.com/dl \\
      -r 'SOFTWARE\\Example\\MyApp\\Version' \\
      -n 'My App' dist/my_app-setup.exe -o updates.ini")]
#[command(disable_version_flag = true)]
#[command(version = version_string())]
struct Cli {
    /// The specific version number, written to every section
    #[arg(short = 'v', long = "version", value_name = "VERSION")]
    version: String,

    /// Product version number; defaults to the --version value
    #[arg(short = 'p', long = "product-version", value_name = "VERSION")]
    product_version: Option<String>,

    /// Folder on the update server; each input's file name is appended
    #[arg(short = 'u', long = "base-url", value_name = "URL_FOLDER")]
    base_url: Option<String>,

    /// Full URL on the update server; only valid for a single input
    #[arg(short = 'U', long = "url", value_name = "URL", conflicts_with = "base_url")]
    url: Option<String>,

    /// Registry key holding the installed version; one per input in
    /// order, or a single key applied to every input
    #[arg(short = 'r', long = "registry-key", value_name = "KEY", required = true)]
    registry_key: Vec<String>,

    /// Display name override, one per input in order
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Vec<String>,

    /// Section name override, one per input in order
    #[arg(short = 'i', long = "id", value_name = "ID")]
    id: Vec<String>,

    /// Updater flags value, one per input in order
    #[arg(short = 'f', long = "flags", value_name = "FLAGS")]
    flags: Vec<String>,

    /// Write the document to a file instead of standard output
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Emit the ';aiu;' marker line before the first section
    #[arg(long)]
    marker: bool,

    /// Print version information
    #[arg(
        short = 'V',
        long = "tool-version",
        action = clap::ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    tool_version: Option<bool>,

    /// Installer files; each may be prefixed with 'SECTION:' to name
    /// its section in the output document (one-character prefixes are
    /// read as drive letters — use --id for those)
    #[arg(value_name = "[SECTION:]PATH", required = true)]
    inputs: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aiu-gen: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let specs = build_specs(cli)?;
    let config = RunConfig {
        version: cli.version.clone(),
        product_version: cli.product_version.clone(),
        full_url: cli.url.clone(),
        base_url: cli.base_url.clone(),
        emit_marker: cli.marker,
    };

    let document = assemble::assemble(&config, &specs)?;
    let text = render::render(&document);

    // Rendered fully before the destination is touched, so a failed run
    // never leaves a partial document behind.
    match &cli.output {
        Some(path) => std::fs::write(path, &text)
            .map_err(|e| format!("Cannot write {}: {e}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

/// Zip the positional inputs with the per-input option lists.
fn build_specs(cli: &Cli) -> Result<Vec<ArtifactSpec>, Box<dyn std::error::Error>> {
    let count = cli.inputs.len();
    if cli.registry_key.len() != 1 && cli.registry_key.len() != count {
        return Err(format!(
            "Expected one --registry-key per input or a single shared key (got {} keys for {} inputs)",
            cli.registry_key.len(),
            count
        )
        .into());
    }
    for (option, values) in [("--name", &cli.name), ("--id", &cli.id), ("--flags", &cli.flags)] {
        if values.len() > count {
            return Err(format!(
                "More {option} values than inputs ({} for {})",
                values.len(),
                count
            )
            .into());
        }
    }

    let mut specs = Vec::with_capacity(count);
    for (i, input) in cli.inputs.iter().enumerate() {
        let (prefix_section, path) = parse_input_arg(input)?;
        let registry_key = if cli.registry_key.len() == 1 {
            cli.registry_key[0].clone()
        } else {
            cli.registry_key[i].clone()
        };
        specs.push(ArtifactSpec {
            path,
            name: cli.name.get(i).cloned(),
            // An explicit --id wins over the SECTION: prefix
            section: cli.id.get(i).cloned().or(prefix_section),
            registry_key,
            flags: cli.flags.get(i).cloned(),
        });
    }
    Ok(specs)
}
