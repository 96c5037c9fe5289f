use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_codegen::CodeGenerationConfig;
use libgraphql_codegen::CompileReport;
use libgraphql_codegen::GeneratedType;
use libgraphql_codegen::OperationCompiler;
use libgraphql_codegen::ir::CodegenIr;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        help="Path to a JSON file of code generation options. Flags passed \
             on the command line take precedence over the file.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for IR \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    ir_file_exts: Vec<String>,

    #[arg(
        help="Tag every operation's `Data` type for builder synthesis.",
        long,
    )]
    model_builder: bool,

    #[arg(
        help="Append the operation kind (`Query`, `Mutation`, \
             `Subscription`) to operation names.",
        long,
    )]
    semantic_naming: Option<bool>,

    #[arg(
        help="Paths to one or more IR files or directories containing IR \
             files to compile.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CompileCmd {
    fn load_config(&self) -> anyhow::Result<CodeGenerationConfig> {
        let mut config = match &self.config {
            Some(config_path) => CodeGenerationConfig::from_file(config_path)?,
            None => CodeGenerationConfig::default(),
        };

        if let Some(use_semantic_naming) = self.semantic_naming {
            config.use_semantic_naming = use_semantic_naming;
        }
        if self.model_builder {
            config.generate_model_builder = true;
        }
        Ok(config)
    }

    fn find_ir_files(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        let ir_file_exts: HashSet<String> =
            self.ir_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(format!("{}: {e}", path.display()));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let matches_ext = entry_path.extension()
                    .map(|ext| ir_file_exts.contains(ext.to_string_lossy().as_ref()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found IR file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single explicit file argument is compiled even if its extension
        // isn't one of `--ir-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to compile {first_arg_path:#?} even though it \
                doesn't match any of the --ir-file-exts ({}).",
                ir_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match self.load_config() {
            Ok(config) => Arc::new(config),
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to load code generation options: {e:#}",
                output_utils::RED_X,
            )),
        };

        let mut failures: Vec<String> = vec![];
        let file_paths = self.find_ir_files(&mut failures);
        log::debug!("Found {} IR files to compile.", file_paths.len());

        // Files are independent compilation units: one blocking task each.
        let tasks: Vec<_> = file_paths.into_iter()
            .map(|file_path| {
                let config = Arc::clone(&config);
                let task = tokio::task::spawn_blocking({
                    let file_path = file_path.clone();
                    move || compile_file(&config, &file_path)
                });
                (file_path, task)
            })
            .collect();

        let mut generated: Vec<GeneratedType> = vec![];
        let mut num_files = 0;
        for (file_path, task) in tasks {
            num_files += 1;
            match task.await {
                Ok(Ok(report)) => {
                    log::info!(
                        "Compiled {} operations from {} ({} failed).",
                        report.generated.len(),
                        file_path.display(),
                        report.failures.len(),
                    );
                    failures.extend(report.failures.iter().map(ToString::to_string));
                    generated.extend(report.generated);
                },
                Ok(Err(file_errors)) => failures.extend(
                    file_errors.into_iter()
                        .map(|e| format!("{}: {e}", file_path.display())),
                ),
                Err(join_err) => failures.push(format!(
                    "{}: compilation task failed: {join_err}",
                    file_path.display(),
                )),
            }
        }

        let stdout = match serde_json::to_string_pretty(&generated) {
            Ok(json) => json,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to serialize compiled operations: {e}",
                output_utils::RED_X,
            )),
        };

        if failures.is_empty() {
            log::info!(
                "{} Compiled {} operations from {num_files} files.",
                output_utils::GREEN_CHECK,
                generated.len(),
            );
            CommandResult::stdout(format_args!("{stdout}"))
        } else {
            CommandResult::stdout_with_failures(stdout, format!(
                "{} {} compilation errors:\n{}",
                output_utils::RED_X,
                failures.len(),
                failures.join("\n"),
            ))
        }
    }
}

/// Load one IR file and compile every operation in it. File-level failures
/// (unreadable IR, invalid fragment set) come back as `Err`; per-operation
/// failures are part of the report.
fn compile_file(
    config: &CodeGenerationConfig,
    file_path: &Path,
) -> Result<CompileReport, Vec<String>> {
    let ir = CodegenIr::from_file(file_path).map_err(|e| vec![e.to_string()])?;
    OperationCompiler::compile_ir(config, &ir).map_err(|errors| {
        errors.into_iter().map(|e| e.to_string()).collect()
    })
}
