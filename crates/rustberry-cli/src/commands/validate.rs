use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use rustberry::Diagnostic;
use rustberry::RuleId;
use rustberry::Session;
use rustberry::validation::Validator;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Path to the SDL file describing the schema to validate against.",
        long,
        short='s',
    )]
    schema: PathBuf,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Validation rule to skip (e.g. `unused-fragment`). May be \
             repeated.",
        long="disable-rule",
        name="RULE",
    )]
    disabled_rules: Vec<RuleId>,

    #[arg(
        help="Paths to one or more executable GraphQL files or directories \
             containing them which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

struct FileReport {
    path: PathBuf,
    diagnostics: Vec<Diagnostic>,
}

impl ValidateCmd {
    fn validator(&self) -> Validator {
        self.disabled_rules
            .iter()
            .fold(Validator::default(), |validator, rule_id| validator.without_rule(*rule_id))
    }

    /// Every file at or under the given paths whose extension is one of
    /// `graphql_file_exts`, plus the count of skipped non-file entries.
    fn collect_file_paths(&self) -> anyhow::Result<(Vec<PathBuf>, usize)> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry?;
                let path = entry.path();
                if entry.file_type().is_file() {
                    log::trace!("Found file at {path:#?}.");
                    if let Some(ext) = path.extension().and_then(|s| s.to_str())
                        && graphql_file_exts.contains(ext) {
                        file_paths.push(std::fs::canonicalize(path)?);
                    }
                } else {
                    log::trace!("Skipping non-file: {path:#?}.");
                    num_non_files += 1;
                }
            }
        }

        // A single file named explicitly is validated even when its
        // extension doesn't match.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path = std::fs::canonicalize(first_arg_path)?;
            log::warn!(
                "Proceeding to validate {canonicalized_first_arg_path:#?} even \
                though it doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
        }

        Ok((file_paths, num_non_files))
    }

    async fn validate_files(
        session: Arc<Session>,
        file_paths: Vec<PathBuf>,
    ) -> anyhow::Result<Vec<FileReport>> {
        let tasks: Vec<_> = file_paths
            .into_iter()
            .map(|path| {
                let session = Arc::clone(&session);
                tokio::task::spawn_blocking(move || -> anyhow::Result<FileReport> {
                    let source = std::fs::read_to_string(&path)?;
                    let file_id = session.add_executable_with_path(source, path.as_path());
                    let diagnostics = session.validate_file(file_id)?;
                    log::debug!("{path:#?}: {} diagnostic(s).", diagnostics.len());
                    Ok(FileReport { path, diagnostics })
                })
            })
            .collect();

        let mut reports = Vec::with_capacity(tasks.len());
        for task in tasks {
            reports.push(task.await??);
        }
        Ok(reports)
    }

    async fn try_run(self) -> anyhow::Result<CommandResult> {
        let mut session = Session::with_validator(self.validator());
        let schema_source = std::fs::read_to_string(&self.schema)?;
        if let Err(err) = session.set_schema(&schema_source) {
            log::debug!("Schema at {:#?} failed to build.", self.schema);
            let rendered = err.to_diagnostics()
                .iter()
                .map(|diagnostic| output_utils::format_diagnostic(&self.schema, diagnostic))
                .collect::<Vec<_>>()
                .join("\n");
            return Ok(CommandResult::failure(format_args!(
                "{} Errors building schema:\n{rendered}",
                output_utils::RED_X,
            )));
        }
        let (num_types, num_directives) = match session.schema() {
            Some(registry) => (registry.types().count(), registry.directives().count()),
            None => (0, 0),
        };

        let (file_paths, num_non_files) = self.collect_file_paths()?;
        log::debug!(
            "Found {} GraphQL files to be validated.",
            file_paths.len(),
        );
        let num_files = file_paths.len();
        let reports = Self::validate_files(Arc::new(session), file_paths).await?;

        let failures: Vec<String> = reports
            .iter()
            .flat_map(|report| {
                report.diagnostics
                    .iter()
                    .map(|diagnostic| output_utils::format_diagnostic(&report.path, diagnostic))
            })
            .collect();
        if !failures.is_empty() {
            let num_failed_files = reports
                .iter()
                .filter(|report| !report.diagnostics.is_empty())
                .count();
            return Ok(CommandResult::failure(format_args!(
                "{}\n{} {} error(s) in {num_failed_files} of {num_files} file(s).",
                failures.join("\n"),
                output_utils::RED_X,
                failures.len(),
            )));
        }

        Ok(CommandResult::success(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Validated {} files.\n",
                "  * Skipped {} non-file entries.\n",
                "  * Schema has {} types.\n",
                "  * Schema has {} directives.",
            ),
            output_utils::GREEN_CHECK,
            num_files,
            num_non_files,
            num_types,
            num_directives,
        )))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.try_run().await {
            Ok(result) => result,
            Err(err) => CommandResult::failure(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

