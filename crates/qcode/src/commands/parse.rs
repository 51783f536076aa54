use crate::operation_tree::OperationTree;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use qcode_parser::ParserOptions;
use qcode_parser::QueryParser;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
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
    exts: Vec<String>,

    #[arg(
        help="Print each parsed operation as an indented field tree.",
        long,
    )]
    tree: bool,

    #[arg(
        help="Maximum nesting depth of selection sets, lists and objects.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="Maximum number of fields per operation.",
        long,
    )]
    max_fields: Option<usize>,

    #[arg(
        help="Maximum number of arguments per argument list.",
        long,
    )]
    max_arguments: Option<usize>,

    #[arg(
        help="Reject list literals whose elements are of different kinds.",
        long,
    )]
    homogeneous_lists: bool,

    #[arg(
        help="Paths to one or more query files or directories containing \
             query files to parse.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl ParseCmd {
    fn parser_options(&self) -> ParserOptions {
        let mut options = ParserOptions::default()
            .require_homogeneous_lists(self.homogeneous_lists);
        if let Some(max_depth) = self.max_depth {
            options = options.max_depth(max_depth);
        }
        if let Some(max_fields) = self.max_fields {
            options = options.max_fields(max_fields);
        }
        if let Some(max_arguments) = self.max_arguments {
            options = options.max_arguments(max_arguments);
        }
        options
    }

    /// Finds all matching files recursively located at or under each path
    /// passed as an arg. Walk errors are collected rather than fatal.
    fn collect_file_paths(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        let exts: HashSet<String> =
            self.exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && exts.contains(&*ext) {
                            log::trace!("Found query file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(format!("{} {e}", output_utils::RED_X));
                    },
                }
            }
        }

        // A single explicit file argument is parsed even when its extension
        // doesn't match `--exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to parse {first_arg_path:#?} even though it \
                doesn't match any of the --exts ({}).",
                self.exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<String> = vec![];
        let file_paths = self.collect_file_paths(&mut errors);
        if file_paths.is_empty() {
            errors.push(format!("{} No query files found.", output_utils::RED_X));
            return CommandResult::stderr(format_args!("{}", errors.join("\n")));
        }
        log::debug!("Found {} query files to parse.", file_paths.len());

        let options = self.parser_options();
        let tree = self.tree;
        let handles: Vec<_> =
            file_paths.into_iter()
                .map(|path| {
                    let handle = tokio::task::spawn_blocking({
                        let path = path.clone();
                        move || parse_file(&path, options, tree)
                    });
                    (path, handle)
                })
                .collect();

        let num_files = handles.len();
        let mut reports = String::new();
        let mut num_fields = 0;
        let mut num_arguments = 0;
        let mut num_failed = 0;
        for (path, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(anyhow::Error::new(e)
                    .context(format!("parsing {}", path.display()))),
            };
            match outcome {
                Ok(ParsedFile::Parsed(parsed)) => {
                    num_fields += parsed.num_fields;
                    num_arguments += parsed.num_arguments;
                    if !reports.is_empty() {
                        reports.push('\n');
                    }
                    reports.push_str(&parsed.report);
                },
                Ok(ParsedFile::Rejected(diagnostic)) => {
                    num_failed += 1;
                    errors.push(diagnostic);
                },
                Err(e) => {
                    num_failed += 1;
                    errors.push(format!("{} {e:#}", output_utils::RED_X));
                },
            }
        }

        if errors.is_empty() {
            return CommandResult::stdout(format_args!(
                concat!(
                    "{}\n",
                    "{} All queries parsed successfully:\n",
                    "  * Parsed {} files.\n",
                    "  * Found {} fields.\n",
                    "  * Found {} arguments.",
                ),
                reports,
                output_utils::GREEN_CHECK,
                num_files,
                num_fields,
                num_arguments,
            ));
        }

        let stderr = format!(
            "{}\n{} {num_failed} of {num_files} files failed to parse.",
            errors.join("\n"),
            output_utils::RED_X,
        );
        CommandResult::partial_failure(reports, stderr)
    }
}

struct ParsedQuery {
    report: String,
    num_fields: usize,
    num_arguments: usize,
}

enum ParsedFile {
    Parsed(ParsedQuery),
    /// The file was read but is not a valid query; holds the rendered
    /// diagnostic.
    Rejected(String),
}

fn parse_file(path: &Path, options: ParserOptions, tree: bool) -> anyhow::Result<ParsedFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let origin = path.display().to_string();

    let parsed = QueryParser::from_bytes(&bytes)
        .and_then(|parser| parser.with_options(options).parse_query());
    let op = match parsed {
        Ok(op) => op,
        Err(e) => {
            log::debug!("{origin}: {:?}", e.kind());
            let source = String::from_utf8_lossy(&bytes);
            return Ok(ParsedFile::Rejected(format!(
                "{} {}",
                output_utils::RED_X,
                e.format_detailed_with_origin(&origin, &source),
            )));
        },
    };

    let num_fields = op.fields.len();
    let num_arguments = op.argument_count();
    let mut report = format!(
        "{} {origin}: {num_fields} fields, {num_arguments} arguments",
        output_utils::GREEN_CHECK,
    );
    if tree {
        report.push('\n');
        report.push_str(&OperationTree::new(&op, op.source()).to_string());
    }
    Ok(ParsedFile::Parsed(ParsedQuery {
        report,
        num_fields,
        num_arguments,
    }))
}
