use crate::config_file;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_urql::LoaderMode;
use libgraphql_urql::OperationDescriptor;
use libgraphql_urql::OperationSource;
use libgraphql_urql::UrqlCodegen;
use libgraphql_urql::UrqlCodegenConfig;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Import statement to emit at the top of the generated module \
             (e.g. the module providing documents and operation types). May \
             be repeated.",
        long="base-import",
    )]
    base_imports: Vec<String>,

    #[arg(
        help="Path to a JSON config file.",
        long,
        short='c',
    )]
    config: Option<PathBuf>,

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
        help="Paths to one or more GraphQL operation documents or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,

    #[arg(
        help="Write the generated module to this file instead of stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        help="Generate a React component for every operation.",
        long,
    )]
    with_component: bool,

    #[arg(
        help="Generate react-router loaders and actions. Pass `true` to read \
             the client from the request context, or `MODULE#EXPORT` to \
             import it.",
        long,
        value_name="true|false|MODULE#EXPORT",
    )]
    with_loaders: Option<LoaderMode>,

    #[arg(
        help="Do not generate `use*` hooks.",
        long,
    )]
    without_hooks: bool,
}
impl GenerateCmd {
    pub(crate) fn build_config(&self) -> anyhow::Result<UrqlCodegenConfig> {
        let mut config = match &self.config {
            Some(path) => config_file::load(path)?,
            None => UrqlCodegenConfig::default(),
        };
        if self.with_component {
            config.with_component = true;
        }
        if self.without_hooks {
            config.with_hooks = false;
        }
        if let Some(mode) = &self.with_loaders {
            config.with_loaders = mode.clone();
        }
        Ok(config)
    }

    fn find_graphql_files(
        &self,
        errors: &mut Vec<Box<dyn Error + Send + Sync>>,
    ) -> BTreeSet<PathBuf> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = BTreeSet::new();
        for path in &self.file_or_dir_paths {
            // A file named explicitly is taken as-is, whatever its extension.
            if path.is_file() {
                file_paths.insert(path.to_owned());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path.extension()
                            .map(|ext| ext.to_string_lossy())
                            .is_some_and(|ext| graphql_file_exts.contains(ext.as_ref()));
                        if matches_ext {
                            log::trace!("Found file at {path:#?}.");
                            file_paths.insert(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }
        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let config = match self.build_config() {
            Ok(config) => config,
            Err(e) => return CommandResult::failure(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let codegen = UrqlCodegen::new(config);

        let mut errors: Vec<Box<dyn Error + Send + Sync>> = vec![];
        let file_paths: Vec<PathBuf> =
            self.find_graphql_files(&mut errors).into_iter().collect();
        log::debug!(
            "Found {} GraphQL files to generate from.",
            file_paths.len(),
        );

        // Documents are independent, so read them in parallel. `collect()`
        // keeps the (sorted) input order.
        let per_file: Vec<_> = file_paths.par_iter()
            .map(|path| OperationSource::from_file(path, codegen.names()))
            .collect();

        let mut operations: Vec<OperationDescriptor> = vec![];
        for result in per_file {
            match result {
                Ok(mut file_ops) => operations.append(&mut file_ops),
                Err(e) => errors.push(Box::new(e)),
            }
        }

        if !errors.is_empty() {
            return CommandResult::failure(format_args!(
                "{} Failed to read GraphQL operations: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        let module = codegen.generate(&self.base_imports, &operations);
        let rendered = module.render();

        match &self.output {
            None => CommandResult::output(rendered.trim_end().to_string()),
            Some(output) => match std::fs::write(output, rendered) {
                Ok(()) => CommandResult::status(format_args!(
                    "{} Generated {} operations from {} files into {output:?}.",
                    output_utils::GREEN_CHECK,
                    operations.len(),
                    file_paths.len(),
                )),
                Err(e) => CommandResult::failure(format_args!(
                    "{} Failed to write {output:?}: {e}",
                    output_utils::RED_X,
                )),
            },
        }
    }
}
