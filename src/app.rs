// src/app.rs
use std::process::ExitCode;

use anyhow::{Context, Result};
use collect_files_domain::CollectConfig;
use collect_files_infra::{
    filesystem::WalkFileSource,
    output::{Charset, JsonFileSink, StreamingJsonSink},
};
use collect_files_ports::{filesystem::TraversalPlan, progress::DiagnosticSink, sink::RecordSink};
use collect_files_shared_kernel::{ApplicationError, CollectFilesError};
use collect_files_usecase::CollectFiles;
use tracing::{debug, warn};

use crate::{
    cli::{self, Args},
    presentation::ConsoleReporter,
};

/// Run the command described by `args` from the current directory.
pub fn run(args: &Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("could not determine the current directory")?;
    let config = cli::build_config(args, &cwd)?;
    debug!(?config, "resolved configuration");
    collect(&config, &ConsoleReporter, args.strict)
}

/// Collect per `config` and write the output file.
///
/// Skipped files and a failed save are reported through `diagnostics` and still exit
/// successfully unless `strict` is set. A run aborted by the `fail` decode policy is
/// returned as an error.
pub fn collect(config: &CollectConfig, diagnostics: &dyn DiagnosticSink, strict: bool) -> Result<ExitCode> {
    let source = WalkFileSource::new();
    let usecase = CollectFiles::new(&source, diagnostics, config.on_decode_error).with_newlines(config.newlines);
    let plan = TraversalPlan::from_config(config);
    let charset = Charset::from_ascii_flag(config.ascii);

    // When the streaming temp file cannot be created, collect in memory instead; the save
    // failure is then reported after the per-file diagnostics, as in buffered mode.
    let mut sink: Box<dyn RecordSink> = if config.stream {
        match StreamingJsonSink::create(&config.output, charset) {
            Ok(sink) => Box::new(sink),
            Err(err) => {
                warn!(output = %config.output.display(), "streaming unavailable, buffering instead: {err}");
                Box::new(JsonFileSink::new(&config.output, charset))
            }
        }
    } else {
        Box::new(JsonFileSink::new(&config.output, charset))
    };

    match usecase.run(&plan, sink.as_mut(), &config.output) {
        Ok(summary) => Ok(exit_code(summary.is_complete(), strict)),
        Err(CollectFilesError::Application(ApplicationError::SaveFailed { .. })) => Ok(exit_code(false, strict)),
        Err(err) => Err(err.into()),
    }
}

fn exit_code(clean: bool, strict: bool) -> ExitCode {
    if strict && !clean { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
