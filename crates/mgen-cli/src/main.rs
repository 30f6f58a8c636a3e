use mgen_cli::{build_command, init_tracing, run, CliArgs};

fn main() {
    let matches = build_command().get_matches();
    let args = CliArgs::from_matches(&matches);
    init_tracing(args.verbosity);

    match run(&args) {
        Ok(report) => {
            tracing::info!(
                rendered = report.rendered.len(),
                skipped = report.skipped.len(),
                output = %args.output,
                "done"
            );
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
