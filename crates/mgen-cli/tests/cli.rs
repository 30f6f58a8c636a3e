use mgen_cli::{build_command, run, CliArgs};
use mgen_manifest::{ConfigError, ErrorPolicy, ManifestError};
use mgen_test_utils::{spec_yaml, ReleaseFixture};
use pretty_assertions::assert_eq;

fn parse(argv: &[&str]) -> CliArgs {
    let matches = build_command()
        .try_get_matches_from(std::iter::once("mgen").chain(argv.iter().copied()))
        .unwrap();
    CliArgs::from_matches(&matches)
}

#[test]
fn defaults() {
    let args = parse(&["release"]);
    assert_eq!(args.root, std::path::PathBuf::from("release"));
    assert_eq!(args.output, "manifest.yml");
    assert!(!args.descriptions && !args.sort && !args.strict);
    assert_eq!(args.verbosity, 0);
}

#[test]
fn flags_map_to_generator_config() {
    let args = parse(&["release", "--descriptions", "--sort", "--strict", "-vv"]);
    assert_eq!(args.verbosity, 2);

    let config = args.generator_config().unwrap();
    assert!(config.render.descriptions);
    assert_eq!(config.policy, ErrorPolicy::Abort);
    assert_eq!(config.ordering, mgen_manifest::Ordering::Sorted);
}

#[test]
fn root_is_required() {
    assert!(build_command().try_get_matches_from(["mgen"]).is_err());
}

#[test]
fn run_writes_manifest_file() {
    let fixture = ReleaseFixture::new().with_spec(
        "web",
        &spec_yaml("web", &[("web.port", "80", "Listen port")]),
    );
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("manifest.yml");

    let args = parse(&[
        fixture.root().to_str().unwrap(),
        "-d",
        "-o",
        out.to_str().unwrap(),
    ]);
    let report = run(&args).unwrap();
    assert_eq!(report.rendered, vec!["web"]);

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.ends_with(
        "    - name: web\n      release: web\n      properties:\n        web:\n          # Listen port\n          port: 80\n"
    ));
}

#[test]
fn run_with_config_file() {
    let fixture = ReleaseFixture::new().with_spec("web", &spec_yaml("web", &[]));
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("deploy.toml");
    std::fs::write(&config, "name = \"prod\"\n").unwrap();
    let out = dir.path().join("out.yml");

    let args = parse(&[
        fixture.root().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--output",
        out.to_str().unwrap(),
    ]);
    run(&args).unwrap();

    assert!(std::fs::read_to_string(&out)
        .unwrap()
        .starts_with("---\nname: prod\n"));
}

#[test]
fn strict_run_fails_on_unreadable_job() {
    let fixture = ReleaseFixture::new()
        .with_spec("web", &spec_yaml("web", &[]))
        .with_unreadable_job("broken");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.yml");

    let lenient = parse(&[fixture.root().to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert_eq!(run(&lenient).unwrap().skipped.len(), 1);

    let strict = parse(&[
        fixture.root().to_str().unwrap(),
        "--strict",
        "-o",
        out.to_str().unwrap(),
    ]);
    let err = run(&strict).unwrap_err();
    assert!(format!("{err:#}").contains("broken"));
}

#[test]
fn missing_config_file_is_error() {
    let fixture = ReleaseFixture::new();
    let args = parse(&[fixture.root().to_str().unwrap(), "-c", "/nonexistent/deploy.yml"]);
    assert!(run(&args).is_err());
}

#[test]
fn unreadable_config_is_config_error() {
    let args = parse(&["release", "--config", "/nonexistent/deploy.yml"]);
    let err = args.generator_config().unwrap_err();
    assert!(matches!(err, ManifestError::Config(ConfigError::Io { .. })));

    let args = parse(&["release", "--config", "deploy.ini"]);
    assert!(matches!(
        args.generator_config(),
        Err(ManifestError::Config(ConfigError::UnsupportedFormat(_)))
    ));
}

#[derive(Clone, Default)]
struct SharedWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn skipped_job_warned_once() {
    let fixture = ReleaseFixture::new()
        .with_spec("web", &spec_yaml("web", &[]))
        .with_unreadable_job("broken");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.yml");
    let args = parse(&[fixture.root().to_str().unwrap(), "-o", out.to_str().unwrap()]);

    let writer = SharedWriter::default();
    let make_writer = writer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || make_writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let report = tracing::subscriber::with_default(subscriber, || run(&args)).unwrap();
    assert_eq!(report.skipped.len(), 1);

    let logs = String::from_utf8(writer.0.lock().unwrap().clone()).unwrap();
    let warnings = logs.lines().filter(|l| l.contains("broken")).count();
    assert_eq!(warnings, 1, "logs: {logs}");
}
