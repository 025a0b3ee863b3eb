// src/cli.rs

use crate::{
    constants::DEFAULT_APP,
    core::{compiler::CommandCompiler, config_store::ConfigStore},
    system::launcher::Launcher,
};
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// The hint printed when neither a command nor `--listapp` is given.
pub const USAGE_HINT: &str = "No command specified.\nFor further information, use\n   $ appdo --help";

/// appdo: Run a command in an application context.
///
/// The context comes from the `[<app>]` table of `/etc/appdo.conf` and
/// `~/.appdo.conf` (the latter wins) and may change directory, source files,
/// run setup statements, set environment variables and prefix the command.
///
/// Examples:
///
///   $ appdo --app web -- ls -la
///
///   $ appdo "make test"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The profile to run the command in.
    #[arg(long, default_value = DEFAULT_APP)]
    pub app: String,

    /// List the profiles defined in the config files and exit.
    #[arg(long)]
    pub listapp: bool,

    /// The command to run.
    ///
    /// A single argument is split like a shell would (`"ls -la"`);
    /// several arguments are used as they are.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub cmd: Vec<String>,
}

/// Runs the parsed CLI against the given config files.
///
/// Returns the exit status for the cases that finish without launching
/// anything: `0` after listing profiles, `1` when no command was given.
/// When a command is launched the process image is replaced, so this only
/// returns from that path with the launch error.
pub fn dispatch(
    cli: &Cli,
    config_paths: &[PathBuf],
    launcher: &dyn Launcher,
    out: &mut dyn Write,
) -> Result<i32> {
    if cli.listapp {
        let config = ConfigStore::load(config_paths)?;
        for name in config.profile_names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(0);
    }

    if cli.cmd.is_empty() {
        writeln!(out, "{}", USAGE_HINT)?;
        return Ok(1);
    }

    let config = ConfigStore::load(config_paths)?;
    log::debug!("Using profile '{}'.", cli.app);
    let compiler = CommandCompiler::new(&cli.cmd, config.statements_for(&cli.app))?;
    Err(compiler.run(launcher).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::launcher::LaunchError;
    use std::cell::RefCell;
    use tempfile::NamedTempFile;

    #[derive(Default)]
    struct RecordingLauncher {
        launched: RefCell<Vec<Vec<String>>>,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&self, argv: &[String]) -> LaunchError {
            self.launched.borrow_mut().push(argv.to_vec());
            LaunchError::EmptyArgv
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("appdo").chain(args.iter().copied())).unwrap()
    }

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.app, "default");
        assert!(!cli.listapp);
        assert!(cli.cmd.is_empty());
    }

    #[test]
    fn test_parse_command_with_hyphen_values() {
        let cli = parse(&["--app", "web", "ls", "-la"]);
        assert_eq!(cli.app, "web");
        assert_eq!(cli.cmd, vec!["ls", "-la"]);

        let cli = parse(&["--", "ls", "-la"]);
        assert_eq!(cli.cmd, vec!["ls", "-la"]);
    }

    #[test]
    fn test_no_command_prints_usage_and_exits_one() {
        let launcher = RecordingLauncher::default();
        let mut out = Vec::new();

        let code = dispatch(&parse(&[]), &[], &launcher, &mut out).unwrap();

        assert_eq!(code, 1);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", USAGE_HINT));
        assert!(launcher.launched.borrow().is_empty());
    }

    #[test]
    fn test_listapp_prints_profiles_only() {
        let file = config_file("note = \"scalar\"\n[work]\ncd = \"/w\"\n[default]\ncd = \"/d\"\n");
        let launcher = RecordingLauncher::default();
        let mut out = Vec::new();

        let code = dispatch(
            &parse(&["--listapp"]),
            &[file.path().to_path_buf()],
            &launcher,
            &mut out,
        )
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "default\nwork\n");
        assert!(launcher.launched.borrow().is_empty());
    }

    #[test]
    fn test_command_is_launched_in_profile_context() {
        let file = config_file("[web]\ncd = \"/srv\"\nenv = { PORT = \"80\" }\n");
        let launcher = RecordingLauncher::default();
        let mut out = Vec::new();

        let err = dispatch(
            &parse(&["--app", "web", "make test"]),
            &[file.path().to_path_buf()],
            &launcher,
            &mut out,
        )
        .unwrap_err();

        assert!(err.downcast_ref::<LaunchError>().is_some());
        assert_eq!(
            *launcher.launched.borrow(),
            vec![vec![
                "bash".to_string(),
                "-c".to_string(),
                "cd /srv; PORT=80 make test".to_string()
            ]]
        );
    }

    #[test]
    fn test_parse_error_aborts_before_launch() {
        let file = config_file("[web\n");
        let launcher = RecordingLauncher::default();
        let mut out = Vec::new();

        let result = dispatch(
            &parse(&["ls"]),
            &[file.path().to_path_buf()],
            &launcher,
            &mut out,
        );

        assert!(result.is_err());
        assert!(launcher.launched.borrow().is_empty());
    }
}
