#[cfg(test)]
mod tests {
    use kde1d_cli::{run, BANNER, FAREWELL};
    use kde1d_core::error::{Error, RuleViolation};
    use kde1d_core::settings::{EchoMode, OutputTarget};

    fn run_to_string(args: &[&str]) -> (Result<String, Error>, String) {
        let mut out = Vec::new();
        let result = run(args, &mut out).map(|settings| format!("{settings:?}"));
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_reports_settings() {
        let mut out = Vec::new();
        let settings = run(&["-f", "samples.txt", "-sep", ",", "-out", "r.csv"], &mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();

        assert_eq!(settings.output, OutputTarget::CreateNew("r.csv".to_string()));
        assert_eq!(settings.echo, EchoMode::Stdout);

        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(
            lines,
            vec![
                BANNER,
                "Input: `samples.txt` (comment lines start with `#`)",
                "Format: separator \",\"",
                "Output file: `r.csv` (new file)",
                "Echo: on",
                FAREWELL,
            ]
        );
    }

    #[test]
    fn test_run_with_echo_off_and_forced_output() {
        let mut out = Vec::new();
        let settings = run(
            &["--echo-off", "-out-f", "r.tsv", "--input-file", "in.txt", "--label-header", "x"],
            &mut out,
        )
        .unwrap();

        assert_eq!(settings.echo, EchoMode::Silent);
        assert_eq!(settings.output, OutputTarget::Overwrite("r.tsv".to_string()));

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Format: separator \"\\t\", label header \"x\"\n"));
        assert!(printed.contains("Echo: off\n"));
    }

    #[test]
    fn test_run_failure_prints_only_banner() {
        let (result, printed) = run_to_string(&["-f", "in.txt", "-out", "a", "-out-f", "b"]);

        assert!(matches!(
            result,
            Err(Error::AssignmentRule(RuleViolation::ExclusiveGroup { .. }))
        ));
        assert_eq!(printed, format!("{BANNER}\n"));
    }

    #[test]
    fn test_run_requires_input() {
        let (result, _) = run_to_string(&[]);
        assert!(matches!(
            result,
            Err(Error::AssignmentRule(RuleViolation::RequiredGroup { .. }))
        ));
    }

    #[test]
    fn test_run_rejects_unknown_token() {
        let (result, _) = run_to_string(&["-f", "in.txt", "--verbose"]);
        assert!(matches!(result, Err(Error::UnrecognizedToken(token)) if token == "--verbose"));
    }
}
