use std::process::Command;

#[test]
fn test_rejects_roster_with_wrong_extension() {
  // Runs the real binary; the roster check must fail before any network call
  let output = Command::new("cargo")
    .args(["run", "--quiet", "--bin", "podium", "--", "roster.xlsx"])
    .output()
    .expect("Failed to execute command");

  assert!(!output.status.success(), "Command should exit with a failure status");

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(
    stderr.contains("must have a .csv extension"),
    "Extension error not reported: {stderr}"
  );
}

#[test]
fn test_missing_roster_argument_fails() {
  let output = Command::new("cargo")
    .args(["run", "--quiet", "--bin", "podium", "--"])
    .output()
    .expect("Failed to execute command");

  assert!(!output.status.success(), "Command should exit with a failure status");
}
