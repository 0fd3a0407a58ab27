//! Common test utilities and macros

use std::process::Command;
use std::sync::{Mutex, MutexGuard};

/// Serializes tests that touch the process-wide `d`.
static SHARED_LOCK: Mutex<()> = Mutex::new(());

pub fn lock_shared() -> MutexGuard<'static, ()> {
    SHARED_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Debug)]
pub enum CliResult {
    Success(String),
    SuccessRegex(String),
    Failure(i32),
}

#[derive(Debug)]
pub struct CliOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl PartialEq<CliResult> for CliOutput {
    fn eq(&self, expected: &CliResult) -> bool {
        match expected {
            CliResult::Success(text) => self.status == Some(0) && &self.stdout == text,
            CliResult::SuccessRegex(pattern) => {
                self.status == Some(0) && regex::Regex::new(pattern).unwrap().is_match(&self.stdout)
            }
            CliResult::Failure(code) => self.status == Some(*code),
        }
    }
}

pub fn run_cli(args: &[&str]) -> CliOutput {
    run_cli_with_log(args, "off")
}

/// Runs the binary with `filter` as its log filter directives.
pub fn run_cli_with_log(args: &[&str], filter: &str) -> CliOutput {
    let output = Command::new(env!("CARGO_BIN_EXE_recordkit"))
        .args(args)
        .env("RECORDKIT_LOG", filter)
        .output()
        .expect("failed to launch recordkit binary");

    CliOutput {
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

#[macro_export]
macro_rules! check_cli {
    ($test_name:ident, args=[$($arg:expr),* $(,)?], result=$expected:expr) => {
        #[test]
        fn $test_name() {
            let output = crate::common::run_cli(&[$($arg),*]);
            assert_eq!(output, $expected);
        }
    };
}
