//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// One invocation of a workspace binary and the output it must produce
pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Path of a binary built for the current profile
///
/// Tests run from the package directory, one level below the workspace root.
fn bin_path(cmd: &str) -> PathBuf {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap()
        .join("target")
        .join(profile)
        .join(cmd)
}

/// Run `cmd` with the given arguments, stdin and extra environment
pub fn run_test_base_with_env(
    cmd: &str,
    args: &[String],
    stdin_data: &[u8],
    env_vars: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(bin_path(cmd));
    command
        .args(args)
        .envs(env_vars.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn command {cmd}: {e}"));

    if let Some(mut stdin) = child.stdin.take() {
        // the child may exit without reading its input
        let _ = stdin.write_all(stdin_data);
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    run_test_base_with_env(cmd, args, stdin_data, &[])
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
}

pub fn run_test(plan: TestPlan) {
    run_test_with_env(plan, &[]);
}

/// Like `run_test`, with environment variables set for the child
pub fn run_test_with_env(plan: TestPlan, env_vars: &[(&str, &str)]) {
    let output = run_test_base_with_env(
        &plan.cmd,
        &plan.args,
        plan.stdin_data.as_bytes(),
        env_vars,
    );
    check_output(&plan, &output);
}

/// Run a plan and hand the raw output to `checker` instead of comparing it
pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    checker(&plan, &output);
}
