//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Created 2 redirect stub(s) in this repo.
//!     Each /<slug>/index.html points to /archive/<slug>.html
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 Hello, World! → hello-world/index.html
//!     Target: https://spi.blue/archive/hello-world.html
//! 002 My Cool Post → my-cool-post/index.html
//!     Target: https://spi.blue/archive/my-cool-post.html
//!
//! Would create 2 redirect stub(s) in this repo.
//! ```

use crate::generate::GenerateReport;
use crate::types::RedirectStub;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn mapping_note() -> String {
    "    Each /<slug>/index.html points to /archive/<slug>.html".to_string()
}

/// Summary printed after a successful run.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    vec![
        format!("Created {} redirect stub(s) in this repo.", report.created()),
        mapping_note(),
    ]
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

/// One entry per planned stub, then the count that a real run would create.
pub fn format_check_output(stubs: &[RedirectStub]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, stub) in stubs.iter().enumerate() {
        lines.push(format!(
            "{} {} → {}",
            format_index(i + 1),
            stub.title,
            stub.output_path.display()
        ));
        lines.push(format!("    Target: {}", stub.target_absolute_url));
    }
    if !stubs.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Would create {} redirect stub(s) in this repo.",
        stubs.len()
    ));
    lines
}

pub fn print_check_output(stubs: &[RedirectStub]) {
    for line in format_check_output(stubs) {
        println!("{}", line);
    }
}
