/// Banner printed by `--version` in the workspace's command-line tools.
pub fn print_cli_version_banner(tool_name: &str, version: &str, release: &str, commit: &str) {
    println!("{tool_name} (mimetype {})", env!("CARGO_PKG_VERSION"));
    println!("Audio/video MIME-type classification for media pipelines");
    println!("License: BSD 2-Clause (BSD-2-Clause)");
    println!();

    println!("\tTool version:   {version}");
    match (release.is_empty(), commit.is_empty()) {
        (false, _) => println!("\tRelease:        {release}"),
        (true, false) => println!("\tCommit:         {commit}"),
        (true, true) => println!("\tBuild:          untagged, outside git"),
    }
}
