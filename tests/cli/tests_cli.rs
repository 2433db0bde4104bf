#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

use crate::helpers::project_fixtures::NextProject;
use crate::helpers::source_fixtures::*;

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typed-page-props"))
        .args(args)
        .current_dir(dir)
        .env_remove("TYPED_PROPS_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("run typed-page-props")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).replace('\\', "/")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn blog_project() -> NextProject {
    let project = NextProject::new();
    project.write("app/blog/[slug]/page.tsx", BLOG_POST_PAGE);
    project.write("app/layout.tsx", ROOT_LAYOUT);
    project.write("app/reexport/page.tsx", REEXPORT_PAGE);
    project
}

#[test]
fn test_dry_run_reports_without_writing() {
    let project = blog_project();
    let output = run(&["app"], project.root());

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        [
            "app/blog/[slug]/page.tsx:6:48: PageProps<\"/blog/[slug]\">",
            "app/layout.tsx:8:50: LayoutProps<\"/\">",
        ]
    );
    assert!(stderr(&output).contains("2 changed, 1 unchanged, 0 failed"));
    assert_eq!(project.read("app/blog/[slug]/page.tsx"), BLOG_POST_PAGE);
}

#[test]
fn test_write_applies_changes() {
    let project = blog_project();
    let output = run(&["--write", "app"], project.root());

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(
        project
            .read("app/blog/[slug]/page.tsx")
            .contains("Page({ params }: PageProps<\"/blog/[slug]\">)")
    );
    assert!(
        project
            .read("app/layout.tsx")
            .contains("RootLayout({ children }: LayoutProps<\"/\">)")
    );
    assert_eq!(project.read("app/reexport/page.tsx"), REEXPORT_PAGE);

    // a second pass has nothing left to do
    let again = run(&["--write", "app"], project.root());
    assert!(again.status.success());
    assert_eq!(stdout(&again), "");
    assert!(stderr(&again).contains("0 changed, 3 unchanged, 0 failed"));
}

#[test]
fn test_fixed_route_without_project() {
    let dir = NextProject::bare();
    dir.write("standalone/page.tsx", LIST_PAGE);

    let output = run(
        &["--write", "--route", "/items", "standalone/page.tsx"],
        dir.root(),
    );
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.read("standalone/page.tsx").contains("{ items }: PageProps<\"/items\">"));
}

#[test]
fn test_missing_path_fails() {
    let dir = NextProject::bare();
    let output = run(&["no-such-dir"], dir.root());

    assert!(!output.status.success());
    assert!(stderr(&output).contains("no-such-dir"));
}
