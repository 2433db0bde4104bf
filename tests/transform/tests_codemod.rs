#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use rstest::rstest;

use crate::helpers::project_fixtures::NextProject;
use crate::helpers::source_fixtures::*;
use typed_props::transform::{PropsKind, TransformOptions, plan, transform, transform_file};

fn infer() -> TransformOptions {
    TransformOptions::new()
}

#[test]
fn test_dynamic_page_gets_inferred_route() {
    let project = NextProject::new();
    let page = project.write("app/blog/[slug]/page.tsx", BLOG_POST_PAGE);

    let result = transform_file(&page, &infer()).unwrap().unwrap();
    assert_eq!(
        result,
        BLOG_POST_PAGE.replace(
            "{ params: Promise<{ slug: string }> }",
            "PageProps<\"/blog/[slug]\">"
        )
    );
}

#[test]
fn test_root_layout_gets_layout_props() {
    let project = NextProject::new();
    let layout = project.write("app/layout.tsx", ROOT_LAYOUT);

    let result = transform_file(&layout, &infer()).unwrap().unwrap();
    assert_eq!(
        result,
        ROOT_LAYOUT.replace("}: Props)", "}: LayoutProps<\"/\">)")
    );
    // the alias itself is left in place
    assert!(result.contains("type Props = { children: React.ReactNode };"));
}

#[test]
fn test_route_groups_are_dropped() {
    let project = NextProject::new();
    let page = project.write("app/(account)/settings/page.tsx", ARROW_PAGE);

    let result = transform_file(&page, &infer()).unwrap().unwrap();
    assert_eq!(
        result,
        ARROW_PAGE.replace(
            "{ searchParams: Record<string, string> }",
            "PageProps<\"/settings\">"
        )
    );
}

#[test]
fn test_src_app_directory() {
    let project = NextProject::new();
    let page = project.write("src/app/list/page.tsx", LIST_PAGE);

    let result = transform_file(&page, &infer()).unwrap().unwrap();
    assert!(result.contains("List({ items }: PageProps<\"/list\">)"), "{result}");
}

#[test]
fn test_package_json_marks_project_root() {
    let project = NextProject::with_package_json();
    let layout = project.write("app/docs/layout.tsx", ROOT_LAYOUT);

    let result = transform_file(&layout, &infer()).unwrap().unwrap();
    assert!(result.contains("RootLayout({ children }: LayoutProps<\"/docs\">)"));
}

#[test]
fn test_second_run_changes_nothing() {
    let project = NextProject::new();
    let page = project.write("app/blog/[slug]/page.tsx", BLOG_POST_PAGE);

    let once = transform_file(&page, &infer()).unwrap().unwrap();
    let twice = transform(&once, &page, &infer()).unwrap();
    assert_eq!(twice, None);
}

#[rstest]
#[case::reexported_import("app/page.tsx", REEXPORT_PAGE)]
#[case::outside_app("components/page.tsx", BLOG_POST_PAGE)]
fn test_untouched_files(#[case] relative: &str, #[case] source: &str) {
    let project = NextProject::new();
    let file = project.write(relative, source);
    assert_eq!(transform_file(&file, &infer()).unwrap(), None);
}

#[test]
fn test_no_project_root_leaves_file_alone() {
    let project = NextProject::bare();
    let page = project.write("app/page.tsx", BLOG_POST_PAGE);
    assert_eq!(transform_file(&page, &infer()).unwrap(), None);
}

#[test]
fn test_fixed_route_skips_inference() {
    // no project on disk at all
    let path = Path::new("anywhere/layout.tsx");
    let options = TransformOptions::new().with_route("/dashboard/[team]");

    let rewrite = plan(ROOT_LAYOUT, path, &options).unwrap().unwrap();
    assert_eq!(rewrite.kind, PropsKind::Layout);
    assert_eq!(rewrite.route, "/dashboard/[team]");
    assert_eq!(rewrite.edit.replacement, "LayoutProps<\"/dashboard/[team]\">");
}
