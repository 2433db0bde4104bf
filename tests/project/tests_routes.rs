#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::helpers::project_fixtures::NextProject;
use typed_props::project::{collect_route_files, find_project_root, infer_route};

fn sample_project() -> NextProject {
    let project = NextProject::new();
    for file in [
        "app/layout.tsx",
        "app/page.tsx",
        "app/(marketing)/about/page.tsx",
        "app/blog/[slug]/page.tsx",
        "app/blog/[slug]/opengraph-image.tsx",
        "app/shop/[...path]/page.jsx",
        "app/docs/[[...slug]]/layout.ts",
        "components/page.tsx",
        "node_modules/pkg/app/page.tsx",
        ".next/server/app/page.js",
        "public/page.css",
    ] {
        project.write(file, "export default function C() {}\n");
    }
    project
}

#[test]
fn test_collects_route_files_in_order() {
    let project = sample_project();
    let files = collect_route_files(project.root()).unwrap();

    let relative: Vec<String> = files
        .iter()
        .map(|f| {
            f.strip_prefix(project.root())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(
        relative,
        [
            "app/(marketing)/about/page.tsx",
            "app/blog/[slug]/page.tsx",
            "app/docs/[[...slug]]/layout.ts",
            "app/layout.tsx",
            "app/page.tsx",
            "app/shop/[...path]/page.jsx",
            "components/page.tsx",
        ]
    );
}

#[test]
fn test_every_collected_app_file_has_a_route() {
    let project = sample_project();
    let routes: Vec<Option<String>> = collect_route_files(&project.path("app"))
        .unwrap()
        .iter()
        .map(|file| infer_route(file).unwrap())
        .collect();

    assert_eq!(
        routes,
        [
            Some("/about".to_string()),
            Some("/blog/[slug]".to_string()),
            Some("/docs/[[...slug]]".to_string()),
            Some("/".to_string()),
            Some("/".to_string()),
            Some("/shop/[...path]".to_string()),
        ]
    );
}

#[test]
fn test_nested_project_wins() {
    let project = NextProject::new();
    project.write("apps/web/next.config.mjs", "export default {};\n");
    let page = project.write("apps/web/app/pricing/page.tsx", "");

    assert_eq!(
        find_project_root(&page).unwrap().unwrap(),
        std::path::absolute(project.path("apps/web")).unwrap()
    );
    assert_eq!(infer_route(&page).unwrap().as_deref(), Some("/pricing"));
}

#[test]
fn test_workspace_package_without_next_is_skipped() {
    let project = NextProject::with_package_json();
    project.write(
        "packages/ui/package.json",
        r#"{ "name": "ui", "dependencies": { "react": "19.0.0" } }"#,
    );
    let page = project.write("packages/ui/app/page.tsx", "");

    assert_eq!(
        find_project_root(&page).unwrap().unwrap(),
        std::path::absolute(project.root()).unwrap()
    );
    // relative to the outer root the first `app` segment is the inner one
    assert_eq!(infer_route(&page).unwrap().as_deref(), Some("/"));
}
