//! Project layout: where a file sits in a Next.js App Router tree.
//!
//! - [`find_project_root`] walks up to the directory holding `next.config.*`
//!   or a `package.json` depending on `next`
//! - [`route_from_relative_path`] turns `app/(group)/blog/[slug]/page.tsx`
//!   into `/blog/[slug]`
//! - [`collect_route_files`] gathers every `page.*`/`layout.*` under a path

mod files;
mod routes;

pub use files::{ROUTE_FILE_STEMS, SOURCE_EXTENSIONS, collect_route_files, is_route_file};
pub use routes::{
    NEXT_CONFIG_FILES, PackageManifest, find_project_root, infer_route, is_project_root,
    route_from_relative_path,
};
