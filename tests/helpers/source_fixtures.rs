//! Common source code fixtures for tests.

/// A dynamic-segment page with an inline props type
pub const BLOG_POST_PAGE: &str = r#"import { notFound } from 'next/navigation';
import { getPost } from '@/lib/posts';

const limit = 10;

export default async function Page({ params }: { params: Promise<{ slug: string }> }) {
  const { slug } = await params;
  const post = await getPost(slug, limit);
  if (!post) notFound();
  return <Article post={post} />;
}
"#;

/// A root layout with a named props type
pub const ROOT_LAYOUT: &str = r#"import type { Metadata } from 'next';
import './globals.css';

export const metadata: Metadata = { title: 'Acme' };

type Props = { children: React.ReactNode };

export default function RootLayout({ children }: Props) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#;

/// An arrow component exported by name at the end of the file
pub const ARROW_PAGE: &str = r#"'use client';

import { useState } from 'react';

const SettingsPage = (props: { searchParams: Record<string, string> }) => {
  const [tab, setTab] = useState(props.searchParams.tab ?? 'general');
  return <Tabs value={tab} onChange={setTab} />;
};

export default SettingsPage;
"#;

/// A list page whose callbacks bind their own parameters
pub const LIST_PAGE: &str = r#"export default function List({ items }: Props) {
  return items.map((item, index) => <Row key={item.id} index={index} />);
}
"#;

/// A page re-exporting an imported component, which is never rewritten
pub const REEXPORT_PAGE: &str = r#"import Page from '@/components/page';

export default Page;
"#;
