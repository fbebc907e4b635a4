// tests/render_toc.rs
//
// Page-level behavior of the renderer through the public API.
//
use tocgen::{IdPolicy, RenderOptions, SkipReason, Status, TocRenderer};

fn page(container: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Docs</title></head>
<body>
  <div class="row">
    <div class="span3">{container}</div>
    <div class="span9">{content}</div>
  </div>
</body></html>"#
    )
}

fn no_pin() -> TocRenderer {
    let mut opts = RenderOptions::default();
    opts.pin.enabled = false;
    TocRenderer::new(opts).unwrap()
}

/// Slice out the content of `<ul id="toc">…</ul>`.
fn toc_inner(html: &str) -> &str {
    let open = html.find(r#"id="toc""#).unwrap();
    let start = html[open..].find('>').unwrap() + open + 1;
    let end = html[start..].find("</ul>").unwrap() + start;
    &html[start..end]
}

#[test]
fn intro_and_setup_scenario() {
    let doc = page(
        r#"<ul id="toc"></ul>"#,
        r#"<h2 id="intro">Introduction</h2><p>..</p><h3 id="setup">Setup</h3>"#,
    );
    let out = no_pin().render(&doc).unwrap();

    assert_eq!(out.status, Status::Rendered { entries: 2 });
    assert_eq!(
        toc_inner(&out.html),
        "<li><a href=#intro>Introduction</a></li><li><a href=#setup>Setup</a></li>"
    );
}

#[test]
fn n_headings_give_n_items_in_order_with_exact_targets() {
    let ids = ["Alpha", "beta-2", "GAMMA", "d_4", "eps"];
    let content: String = ids
        .iter()
        .enumerate()
        .map(|(i, id)| format!(r#"<h{lvl} id="{id}">Title {i}</h{lvl}><p>body</p>"#, lvl = i % 6 + 1))
        .collect();
    let doc = page(r#"<ul id="toc"></ul>"#, &content);

    let out = no_pin().render(&doc).unwrap();
    let inner = toc_inner(&out.html);

    assert_eq!(inner.matches("<li>").count(), ids.len());
    let expected: String = ids
        .iter()
        .enumerate()
        .map(|(i, id)| format!("<li><a href=#{id}>Title {i}</a></li>"))
        .collect();
    assert_eq!(inner, expected);
}

#[test]
fn zero_headings_empty_the_container() {
    let doc = page(r#"<ul id="toc"><li>stale</li></ul>"#, "<p>no headings here</p>");
    let out = no_pin().render(&doc).unwrap();

    assert_eq!(out.status, Status::Rendered { entries: 0 });
    assert_eq!(toc_inner(&out.html), "");
}

#[test]
fn missing_container_changes_nothing() {
    let doc = page(r#"<ul id="nav"></ul>"#, r#"<h2 id="intro">Introduction</h2>"#);
    let out = tocgen::render_default(&doc).unwrap();

    assert_eq!(out.status, Status::Skipped(SkipReason::NoContainer));
    assert_eq!(out.html, doc);
}

#[test]
fn rendering_twice_is_stable() {
    let doc = page(
        r#"<ul id="toc" class="nav nav-list"></ul>"#,
        r#"<h2 id="a">A</h2><h3 id="b">B &amp; C</h3>"#,
    );
    let r = tocgen::render_default(&doc).unwrap();
    let first = r.html;
    let second = tocgen::render_default(&first).unwrap().html;
    assert_eq!(first, second);
    assert_eq!(first.matches("data-spy").count(), 1);
}

#[test]
fn headings_outside_region_are_ignored() {
    let doc = page(
        r#"<h4 id="side">Sidebar</h4><ul id="toc"></ul>"#,
        r#"<h2 id="main">Main</h2>"#,
    );
    let out = no_pin().render(&doc).unwrap();
    assert_eq!(toc_inner(&out.html), "<li><a href=#main>Main</a></li>");
}

#[test]
fn affix_hook_goes_on_container() {
    let mut opts = RenderOptions::default();
    opts.pin.offset_top = Some(40);
    let r = TocRenderer::new(opts).unwrap();

    let doc = page(r#"<ul id="toc"></ul>"#, r#"<h2 id="a">A</h2>"#);
    let out = r.render(&doc).unwrap();
    assert!(out.html.contains(r#"<ul id="toc" data-spy="affix" data-offset-top="40">"#));
}

#[test]
fn heading_without_id_links_to_empty_target_by_default() {
    let doc = page(r#"<ul id="toc"></ul>"#, "<h2>Untitled</h2>");
    let out = no_pin().render(&doc).unwrap();
    assert_eq!(toc_inner(&out.html), "<li><a href=#>Untitled</a></li>");
}

#[test]
fn duplicate_ids_are_kept_as_is() {
    let doc = page(r#"<ul id="toc"></ul>"#, r#"<h2 id="x">One</h2><h2 id="x">Two</h2>"#);
    let out = no_pin().render(&doc).unwrap();
    assert_eq!(
        toc_inner(&out.html),
        "<li><a href=#x>One</a></li><li><a href=#x>Two</a></li>"
    );
}

#[test]
fn custom_container_and_region() {
    let mut opts = RenderOptions::default();
    opts.container_id = s("side-navigation");
    opts.content_selector = s("main article");
    opts.id_policy = IdPolicy::Synthesize;
    opts.pin.enabled = false;
    let r = TocRenderer::new(opts).unwrap();

    let doc = r#"<nav><ol id="side-navigation"></ol></nav><main><article><h2>Quick Start</h2></article></main>"#;
    let out = r.render(doc).unwrap();
    assert_eq!(
        out.html,
        r#"<nav><ol id="side-navigation"><li><a href=#quick_start>Quick Start</a></li></ol></nav><main><article><h2 id="quick_start">Quick Start</h2></article></main>"#
    );
}

#[test]
fn invalid_selector_fails_construction() {
    let mut opts = RenderOptions::default();
    opts.content_selector = s(">>>");
    assert!(TocRenderer::new(opts).is_err());
}

struct Sticky;

impl tocgen::pin::EdgePin for Sticky {
    fn attributes(&self) -> Vec<(String, String)> {
        vec![(s("class"), s("sticky-top"))]
    }
}

#[test]
fn custom_pin_collaborator() {
    let r = TocRenderer::new(RenderOptions::default())
        .unwrap()
        .with_pin(Box::new(Sticky));

    let doc = page(r#"<ul class="nav" id="toc"></ul>"#, r#"<h2 id="a">A</h2>"#);
    let out = r.render(&doc).unwrap();
    assert!(out.html.contains(r#"<ul id="toc" class="sticky-top"><li><a href=#a>A</a></li></ul>"#));
    assert_eq!(r.options().container_id, "toc");
}

fn s(v: &str) -> String {
    v.to_string()
}
