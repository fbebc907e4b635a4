// src/core/html.rs
//! Low-level tag scanning over raw page text.
//!
//! The heading scan goes through a real DOM (`crate::outline`), but writes
//! have to land in the *original* text so the rest of the page survives
//! byte-for-byte. These helpers find tags and their byte spans without
//! building a tree, the same way the old block slicers did: case-insensitive
//! on tag and attribute names, tolerant of sloppy markup.
use std::ops::Range;

/// Elements whose content is raw text; tags inside them are not tags.
const RAW_TEXT: &[&str] = &["script", "style", "textarea", "title", "noscript", "xmp"];

/// Elements that never have content or a closing tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose end tag may be left out.
const OPTIONAL_END: &[&str] = &[
    "p", "li", "dd", "dt", "option", "optgroup",
    "tr", "td", "th", "thead", "tbody", "tfoot", "rt", "rp",
];

/// Start tags that close an open `<p>`. `li`/`dd`/`dt` are left out so a
/// list rendered into a `<p>` container is found again on the next pass.
const P_CLOSERS: &[&str] = &[
    "address", "article", "aside", "blockquote", "details", "div", "dl",
    "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr",
    "main", "menu", "nav", "ol", "p", "pre", "section", "table", "ul",
];

pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// One attribute as written in the source. `span` covers `name="value"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub span: Range<usize>,
}

/// A tag located in the source text. `span` runs from `<` to one past `>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: String, // lowercased
    pub span: Range<usize>,
    pub self_closing: bool,
    pub attrs: Vec<Attr<'a>>,
}

impl<'a> Tag<'a> {
    pub fn attr(&self, name: &str) -> Option<&Attr<'a>> {
        self.attrs.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn id(&self) -> Option<&'a str> {
        self.attr("id").and_then(|a| a.value)
    }

    /// No content possible. Only void elements qualify: a trailing `/` on
    /// anything else is ignored, as browsers do.
    pub fn is_empty_element(&self) -> bool {
        VOID.contains(&self.name.as_str())
    }

    pub fn is_heading(&self) -> bool {
        self.kind == TagKind::Open && HEADING_TAGS.contains(&self.name.as_str())
    }
}

/// Iterator over the tags of a document, in source order.
/// Comments, doctypes and processing instructions are skipped, as is the body
/// of raw-text elements.
pub struct Tags<'a> {
    doc: &'a str,
    pos: usize,
}

pub fn tags(doc: &str) -> Tags<'_> {
    Tags { doc, pos: 0 }
}

pub fn tags_from(doc: &str, from: usize) -> Tags<'_> {
    Tags { doc, pos: from }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        let doc = self.doc;
        let bytes = doc.as_bytes();

        loop {
            let lt = doc.get(self.pos..)?.find('<')? + self.pos;
            let rest = &doc[lt..];

            if rest.starts_with("<!--") {
                self.pos = rest.find("-->").map_or(doc.len(), |e| lt + e + 3);
                continue;
            }
            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.pos = rest.find('>').map_or(doc.len(), |e| lt + e + 1);
                continue;
            }

            let (kind, name_start) = if rest.starts_with("</") {
                (TagKind::Close, lt + 2)
            } else {
                (TagKind::Open, lt + 1)
            };

            // A '<' not followed by a letter is just text.
            if !bytes.get(name_start).is_some_and(u8::is_ascii_alphabetic) {
                self.pos = lt + 1;
                continue;
            }

            let name_len = bytes[name_start..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'-')
                .count();
            let name_end = name_start + name_len;
            let name = to_lower(&doc[name_start..name_end]);

            let (attrs, self_closing, end) = parse_attrs(doc, name_end);
            self.pos = end;

            if kind == TagKind::Open && RAW_TEXT.contains(&name.as_str()) {
                let close = join!("</", &name);
                self.pos = find_ci(doc, &close, end).unwrap_or(doc.len());
            }

            return Some(Tag {
                kind,
                name,
                span: lt..end,
                self_closing,
                attrs,
            });
        }
    }
}

/// Parse attributes starting right after the tag name.
/// Returns (attributes, self-closing flag, offset one past `>`).
fn parse_attrs(doc: &str, mut i: usize) -> (Vec<Attr<'_>>, bool, usize) {
    let b = doc.as_bytes();
    let n = b.len();
    let mut attrs = Vec::new();
    let mut self_closing = false;

    while i < n {
        match b[i] {
            b'>' => return (attrs, self_closing, i + 1),
            b'/' => {
                self_closing = true;
                i += 1;
            }
            c if c.is_ascii_whitespace() => i += 1,
            _ => {
                self_closing = false;
                let start = i;
                while i < n && !b[i].is_ascii_whitespace() && !matches!(b[i], b'=' | b'>' | b'/') {
                    i += 1;
                }
                let name = &doc[start..i];

                let mut j = i;
                while j < n && b[j].is_ascii_whitespace() {
                    j += 1;
                }

                let mut value = None;
                if j < n && b[j] == b'=' {
                    j += 1;
                    while j < n && b[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    match b.get(j) {
                        Some(&q) if q == b'"' || q == b'\'' => {
                            let vs = j + 1;
                            let ve = doc[vs..].find(q as char).map_or(n, |e| vs + e);
                            value = Some(&doc[vs..ve]);
                            i = (ve + 1).min(n);
                        }
                        _ => {
                            let vs = j;
                            while j < n && !b[j].is_ascii_whitespace() && b[j] != b'>' {
                                j += 1;
                            }
                            value = Some(&doc[vs..j]);
                            i = j;
                        }
                    }
                }

                attrs.push(Attr { name, value, span: start..i });
            }
        }
    }

    // Unterminated tag: runs to the end of the document.
    (attrs, self_closing, n)
}

/// First opening tag whose `id` equals `id` exactly.
pub fn find_by_id<'a>(doc: &'a str, id: &str) -> Option<Tag<'a>> {
    tags(doc).find(|t| t.kind == TagKind::Open && t.id() == Some(id))
}

/// Byte range of the content of `open`.
///
/// The content ends at the matching closing tag. Elements whose end tag is
/// optional (`p`, `li`, `dd`, ...) also end where a parser would close them
/// implicitly: at a start tag that closes them, or at the closing tag of an
/// ancestor. `None` for void elements and for elements that are never closed.
pub fn inner_range(doc: &str, open: &Tag<'_>) -> Option<Range<usize>> {
    if open.is_empty_element() {
        return None;
    }

    let optional_end = OPTIONAL_END.contains(&open.name.as_str());
    let mut stack: Vec<String> = Vec::new(); // elements opened inside

    for t in tags_from(doc, open.span.end) {
        match t.kind {
            TagKind::Open => {
                if optional_end && closed_by(&open.name, &t.name, stack.len()) {
                    return Some(open.span.end..t.span.start);
                }
                if !t.is_empty_element() {
                    stack.push(t.name);
                }
            }
            TagKind::Close => {
                if let Some(pos) = stack.iter().rposition(|n| *n == t.name) {
                    stack.truncate(pos);
                } else if t.name == open.name || optional_end {
                    return Some(open.span.end..t.span.start);
                }
                // stray closing tag: ignored
            }
        }
    }
    None
}

/// Does a `<next>` start tag, `depth` levels inside, implicitly close `container`?
fn closed_by(container: &str, next: &str, depth: usize) -> bool {
    match container {
        "p" => P_CLOSERS.contains(&next),
        _ if depth > 0 => false,
        "li" => next == "li",
        "dd" | "dt" => matches!(next, "dd" | "dt"),
        "option" => matches!(next, "option" | "optgroup"),
        "optgroup" => next == "optgroup",
        "tr" => matches!(next, "tr" | "tbody" | "thead" | "tfoot"),
        "td" | "th" => matches!(next, "td" | "th" | "tr" | "tbody" | "thead" | "tfoot"),
        "thead" | "tbody" | "tfoot" => matches!(next, "tbody" | "tfoot"),
        "rt" | "rp" => matches!(next, "rt" | "rp"),
        _ => false,
    }
}

/// Opening heading tags (`<h1>`..`<h6>`) in source order.
pub fn heading_tags(doc: &str) -> Vec<Tag<'_>> {
    tags(doc).filter(Tag::is_heading).collect()
}

/// Rebuild an opening tag with `set` applied: attributes with the same names
/// are dropped from their old position and the new ones appended in order.
pub fn rewrite_open_tag(doc: &str, tag: &Tag<'_>, set: &[(String, String)]) -> String {
    let mut out = join!("<", &doc[tag.span.start + 1..tag.span.start + 1 + tag.name.len()]);

    for a in &tag.attrs {
        if set.iter().any(|(n, _)| n.eq_ignore_ascii_case(a.name)) {
            continue;
        }
        out.push(' ');
        out.push_str(&doc[a.span.clone()]);
    }
    for (name, value) in set {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    if tag.self_closing {
        out.push_str(" /");
    }
    out.push('>');
    out
}

/// Apply non-overlapping replacements. Edits may arrive in any order.
pub fn apply_edits(doc: &str, mut edits: Vec<(Range<usize>, String)>) -> String {
    edits.sort_by_key(|(r, _)| r.start);

    let mut out = String::with_capacity(doc.len() + edits.iter().map(|(_, s)| s.len()).sum::<usize>());
    let mut cursor = 0;
    for (range, text) in edits {
        if range.start < cursor {
            continue; // overlaps a previous edit
        }
        out.push_str(&doc[cursor..range.start]);
        out.push_str(&text);
        cursor = range.end;
    }
    out.push_str(&doc[cursor..]);
    out
}

/// Escape text for use as element content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

/// Case-insensitive (ASCII) substring search starting at `from`.
pub fn find_ci(s: &str, pat: &str, from: usize) -> Option<usize> {
    let hay = s.as_bytes().get(from..)?;
    let pat = pat.as_bytes();
    if pat.is_empty() {
        return Some(from);
    }
    hay.windows(pat.len())
        .position(|w| w.eq_ignore_ascii_case(pat))
        .map(|p| from + p)
}

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_container_with_quoted_and_bare_ids() {
        let doc = r#"<div id="nav"></div><UL class=x ID=toc></UL>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(t.name, "ul");
        assert_eq!(&doc[t.span.clone()], "<UL class=x ID=toc>");

        let doc2 = r#"<ul id='toc'><li>x</li></ul>"#;
        assert!(find_by_id(doc2, "toc").is_some());
        assert!(find_by_id(doc2, "TOC").is_none());
    }

    #[test]
    fn comments_and_scripts_are_not_scanned() {
        let doc = r#"<!-- <ul id="toc"></ul> --><script>var s = '<ul id="toc">';</script><p>x</p>"#;
        assert!(find_by_id(doc, "toc").is_none());
        let names: Vec<String> = tags(doc).map(|t| t.name).collect();
        assert_eq!(names, vec!["script", "script", "p", "p"]);
    }

    #[test]
    fn inner_range_counts_nested_same_tags() {
        let doc = "<div id=toc><div>a</div><div>b</div></div><div>after</div>";
        let t = find_by_id(doc, "toc").unwrap();
        let r = inner_range(doc, &t).unwrap();
        assert_eq!(&doc[r], "<div>a</div><div>b</div>");
    }

    #[test]
    fn inner_range_none_for_void_and_unclosed() {
        let doc = "<img id=toc><ul id=open><li>x";
        let img = find_by_id(doc, "toc").unwrap();
        assert!(inner_range(doc, &img).is_none());
        let ul = find_by_id(doc, "open").unwrap();
        assert!(inner_range(doc, &ul).is_none());
    }

    #[test]
    fn optional_end_tags_close_implicitly() {
        let doc = r#"<p id="toc">old<div class="span9"></div>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "old");

        let doc = r#"<div><p id="toc"><span>x</span></div>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "<span>x</span>");

        let doc = r#"<ul><li id="toc">a<li>b</ul>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "a");

        // A nested list keeps the outer item open.
        let doc = r#"<ul><li id="toc"><ul><li>x</ul><li>next</ul>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "<ul><li>x</ul>");
    }

    #[test]
    fn list_items_without_end_tags_inside_container() {
        let doc = "<ul id=toc><li>a<li>b</ul><p>after</p>";
        let t = find_by_id(doc, "toc").unwrap();
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "<li>a<li>b");
    }

    #[test]
    fn slash_on_non_void_element_is_ignored() {
        let doc = r#"<div class="side"><div id="toc"/></div><div>x</div>"#;
        let t = find_by_id(doc, "toc").unwrap();
        assert!(t.self_closing);
        assert!(!t.is_empty_element());
        assert_eq!(&doc[inner_range(doc, &t).unwrap()], "");
    }

    #[test]
    fn rewrite_replaces_existing_attrs_in_place_of_duplicates() {
        let doc = r#"<ul id="toc" data-spy='scroll' class=nav>"#;
        let t = tags(doc).next().unwrap();
        let set = vec![(s!("data-spy"), s!("affix"))];
        let once = rewrite_open_tag(doc, &t, &set);
        assert_eq!(once, r#"<ul id="toc" class=nav data-spy="affix">"#);

        let t2 = tags(&once).next().unwrap();
        assert_eq!(rewrite_open_tag(&once, &t2, &set), once);
    }

    #[test]
    fn heading_tags_in_order() {
        let doc = "<h2 id=a>A</h2><p>p</p><H3>B</H3><header>no</header>";
        let hs: Vec<String> = heading_tags(doc).into_iter().map(|t| t.name).collect();
        assert_eq!(hs, vec!["h2", "h3"]);
    }

    #[test]
    fn apply_edits_out_of_order() {
        let doc = "0123456789";
        let out = apply_edits(doc, vec![(6..8, s!("x")), (1..2, s!("AB"))]);
        assert_eq!(out, "0AB2345x89");
    }

    #[test]
    fn escape_text_basic() {
        assert_eq!(escape_text("A & <B>"), "A &amp; &lt;B&gt;");
    }
}
